use houghlines::{GridView, HoughError, Point, ScalarGrid};

#[test]
fn grid_view_rejects_invalid_dimensions() {
    let data = [0.0f64; 4];

    let err = GridView::from_slice(&data, 0, 1).unwrap_err();
    assert_eq!(
        err,
        HoughError::InvalidDimensions {
            width: 0,
            height: 1,
        }
    );

    let err = GridView::from_slice(&data, 1, 0).unwrap_err();
    assert_eq!(
        err,
        HoughError::InvalidDimensions {
            width: 1,
            height: 0,
        }
    );
}

#[test]
fn grid_view_rejects_invalid_stride() {
    let data = [0.0f64; 8];
    let err = GridView::new(&data, 4, 1, 3).unwrap_err();
    assert_eq!(
        err,
        HoughError::InvalidStride {
            width: 4,
            stride: 3,
        }
    );
}

#[test]
fn grid_view_rejects_small_buffer() {
    let data = [0.0f64; 3];
    let err = GridView::new(&data, 2, 2, 2).unwrap_err();
    assert_eq!(err, HoughError::BufferTooSmall { needed: 4, got: 3 });
}

#[test]
fn grid_view_roi_matches_expected_values() {
    let data: Vec<f64> = (0..16).map(f64::from).collect();
    let view = GridView::from_slice(&data, 4, 4).unwrap();

    let roi = view.roi(1, 1, 2, 2).unwrap();
    assert_eq!(roi.width(), 2);
    assert_eq!(roi.height(), 2);
    assert_eq!(roi.stride(), 4);
    assert_eq!(roi.row(0).unwrap(), &[5.0, 6.0]);
    assert_eq!(roi.row(1).unwrap(), &[9.0, 10.0]);
    assert_eq!(roi.get(0, 0), Some(5.0));
    assert!(roi.get(2, 0).is_none());

    let err = view.roi(3, 3, 2, 2).unwrap_err();
    assert!(matches!(err, HoughError::OutOfBoundsIndex { .. }));
}

#[test]
fn scalar_grid_requires_exact_length() {
    let err = ScalarGrid::new(vec![0.0; 5], 2, 2).unwrap_err();
    assert_eq!(
        err,
        HoughError::InvalidDimensions {
            width: 2,
            height: 2,
        }
    );
    let err = ScalarGrid::new(vec![0.0; 3], 2, 2).unwrap_err();
    assert_eq!(err, HoughError::BufferTooSmall { needed: 4, got: 3 });
}

#[test]
fn from_rows_rejects_ragged_input() {
    let err = ScalarGrid::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    assert_eq!(
        err,
        HoughError::NotTwoDimensional {
            row: 1,
            expected: 2,
            got: 1,
        }
    );
    assert!(ScalarGrid::from_rows(Vec::new()).is_err());
}

#[test]
fn from_rows_is_row_major() {
    let grid = ScalarGrid::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.get(2, 0), Some(3.0));
    assert_eq!(grid.get(0, 1), Some(4.0));
    assert_eq!(grid.view().sample_at(Point::new(1.5, 1.5)).unwrap(), 5.0);
}
