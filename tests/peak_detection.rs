mod common;

use common::{add_background, grid_with_spikes};
use houghlines::{distances, HoughError, PeakDetector, Point, ScalarGrid};

#[test]
fn single_spike_is_found_at_cell_center() {
    let grid = grid_with_spikes(12, 9, &[(7, 3)], 10.0);
    let peaks = PeakDetector::new(1.0, 1).find(grid.view()).unwrap();
    assert_eq!(peaks, vec![Point::new(7.5, 3.5)]);
}

#[test]
fn spike_below_threshold_is_ignored() {
    let grid = grid_with_spikes(12, 9, &[(7, 3)], 10.0);
    let peaks = PeakDetector::new(20.0, 1).find(grid.view()).unwrap();
    assert!(peaks.is_empty());
}

#[test]
fn threshold_is_strict() {
    let grid = grid_with_spikes(6, 6, &[(2, 2)], 10.0);
    assert!(PeakDetector::new(10.0, 1).find(grid.view()).unwrap().is_empty());
    assert_eq!(PeakDetector::new(9.999, 1).find(grid.view()).unwrap().len(), 1);
}

#[test]
fn zero_grid_has_no_peaks() {
    let grid = ScalarGrid::zeros(16, 16).unwrap();
    for spread in 0..3 {
        let peaks = PeakDetector::new(0.5, spread).find(grid.view()).unwrap();
        assert!(peaks.is_empty());
    }
}

#[test]
fn border_spikes_are_found() {
    let grid = grid_with_spikes(8, 8, &[(0, 0), (7, 7), (7, 0)], 5.0);
    let peaks = PeakDetector::new(1.0, 1).find(grid.view()).unwrap();
    assert_eq!(
        peaks,
        vec![Point::new(0.5, 0.5), Point::new(7.5, 0.5), Point::new(7.5, 7.5)]
    );
}

#[test]
fn separated_spikes_are_reported_in_scan_order() {
    let mut grid = grid_with_spikes(10, 10, &[(6, 5)], 3.0);
    *grid.get_mut(2, 2).unwrap() = 10.0;
    let peaks = PeakDetector::new(1.0, 1).find(grid.view()).unwrap();
    assert_eq!(peaks, vec![Point::new(2.5, 2.5), Point::new(6.5, 5.5)]);
}

#[test]
fn spikes_survive_background_noise() {
    let spikes = [(3, 4), (10, 4), (20, 17), (5, 25), (27, 27)];
    let mut grid = grid_with_spikes(30, 30, &spikes, 10.0);
    add_background(&mut grid, 0.5, 11);

    let mut peaks = PeakDetector::new(1.0, 1).find(grid.view()).unwrap();
    peaks.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    let mut expected: Vec<Point> = spikes.iter().map(|&(x, y)| Point::cell_center(x, y)).collect();
    expected.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    assert_eq!(peaks, expected);
}

#[test]
fn works_on_strided_roi() {
    let grid = grid_with_spikes(10, 10, &[(6, 7)], 4.0);
    let roi = grid.view().roi(4, 4, 5, 5).unwrap();
    let peaks = PeakDetector::new(1.0, 1).find(roi).unwrap();
    assert_eq!(peaks, vec![Point::new(2.5, 3.5)]);
}

#[test]
fn nan_threshold_is_rejected() {
    let grid = ScalarGrid::zeros(4, 4).unwrap();
    let err = PeakDetector::new(f64::NAN, 1).find(grid.view()).unwrap_err();
    assert!(matches!(err, HoughError::InvalidInput(_)));
}

#[test]
fn distances_from_reference() {
    let points = [Point::new(3.5, 4.5), Point::new(0.5, 0.5)];
    let d = distances(Point::new(0.5, 0.5), &points);
    assert_eq!(d, vec![5.0, 0.0]);
}

#[test]
fn spread_wider_than_grid_keeps_global_peak() {
    let grid = grid_with_spikes(8, 8, &[(3, 3)], 10.0);
    for spread in [8, 20, usize::MAX] {
        let peaks = PeakDetector::new(1.0, spread).find(grid.view()).unwrap();
        assert_eq!(peaks, vec![Point::new(3.5, 3.5)]);
    }
}

#[test]
fn non_finite_sample_is_rejected() {
    let mut grid = grid_with_spikes(20, 20, &[(15, 15)], 10.0);
    let detector = PeakDetector::new(1.0, 1);
    assert_eq!(detector.find(grid.view()).unwrap(), vec![Point::new(15.5, 15.5)]);

    *grid.get_mut(0, 0).unwrap() = f64::NAN;
    let err = detector.find(grid.view()).unwrap_err();
    assert_eq!(err, HoughError::InvalidInput("grid samples must be finite"));
}
