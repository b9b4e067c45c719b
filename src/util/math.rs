//! Binning helpers shared by the accumulator and geometry code.

/// Returns `count` evenly spaced samples over `[start, stop]`.
///
/// Both endpoints are included; the last sample is exactly `stop`. A count of
/// one yields `[start]`.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut out: Vec<f64> = (0..count - 1).map(|i| start + i as f64 * step).collect();
            out.push(stop);
            out
        }
    }
}

/// Returns the bin index of `value` against ascending `edges`.
///
/// The index is `#(edges <= value) - 1`, so a value equal to the last edge
/// falls into the last bin. Values below the first edge yield `None`.
pub fn digitize(value: f64, edges: &[f64]) -> Option<usize> {
    edges.partition_point(|&edge| edge <= value).checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::{digitize, linspace};

    #[test]
    fn linspace_includes_both_endpoints() {
        let edges = linspace(-1.0, 1.0, 5);
        assert_eq!(edges, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn digitize_matches_half_open_bins() {
        let edges = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(digitize(0.0, &edges), Some(0));
        assert_eq!(digitize(0.99, &edges), Some(0));
        assert_eq!(digitize(1.0, &edges), Some(1));
        assert_eq!(digitize(3.0, &edges), Some(3));
        assert_eq!(digitize(-0.1, &edges), None);
    }

    #[test]
    fn digitize_handles_collapsed_range() {
        let edges = linspace(2.0, 2.0, 4);
        assert_eq!(digitize(2.0, &edges), Some(3));
    }
}
