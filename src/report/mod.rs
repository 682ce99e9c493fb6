// Array report generator - pure single-pass computations over a random sample
use rand::Rng;

pub const SAMPLE_LEN: usize = 1000;
pub const VALUE_CEILING: u32 = 100;

/// The generated sample and its three derived values.
#[derive(Debug, Clone)]
pub struct ArrayReport {
    pub sample: Vec<u32>,
    pub sum: u64,
    pub evens: Vec<u32>,
    pub max: Option<u32>,
}

/// Generate the sample: SAMPLE_LEN values uniform in [0, VALUE_CEILING).
pub fn generate_sample() -> Vec<u32> {
    let mut rng = rand::thread_rng();
    (0..SAMPLE_LEN).map(|_| rng.gen_range(0..VALUE_CEILING)).collect()
}

pub fn sum(sample: &[u32]) -> u64 {
    sample.iter().map(|&v| v as u64).sum()
}

/// Even-valued elements in their original order.
pub fn filter_even(sample: &[u32]) -> Vec<u32> {
    sample.iter().copied().filter(|v| v % 2 == 0).collect()
}

/// Maximum element. None for an empty sample, which callers must treat as
/// "undefined" rather than a real value.
pub fn max_value(sample: &[u32]) -> Option<u32> {
    sample.iter().copied().max()
}

pub fn produce_report() -> ArrayReport {
    let sample = generate_sample();
    let sum = sum(&sample);
    let evens = filter_even(&sample);
    let max = max_value(&sample);
    ArrayReport {
        sample,
        sum,
        evens,
        max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shape() {
        let sample = generate_sample();
        assert_eq!(sample.len(), SAMPLE_LEN);
        assert!(sample.iter().all(|&v| v < VALUE_CEILING));
    }

    #[test]
    fn test_even_filter_partitions_the_sum() {
        let sample = generate_sample();
        let evens = filter_even(&sample);
        let odd_sum: u64 = sample
            .iter()
            .filter(|&&v| v % 2 != 0)
            .map(|&v| v as u64)
            .sum();
        assert_eq!(sum(&sample), sum(&evens) + odd_sum);
    }

    #[test]
    fn test_max_is_an_element_and_an_upper_bound() {
        let sample = generate_sample();
        let max = max_value(&sample).unwrap();
        assert!(sample.contains(&max));
        assert!(sample.iter().all(|&v| v <= max));
    }

    #[test]
    fn test_even_filter_keeps_order_and_drops_odds() {
        let evens = filter_even(&[3, 4, 7, 8, 2]);
        assert_eq!(evens, vec![4, 8, 2]);
        assert!(evens.iter().all(|v| v % 2 == 0));
    }

    #[test]
    fn test_known_input_scenario() {
        let sample = [3, 4, 7, 8, 2];
        assert_eq!(sum(&sample), 24);
        assert_eq!(filter_even(&sample), vec![4, 8, 2]);
        assert_eq!(max_value(&sample), Some(8));
    }

    #[test]
    fn test_empty_sample_yields_identities() {
        assert_eq!(sum(&[]), 0);
        assert!(filter_even(&[]).is_empty());
        assert_eq!(max_value(&[]), None);
    }

    #[test]
    fn test_report_values_derive_from_its_sample() {
        let report = produce_report();
        assert_eq!(report.sum, sum(&report.sample));
        assert_eq!(report.evens, filter_even(&report.sample));
        assert_eq!(report.max, max_value(&report.sample));
    }
}
