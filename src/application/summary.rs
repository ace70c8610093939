// Summaries computed over generated series
use crate::domain::telemetry::SpectrumBin;
use statrs::statistics::Statistics;

/// Amplitude at or above which a spectrum bin counts as a peak (mm/s)
pub const PEAK_AMPLITUDE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub peak: f64,
}

/// Mean, sample standard deviation and extremes; `None` for an empty series.
pub fn summarize<I>(values: I) -> Option<SeriesSummary>
where
    I: IntoIterator<Item = f64>,
{
    let values: Vec<f64> = values.into_iter().collect();
    if values.is_empty() {
        return None;
    }

    let std_dev = if values.len() > 1 {
        values.iter().std_dev()
    } else {
        0.0
    };

    Some(SeriesSummary {
        mean: values.iter().mean(),
        std_dev,
        min: Statistics::min(values.iter()),
        peak: Statistics::max(values.iter()),
    })
}

/// Whether the spectrum shows a peak at `frequency_hz`.
///
/// Only bins closer than half a bin width count, so a frequency falling
/// exactly between two bins never matches.
pub fn peak_near(bins: &[SpectrumBin], frequency_hz: f64) -> bool {
    let tolerance = match bins {
        [first, second, ..] => (second.frequency - first.frequency).abs() / 2.0,
        _ => f64::EPSILON,
    };

    bins.iter()
        .filter(|b| (b.frequency - frequency_hz).abs() < tolerance)
        .any(|b| b.amplitude >= PEAK_AMPLITUDE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bin(index: usize, amplitude: f64) -> SpectrumBin {
        SpectrumBin {
            bin: index,
            frequency: index as f64 * 10.0,
            amplitude,
            phase: 0.0,
        }
    }

    #[test]
    fn test_summarize() {
        let summary = summarize(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(summary.mean, 5.0);
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.peak, 9.0);
        // sample standard deviation
        assert!((summary.std_dev - 2.138089935299395).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_edge_cases() {
        assert_eq!(summarize(Vec::new()), None);
        let single = summarize(vec![3.5]).unwrap();
        assert_eq!(single.std_dev, 0.0);
        assert_eq!(single.peak, 3.5);
    }

    #[test]
    fn test_peak_near() {
        let bins: Vec<SpectrumBin> = (0..=20)
            .map(|i| bin(i, if i == 12 { 0.8 } else { 0.1 }))
            .collect();
        assert!(peak_near(&bins, 120.0));
        assert!(peak_near(&bins, 122.0));
        assert!(!peak_near(&bins, 180.0));
        // halfway between 80 Hz and 90 Hz
        assert!(!peak_near(&bins, 85.0));
        assert!(!peak_near(&[], 120.0));
    }
}
