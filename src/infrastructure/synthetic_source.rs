// Simulated series source - stands in for a real telemetry feed
use crate::application::series_source::SeriesSource;
use crate::domain::catalog::{WINDING_CRITICAL, WINDING_THRESHOLD};
use crate::domain::navigation::Axis;
use crate::domain::telemetry::{
    ElectricalSample, PhaseCurrentSample, SpectrumBin, StatisticsSample, TemperatureSample,
    VibrationSample, WaterfallFrame, WaveformSample, WindingSample, hour_label,
};
use crate::infrastructure::config::{SpectrumSettings, ThermalSettings};
use crate::infrastructure::synthetic::{HarmonicSpectrum, Oscillation, RandomWalk, round1};
use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Mutex, PoisonError};

const WAVEFORM_DT_SECONDS: f64 = 0.01;
const WATERFALL_BINS: usize = 50;
const PREVIEW_NOISE_CEILING: f64 = 0.2;
const PREVIEW_SPIKE: (f64, f64) = (0.6, 0.9);
const PREVIEW_FIXED: (usize, f64) = (5, 0.8);
const PREVIEW_AMBIENT: f64 = 25.0;

pub struct SyntheticSource {
    spectrum: SpectrumSettings,
    thermal: ThermalSettings,
    rng: Mutex<StdRng>,
}

impl SyntheticSource {
    pub fn new(spectrum: SpectrumSettings, thermal: ThermalSettings) -> Self {
        Self {
            spectrum,
            thermal,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible source for tests and demos
    pub fn seeded(spectrum: SpectrumSettings, thermal: ThermalSettings, seed: u64) -> Self {
        Self {
            spectrum,
            thermal,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }

    fn bearing_spectrum(&self, bins: usize) -> HarmonicSpectrum {
        let s = &self.spectrum;
        HarmonicSpectrum {
            bins,
            bin_width_hz: s.bin_width_hz,
            noise_ceiling: s.noise_ceiling,
            harmonics: s.harmonic_bins.clone(),
            spike: (s.spike_min, s.spike_max),
            fixed: s.fixed_bin.map(|bin| (bin, s.fixed_amplitude)),
        }
    }

    /// Fainter, shorter spectrum showing only the first two harmonics
    fn waterfall_spectrum(&self) -> HarmonicSpectrum {
        let s = &self.spectrum;
        HarmonicSpectrum {
            bins: WATERFALL_BINS,
            bin_width_hz: s.bin_width_hz,
            noise_ceiling: s.noise_ceiling.min(0.1),
            harmonics: s.harmonic_bins.iter().take(2).copied().collect(),
            spike: (s.spike_min.min(0.5), s.spike_max.min(0.8)),
            fixed: None,
        }
    }

    /// Coarser overview spectrum: louder noise floor and a pinned bin 5
    fn preview_spectrum(&self, bins: usize) -> HarmonicSpectrum {
        HarmonicSpectrum {
            bins,
            bin_width_hz: self.spectrum.bin_width_hz,
            noise_ceiling: PREVIEW_NOISE_CEILING,
            harmonics: self.spectrum.harmonic_bins.clone(),
            spike: PREVIEW_SPIKE,
            fixed: Some(PREVIEW_FIXED),
        }
    }

    fn statistics_samples(&self, hours: usize, rms: &Oscillation, kurtosis: &Oscillation) -> Vec<StatisticsSample> {
        let crest = Oscillation::new(3.5).sin(0.4, 1.0 / 10.0).noise(0.0, 0.2);
        let peak = Oscillation::new(8.0).sin(1.5, 1.0 / 15.0).noise(0.0, 0.5);

        self.with_rng(|rng| {
            (0..hours)
                .map(|hour| StatisticsSample {
                    hour,
                    label: hour_label(hour),
                    rms: rms.value_at(hour, rng),
                    kurtosis: kurtosis.value_at(hour, rng),
                    crest_factor: crest.value_at(hour, rng),
                    peak_value: peak.value_at(hour, rng),
                })
                .collect()
        })
    }
}

#[async_trait]
impl SeriesSource for SyntheticSource {
    async fn spectrum(&self, axis: Axis, bins: usize) -> anyhow::Result<Vec<SpectrumBin>> {
        tracing::debug!("Synthesizing {}-axis spectrum with {} bins", axis, bins);
        let spectrum = self.bearing_spectrum(bins);
        Ok(self.with_rng(|rng| spectrum.generate(rng)))
    }

    async fn spectrum_waterfall(&self, axis: Axis, frames: usize) -> anyhow::Result<Vec<WaterfallFrame>> {
        tracing::debug!("Synthesizing {}-axis waterfall with {} frames", axis, frames);
        let spectrum = self.waterfall_spectrum();
        Ok(self.with_rng(|rng| {
            (0..frames)
                .map(|frame| WaterfallFrame {
                    frame,
                    bins: spectrum.generate(rng),
                })
                .collect()
        }))
    }

    async fn time_waveform(&self, axis: Axis, samples: usize) -> anyhow::Result<Vec<WaveformSample>> {
        tracing::debug!("Synthesizing {}-axis waveform with {} samples", axis, samples);
        let wave = Oscillation::new(0.0).sin(2.0, 0.2).sin(0.5, 0.5).noise(-0.15, 0.15);
        let values = self.with_rng(|rng| wave.generate(samples, rng));
        Ok(values
            .into_iter()
            .enumerate()
            .map(|(i, amplitude)| WaveformSample {
                time: i as f64 * WAVEFORM_DT_SECONDS,
                amplitude,
            })
            .collect())
    }

    async fn temperature_history(&self, hours: usize) -> anyhow::Result<Vec<TemperatureSample>> {
        let t = &self.thermal;
        let bearing_walk = RandomWalk::new(65.0, 1.0)
            .drift(3.0, 12.0)
            .bounds(t.bearing_min, t.bearing_max);
        let winding_walk = RandomWalk::new(70.0, 1.0)
            .drift(2.5, 12.0)
            .bounds(t.winding_min, t.winding_max);
        let ambient_wave = Oscillation::new(25.0).sin(3.0, 1.0 / 24.0).noise(0.0, 1.0);

        let (bearing, winding, ambient) = self.with_rng(|rng| {
            (
                bearing_walk.generate(hours, rng),
                winding_walk.generate(hours, rng),
                ambient_wave.generate(hours, rng),
            )
        });

        Ok(bearing
            .into_iter()
            .zip(winding)
            .zip(ambient)
            .enumerate()
            .map(|(hour, ((bearing, winding), ambient))| TemperatureSample {
                hour,
                label: hour_label(hour),
                bearing: round1(bearing).clamp(t.bearing_min, t.bearing_max),
                winding: round1(winding).clamp(t.winding_min, t.winding_max),
                ambient: round1(ambient),
            })
            .collect())
    }

    async fn statistics_history(&self, hours: usize) -> anyhow::Result<Vec<StatisticsSample>> {
        let rms = Oscillation::new(2.5).sin(0.5, 1.0 / 12.0).noise(0.0, 0.3);
        let kurtosis = Oscillation::new(3.0).cos(0.5, 1.0 / 8.0).noise(0.0, 0.2);
        Ok(self.statistics_samples(hours, &rms, &kurtosis))
    }

    async fn vibration_history(&self, motor_id: u32, days: usize) -> anyhow::Result<Vec<VibrationSample>> {
        tracing::debug!("Synthesizing {}-day vibration history for motor {}", days, motor_id);
        let axis_walk = |start: f64| RandomWalk::new(start, 0.15).drift(0.1, 5.0).bounds(1.5, 4.0);
        let (x, y, z) = self.with_rng(|rng| {
            (
                axis_walk(2.5).generate(days, rng),
                axis_walk(2.3).generate(days, rng),
                axis_walk(2.7).generate(days, rng),
            )
        });

        Ok(x.into_iter()
            .zip(y)
            .zip(z)
            .enumerate()
            .map(|(day, ((x, y), z))| VibrationSample {
                day,
                label: format!("Day {}", day + 1),
                x,
                y,
                z,
            })
            .collect())
    }

    async fn electrical_profile(&self, motor_id: u32, hours: usize) -> anyhow::Result<Vec<ElectricalSample>> {
        tracing::debug!("Synthesizing {}-hour electrical profile for motor {}", hours, motor_id);
        let current = Oscillation::new(45.0).sin(10.0, 1.0 / 3.0).noise(0.0, 5.0);
        let voltage = Oscillation::new(380.0).noise(0.0, 10.0);

        Ok(self.with_rng(|rng| {
            (0..hours)
                .map(|hour| ElectricalSample {
                    hour,
                    label: format!("{}:00", hour % 24),
                    current: current.value_at(hour, rng),
                    voltage: voltage.value_at(hour, rng),
                })
                .collect()
        }))
    }

    async fn winding_temperature(&self, hours: usize) -> anyhow::Result<Vec<WindingSample>> {
        // Upward-biased walk: the stator is heating up
        let walk = RandomWalk::new(70.0, 1.5).bias(0.15).bounds(50.0, 100.0);
        let values = self.with_rng(|rng| walk.generate(hours, rng));

        Ok(values
            .into_iter()
            .enumerate()
            .map(|(hour, temperature)| WindingSample {
                hour,
                temperature: round1(temperature),
                threshold: WINDING_THRESHOLD,
                critical: WINDING_CRITICAL,
            })
            .collect())
    }

    async fn spectrum_preview(&self, bins: usize) -> anyhow::Result<Vec<SpectrumBin>> {
        let spectrum = self.preview_spectrum(bins);
        Ok(self.with_rng(|rng| spectrum.generate(rng)))
    }

    async fn temperature_preview(&self, hours: usize) -> anyhow::Result<Vec<TemperatureSample>> {
        // Unbounded and upward-biased; the winding heats faster than the bearing
        let bearing_walk = RandomWalk::new(65.0, 1.0).bias(0.2);
        let winding_walk = RandomWalk::new(70.0, 1.0).bias(0.4);
        let (bearing, winding) =
            self.with_rng(|rng| (bearing_walk.generate(hours, rng), winding_walk.generate(hours, rng)));

        Ok(bearing
            .into_iter()
            .zip(winding)
            .enumerate()
            .map(|(hour, (bearing, winding))| TemperatureSample {
                hour,
                label: hour_label(hour),
                bearing: round1(bearing),
                winding: round1(winding),
                ambient: PREVIEW_AMBIENT,
            })
            .collect())
    }

    async fn statistics_preview(&self, hours: usize) -> anyhow::Result<Vec<StatisticsSample>> {
        let rms = Oscillation::new(2.5).sin(0.5, 1.0).noise(0.0, 0.2);
        let kurtosis = Oscillation::new(3.0).cos(0.5, 1.0);
        Ok(self.statistics_samples(hours, &rms, &kurtosis))
    }

    async fn phase_currents(&self, hours: usize) -> anyhow::Result<Vec<PhaseCurrentSample>> {
        // Independent phases; B runs hot to show the imbalance
        let phase_a = Oscillation::new(45.0).noise(0.0, 5.0);
        let phase_b = Oscillation::new(48.0).noise(0.0, 5.0);
        let phase_c = Oscillation::new(46.0).noise(0.0, 5.0);

        Ok(self.with_rng(|rng| {
            (0..hours)
                .map(|hour| PhaseCurrentSample {
                    hour,
                    label: format!("{}:00", hour % 24),
                    phase_a: phase_a.value_at(hour, rng),
                    phase_b: phase_b.value_at(hour, rng),
                    phase_c: phase_c.value_at(hour, rng),
                })
                .collect()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::navigation::TimeRange;

    fn source() -> SyntheticSource {
        SyntheticSource::new(SpectrumSettings::default(), ThermalSettings::default())
    }

    #[tokio::test]
    async fn test_temperature_lengths_follow_range() {
        let source = source();
        for (range, expected) in [(TimeRange::Day, 24), (TimeRange::Week, 168), (TimeRange::Month, 720)] {
            let samples = source.temperature_history(range.hours()).await.unwrap();
            assert_eq!(samples.len(), expected);
            assert_eq!(samples.last().map(|s| s.hour), Some(expected - 1));
        }
    }

    #[tokio::test]
    async fn test_temperatures_stay_clamped() {
        let source = source();
        for _ in 0..10 {
            let samples = source.temperature_history(720).await.unwrap();
            for s in &samples {
                assert!((50.0..=85.0).contains(&s.bearing), "bearing {}", s.bearing);
                assert!((55.0..=90.0).contains(&s.winding), "winding {}", s.winding);
            }
        }
    }

    #[tokio::test]
    async fn test_zero_hours_is_empty() {
        let source = source();
        assert!(source.temperature_history(0).await.unwrap().is_empty());
        assert!(source.statistics_history(0).await.unwrap().is_empty());
        assert!(source.phase_currents(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_spectrum_signature() {
        let source = source();
        for _ in 0..20 {
            let bins = source.spectrum(Axis::X, 100).await.unwrap();
            assert_eq!(bins.len(), 101);
            for bin in &bins {
                let elevated = [5, 12, 24, 36].contains(&bin.bin);
                let range = if elevated { 0.5..=1.0 } else { 0.0..=0.2 };
                assert!(range.contains(&bin.amplitude), "bin {} = {}", bin.bin, bin.amplitude);
            }
        }
    }

    #[tokio::test]
    async fn test_waterfall_shape() {
        let frames = source().spectrum_waterfall(Axis::Y, 10).await.unwrap();
        assert_eq!(frames.len(), 10);
        for frame in &frames {
            assert_eq!(frame.bins.len(), 51);
            assert!((0.5..=0.8).contains(&frame.bins[12].amplitude));
            assert!(frame.bins[36].amplitude <= 0.1);
        }
    }

    #[tokio::test]
    async fn test_calls_are_not_cached() {
        let source = source();
        let a = source.statistics_history(24).await.unwrap();
        let b = source.statistics_history(24).await.unwrap();
        assert_eq!(a.len(), b.len());
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_seeded_sources_repeat() {
        let a = SyntheticSource::seeded(SpectrumSettings::default(), ThermalSettings::default(), 42);
        let b = SyntheticSource::seeded(SpectrumSettings::default(), ThermalSettings::default(), 42);
        assert_eq!(
            a.phase_currents(24).await.unwrap(),
            b.phase_currents(24).await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_winding_carries_alarm_lines() {
        let samples = source().winding_temperature(48).await.unwrap();
        assert_eq!(samples.len(), 48);
        assert!(samples.iter().all(|s| s.threshold == 85.0 && s.critical == 95.0));
        assert!(samples.iter().all(|s| (50.0..=100.0).contains(&s.temperature)));
    }

    #[tokio::test]
    async fn test_preview_spectrum_pins_bin_five() {
        let source = source();
        for _ in 0..20 {
            let bins = source.spectrum_preview(50).await.unwrap();
            assert_eq!(bins.len(), 51);
            assert_eq!(bins[5].amplitude, 0.8);
            for bin in bins.iter().filter(|b| b.bin != 5) {
                let range = if [12, 24, 36].contains(&bin.bin) { 0.6..=0.9 } else { 0.0..=0.2 };
                assert!(range.contains(&bin.amplitude), "bin {} = {}", bin.bin, bin.amplitude);
            }
        }
    }

    #[tokio::test]
    async fn test_temperature_preview_warms_up() {
        let source = source();
        let samples = source.temperature_preview(20).await.unwrap();
        assert_eq!(samples.len(), 20);
        assert!(samples.iter().all(|s| s.ambient == 25.0));

        // Each step moves at most -0.8/+1.2 for the bearing and -0.6/+1.4 for the winding
        let last = &samples[19];
        assert!((65.0 - 16.0..=65.0 + 24.0).contains(&last.bearing), "bearing {}", last.bearing);
        assert!((70.0 - 12.0..=70.0 + 28.0).contains(&last.winding), "winding {}", last.winding);
    }

    #[tokio::test]
    async fn test_statistics_preview_follows_unit_rate() {
        let samples = source().statistics_preview(20).await.unwrap();
        assert_eq!(samples.len(), 20);
        for s in &samples {
            let i = s.hour as f64;
            assert!((s.kurtosis - (3.0 + 0.5 * i.cos())).abs() < 1e-9);
            let base = 2.5 + 0.5 * i.sin();
            assert!((base..=base + 0.2).contains(&s.rms), "rms {} at {}", s.rms, s.hour);
        }
    }

    #[tokio::test]
    async fn test_waveform_timing() {
        let samples = source().time_waveform(Axis::Z, 200).await.unwrap();
        assert_eq!(samples.len(), 200);
        assert!((samples[199].time - 1.99).abs() < 1e-9);
        assert!(samples.iter().all(|s| s.amplitude.abs() <= 2.65));
    }
}
