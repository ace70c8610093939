// Capability trait for the data behind every chart
use crate::domain::navigation::Axis;
use crate::domain::telemetry::{
    ElectricalSample, PhaseCurrentSample, SpectrumBin, StatisticsSample, TemperatureSample,
    VibrationSample, WaterfallFrame, WaveformSample, WindingSample,
};
use async_trait::async_trait;

/// Where view series come from.
///
/// Every call returns a freshly produced sequence of exactly the requested
/// length; implementations must not cache between calls.
#[async_trait]
pub trait SeriesSource: Send + Sync {
    /// Vibration spectrum covering bins `0..=bins`
    async fn spectrum(&self, axis: Axis, bins: usize) -> anyhow::Result<Vec<SpectrumBin>>;

    /// Successive spectra for the waterfall plot
    async fn spectrum_waterfall(&self, axis: Axis, frames: usize) -> anyhow::Result<Vec<WaterfallFrame>>;

    async fn time_waveform(&self, axis: Axis, samples: usize) -> anyhow::Result<Vec<WaveformSample>>;

    /// Hourly bearing, winding and ambient temperatures
    async fn temperature_history(&self, hours: usize) -> anyhow::Result<Vec<TemperatureSample>>;

    /// Hourly RMS, kurtosis, crest factor and peak value
    async fn statistics_history(&self, hours: usize) -> anyhow::Result<Vec<StatisticsSample>>;

    /// Daily tri-axial vibration for one motor
    async fn vibration_history(&self, motor_id: u32, days: usize) -> anyhow::Result<Vec<VibrationSample>>;

    async fn electrical_profile(&self, motor_id: u32, hours: usize) -> anyhow::Result<Vec<ElectricalSample>>;

    /// Stator winding temperature against its alarm lines
    async fn winding_temperature(&self, hours: usize) -> anyhow::Result<Vec<WindingSample>>;

    async fn phase_currents(&self, hours: usize) -> anyhow::Result<Vec<PhaseCurrentSample>>;

    /// Overview thumbnail of the spectrum, covering bins `0..=bins`
    async fn spectrum_preview(&self, bins: usize) -> anyhow::Result<Vec<SpectrumBin>>;

    /// Overview thumbnail of the temperature trends; warms up over the window
    async fn temperature_preview(&self, hours: usize) -> anyhow::Result<Vec<TemperatureSample>>;

    /// Overview thumbnail of the RMS and kurtosis trends
    async fn statistics_preview(&self, hours: usize) -> anyhow::Result<Vec<StatisticsSample>>;
}
