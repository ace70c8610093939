use crate::domain::motor::{MotorRecord, builtin_motors};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub spectrum: SpectrumSettings,
    #[serde(default)]
    pub thermal: ThermalSettings,
    #[serde(default = "builtin_motors")]
    pub motors: Vec<MotorRecord>,
    /// Fixed RNG seed for reproducible series; entropy-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub bind_address: String,
    /// Brotli-compress responses for clients that accept it
    pub compress: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            compress: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SpectrumSettings {
    pub bins: usize,
    pub preview_bins: usize,
    pub bin_width_hz: f64,
    pub harmonic_bins: Vec<usize>,
    pub fixed_bin: Option<usize>,
    pub fixed_amplitude: f64,
    pub noise_ceiling: f64,
    pub spike_min: f64,
    pub spike_max: f64,
}

impl Default for SpectrumSettings {
    fn default() -> Self {
        Self {
            bins: 100,
            preview_bins: 50,
            bin_width_hz: 10.0,
            harmonic_bins: vec![12, 24, 36],
            fixed_bin: Some(5),
            fixed_amplitude: 0.9,
            noise_ceiling: 0.15,
            spike_min: 0.6,
            spike_max: 1.0,
        }
    }
}

/// Clamp bounds for the simulated bearing and winding temperatures (°C)
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThermalSettings {
    pub bearing_min: f64,
    pub bearing_max: f64,
    pub winding_min: f64,
    pub winding_max: f64,
}

impl Default for ThermalSettings {
    fn default() -> Self {
        Self {
            bearing_min: 50.0,
            bearing_max: 85.0,
            winding_min: 55.0,
            winding_max: 90.0,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            spectrum: SpectrumSettings::default(),
            thermal: ThermalSettings::default(),
            motors: builtin_motors(),
            seed: None,
        }
    }
}

fn ensure_finite(fields: &[(&str, f64)]) -> anyhow::Result<()> {
    for (name, value) in fields {
        if !value.is_finite() {
            anyhow::bail!("{} must be a finite number, got {}", name, value);
        }
    }
    Ok(())
}

impl DashboardConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        let s = &self.spectrum;
        ensure_finite(&[
            ("spectrum.bin_width_hz", s.bin_width_hz),
            ("spectrum.fixed_amplitude", s.fixed_amplitude),
            ("spectrum.noise_ceiling", s.noise_ceiling),
            ("spectrum.spike_min", s.spike_min),
            ("spectrum.spike_max", s.spike_max),
        ])?;
        if s.bin_width_hz <= 0.0 {
            anyhow::bail!("spectrum.bin_width_hz must be positive, got {}", s.bin_width_hz);
        }
        if s.spike_min > s.spike_max {
            anyhow::bail!(
                "spectrum.spike_min ({}) exceeds spectrum.spike_max ({})",
                s.spike_min,
                s.spike_max
            );
        }
        if s.noise_ceiling < 0.0 || s.noise_ceiling >= s.spike_min {
            anyhow::bail!(
                "spectrum.noise_ceiling ({}) must be in [0, spike_min)",
                s.noise_ceiling
            );
        }
        if let Some(bin) = s.fixed_bin {
            if bin > s.bins {
                anyhow::bail!("spectrum.fixed_bin ({}) is beyond spectrum.bins ({})", bin, s.bins);
            }
            if s.fixed_amplitude < s.spike_min || s.fixed_amplitude > s.spike_max {
                anyhow::bail!(
                    "spectrum.fixed_amplitude ({}) must be in [spike_min, spike_max]",
                    s.fixed_amplitude
                );
            }
        }
        if let Some(bin) = s.harmonic_bins.iter().find(|&&b| b > s.bins) {
            anyhow::bail!("spectrum.harmonic_bins entry {} is beyond spectrum.bins ({})", bin, s.bins);
        }

        let t = &self.thermal;
        ensure_finite(&[
            ("thermal.bearing_min", t.bearing_min),
            ("thermal.bearing_max", t.bearing_max),
            ("thermal.winding_min", t.winding_min),
            ("thermal.winding_max", t.winding_max),
        ])?;
        if t.bearing_min >= t.bearing_max {
            anyhow::bail!("thermal.bearing_min must be below thermal.bearing_max");
        }
        if t.winding_min >= t.winding_max {
            anyhow::bail!("thermal.winding_min must be below thermal.winding_max");
        }
        Ok(())
    }
}

/// Load `config/dashboard.toml` (optional) overlaid with `DASHBOARD_*`
/// environment variables, e.g. `DASHBOARD_SERVER__BIND_ADDRESS`.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let dashboard: DashboardConfig = settings.try_deserialize()?;
    dashboard.validate()?;
    Ok(dashboard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::motor::MotorStatus;

    #[test]
    fn test_defaults_from_empty_document() {
        let config: DashboardConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.bind_address, "0.0.0.0:8080");
        assert_eq!(config.spectrum.harmonic_bins, vec![12, 24, 36]);
        assert_eq!(config.spectrum.fixed_bin, Some(5));
        assert_eq!(config.thermal.bearing_max, 85.0);
        assert_eq!(config.motors.len(), 4);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let config: DashboardConfig = toml::from_str(
            r#"
            seed = 11

            [server]
            compress = false

            [spectrum]
            harmonic_bins = [10, 20]
            "#,
        )
        .unwrap();
        assert!(!config.server.compress);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.server.bind_address, "0.0.0.0:8080");
        assert_eq!(config.spectrum.harmonic_bins, vec![10, 20]);
        assert_eq!(config.spectrum.bins, 100);
    }

    #[test]
    fn test_motor_table() {
        let config: DashboardConfig = toml::from_str(
            r##"
            [[motors]]
            id = 7
            name = "301-FAN-01"
            health_score = 61
            remaining_life = "20 days"
            status = "Critical"
            vibration_status = "Bearing"
            electrical_status = "Normal"
            color = "#ef4444"
            "##,
        )
        .unwrap();
        assert_eq!(config.motors.len(), 1);
        assert_eq!(config.motors[0].status, MotorStatus::Critical);
    }

    #[test]
    fn test_validate_rejects_overlapping_noise() {
        let mut config = DashboardConfig::default();
        config.spectrum.noise_ceiling = 0.7;
        assert!(config.validate().is_err());

        let mut config = DashboardConfig::default();
        config.spectrum.spike_min = 1.2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_values() {
        let mut config = DashboardConfig::default();
        config.spectrum.spike_max = f64::INFINITY;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("spectrum.spike_max"));

        let mut config = DashboardConfig::default();
        config.thermal.bearing_max = f64::NAN;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("thermal.bearing_max"));
    }

    #[test]
    fn test_validate_rejects_fixed_amplitude_outside_spike_band() {
        let mut config = DashboardConfig::default();
        config.spectrum.fixed_amplitude = 0.1;
        assert!(config.validate().is_err());

        // Without a fixed bin the amplitude is unused
        config.spectrum.fixed_bin = None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bins_beyond_spectrum() {
        let mut config = DashboardConfig::default();
        config.spectrum.harmonic_bins = vec![12, 240];
        assert!(config.validate().unwrap_err().to_string().contains("240"));

        let mut config = DashboardConfig::default();
        config.spectrum.fixed_bin = Some(101);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_toml_is_rejected() {
        let config: DashboardConfig = toml::from_str(
            r#"
            [spectrum]
            spike_max = inf
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_thermal_bounds() {
        let mut config = DashboardConfig::default();
        config.thermal.winding_min = 95.0;
        assert!(config.validate().is_err());
    }
}
