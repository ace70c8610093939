// Telemetry sample types and chart view models
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpectrumBin {
    pub bin: usize,
    pub frequency: f64,
    pub amplitude: f64,
    pub phase: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WaterfallFrame {
    pub frame: usize,
    pub bins: Vec<SpectrumBin>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaveformSample {
    pub time: f64,
    pub amplitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureSample {
    pub hour: usize,
    pub label: String,
    pub bearing: f64,
    pub winding: f64,
    pub ambient: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsSample {
    pub hour: usize,
    pub label: String,
    pub rms: f64,
    pub kurtosis: f64,
    pub crest_factor: f64,
    pub peak_value: f64,
}

/// Daily tri-axial vibration magnitude in mm/s.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VibrationSample {
    pub day: usize,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElectricalSample {
    pub hour: usize,
    pub label: String,
    pub current: f64,
    pub voltage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindingSample {
    pub hour: usize,
    pub temperature: f64,
    pub threshold: f64,
    pub critical: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseCurrentSample {
    pub hour: usize,
    pub label: String,
    pub phase_a: f64,
    pub phase_b: f64,
    pub phase_c: f64,
}

/// "Day 2 5:00" style label for an hourly index.
pub fn hour_label(hour: usize) -> String {
    format!("Day {} {}:00", hour / 24 + 1, hour % 24)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ChartPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            label: None,
            color: None,
        }
    }

    pub fn labelled(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::new(x, y)
        }
    }

    pub fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TileData {
    pub id: String,
    pub title: String,
    pub unit: String,
    pub value: f64,
    pub precision: i32,
}

impl TileData {
    pub fn new(id: &str, title: &str, unit: &str, value: f64, precision: i32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            unit: unit.to_string(),
            value,
            precision,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesData {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub points: Vec<ChartPoint>,
}

impl SeriesData {
    pub fn new(id: &str, name: &str, color: Option<&str>, points: Vec<ChartPoint>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.map(str::to_string),
            points,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Line,
    MultiLine,
    Bar,
    Area,
    Pie,
    Radar,
    Heatmap,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub unit: Option<String>,
    pub kind: ChartKind,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    pub fraction_digits: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub series: Vec<SeriesData>,
}

impl ChartData {
    pub fn new(id: &str, title: &str, kind: ChartKind, series: Vec<SeriesData>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            unit: None,
            kind,
            y_min: None,
            y_max: None,
            fraction_digits: None,
            link: None,
            series,
        }
    }

    pub fn unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    pub fn y_range(mut self, y_min: f64, y_max: f64) -> Self {
        self.y_min = Some(y_min);
        self.y_max = Some(y_max);
        self
    }

    pub fn fraction_digits(mut self, digits: i32) -> Self {
        self.fraction_digits = Some(digits);
        self
    }

    pub fn link(mut self, path: String) -> Self {
        self.link = Some(path);
        self
    }

    #[cfg(test)]
    pub fn series(&self, id: &str) -> Option<&SeriesData> {
        self.series.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_label() {
        assert_eq!(hour_label(0), "Day 1 0:00");
        assert_eq!(hour_label(23), "Day 1 23:00");
        assert_eq!(hour_label(29), "Day 2 5:00");
    }

    #[test]
    fn test_chart_kind_serializes_camel_case() {
        let json = serde_json::to_string(&ChartKind::MultiLine).unwrap();
        assert_eq!(json, "\"multiLine\"");
    }
}
