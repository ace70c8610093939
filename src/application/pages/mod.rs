// One builder per addressable view
pub mod fault;
pub mod motor_detail;
pub mod overview;
pub mod statistics;
pub mod temperature;
pub mod vibration;

use crate::domain::navigation::TimeRange;
use crate::domain::page::Control;
use crate::domain::telemetry::{ChartPoint, SeriesData};

/// Map a sample slice onto one chart series
pub(crate) fn series_of<T>(
    id: &str,
    name: &str,
    color: Option<&str>,
    samples: &[T],
    point: impl Fn(&T) -> ChartPoint,
) -> SeriesData {
    SeriesData::new(id, name, color, samples.iter().map(point).collect())
}

pub(crate) fn range_control(selected: TimeRange) -> Control {
    Control {
        name: "range".to_string(),
        options: TimeRange::ALL.iter().map(|r| r.to_string()).collect(),
        selected: selected.to_string(),
    }
}

/// "7 days", "1 day" or "36 hours" for a window that may not be a whole range
pub(crate) fn window_label(hours: usize) -> String {
    match hours {
        24 => "1 day".to_string(),
        h if h > 0 && h % 24 == 0 => format!("{} days", h / 24),
        1 => "1 hour".to_string(),
        h => format!("{} hours", h),
    }
}
