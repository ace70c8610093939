// Thermal history over a selectable window
use crate::application::pages::{range_control, series_of, window_label};
use crate::application::series_source::SeriesSource;
use crate::application::summary::summarize;
use crate::domain::catalog;
use crate::domain::navigation::{Route, TimeRange};
use crate::domain::page::{Page, Panel, Tone};
use crate::domain::telemetry::{ChartData, ChartKind, ChartPoint, SeriesData, TemperatureSample};

fn threshold(label: &str) -> f64 {
    catalog::TEMPERATURE_THRESHOLDS
        .iter()
        .find(|t| t.label == label)
        .map(|t| t.celsius)
        .unwrap_or(f64::INFINITY)
}

fn tone_for(value: f64, warning: f64, critical: f64) -> Tone {
    if value >= critical {
        Tone::Critical
    } else if value >= warning {
        Tone::Warning
    } else {
        Tone::Normal
    }
}

/// Samples where either temperature reached its warning threshold
fn anomalies(samples: &[TemperatureSample]) -> usize {
    let bearing_warning = threshold("Bearing Warning");
    let winding_warning = threshold("Winding Warning");
    samples
        .iter()
        .filter(|s| s.bearing >= bearing_warning || s.winding >= winding_warning)
        .count()
}

pub async fn build(source: &dyn SeriesSource, range: TimeRange, hours: usize) -> anyhow::Result<Page> {
    let route = Route::TemperatureTrends { range };
    let samples = source.temperature_history(hours).await?;

    let mut page = Page::new(
        route.path(),
        "Temperature Trends",
        "Bearing and winding temperature monitoring",
        route.back().map(|r| r.path()),
    );
    page.controls.push(range_control(range));

    let bearing_warning = threshold("Bearing Warning");
    let bearing_critical = threshold("Bearing Critical");
    let winding_warning = threshold("Winding Warning");
    let winding_critical = threshold("Winding Critical");

    let mut current = Panel::new("current-readings", "Current Readings");
    match samples.last() {
        Some(last) => {
            current = current
                .row(
                    "Bearing",
                    format!("{:.1}°C", last.bearing),
                    tone_for(last.bearing, bearing_warning, bearing_critical),
                )
                .row(
                    "Winding",
                    format!("{:.1}°C", last.winding),
                    tone_for(last.winding, winding_warning, winding_critical),
                )
                .row("Ambient", format!("{:.1}°C", last.ambient), Tone::Neutral);
        }
        None => current = current.item("No readings in the selected window"),
    }
    page.panels.push(current);

    page.charts.push(
        ChartData::new(
            "temperature-history",
            &format!("Temperature History ({})", window_label(hours)),
            ChartKind::Area,
            vec![
                series_of("bearing", "Bearing", Some("#3b82f6"), &samples, |s| {
                    ChartPoint::labelled(s.hour as f64, s.bearing, s.label.as_str())
                }),
                series_of("winding", "Winding", Some("#ef4444"), &samples, |s| {
                    ChartPoint::labelled(s.hour as f64, s.winding, s.label.as_str())
                }),
                series_of("ambient", "Ambient", Some("#22c55e"), &samples, |s| {
                    ChartPoint::labelled(s.hour as f64, s.ambient, s.label.as_str())
                }),
            ],
        )
        .unit("°C")
        .y_range(20.0, 95.0)
        .fraction_digits(1),
    );

    let mut statistics = Panel::new("temperature-statistics", "Temperature Statistics");
    let bearing = summarize(samples.iter().map(|s| s.bearing));
    let winding = summarize(samples.iter().map(|s| s.winding));
    let ambient = summarize(samples.iter().map(|s| s.ambient));
    if let (Some(bearing), Some(winding), Some(ambient)) = (bearing, winding, ambient) {
        let anomalies = anomalies(&samples);
        let margin = (bearing_warning - bearing.peak).min(winding_warning - winding.peak);
        statistics = statistics
            .row("Bearing Avg", format!("{:.1}°C", bearing.mean), Tone::Neutral)
            .row(
                "Bearing Peak",
                format!("{:.1}°C", bearing.peak),
                tone_for(bearing.peak, bearing_warning, bearing_critical),
            )
            .row("Winding Avg", format!("{:.1}°C", winding.mean), Tone::Neutral)
            .row(
                "Winding Peak",
                format!("{:.1}°C", winding.peak),
                tone_for(winding.peak, winding_warning, winding_critical),
            )
            .row("Thermal Rise", format!("{:.1}°C", winding.mean - ambient.mean), Tone::Info)
            .row(
                "Threshold Margin",
                format!("{:.1}°C", margin),
                if margin > 0.0 { Tone::Normal } else { Tone::Warning },
            )
            .row(
                "Anomalies Detected",
                anomalies.to_string(),
                if anomalies == 0 { Tone::Normal } else { Tone::Warning },
            )
            .row(
                "Status",
                if anomalies == 0 { "NORMAL" } else { "ATTENTION" },
                if anomalies == 0 { Tone::Normal } else { Tone::Warning },
            );
    }
    page.panels.push(statistics);

    let band = |f: fn(&catalog::BandRange) -> f64| {
        catalog::TEMPERATURE_DISTRIBUTION
            .iter()
            .enumerate()
            .map(|(i, b)| ChartPoint::labelled(i as f64, f(b), b.band))
            .collect::<Vec<_>>()
    };
    page.charts.push(
        ChartData::new(
            "temperature-distribution",
            "Temperature Distribution",
            ChartKind::Bar,
            vec![
                SeriesData::new("bearing", "Bearing", Some("#3b82f6"), band(|b| b.bearing)),
                SeriesData::new("winding", "Winding", Some("#ef4444"), band(|b| b.winding)),
            ],
        )
        .unit("%"),
    );

    let mut thresholds = Panel::new("thresholds", "Alarm Thresholds");
    for t in catalog::TEMPERATURE_THRESHOLDS {
        let tone = if t.label.ends_with("Critical") { Tone::Critical } else { Tone::Warning };
        thresholds = thresholds.row(t.label, format!("{}°C", t.celsius), tone);
    }
    page.panels.push(thresholds);

    let mut events = Panel::new("thermal-events", "Recent Thermal Events");
    for event in catalog::THERMAL_EVENTS {
        events = events
            .row(event.title, event.when, Tone::Info)
            .item(event.detail);
    }
    page.panels.push(events);

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(hour: usize, bearing: f64, winding: f64) -> TemperatureSample {
        TemperatureSample {
            hour,
            label: String::new(),
            bearing,
            winding,
            ambient: 25.0,
        }
    }

    #[test]
    fn test_tone_for() {
        assert_eq!(tone_for(70.0, 80.0, 90.0), Tone::Normal);
        assert_eq!(tone_for(80.0, 80.0, 90.0), Tone::Warning);
        assert_eq!(tone_for(91.0, 80.0, 90.0), Tone::Critical);
    }

    #[test]
    fn test_anomalies_counts_either_temperature() {
        let samples = vec![
            sample(0, 65.0, 70.0),
            sample(1, 81.0, 70.0),
            sample(2, 65.0, 86.0),
            sample(3, 82.0, 88.0),
        ];
        assert_eq!(anomalies(&samples), 3);
        assert_eq!(anomalies(&[]), 0);
    }
}
