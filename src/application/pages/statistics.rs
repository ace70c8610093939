// RMS and kurtosis statistical parameters
use crate::application::pages::{range_control, series_of, window_label};
use crate::application::series_source::SeriesSource;
use crate::application::summary::{SeriesSummary, summarize};
use crate::domain::catalog;
use crate::domain::navigation::{Route, TimeRange};
use crate::domain::page::{Page, Panel, Tone};
use crate::domain::telemetry::{ChartData, ChartKind, ChartPoint, SeriesData};

const KURTOSIS_ALERT: f64 = 4.0;
const RECENT_SAMPLES: usize = 48;

fn summary_rows(panel: Panel, name: &str, summary: Option<SeriesSummary>) -> Panel {
    match summary {
        Some(s) => panel
            .row(&format!("{} Mean", name), format!("{:.2}", s.mean), Tone::Neutral)
            .row(&format!("{} Std Dev", name), format!("{:.2}", s.std_dev), Tone::Neutral)
            .row(&format!("{} Peak", name), format!("{:.2}", s.peak), Tone::Neutral),
        None => panel,
    }
}

pub async fn build(source: &dyn SeriesSource, range: TimeRange, hours: usize) -> anyhow::Result<Page> {
    let route = Route::RmsKurtosis { range };
    let samples = source.statistics_history(hours).await?;

    let mut page = Page::new(
        route.path(),
        "RMS & Kurtosis Analysis",
        "Statistical vibration parameters",
        route.back().map(|r| r.path()),
    );
    page.controls.push(range_control(range));

    let mut current = Panel::new("current-values", "Current Values");
    match samples.last() {
        Some(last) => {
            let healthy = last.rms <= catalog::RMS_ALERT_THRESHOLD && last.kurtosis <= KURTOSIS_ALERT;
            current = current
                .row("RMS", format!("{:.2} mm/s", last.rms), Tone::Info)
                .row("Kurtosis", format!("{:.2}", last.kurtosis), Tone::Info)
                .row(
                    "Status",
                    if healthy { "HEALTHY" } else { "ATTENTION" },
                    if healthy { Tone::Normal } else { Tone::Warning },
                );
        }
        None => current = current.item("No readings in the selected window"),
    }
    page.panels.push(current);

    page.charts.push(
        ChartData::new(
            "rms-kurtosis-trends",
            &format!("RMS & Kurtosis Trends ({})", window_label(hours)),
            ChartKind::Area,
            vec![
                series_of("rms", "RMS", Some("#3b82f6"), &samples, |s| {
                    ChartPoint::labelled(s.hour as f64, s.rms, s.label.as_str())
                }),
                series_of("kurtosis", "Kurtosis", Some("#f59e0b"), &samples, |s| {
                    ChartPoint::labelled(s.hour as f64, s.kurtosis, s.label.as_str())
                }),
            ],
        )
        .fraction_digits(2),
    );

    let bands = catalog::FREQUENCY_BAND_RMS
        .iter()
        .enumerate()
        .map(|(i, (band, _, rms))| ChartPoint::labelled(i as f64, *rms, *band))
        .collect();
    page.charts.push(
        ChartData::new(
            "frequency-band-rms",
            "Frequency Band RMS",
            ChartKind::Bar,
            vec![SeriesData::new("rms", "RMS", Some("#8b5cf6"), bands)],
        )
        .unit("mm/s")
        .fraction_digits(1),
    );

    let recent = &samples[samples.len().saturating_sub(RECENT_SAMPLES)..];
    page.charts.push(
        ChartData::new(
            "additional-parameters",
            "Crest Factor & Peak Value",
            ChartKind::Line,
            vec![
                series_of("crest-factor", "Crest Factor", Some("#22c55e"), recent, |s| {
                    ChartPoint::labelled(s.hour as f64, s.crest_factor, s.label.as_str())
                }),
                series_of("peak-value", "Peak Value", Some("#ef4444"), recent, |s| {
                    ChartPoint::labelled(s.hour as f64, s.peak_value, s.label.as_str())
                }),
            ],
        )
        .fraction_digits(2),
    );

    let mut summary = Panel::new("statistical-summary", "Statistical Summary");
    summary = summary_rows(summary, "RMS", summarize(samples.iter().map(|s| s.rms)));
    summary = summary_rows(summary, "Kurtosis", summarize(samples.iter().map(|s| s.kurtosis)));
    page.panels.push(summary);

    let mut guide = Panel::new("interpretation-guide", "Interpretation Guide");
    for (parameter, meaning, normal) in catalog::INTERPRETATION_GUIDE {
        guide = guide.row(parameter, *normal, Tone::Info).item(*meaning);
    }
    page.panels.push(guide);

    let mut recommendations = Panel::new("recommendations", "Recommendations");
    for recommendation in catalog::STATISTICS_RECOMMENDATIONS {
        recommendations = recommendations.item(*recommendation);
    }
    page.panels.push(recommendations);

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_rows() {
        let panel = summary_rows(Panel::new("s", "Summary"), "RMS", summarize(vec![1.0, 3.0]));
        assert_eq!(panel.value_of("RMS Mean"), Some("2.00"));
        assert_eq!(panel.value_of("RMS Peak"), Some("3.00"));

        let empty = summary_rows(Panel::new("s", "Summary"), "RMS", None);
        assert!(empty.rows.is_empty());
    }
}
