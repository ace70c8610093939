// Bearing (primary) and stator winding (secondary) diagnosis views
use crate::application::pages::series_of;
use crate::application::series_source::SeriesSource;
use crate::domain::catalog::{self, ActionPlan};
use crate::domain::navigation::Route;
use crate::domain::page::{Page, Panel, Tone};
use crate::domain::telemetry::{ChartData, ChartKind, ChartPoint, SeriesData};

const WINDING_HOURS: usize = 48;
const PHASE_HOURS: usize = 24;

/// Tone for a diagnosis field, keyed on the labels that carry a severity.
fn diagnosis_tone(label: &str, value: &str) -> Tone {
    match (label, value) {
        ("Severity", "High") | ("Severity", "CRITICAL") | ("Est. Progression", "Rapid") => Tone::Critical,
        ("Confidence", _) => Tone::Info,
        ("Est. Failure", _) => Tone::Warning,
        _ => Tone::Neutral,
    }
}

fn action_panel(id: &str, title: &str, plans: &[ActionPlan]) -> Panel {
    let mut panel = Panel::new(id, title);
    for (i, plan) in plans.iter().enumerate() {
        let tone = match i {
            0 => Tone::Critical,
            1 => Tone::Warning,
            _ => Tone::Info,
        };
        panel = panel.row(plan.horizon, plan.actions.join("; "), tone);
    }
    panel
}

pub async fn primary() -> anyhow::Result<Page> {
    let route = Route::FaultDiagnosis;
    let mut page = Page::new(
        route.path(),
        "Fault Diagnosis",
        "AI-powered fault detection and analysis",
        route.back().map(|r| r.path()),
    );

    let probabilities = catalog::FAULT_PROBABILITIES
        .iter()
        .enumerate()
        .map(|(i, f)| ChartPoint::labelled(i as f64, f.value, f.label).color(f.color))
        .collect();
    page.charts.push(
        ChartData::new(
            "fault-probability",
            "Fault Probability Analysis",
            ChartKind::Bar,
            vec![SeriesData::new("probability", "Probability", None, probabilities)],
        )
        .unit("%")
        .y_range(0.0, 100.0),
    );

    let mut diagnosis = Panel::new("primary-diagnosis", "Primary Diagnosis");
    for (label, value) in catalog::PRIMARY_DIAGNOSIS {
        diagnosis = diagnosis.row(label, *value, diagnosis_tone(label, value));
    }
    page.panels.push(diagnosis);

    let features = catalog::DIAGNOSTIC_FEATURES
        .iter()
        .enumerate()
        .map(|(i, (label, value))| ChartPoint::labelled(i as f64, *value, *label))
        .collect();
    page.charts.push(
        ChartData::new(
            "diagnostic-features",
            "Diagnostic Features",
            ChartKind::Radar,
            vec![SeriesData::new("score", "Score", Some("#3b82f6"), features)],
        )
        .y_range(0.0, 100.0),
    );

    let history = catalog::FAULT_HISTORY
        .iter()
        .enumerate()
        .map(|(i, (month, faults))| ChartPoint::labelled(i as f64, *faults, *month))
        .collect();
    page.charts.push(
        ChartData::new(
            "fault-history",
            "Fault History (6 Months)",
            ChartKind::Line,
            vec![SeriesData::new("faults", "Faults", Some("#ef4444"), history)],
        )
        .fraction_digits(0),
    );

    page.panels.push(Panel::new("root-cause", "Root Cause Analysis").item(catalog::ROOT_CAUSE));

    let mut factors = Panel::new("contributing-factors", "Contributing Factors");
    for factor in catalog::CONTRIBUTING_FACTORS {
        factors = factors.item(*factor);
    }
    page.panels.push(factors);

    page.panels.push(action_panel(
        "recommended-actions",
        "Recommended Actions",
        catalog::BEARING_ACTIONS,
    ));

    Ok(page)
}

pub async fn secondary(source: &dyn SeriesSource) -> anyhow::Result<Page> {
    let route = Route::FaultDiagnosisSecondary;

    let (winding, phases) = tokio::try_join!(
        source.winding_temperature(WINDING_HOURS),
        source.phase_currents(PHASE_HOURS),
    )?;

    let mut page = Page::new(
        route.path(),
        "Fault Diagnosis - Stator Winding",
        "Electrical fault detection and analysis",
        route.back().map(|r| r.path()),
    );

    let mut overview = Panel::new("fault-overview", "Fault Overview");
    for (label, value) in catalog::SECONDARY_DIAGNOSIS {
        overview = overview.row(label, *value, diagnosis_tone(label, value));
    }
    page.panels.push(overview);

    page.charts.push(
        ChartData::new(
            "winding-temperature",
            "Winding Temperature (48h)",
            ChartKind::Area,
            vec![
                series_of("temperature", "Temperature", Some("#ef4444"), &winding, |s| {
                    ChartPoint::new(s.hour as f64, s.temperature)
                }),
                series_of("threshold", "Threshold", Some("#f59e0b"), &winding, |s| {
                    ChartPoint::new(s.hour as f64, s.threshold)
                }),
                series_of("critical", "Critical", Some("#dc2626"), &winding, |s| {
                    ChartPoint::new(s.hour as f64, s.critical)
                }),
            ],
        )
        .unit("°C")
        .fraction_digits(1),
    );

    page.charts.push(
        ChartData::new(
            "phase-currents",
            "Phase Current Imbalance",
            ChartKind::MultiLine,
            vec![
                series_of("phase-a", "Phase A", Some("#3b82f6"), &phases, |s| {
                    ChartPoint::labelled(s.hour as f64, s.phase_a, s.label.as_str())
                }),
                series_of("phase-b", "Phase B", Some("#ef4444"), &phases, |s| {
                    ChartPoint::labelled(s.hour as f64, s.phase_b, s.label.as_str())
                }),
                series_of("phase-c", "Phase C", Some("#22c55e"), &phases, |s| {
                    ChartPoint::labelled(s.hour as f64, s.phase_c, s.label.as_str())
                }),
            ],
        )
        .unit("A")
        .fraction_digits(1),
    );

    let mut indicators = Panel::new("fault-indicators", "Fault Indicators");
    for indicator in catalog::WINDING_INDICATORS {
        indicators = indicators.row(indicator.title, indicator.detail, Tone::Warning);
    }
    page.panels.push(indicators);

    page.panels.push(action_panel("action-plan", "Recommended Action Plan", catalog::WINDING_ACTIONS));

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnosis_tone() {
        assert_eq!(diagnosis_tone("Severity", "CRITICAL"), Tone::Critical);
        assert_eq!(diagnosis_tone("Confidence", "85%"), Tone::Info);
        assert_eq!(diagnosis_tone("Fault Type", "Bearing"), Tone::Neutral);
    }

    #[tokio::test]
    async fn test_primary_view_uses_catalogue() {
        let page = primary().await.unwrap();
        let diagnosis = page.panel("primary-diagnosis").unwrap();
        assert_eq!(diagnosis.value_of("Confidence"), Some("85%"));
        assert_eq!(page.chart("fault-probability").unwrap().series[0].points.len(), 6);
        assert_eq!(page.panel("recommended-actions").unwrap().rows.len(), 3);
        assert_eq!(page.back.as_deref(), Some("/"));
    }
}
