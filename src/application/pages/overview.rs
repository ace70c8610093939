// Landing dashboard: motor cards plus preview widgets for every detail view
use crate::application::series_source::SeriesSource;
use crate::domain::catalog;
use crate::domain::motor::{MotorRecord, MotorRegistry, MotorStatus};
use crate::domain::navigation::{Axis, Route, TimeRange};
use crate::domain::page::{Page, Panel, Tone};
use crate::domain::telemetry::{
    ChartData, ChartKind, ChartPoint, SeriesData, TemperatureSample, TileData,
};

const PREVIEW_HOURS: usize = 20;

pub async fn build(
    registry: &MotorRegistry,
    source: &dyn SeriesSource,
    preview_bins: usize,
) -> anyhow::Result<Page> {
    let route = Route::Home;
    let mut page = Page::new(route.path(), "Predictive Maintenance Operations", "", None);

    // Preview widgets are independent; fetch them together
    let (spectrum, temperatures, statistics) = tokio::try_join!(
        source.spectrum_preview(preview_bins),
        source.temperature_preview(PREVIEW_HOURS),
        source.statistics_preview(PREVIEW_HOURS),
    )?;

    page.tiles = vec![
        TileData::new("plant_health", "Plant Health Index", "%", catalog::PLANT_HEALTH_INDEX, 0),
        TileData::new("motors_in_alarm", "Motors In Alarm", "", registry.motors_in_alarm() as f64, 0),
        TileData::new("active_alerts", "Active Alerts", "", catalog::ACTIVE_ALERTS, 0),
        TileData::new("critical_alerts", "Critical", "", catalog::CRITICAL_ALERTS, 0),
    ];

    page.panels = registry.all().iter().map(motor_card).collect();

    page.charts.push(
        ChartData::new(
            "vibration-fft",
            "Vibration FFT",
            ChartKind::Bar,
            vec![SeriesData::new(
                "amplitude",
                "Amplitude",
                Some("#cbd5e1"),
                spectrum
                    .iter()
                    .map(|b| ChartPoint::new(b.frequency, b.amplitude))
                    .collect(),
            )],
        )
        .unit("mm/s")
        .link(Route::VibrationFft { axis: Axis::default() }.path()),
    );

    page.charts.push(
        ChartData::new(
            "temperature-trends",
            "Temperature Trends",
            ChartKind::MultiLine,
            vec![
                SeriesData::new("bearing", "Bearing", Some("#3b82f6"), temperature_points(&temperatures, |s| s.bearing)),
                SeriesData::new("winding", "Winding", Some("#22c55e"), temperature_points(&temperatures, |s| s.winding)),
                SeriesData::new("ambient", "Ambient", Some("#f59e0b"), temperature_points(&temperatures, |s| s.ambient)),
            ],
        )
        .unit("°C")
        .fraction_digits(1)
        .link(Route::TemperatureTrends { range: TimeRange::default() }.path()),
    );

    page.charts.push(
        ChartData::new(
            "rms-kurtosis",
            "RMS & Kurtosis",
            ChartKind::Area,
            vec![
                SeriesData::new(
                    "rms",
                    "RMS",
                    Some("#3b82f6"),
                    statistics.iter().map(|s| ChartPoint::new(s.hour as f64, s.rms)).collect(),
                ),
                SeriesData::new(
                    "kurtosis",
                    "Kurtosis",
                    Some("#f59e0b"),
                    statistics.iter().map(|s| ChartPoint::new(s.hour as f64, s.kurtosis)).collect(),
                ),
            ],
        )
        .fraction_digits(2)
        .link(Route::RmsKurtosis { range: TimeRange::default() }.path()),
    );

    let affected = registry
        .all()
        .iter()
        .find(|m| m.status != MotorStatus::Normal)
        .map(|m| m.name.as_str())
        .unwrap_or("the monitored fleet");

    page.panels.push(
        Panel::new("fault-diagnosis", "Fault Diagnosis")
            .link(Route::FaultDiagnosis.path())
            .row("Fault Type", "Outer Race Bearing", Tone::Neutral)
            .row("Probability", "85%", Tone::Critical)
            .row("Est. Failure Window", "7-12 days", Tone::Warning)
            .item(format!(
                "Outer race defect causing periodic wear pattern on {}.",
                affected
            )),
    );

    page.panels.push(
        Panel::new("fault-diagnosis-secondary", "Fault Diagnosis (Secondary)")
            .link(Route::FaultDiagnosisSecondary.path())
            .row("Fault Type", "Stator Winding", Tone::Neutral)
            .row("Severity", "Critical", Tone::Critical)
            .row("Confidence", "85%", Tone::Info),
    );

    let mut alerts = Panel::new("alerts", "Alert & Workflow");
    for alert in catalog::ALERT_QUEUE {
        alerts = alerts.row(alert.title, alert.when, Tone::from_status(alert.title));
    }
    for action in catalog::WORKFLOW_ACTIONS {
        alerts = alerts.item(*action);
    }
    page.panels.push(alerts);

    let mut model = Panel::new("model-status", "Model Status");
    for (label, value) in catalog::MODEL_STATUS {
        model = model.row(label, *value, Tone::Neutral);
    }
    page.panels.push(model);

    Ok(page)
}

fn motor_card(motor: &MotorRecord) -> Panel {
    let tone = Tone::from_status(&motor.status.to_string());
    Panel::new(&format!("motor-{}", motor.id), &motor.name)
        .link(Route::MotorDetail { id: motor.id }.path())
        .row("Health", motor.health_label(), tone)
        .row("Remaining", motor.remaining_life.as_str(), Tone::Neutral)
        .row("Current Load", "Normal", Tone::Normal)
        .row("Vibration", motor.vibration_status.as_str(), Tone::from_status(&motor.vibration_status))
        .row("Electrical", motor.electrical_status.as_str(), Tone::from_status(&motor.electrical_status))
}

/// Preview points labelled with a wall-clock hour starting at 10:00
fn temperature_points(samples: &[TemperatureSample], value: impl Fn(&TemperatureSample) -> f64) -> Vec<ChartPoint> {
    samples
        .iter()
        .map(|s| ChartPoint::labelled(s.hour as f64, value(s), format!("{}:00", (10 + s.hour) % 24)))
        .collect()
}
