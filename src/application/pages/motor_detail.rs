// Single-motor health breakdown
use crate::application::pages::series_of;
use crate::application::series_source::SeriesSource;
use crate::domain::catalog;
use crate::domain::motor::MotorRegistry;
use crate::domain::navigation::Route;
use crate::domain::page::{Page, Panel, Tone};
use crate::domain::telemetry::{ChartData, ChartKind, ChartPoint, SeriesData, TileData, VibrationSample};

const VIBRATION_DAYS: usize = 30;
const ELECTRICAL_HOURS: usize = 24;

pub async fn build(registry: &MotorRegistry, source: &dyn SeriesSource, id: u32) -> anyhow::Result<Page> {
    let route = Route::MotorDetail { id };

    let motor = match registry.lookup(id) {
        Ok(motor) => motor,
        Err(e) => {
            tracing::info!("Rendering not-found view: {}", e);
            return Ok(Page::not_found(route.path(), "Motor not found"));
        }
    };

    let (vibration, electrical) = tokio::try_join!(
        source.vibration_history(id, VIBRATION_DAYS),
        source.electrical_profile(id, ELECTRICAL_HOURS),
    )?;

    let mut page = Page::new(
        route.path(),
        &format!("{} - Detailed Analysis", motor.name),
        "Real-time monitoring and predictive analysis",
        route.back().map(|r| r.path()),
    );

    page.tiles.push(TileData::new("health_score", "Health Score", "%", motor.health_score as f64, 0));

    page.panels.push(
        Panel::new("health-overview", "Health Overview")
            .row("Health", motor.health_label(), Tone::from_status(&motor.status.to_string()))
            .row("Status", motor.status.to_string(), Tone::from_status(&motor.status.to_string()))
            .row("Remaining Life", motor.remaining_life.as_str(), Tone::Neutral)
            .row("Operating Hours", catalog::OPERATING_HOURS, Tone::Neutral)
            .row("Last Maintenance", catalog::LAST_MAINTENANCE, Tone::Neutral),
    );

    let breakdown = catalog::HEALTH_BREAKDOWN
        .iter()
        .enumerate()
        .map(|(i, slice)| ChartPoint::labelled(i as f64, slice.value, slice.label).color(slice.color))
        .collect();
    page.charts.push(
        ChartData::new(
            "health-breakdown",
            "Health Component Breakdown",
            ChartKind::Pie,
            vec![SeriesData::new("score", "Score", None, breakdown)],
        )
        .unit("%"),
    );

    let axis = |id: &str, name: &str, color: &str, value: fn(&VibrationSample) -> f64| {
        series_of(id, name, Some(color), &vibration, |s| {
            ChartPoint::labelled(s.day as f64, value(s), s.label.as_str())
        })
    };
    page.charts.push(
        ChartData::new(
            "vibration-history",
            "30-Day Vibration History (mm/s)",
            ChartKind::MultiLine,
            vec![
                axis("x", "X-Axis", "#3b82f6", |s| s.x),
                axis("y", "Y-Axis", "#22c55e", |s| s.y),
                axis("z", "Z-Axis", "#f59e0b", |s| s.z),
            ],
        )
        .unit("mm/s")
        .fraction_digits(2),
    );

    page.charts.push(
        ChartData::new(
            "electrical-profile",
            "24-Hour Electrical Profile",
            ChartKind::Bar,
            vec![
                series_of("current", "Current (A)", Some("#3b82f6"), &electrical, |s| {
                    ChartPoint::labelled(s.hour as f64, s.current, s.label.as_str())
                }),
                series_of("voltage", "Voltage (V)", Some("#22c55e"), &electrical, |s| {
                    ChartPoint::labelled(s.hour as f64, s.voltage, s.label.as_str())
                }),
            ],
        )
        .fraction_digits(1),
    );

    let mut alerts = Panel::new("recent-alerts", "Recent Alerts");
    for alert in catalog::MOTOR_ALERTS {
        let tone = match alert.detail {
            "critical" => Tone::Critical,
            "warning" => Tone::Warning,
            _ => Tone::Info,
        };
        alerts = alerts.row(alert.title, alert.when, tone);
    }
    page.panels.push(alerts);

    Ok(page)
}
