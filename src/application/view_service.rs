// View service - Use case for rendering one addressable view
use crate::application::pages::{fault, motor_detail, overview, statistics, temperature, vibration};
use crate::application::series_source::SeriesSource;
use crate::domain::motor::MotorRegistry;
use crate::domain::navigation::Route;
use crate::domain::page::{Page, PageStatus};
use std::sync::Arc;

#[derive(Clone)]
pub struct ViewService {
    registry: Arc<MotorRegistry>,
    source: Arc<dyn SeriesSource>,
    spectrum_bins: usize,
    preview_bins: usize,
}

impl ViewService {
    pub fn new(
        registry: Arc<MotorRegistry>,
        source: Arc<dyn SeriesSource>,
        spectrum_bins: usize,
        preview_bins: usize,
    ) -> Self {
        Self {
            registry,
            source,
            spectrum_bins,
            preview_bins,
        }
    }

    /// Render a route using its default time window.
    #[cfg(test)]
    pub async fn render(&self, route: Route) -> anyhow::Result<Page> {
        self.render_window(route, None).await
    }

    /// Render a route, letting `hours` override the window implied by its
    /// time range. Routes without a time range ignore the override.
    pub async fn render_window(&self, route: Route, hours: Option<usize>) -> anyhow::Result<Page> {
        tracing::debug!("Rendering {} (range {:?}, hours {:?})", route.path(), route.range(), hours);
        let source = self.source.as_ref();

        let mut page = match route {
            Route::Home => overview::build(&self.registry, source, self.preview_bins).await,
            Route::MotorDetail { id } => motor_detail::build(&self.registry, source, id).await,
            Route::VibrationFft { axis } => vibration::build(source, axis, self.spectrum_bins).await,
            Route::FaultDiagnosis => fault::primary().await,
            Route::FaultDiagnosisSecondary => fault::secondary(source).await,
            Route::TemperatureTrends { range } => {
                temperature::build(source, range, hours.unwrap_or(range.hours())).await
            }
            Route::RmsKurtosis { range } => {
                statistics::build(source, range, hours.unwrap_or(range.hours())).await
            }
        }?;

        // An hours override is part of the page address
        if page.status == PageStatus::Ok {
            page.route = route.window_path(hours);
        }
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::navigation::{Axis, TimeRange};
    use crate::infrastructure::config::{SpectrumSettings, ThermalSettings};
    use crate::infrastructure::synthetic_source::SyntheticSource;

    fn service() -> ViewService {
        let source = SyntheticSource::seeded(SpectrumSettings::default(), ThermalSettings::default(), 42);
        ViewService::new(Arc::new(MotorRegistry::builtin()), Arc::new(source), 100, 50)
    }

    fn history_len(page: &Page, chart: &str) -> usize {
        page.chart(chart).unwrap().series[0].points.len()
    }

    #[tokio::test]
    async fn test_motor_detail_for_warning_motor() {
        let page = service().render(Route::MotorDetail { id: 2 }).await.unwrap();
        assert_eq!(page.status, PageStatus::Ok);
        assert!(page.title.starts_with("203-COM-125B"));

        let overview = page.panel("health-overview").unwrap();
        assert_eq!(overview.value_of("Health"), Some("52%"));
        assert_eq!(overview.value_of("Status"), Some("Warning"));
        assert_eq!(history_len(&page, "vibration-history"), 30);
        assert_eq!(history_len(&page, "electrical-profile"), 24);
    }

    #[tokio::test]
    async fn test_unknown_motor_renders_not_found() {
        let page = service().render(Route::MotorDetail { id: 999 }).await.unwrap();
        assert_eq!(page.status, PageStatus::NotFound);
        assert_eq!(page.back.as_deref(), Some("/"));
        assert!(page.charts.is_empty());
    }

    #[tokio::test]
    async fn test_range_transitions_resize_history() {
        let service = service();
        let mut route = Route::TemperatureTrends { range: TimeRange::Week };

        for (range, expected) in [(TimeRange::Day, 24), (TimeRange::Month, 720), (TimeRange::Week, 168)] {
            route = route.with_range(range);
            let page = service.render(route).await.unwrap();
            assert_eq!(history_len(&page, "temperature-history"), expected);
            assert_eq!(page.controls[0].selected, range.to_string());
        }

        let rms = service.render(Route::RmsKurtosis { range: TimeRange::Day }).await.unwrap();
        assert_eq!(history_len(&rms, "rms-kurtosis-trends"), 24);
    }

    #[tokio::test]
    async fn test_empty_window_has_no_current_readings() {
        let page = service()
            .render_window(Route::TemperatureTrends { range: TimeRange::Week }, Some(0))
            .await
            .unwrap();
        assert_eq!(history_len(&page, "temperature-history"), 0);

        let current = page.panel("current-readings").unwrap();
        assert!(current.rows.is_empty());
        assert_eq!(current.items.len(), 1);
        assert!(page.panel("temperature-statistics").unwrap().rows.is_empty());
    }

    #[tokio::test]
    async fn test_hours_override_wins_over_range() {
        let page = service()
            .render_window(Route::RmsKurtosis { range: TimeRange::Month }, Some(36))
            .await
            .unwrap();
        assert_eq!(history_len(&page, "rms-kurtosis-trends"), 36);
        assert_eq!(history_len(&page, "additional-parameters"), 36);
        assert_eq!(page.route, "/rms-kurtosis?range=30d&hours=36");

        let page = service()
            .render(Route::RmsKurtosis { range: TimeRange::Month })
            .await
            .unwrap();
        assert_eq!(page.route, "/rms-kurtosis?range=30d");
    }

    #[tokio::test]
    async fn test_fault_frequencies_follow_spectrum() {
        let page = service().render(Route::VibrationFft { axis: Axis::Z }).await.unwrap();
        assert_eq!(page.controls[0].selected, "Z");
        assert_eq!(history_len(&page, "spectrum"), 101);
        assert_eq!(page.chart("waterfall").unwrap().series.len(), 10);

        let frequencies = page.panel("fault-frequencies").unwrap();
        // BPFO sits on the 12th harmonic bin, BPFI on plain noise
        assert_eq!(frequencies.value_of("BPFO (Outer Race)"), Some("120 Hz - Peak Detected"));
        assert_eq!(frequencies.value_of("BPFI (Inner Race)"), Some("180 Hz - No peak"));
        assert!(
            frequencies
                .items
                .iter()
                .any(|i| i == "Diagnosis: Outer race bearing defect with 85% confidence")
        );
    }

    #[tokio::test]
    async fn test_overview_cards_and_alarm_count() {
        let page = service().render(Route::Home).await.unwrap();
        let cards = page.panels.iter().filter(|p| p.id.starts_with("motor-")).count();
        assert_eq!(cards, 4);
        assert_eq!(page.tile("motors_in_alarm").unwrap().value, 1.0);
        assert_eq!(
            page.chart("temperature-trends").unwrap().link.as_deref(),
            Some("/temperature-trends?range=7d")
        );
        assert_eq!(history_len(&page, "vibration-fft"), 51);
        assert_eq!(page.chart("vibration-fft").unwrap().series[0].points[5].y, 0.8);
        assert_eq!(history_len(&page, "temperature-trends"), 20);
    }

    #[tokio::test]
    async fn test_secondary_diagnosis_alarm_lines() {
        let page = service().render(Route::FaultDiagnosisSecondary).await.unwrap();
        let chart = page.chart("winding-temperature").unwrap();
        assert_eq!(chart.series("temperature").unwrap().points.len(), 48);
        assert!(chart.series("threshold").unwrap().points.iter().all(|p| p.y == 85.0));
        assert!(chart.series("critical").unwrap().points.iter().all(|p| p.y == 95.0));
    }
}
