// Vibration FFT analysis for one measurement axis
use crate::application::pages::series_of;
use crate::application::series_source::SeriesSource;
use crate::application::summary::peak_near;
use crate::domain::catalog;
use crate::domain::navigation::{Axis, Route};
use crate::domain::page::{Control, Page, Panel, Tone};
use crate::domain::telemetry::{ChartData, ChartKind, ChartPoint};

const WATERFALL_FRAMES: usize = 10;
const WAVEFORM_SAMPLES: usize = 200;

pub async fn build(source: &dyn SeriesSource, axis: Axis, bins: usize) -> anyhow::Result<Page> {
    let route = Route::VibrationFft { axis };

    let (spectrum, waterfall, waveform) = tokio::try_join!(
        source.spectrum(axis, bins),
        source.spectrum_waterfall(axis, WATERFALL_FRAMES),
        source.time_waveform(axis, WAVEFORM_SAMPLES),
    )?;

    let mut page = Page::new(
        route.path(),
        "Vibration FFT Analysis",
        &format!("Frequency domain analysis - {}-Axis", axis),
        route.back().map(|r| r.path()),
    );

    page.controls.push(Control {
        name: "axis".to_string(),
        options: Axis::ALL.iter().map(|a| a.to_string()).collect(),
        selected: axis.to_string(),
    });

    page.charts.push(
        ChartData::new(
            "spectrum",
            &format!("FFT Spectrum - {}-Axis", axis),
            ChartKind::Bar,
            vec![series_of("amplitude", "Amplitude", Some("#3b82f6"), &spectrum, |b| {
                ChartPoint::new(b.frequency, b.amplitude)
            })],
        )
        .unit("mm/s")
        .fraction_digits(3),
    );

    // One series per frame; the client stacks them by frame index
    let frames = waterfall
        .iter()
        .map(|frame| {
            series_of(
                &format!("frame-{}", frame.frame),
                &format!("T{}", frame.frame),
                None,
                &frame.bins,
                |b| ChartPoint::new(b.frequency, b.amplitude),
            )
        })
        .collect();
    page.charts.push(
        ChartData::new("waterfall", "Spectrum Waterfall", ChartKind::Heatmap, frames)
            .unit("mm/s")
            .fraction_digits(3),
    );

    page.charts.push(
        ChartData::new(
            "time-waveform",
            "Time Waveform",
            ChartKind::Line,
            vec![series_of("amplitude", "Amplitude", Some("#22c55e"), &waveform, |s| {
                ChartPoint::new(s.time, s.amplitude)
            })],
        )
        .unit("g")
        .fraction_digits(3),
    );

    let mut frequencies = Panel::new("fault-frequencies", "Fault Frequency Reference");
    for fault in catalog::FAULT_FREQUENCIES {
        let label = format!("{} ({})", fault.name, fault.description);
        let (value, tone) = if peak_near(&spectrum, fault.frequency_hz) {
            (format!("{} Hz - Peak Detected", fault.frequency_hz), Tone::Warning)
        } else {
            (format!("{} Hz - No peak", fault.frequency_hz), Tone::Neutral)
        };
        frequencies = frequencies.row(&label, value, tone);
    }
    frequencies = frequencies.item(format!("Diagnosis: {}", catalog::VIBRATION_DIAGNOSIS));
    page.panels.push(frequencies);

    let mut statistics = Panel::new("statistics", "Vibration Statistics");
    for (label, value, ok) in catalog::VIBRATION_STATISTICS {
        let tone = if *ok { Tone::Normal } else { Tone::Warning };
        statistics = statistics.row(label, *value, tone);
    }
    page.panels.push(statistics);

    Ok(page)
}
