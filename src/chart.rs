//! PNG rendering of latency histograms.

use crate::histogram::{LogHistogram, MAX_EDGE_MS, MIN_EDGE_MS};
use crate::model::Kind;
use anyhow::{anyhow, Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::register_font;
use std::path::Path;
use std::sync::OnceLock;

/// DejaVu Sans, bundled so labels render without system fonts.
static DEJAVU_SANS: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");

static FONT_REGISTERED: OnceLock<Result<(), String>> = OnceLock::new();

/// Register the bundled font as plotters' `sans-serif` family, once.
fn register_embedded_font() -> Result<()> {
    FONT_REGISTERED
        .get_or_init(|| {
            register_font("sans-serif", FontStyle::Normal, DEJAVU_SANS)
                .map_err(|_| "bundled DejaVu Sans is not a valid font".to_string())
        })
        .clone()
        .map_err(|e| anyhow!(e))
}

/// Draw `hist` as a bar chart with a log-scaled latency axis and write it to
/// `path` as a PNG, replacing any existing file.
pub fn render_histogram(
    path: &Path,
    kind: Kind,
    hist: &LogHistogram,
    size: (u32, u32),
) -> Result<()> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    draw_histogram(&root, kind, hist)
        .and_then(|()| root.present().map_err(Into::into))
        .with_context(|| format!("failed to render histogram '{}'", path.display()))
}

/// Draw the titled, labelled histogram onto `root`.
pub fn draw_histogram<DB>(root: &DrawingArea<DB, Shift>, kind: Kind, hist: &LogHistogram) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    register_embedded_font()?;

    let x_min = hist.edges().first().copied().unwrap_or(MIN_EDGE_MS);
    let x_max = hist.edges().last().copied().unwrap_or(MAX_EDGE_MS);
    // Leave headroom above the tallest bar; an empty group still gets an axis.
    let y_max = hist.max_count() + hist.max_count() / 10 + 1;

    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(format!("{kind} latency histogram"), ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((x_min..x_max).log_scale(), 0u64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("latency (ms, log scale)")
        .y_desc("frequency")
        .x_label_formatter(&|v| format!("{v:e}"))
        .draw()?;

    chart.draw_series(
        hist.bins()
            .filter(|b| b.count > 0)
            .map(|b| Rectangle::new([(b.lower, 0), (b.upper, b.count)], BLUE.mix(0.6).filled())),
    )?;

    Ok(())
}
