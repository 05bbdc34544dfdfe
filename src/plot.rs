//! Log-log chart of economy series, one line per base.

use std::error::Error;
use std::fs::create_dir_all;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use crate::config::{AnnotationConfig, ChartConfig};
use crate::core::series::EconomySeries;

pub const X_DESC: &str = "Represented Number";
pub const Y_DESC: &str = "Radix Economy (radix * digits)";

const ANNOTATION_FONT_PX: u32 = 16;
const ANNOTATION_PAD_PX: i32 = 6;
const ANNOTATION_LINE_GAP_PX: i32 = 2;

/// Render to `out_path`. `.svg` selects the SVG backend, anything else PNG.
pub fn render_economy_chart(
    out_path: &Path,
    series: &EconomySeries,
    chart_cfg: &ChartConfig,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }

    let size = (chart_cfg.width, chart_cfg.height);
    let is_svg = out_path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        let root = SVGBackend::new(out_path, size).into_drawing_area();
        draw_economy_chart(&root, series, chart_cfg)?;
        root.present()?;
    } else {
        let root = BitMapBackend::new(out_path, size).into_drawing_area();
        draw_economy_chart(&root, series, chart_cfg)?;
        root.present()?;
    }
    Ok(())
}

/// Draw the chart onto any plotters drawing area.
pub fn draw_economy_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &EconomySeries,
    chart_cfg: &ChartConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let values = series.values();
    let (x_lo, x_hi) = x_bounds(values);
    let (y_lo, y_hi) = y_bounds(series.y_range());
    debug!(x_lo, x_hi, y_lo, y_hi, n_series = series.len(), "chart bounds");

    let mut chart = ChartBuilder::on(root)
        .caption(&chart_cfg.title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d((x_lo..x_hi).log_scale(), (y_lo..y_hi).log_scale())?;

    chart
        .configure_mesh()
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .x_label_formatter(&|x| format!("{x:e}"))
        .y_label_formatter(&|y| format!("{y:.0}"))
        .draw()?;

    for (idx, (base, scan)) in series.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let points = values
            .iter()
            .copied()
            .zip(scan.iter().copied())
            .filter(|&(_, y)| y.is_finite() && y > 0.0);
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))?
            .label(format!("Base {base}"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    let ann = &chart_cfg.annotation;
    if !ann.text.trim().is_empty() {
        let anchor = area_pixel(chart.backend_coord(&(ann.x, ann.y)), root.get_base_pixel());
        if !(x_lo..=x_hi).contains(&ann.x) || !(y_lo..=y_hi).contains(&ann.y) {
            debug!(x = ann.x, y = ann.y, "annotation anchor outside plotted range");
        }
        draw_boxed_annotation(root, anchor, ann)?;
    }

    Ok(())
}

/// Multi-line label in a white, black-bordered box whose bottom-right corner sits on `anchor`.
fn draw_boxed_annotation<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    anchor: (i32, i32),
    ann: &AnnotationConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let style = ("sans-serif", ANNOTATION_FONT_PX).into_font().color(&BLACK);
    let lines: Vec<&str> = ann.text.lines().collect();

    let mut width = 0i32;
    let mut line_height = 0i32;
    for line in &lines {
        let (w, h) = root.estimate_text_size(line, &style)?;
        width = width.max(w as i32);
        line_height = line_height.max(h as i32);
    }
    line_height += ANNOTATION_LINE_GAP_PX;
    let height = line_height * lines.len() as i32;

    let (right, bottom) = anchor;
    let left = right - width - 2 * ANNOTATION_PAD_PX;
    let top = bottom - height - 2 * ANNOTATION_PAD_PX;

    root.draw(&Rectangle::new(
        [(left, top), (right, bottom)],
        WHITE.mix(0.8).filled(),
    ))?;
    root.draw(&Rectangle::new(
        [(left, top), (right, bottom)],
        BLACK.stroke_width(1),
    ))?;

    let mut y = top + ANNOTATION_PAD_PX;
    for line in lines {
        root.draw(&Text::new(
            line.to_string(),
            (left + ANNOTATION_PAD_PX, y),
            style.clone(),
        ))?;
        y += line_height;
    }
    Ok(())
}

/// Backend pixel → pixel relative to an area whose top-left sits at `base`.
fn area_pixel(backend: (i32, i32), base: (i32, i32)) -> (i32, i32) {
    (backend.0 - base.0, backend.1 - base.1)
}

/// Log-axis bounds over the value axis; a degenerate axis is widened one decade each way.
fn x_bounds(values: &[f64]) -> (f64, f64) {
    let lo = values.first().copied().unwrap_or(1.0);
    let hi = values.last().copied().unwrap_or(lo);
    if hi > lo { (lo, hi) } else { (lo / 10.0, lo * 10.0) }
}

fn y_bounds(range: Option<(f64, f64)>) -> (f64, f64) {
    match range {
        Some((lo, hi)) if lo > 0.0 && hi > lo => (lo * 0.8, hi * 1.25),
        Some((lo, _)) if lo > 0.0 => (lo / 2.0, lo * 2.0),
        _ => (1.0, 10.0),
    }
}
