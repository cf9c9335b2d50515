//! Stacked bar charts of the two aggregates, rendered to SVG

use crate::error::{Error, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use tracing::{debug, info};

const FONT: &str = "sans-serif";

/// One bar chart: a label and a count per bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarSeries {
    pub title: String,
    pub x_desc: Option<String>,
    pub y_desc: String,
    pub labels: Vec<String>,
    pub counts: Vec<usize>,
    /// Draw tick labels vertically; used when there are many long labels
    pub rotate_labels: bool,
}

impl BarSeries {
    pub fn new(title: impl Into<String>, labels: Vec<String>, counts: Vec<usize>) -> Self {
        Self {
            title: title.into(),
            x_desc: None,
            y_desc: "No of Recipes".to_string(),
            labels,
            counts,
            rotate_labels: false,
        }
    }

    pub fn x_desc(mut self, desc: impl Into<String>) -> Self {
        self.x_desc = Some(desc.into());
        self
    }

    pub fn rotate_labels(mut self, rotate: bool) -> Self {
        self.rotate_labels = rotate;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.labels.len() != self.counts.len() {
            return Err(Error::Chart(format!(
                "\"{}\" has {} labels but {} counts",
                self.title,
                self.labels.len(),
                self.counts.len()
            )));
        }
        Ok(())
    }
}

fn chart_error<E: std::fmt::Display>(e: E) -> Error {
    Error::Chart(e.to_string())
}

/// Render `upper` above `lower` into an SVG file at `path`.
pub fn render_bar_charts(
    path: &Path,
    size: (u32, u32),
    upper: &BarSeries,
    lower: &BarSeries,
) -> Result<()> {
    upper.validate()?;
    lower.validate()?;

    let root = SVGBackend::new(path, size).into_drawing_area();
    draw_stacked(&root, upper, lower)?;
    info!("Wrote chart to {}", path.display());
    Ok(())
}

/// Same as [`render_bar_charts`] but returns the SVG document.
pub fn render_bar_charts_to_string(
    size: (u32, u32),
    upper: &BarSeries,
    lower: &BarSeries,
) -> Result<String> {
    upper.validate()?;
    lower.validate()?;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw_stacked(&root, upper, lower)?;
    }
    Ok(svg)
}

fn draw_stacked<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    upper: &BarSeries,
    lower: &BarSeries,
) -> Result<()> {
    root.fill(&WHITE).map_err(chart_error)?;

    let panels = root.split_evenly((2, 1));
    draw_bar_chart(&panels[0], upper)?;
    draw_bar_chart(&panels[1], lower)?;

    root.present().map_err(chart_error)
}

fn draw_bar_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    series: &BarSeries,
) -> Result<()> {
    let bar_count = series.labels.len();
    let bars = bar_count.max(1);
    let y_max = series.counts.iter().copied().max().unwrap_or(0) + 1;
    debug!("Drawing \"{}\" with {} bars", series.title, bar_count);

    let x_label_area = if series.rotate_labels { 110 } else { 40 };
    let mut chart = ChartBuilder::on(area)
        .caption(&series.title, (FONT, 16))
        .margin(10)
        .x_label_area_size(x_label_area)
        .y_label_area_size(45)
        .build_cartesian_2d((0..bars).into_segmented(), 0..y_max)
        .map_err(chart_error)?;

    let labels = &series.labels;
    let label_for = |value: &SegmentValue<usize>| match value {
        SegmentValue::CenterOf(index) => labels.get(*index).cloned().unwrap_or_default(),
        _ => String::new(),
    };

    let mut mesh = chart.configure_mesh();
    mesh.disable_x_mesh()
        .x_labels(bars)
        .x_label_formatter(&label_for)
        .y_desc(series.y_desc.as_str())
        .axis_desc_style((FONT, 11));

    if let Some(x_desc) = &series.x_desc {
        mesh.x_desc(x_desc.as_str());
    }

    if series.rotate_labels {
        mesh.x_label_style((FONT, 9).into_font().transform(FontTransform::Rotate90));
    } else {
        mesh.x_label_style((FONT, 9));
    }

    mesh.draw().map_err(chart_error)?;

    let counts = &series.counts;
    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.mix(0.7).filled())
                .margin(2)
                .data(counts.iter().enumerate().map(|(i, count)| (i, *count))),
        )
        .map_err(chart_error)?;

    Ok(())
}
