//! Hourly order chart: SVG via plotters, or a character grid for the terminal.

use std::fmt;
use std::path::Path;

use plotters::prelude::*;

use secflow::{OrderFlow, Security, hour_labels};

use crate::config::ChartConfig;
use crate::error::{Error, Result};

/// Markers used by the terminal rendering, one per series.
const MARKERS: [char; 6] = ['o', 'x', '+', '*', '#', '@'];

/// Rows in the terminal plot area.
const TEXT_ROWS: usize = 12;

/// Columns per hour in the terminal plot area.
const TEXT_COL_WIDTH: usize = 7;

/// One line per security over shared hour labels.
#[derive(Debug, Clone)]
pub struct HourlyChart {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub size: (u32, u32),
    pub labels: Vec<String>,
    pub series: Vec<(Security, Vec<u32>)>,
}

impl HourlyChart {
    /// Chart of every hourly profile in `flow`.
    pub fn from_flow(flow: &OrderFlow, config: &ChartConfig) -> Self {
        let series: Vec<(Security, Vec<u32>)> = flow
            .hourly_profiles()
            .into_iter()
            .map(|(sec, profile)| (sec, profile.to_vec()))
            .collect();
        Self {
            title: config.title.clone(),
            x_desc: config.x_desc.clone(),
            y_desc: config.y_desc.clone(),
            size: (config.width, config.height),
            labels: hour_labels(config.first_hour, secflow::HOURLY_BUCKETS),
            series,
        }
    }

    fn check(&self) -> Result<()> {
        if self.labels.is_empty() {
            return Err(Error::Chart("no hour labels".into()));
        }
        if self.series.is_empty() {
            return Err(Error::Chart("no series to plot".into()));
        }
        if let Some((sec, _)) = self
            .series
            .iter()
            .find(|(_, values)| values.len() != self.labels.len())
        {
            return Err(Error::Chart(format!(
                "{sec} has a different number of points than hour labels"
            )));
        }
        Ok(())
    }

    /// Largest plotted value.
    fn y_max(&self) -> u64 {
        self.series
            .iter()
            .flat_map(|(_, v)| v.iter().copied())
            .max()
            .map_or(0, u64::from)
    }

    /// Render as an SVG document.
    pub fn render_svg(&self) -> Result<String> {
        self.check()?;
        let render_err = |e: &dyn std::fmt::Display| Error::Chart(e.to_string());

        let x_max = (self.labels.len() - 1) as i32;
        // 10% headroom above the tallest point
        let y_top = (self.y_max() * 11).div_ceil(10) + 1;

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.size).into_drawing_area();
            root.fill(&WHITE).map_err(|e| render_err(&e))?;

            let mut chart = ChartBuilder::on(&root)
                .caption(&self.title, ("sans-serif", 22))
                .margin(15)
                .x_label_area_size(70)
                .y_label_area_size(60)
                .build_cartesian_2d(0i32..x_max, 0u64..y_top)
                .map_err(|e| render_err(&e))?;

            let label_style =
                TextStyle::from(("sans-serif", 13).into_font()).transform(FontTransform::Rotate90);
            chart
                .configure_mesh()
                .x_labels(self.labels.len())
                .x_label_formatter(&|x| {
                    usize::try_from(*x)
                        .ok()
                        .and_then(|i| self.labels.get(i))
                        .cloned()
                        .unwrap_or_default()
                })
                .x_label_style(label_style)
                .x_desc(self.x_desc.as_str())
                .y_desc(self.y_desc.as_str())
                .draw()
                .map_err(|e| render_err(&e))?;

            for (idx, (security, values)) in self.series.iter().enumerate() {
                let color = Palette99::pick(idx).to_rgba();
                chart
                    .draw_series(
                        LineSeries::new(
                            values
                                .iter()
                                .enumerate()
                                .map(|(i, v)| (i as i32, u64::from(*v))),
                            color.stroke_width(2),
                        )
                        .point_size(4),
                    )
                    .map_err(|e| render_err(&e))?
                    .label(security.ticker())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                    });
            }

            chart
                .configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(|e| render_err(&e))?;

            root.present().map_err(|e| render_err(&e))?;
        }
        Ok(svg)
    }

    /// Render as SVG and write it to `path`.
    pub fn save_svg(&self, path: &Path) -> Result<()> {
        let svg = self.render_svg()?;
        std::fs::write(path, svg).map_err(|e| Error::ChartWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Render as a character grid for the terminal.
    ///
    /// Each series is drawn with its own marker; later series overwrite
    /// earlier ones where points coincide.
    pub fn render_text(&self) -> Result<String> {
        self.check()?;
        let mut out = String::new();
        self.write_text(&mut out)
            .map_err(|_| Error::Chart("failed to format text chart".into()))?;
        Ok(out)
    }

    fn write_text(&self, out: &mut impl fmt::Write) -> fmt::Result {
        let y_max = self.y_max().max(1);
        let cols = self.labels.len() * TEXT_COL_WIDTH;
        let mut grid = vec![vec![' '; cols]; TEXT_ROWS];

        for (idx, (_, values)) in self.series.iter().enumerate() {
            let marker = MARKERS[idx % MARKERS.len()];
            for (i, v) in values.iter().enumerate() {
                let level = (*v as f64 / y_max as f64 * (TEXT_ROWS - 1) as f64).round() as usize;
                let row = TEXT_ROWS - 1 - level.min(TEXT_ROWS - 1);
                grid[row][i * TEXT_COL_WIDTH + TEXT_COL_WIDTH / 2] = marker;
            }
        }

        writeln!(out, "{}", self.title)?;
        writeln!(out, "{}", self.y_desc)?;
        for (r, row) in grid.iter().enumerate() {
            let value = y_max as f64 * (TEXT_ROWS - 1 - r) as f64 / (TEXT_ROWS - 1) as f64;
            let line: String = row.iter().collect();
            writeln!(out, "{value:>6.0} |{}", line.trim_end())?;
        }
        writeln!(out, "{:>6} +{}", "", "-".repeat(cols))?;
        let axis: String = self
            .labels
            .iter()
            .map(|l| format!("{l:^width$}", width = TEXT_COL_WIDTH))
            .collect();
        writeln!(out, "{:>6}  {}", "", axis.trim_end())?;
        writeln!(out, "{:>6}  {:^width$}", "", self.x_desc, width = cols)?;
        let legend: Vec<String> = self
            .series
            .iter()
            .enumerate()
            .map(|(idx, (sec, _))| format!("{} {}", MARKERS[idx % MARKERS.len()], sec))
            .collect();
        writeln!(out, "Legend: {}", legend.join("  "))
    }
}
