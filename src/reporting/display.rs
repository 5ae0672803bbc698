use std::path::{Path, PathBuf};

use log::info;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::evaluation::ConfusionMatrix;

/// Where a confusion matrix is shown after scoring.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DisplayMode {
    /// Nothing is rendered.
    Hidden,
    /// A text table on stdout.
    #[default]
    Terminal,
    /// A heat map written as an SVG image.
    Svg { path: PathBuf },
}

/// Heat map settings for the SVG rendering.
#[derive(Debug, Clone)]
pub struct PlotSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub low_color: (u8, u8, u8),
    pub high_color: (u8, u8, u8),
}

impl Default for PlotSettings {
    fn default() -> Self {
        PlotSettings {
            title: "Confusion matrix".to_string(),
            width: 480,
            height: 440,
            low_color: (247, 251, 255),
            high_color: (8, 48, 107),
        }
    }
}

fn class_tick(v: &f64) -> String {
    if (v - v.round()).abs() < 1e-9 && (0.0..=1.0).contains(&v.round()) {
        format!("{}", v.round() as i64)
    } else {
        String::new()
    }
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

pub struct ConfusionMatrixDisplay {
    matrix: ConfusionMatrix,
    settings: PlotSettings,
}

impl ConfusionMatrixDisplay {
    pub fn new(matrix: ConfusionMatrix) -> Self {
        Self {
            matrix,
            settings: PlotSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: PlotSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn show(&self, mode: &DisplayMode) -> Result<()> {
        match mode {
            DisplayMode::Hidden => Ok(()),
            DisplayMode::Terminal => {
                println!("{}", self.render_text());
                Ok(())
            }
            DisplayMode::Svg { path } => self.save_svg(path),
        }
    }

    /// Actual class by row, predicted class by column.
    pub fn render_text(&self) -> String {
        let rows = self.matrix.as_rows();
        let width = rows
            .iter()
            .flatten()
            .map(|c| c.to_string().len())
            .max()
            .unwrap_or(1)
            .max("predicted".len() / 2);

        let mut out = String::from("Confusion matrix (rows: true label, columns: predicted label)\n");
        out.push_str(&format!("{:>6} {:>w$} {:>w$}\n", "", 0, 1, w = width));
        for (label, row) in rows.iter().enumerate() {
            out.push_str(&format!("{:>6} {:>w$} {:>w$}\n", label, row[0], row[1], w = width));
        }
        out.pop();
        out
    }

    pub fn save_svg(&self, path: &Path) -> Result<()> {
        let s = &self.settings;
        let root = SVGBackend::new(path, (s.width, s.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&s.title, ("sans-serif", 24).into_font())
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5f64..1.5f64, -0.5f64..1.5f64)?;

        // Row 0 of the matrix is drawn on top, so y runs opposite to the class.
        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(5)
            .y_labels(5)
            .x_label_formatter(&class_tick)
            .y_label_formatter(&|v| class_tick(&(1.0 - v)))
            .x_desc("Predicted label")
            .y_desc("True label")
            .draw()?;

        let rows = self.matrix.as_rows();
        let max = rows.iter().flatten().copied().max().unwrap_or(0).max(1) as f64;
        let cells: Vec<(f64, f64, u64)> = (0..2)
            .flat_map(|actual| (0..2).map(move |predicted| (actual, predicted)))
            .map(|(actual, predicted)| {
                (predicted as f64, 1.0 - actual as f64, rows[actual][predicted])
            })
            .collect();

        let (lo, hi) = (s.low_color, s.high_color);
        chart.draw_series(cells.iter().map(|&(x, y, count)| {
            let t = count as f64 / max;
            let color = RGBColor(lerp(lo.0, hi.0, t), lerp(lo.1, hi.1, t), lerp(lo.2, hi.2, t));
            Rectangle::new([(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)], color.filled())
        }))?;

        chart.draw_series(cells.iter().map(|&(x, y, count)| {
            let ink = if count as f64 / max > 0.5 { WHITE } else { BLACK };
            let style = ("sans-serif", 28)
                .into_font()
                .color(&ink)
                .pos(Pos::new(HPos::Center, VPos::Center));
            Text::new(count.to_string(), (x, y), style)
        }))?;

        root.present()?;
        info!("Confusion matrix written to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn matrix() -> ConfusionMatrix {
        ConfusionMatrix { tn: 12, fp: 3, fn_: 1, tp: 140 }
    }

    #[test]
    fn text_table_has_counts_in_place() {
        let text = ConfusionMatrixDisplay::new(matrix()).render_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        let row0: Vec<&str> = lines[2].split_whitespace().collect();
        let row1: Vec<&str> = lines[3].split_whitespace().collect();
        assert_eq!(row0, vec!["0", "12", "3"]);
        assert_eq!(row1, vec!["1", "1", "140"]);
    }

    #[test]
    fn svg_is_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cm.svg");
        ConfusionMatrixDisplay::new(matrix())
            .show(&DisplayMode::Svg { path: path.clone() })
            .unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("140"));
    }

    #[test]
    fn hidden_renders_nothing() {
        assert!(ConfusionMatrixDisplay::new(matrix()).show(&DisplayMode::Hidden).is_ok());
    }

    #[test]
    fn display_mode_config_shape() {
        let mode: DisplayMode = serde_json::from_str(r#"{"mode": "svg", "path": "cm.svg"}"#).unwrap();
        assert_eq!(mode, DisplayMode::Svg { path: PathBuf::from("cm.svg") });
        let hidden: DisplayMode = serde_json::from_str(r#"{"mode": "hidden"}"#).unwrap();
        assert_eq!(hidden, DisplayMode::Hidden);
        assert_eq!(DisplayMode::default(), DisplayMode::Terminal);
    }

    #[test]
    fn ticks_only_at_classes() {
        assert_eq!(class_tick(&0.0), "0");
        assert_eq!(class_tick(&1.0), "1");
        assert_eq!(class_tick(&0.5), "");
        assert_eq!(class_tick(&-0.5), "");
    }
}
