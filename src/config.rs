//! Color related chart configuration.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use crate::assignment::ColorAssignment;
use crate::error::Result;
use crate::palettes::DEFAULT_COLOR_PALETTE;
use crate::palettes::ty::{ColorPalette, ColorPaletteItem};
use crate::parse_rgb;
use crate::strategy::{ChartData, ColorStrategy, color_strategy};

/// Type of chart.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChartType {
    Bar,
    Column,
    Line,
    Area,
    Pie,
    Donut,
    Funnel,
    Scatter,
    Bubble,
    Heatmap,
    Treemap,
    Combo,
    /// Any type unknown to this crate.
    Other(String),
}

impl ChartType {
    pub fn as_str(&self) -> &str {
        use ChartType::*;
        match self {
            Bar => "bar",
            Column => "column",
            Line => "line",
            Area => "area",
            Pie => "pie",
            Donut => "donut",
            Funnel => "funnel",
            Scatter => "scatter",
            Bubble => "bubble",
            Heatmap => "heatmap",
            Treemap => "treemap",
            Combo => "combo",
            Other(t) => t,
        }
    }
}

impl FromStr for ChartType {
    type Err = Infallible;

    /// Never fails: unknown names give [`ChartType::Other`].
    fn from_str(s: &str) -> std::result::Result<Self, Infallible> {
        use ChartType::*;
        Ok(match s.to_ascii_lowercase().as_str() {
            "bar" => Bar,
            "column" => Column,
            "line" => Line,
            "area" => Area,
            "pie" => Pie,
            "donut" => Donut,
            "funnel" => Funnel,
            "scatter" => Scatter,
            "bubble" => Bubble,
            "heatmap" => Heatmap,
            "treemap" => Treemap,
            "combo" => Combo,
            _ => Other(s.to_string()),
        })
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The color part of a chart configuration.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub chart_type: ChartType,
    pub color_palette: Option<ColorPalette>,
    /// Legacy list of `rgb(r,g,b)` colors, used when there is no
    /// `color_palette`.
    pub colors: Option<Vec<String>>,
    pub color_assignment: Vec<ColorAssignment>,
}

impl ChartConfig {
    pub fn new(chart_type: ChartType) -> Self {
        Self { chart_type, color_palette: None, colors: None,
               color_assignment: vec![] }
    }

    pub fn color_palette(mut self, palette: ColorPalette) -> Self {
        self.color_palette = Some(palette);
        self
    }

    pub fn colors<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>)
                                   -> Self {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    /// Add an override.  Earlier overrides take precedence.
    pub fn assign(mut self, assignment: ColorAssignment) -> Self {
        self.color_assignment.push(assignment);
        self
    }

    /// The palette colors are drawn from: `color_palette` if not
    /// empty, else the parsed `colors` (with guids "0", "1",...), else
    /// [`struct@DEFAULT_COLOR_PALETTE`].
    pub fn palette(&self) -> Result<ColorPalette> {
        if let Some(p) = self.color_palette.as_ref().filter(|p| !p.is_empty()) {
            return Ok(p.clone())
        }
        match self.colors.as_ref().filter(|c| !c.is_empty()) {
            Some(colors) => {
                debug!(n = colors.len(), "palette from legacy colors");
                colors.iter().enumerate()
                    .map(|(i, c)| -> Result<ColorPaletteItem> {
                        Ok(ColorPaletteItem::new(i.to_string(), parse_rgb(c)?))
                    })
                    .collect()
            }
            None => Ok(DEFAULT_COLOR_PALETTE.clone()),
        }
    }

    /// Assign the colors of `data` for this configuration.
    pub fn color_strategy(&self, data: &ChartData) -> Result<ColorStrategy> {
        color_strategy(&self.palette()?, &self.color_assignment, data,
                       &self.chart_type)
    }
}
