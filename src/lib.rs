//! Color assignment for business-intelligence charts.
//!
//! Given a [`ColorPalette`], caller-supplied [`ColorAssignment`]
//! overrides and the shape of the chart data, a [`ColorStrategy`]
//! decides which color each series or category receives:
//!
//! - measures and attribute values rotate through the palette, unless
//!   an override matches them;
//! - derived measures (period over period, previous period) get a
//!   lighter shade of the measure they derive from;
//! - heatmaps get a 7 step gradient from white to a base color.
//!
//! ```
//! use chart_colors::{color_strategy, ChartData, ChartType, MeasureGroup,
//!                    MeasureHeader, DEFAULT_COLOR_PALETTE};
//! let data = ChartData::new(MeasureGroup::new(vec![
//!     MeasureHeader::new("amount", "Amount"),
//!     MeasureHeader::new("pop", "Amount - SP year ago").derived_from("amount"),
//! ]));
//! let strategy = color_strategy(&DEFAULT_COLOR_PALETTE, &[], &data,
//!                               &ChartType::Column).unwrap();
//! assert_eq!(strategy.color_by_index(0), Some("rgb(20,178,226)"));
//! assert_eq!(strategy.color_by_index(1), Some("rgb(161,224,243)"));
//! ```

use rgb::{RGB, RGB8};

mod error;
mod palettes;
mod assignment;
mod strategy;
mod config;
mod push_data;

pub use error::{Error, Result};
pub use palettes::ty::{ColorPalette, ColorPaletteItem};
pub use palettes::{DEFAULT_COLOR_PALETTE, HEATMAP_BLUE_COLOR_PALETTE,
                   HEATMAP_STEPS, is_custom_palette};
pub use assignment::{
    ColorItem, ColorAssignment, ColorAssignmentPredicate, MappingHeader,
    MeasureHeader, AttributeHeader, MeasureGroup, Attribute, resolve_override,
    attribute_item_name_predicate, attribute_item_uri_predicate,
    measure_local_identifier_predicate, predicate_from_references};
pub use strategy::{ColorStrategy, ColorMapItem, StrategyKind, ChartData,
                   color_strategy, select_strategy, heatmap_gradient};
pub use config::{ChartType, ChartConfig};
pub use push_data::PushData;

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green and blue components of the color (in
    /// \[0, 255\]).
    fn to_rgb(&self) -> RGB<f64>;

    /// Create a color from its RGB components (in \[0, 255\]).
    /// Fractional parts are truncated.
    fn from_rgb(rgb: RGB<f64>) -> Self;

    /// Blend the color toward white by `ratio` (`0.` leaves it
    /// unchanged, `1.` gives white).
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use chart_colors::RGBColor;
    /// let c = RGB8::new(50, 100, 150).lighten(0.6);
    /// assert_eq!(c, RGB8::new(173, 193, 213));
    /// ```
    fn lighten(&self, ratio: f64) -> Self {
        let RGB { r, g, b } = self.to_rgb();
        let l = |c: f64| c + (255. - c) * ratio;
        Self::from_rgb(RGB { r: l(r), g: l(g), b: l(b) })
    }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB { r: self.r as f64, g: self.g as f64, b: self.b as f64 }
    }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        RGB8 { r: c.r as u8,  g: c.g as u8,  b: c.b as u8 }
    }
}

/// Format the color as `rgb(r,g,b)`, the form charts consume.
pub fn rgb_string(c: RGB8) -> String {
    format!("rgb({},{},{})", c.r, c.g, c.b)
}

/// Parse colors such as `"rgb(67, 147, 195)"`.
pub fn parse_rgb(s: &str) -> Result<RGB8> {
    let invalid = || Error::InvalidColor(s.to_string());
    let t = s.trim();
    let inner = t.get(..4)
        .filter(|p| p.eq_ignore_ascii_case("rgb("))
        .and_then(|_| t[4..].strip_suffix(')'))
        .ok_or_else(invalid)?;
    let mut channels = [0u8; 3];
    let mut parts = inner.split(',');
    for c in &mut channels {
        let part = parts.next().ok_or_else(invalid)?;
        *c = part.trim().parse::<u8>().map_err(|_| invalid())?;
    }
    if parts.next().is_some() { return Err(invalid()) }
    let [r, g, b] = channels;
    Ok(RGB8 { r, g, b })
}
