//! Strategies deciding the color of every series of a chart.

use rgb::RGB8;
use serde::Serialize;
use tracing::debug;
use crate::assignment::{Attribute, ColorAssignment, ColorItem, MappingHeader,
                        MeasureGroup, resolve_override};
use crate::config::ChartType;
use crate::error::Result;
use crate::palettes::ty::ColorPalette;
use crate::push_data::PushData;
use crate::rgb_string;

mod attribute;
mod heatmap;
mod measure;

pub use heatmap::heatmap_gradient;

/// The color assigned to one series or category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ColorMapItem {
    /// `None` for the steps of a heatmap gradient.
    #[serde(rename = "headerItem", skip_serializing_if = "Option::is_none")]
    pub header: Option<MappingHeader>,
    pub color: ColorItem,
}

/// A mapping entry together with its resolved RGB value.
type Colored = (ColorMapItem, RGB8);

fn colored(header: Option<MappingHeader>, color: ColorItem, rgb: RGB8) -> Colored {
    (ColorMapItem { header, color }, rgb)
}

/// The color of `header`: the first matching override, or else the
/// palette color at `cursor`.  Only the latter advances `cursor`.
fn round_robin(header: &MappingHeader, palette: &ColorPalette,
               rules: &[ColorAssignment], cursor: &mut usize)
               -> Result<(ColorItem, RGB8)> {
    if let Some(color) = resolve_override(header, rules) {
        return Ok((color.clone(), color.resolve(palette)?))
    }
    let item = palette.cycle(*cursor);
    *cursor += 1;
    Ok((ColorItem::Guid(item.guid.clone()), item.fill))
}

/// The way colors are assigned for a chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyKind {
    /// One color per measure, derived measures lighter than their master.
    Measure,
    /// One color per value of the stack-by (or else view-by) attribute.
    Attribute,
    /// A 7 step gradient.
    Heatmap,
    /// [`Attribute`](StrategyKind::Attribute) over the view-by
    /// attribute if any, [`Measure`](StrategyKind::Measure) otherwise.
    Treemap,
    /// The color of the first measure, once per view-by value.
    ScatterPlot,
}

const ATTRIBUTE_CHART_SUPPORTED_TYPES: [ChartType; 5] = [
    ChartType::Pie, ChartType::Donut, ChartType::Funnel,
    ChartType::Scatter, ChartType::Bubble];

/// Choose the strategy for a chart of type `chart_type`.
///
/// Unknown chart types use [`StrategyKind::Measure`].
pub fn select_strategy(chart_type: &ChartType, has_attributes: bool,
                       has_stack_by_attribute: bool) -> StrategyKind {
    match chart_type {
        ChartType::Heatmap => StrategyKind::Heatmap,
        ChartType::Treemap => StrategyKind::Treemap,
        ChartType::Scatter => StrategyKind::ScatterPlot,
        t if has_stack_by_attribute
            || (ATTRIBUTE_CHART_SUPPORTED_TYPES.contains(t) && has_attributes)
            => StrategyKind::Attribute,
        _ => StrategyKind::Measure,
    }
}

/// The data a chart colors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartData {
    pub measure_group: MeasureGroup,
    pub view_by_attribute: Option<Attribute>,
    pub stack_by_attribute: Option<Attribute>,
}

impl ChartData {
    pub fn new(measure_group: MeasureGroup) -> Self {
        Self { measure_group, ..Self::default() }
    }

    pub fn view_by(mut self, attribute: Attribute) -> Self {
        self.view_by_attribute = Some(attribute);
        self
    }

    pub fn stack_by(mut self, attribute: Attribute) -> Self {
        self.stack_by_attribute = Some(attribute);
        self
    }

    pub fn has_attributes(&self) -> bool {
        self.view_by_attribute.is_some() || self.stack_by_attribute.is_some()
    }
}

/// Colors of a chart, resolved once at construction.
///
/// Index `i` of [`resolved_palette`](Self::resolved_palette) is the
/// color of entry `i` of [`color_mapping`](Self::color_mapping).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorStrategy {
    kind: StrategyKind,
    mapping: Vec<ColorMapItem>,
    palette: Vec<String>,
}

impl ColorStrategy {
    /// Assign colors to `data` following `kind`.
    ///
    /// Fails with [`Error::PaletteItemNotFound`](crate::Error) when an
    /// override refers to a guid absent from `palette`.
    ///
    /// # Panics
    ///
    /// Panics if `palette` is empty and some item needs a palette color.
    pub fn new(kind: StrategyKind, palette: &ColorPalette,
               rules: &[ColorAssignment], data: &ChartData) -> Result<Self> {
        let group = &data.measure_group;
        let colors = match kind {
            StrategyKind::Measure => measure::colors(palette, rules, group)?,
            StrategyKind::Attribute => {
                let colored_by = data.stack_by_attribute.as_ref()
                    .or(data.view_by_attribute.as_ref());
                match colored_by {
                    Some(a) => attribute::colors(palette, rules, a)?,
                    None => vec![],
                }
            }
            StrategyKind::Heatmap => heatmap::colors(palette, rules, group)?,
            StrategyKind::Treemap => match &data.view_by_attribute {
                Some(a) => attribute::colors(palette, rules, a)?,
                None => measure::colors(palette, rules, group)?,
            },
            StrategyKind::ScatterPlot => scatter_colors(palette, rules, data)?,
        };
        let (mapping, resolved) = colors.into_iter()
            .map(|(item, rgb)| (item, rgb_string(rgb)))
            .unzip();
        Ok(ColorStrategy { kind, mapping, palette: resolved })
    }

    pub fn kind(&self) -> StrategyKind { self.kind }

    /// Returns the color of the series at `index`.  Heatmap strategies
    /// cycle through their gradient; others return `None` past the end.
    pub fn color_by_index(&self, index: usize) -> Option<&str> {
        let index = match self.kind {
            StrategyKind::Heatmap if !self.palette.is_empty() =>
                index % self.palette.len(),
            _ => index,
        };
        self.palette.get(index).map(String::as_str)
    }

    pub fn color_mapping(&self) -> &[ColorMapItem] { &self.mapping }

    /// The `rgb(r,g,b)` strings, in series order.
    pub fn resolved_palette(&self) -> &[String] { &self.palette }

    /// The payload reported back to the application.
    pub fn push_data(&self, palette: &ColorPalette) -> PushData {
        PushData { color_mapping: self.mapping.clone(),
                   color_palette: palette.clone() }
    }
}

fn scatter_colors(palette: &ColorPalette, rules: &[ColorAssignment],
                  data: &ChartData) -> Result<Vec<Colored>> {
    let measure = data.measure_group.items.first()
        .map(|m| MappingHeader::Measure(m.clone()));
    let color = match measure.as_ref().and_then(|h| resolve_override(h, rules)) {
        Some(color) => color.clone(),
        None => ColorItem::Guid(palette.cycle(0).guid.clone()),
    };
    let rgb = color.resolve(palette)?;
    let headers: Vec<Option<MappingHeader>> = match &data.view_by_attribute {
        Some(a) => a.items.iter()
            .map(|i| Some(MappingHeader::Attribute(i.clone())))
            .collect(),
        None => vec![measure],
    };
    Ok(headers.into_iter().map(|h| colored(h, color.clone(), rgb)).collect())
}

/// Select the strategy for `chart_type` and assign the colors of `data`.
pub fn color_strategy(palette: &ColorPalette, rules: &[ColorAssignment],
                      data: &ChartData, chart_type: &ChartType)
                      -> Result<ColorStrategy> {
    let kind = select_strategy(chart_type, data.has_attributes(),
                               data.stack_by_attribute.is_some());
    debug!(?chart_type, ?kind, "selected color strategy");
    ColorStrategy::new(kind, palette, rules, data)
}
