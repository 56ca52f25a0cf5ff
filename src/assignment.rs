//! Headers of the data items being colored and the caller-supplied
//! rules that override their color.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use rgb::RGB8;
use serde::Serialize;
use crate::error::Result;
use crate::palettes::ty::ColorPalette;

/// A color, either by reference into a palette or as a literal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ColorItem {
    Guid(String),
    Rgb(RGB8),
}

impl ColorItem {
    /// Returns the RGB value of the color, looking guids up in `palette`.
    pub fn resolve(&self, palette: &ColorPalette) -> Result<RGB8> {
        match self {
            ColorItem::Guid(guid) => Ok(palette.find(guid)?.fill),
            ColorItem::Rgb(c) => Ok(*c),
        }
    }
}

/// Header of a measure in the measure group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureHeader {
    pub local_identifier: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Local identifier of the measure this one is derived from
    /// (period over period, previous period).
    #[serde(skip)]
    pub master: Option<String>,
}

impl MeasureHeader {
    pub fn new(local_identifier: impl Into<String>,
               name: impl Into<String>) -> Self {
        Self { local_identifier: local_identifier.into(), name: name.into(),
               ..Self::default() }
    }

    /// Marks the measure as derived from `master`.
    pub fn derived_from(mut self, master: impl Into<String>) -> Self {
        self.master = Some(master.into());
        self
    }

    pub fn is_derived(&self) -> bool { self.master.is_some() }
}

/// One value of an attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AttributeHeader {
    pub name: String,
    pub uri: String,
}

impl AttributeHeader {
    pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self { name: name.into(), uri: uri.into() }
    }
}

/// The data item a color is assigned to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum MappingHeader {
    #[serde(rename = "measureHeaderItem")]
    Measure(MeasureHeader),
    #[serde(rename = "attributeHeaderItem")]
    Attribute(AttributeHeader),
}

/// Ordered measures of a chart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeasureGroup {
    pub items: Vec<MeasureHeader>,
}

impl MeasureGroup {
    pub fn new(items: Vec<MeasureHeader>) -> Self { Self { items } }

    pub fn is_derived(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(MeasureHeader::is_derived)
    }

    /// Index of the measure the measure at `index` is derived from.
    pub fn parent_index(&self, index: usize) -> Option<usize> {
        let master = self.items.get(index)?.master.as_deref()?;
        self.items.iter().position(|m| m.local_identifier == master)
    }
}

/// A view-by or stack-by attribute with its distinct values in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub items: Vec<AttributeHeader>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, items: Vec<AttributeHeader>) -> Self {
        Self { name: name.into(), items }
    }
}

/// Predicate selecting the headers an override applies to.
pub type ColorAssignmentPredicate =
    Arc<dyn Fn(&MappingHeader) -> bool + Send + Sync>;

/// Forces `color` for every header matched by `predicate`.
#[derive(Clone)]
pub struct ColorAssignment {
    pub predicate: ColorAssignmentPredicate,
    pub color: ColorItem,
}

impl ColorAssignment {
    pub fn new<P>(predicate: P, color: ColorItem) -> Self
    where P: Fn(&MappingHeader) -> bool + Send + Sync + 'static {
        Self { predicate: Arc::new(predicate), color }
    }
}

impl fmt::Debug for ColorAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorAssignment")
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

/// Returns the color of the first rule matching `header`.
pub fn resolve_override<'a>(header: &MappingHeader,
                            rules: &'a [ColorAssignment]) -> Option<&'a ColorItem> {
    rules.iter().find(|rule| (rule.predicate)(header)).map(|rule| &rule.color)
}

/// Matches attribute values by name.
pub fn attribute_item_name_predicate(name: &str)
                                     -> impl Fn(&MappingHeader) -> bool {
    let name = name.to_string();
    move |header| matches!(header, MappingHeader::Attribute(a) if a.name == name)
}

/// Matches attribute values by uri.
pub fn attribute_item_uri_predicate(uri: &str)
                                    -> impl Fn(&MappingHeader) -> bool {
    let uri = uri.to_string();
    move |header| matches!(header, MappingHeader::Attribute(a) if a.uri == uri)
}

/// Matches measures by local identifier.
pub fn measure_local_identifier_predicate(local_identifier: &str)
                                          -> impl Fn(&MappingHeader) -> bool {
    let id = local_identifier.to_string();
    move |header| matches!(header, MappingHeader::Measure(m)
                           if m.local_identifier == id)
}

/// Matches attribute values whose uri is the one `references` maps `id`
/// to.  Never matches when `id` has no reference.
pub fn predicate_from_references(id: &str,
                                 references: HashMap<String, String>)
                                 -> impl Fn(&MappingHeader) -> bool {
    let id = id.to_string();
    move |header| {
        let Some(uri) = references.get(&id) else { return false };
        matches!(header, MappingHeader::Attribute(a) if &a.uri == uri)
    }
}
