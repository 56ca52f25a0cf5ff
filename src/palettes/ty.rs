use rgb::RGB8;
use serde::Serialize;
use crate::error::{Error, Result};

/// A named base color available for automatic assignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ColorPaletteItem {
    pub guid: String,
    pub fill: RGB8,
}

impl ColorPaletteItem {
    pub fn new(guid: impl Into<String>, fill: RGB8) -> Self {
        Self { guid: guid.into(), fill }
    }
}

/// An ordered set of base colors.
///
/// Guids are expected to be unique; lookups return the first match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorPalette {
    items: Vec<ColorPaletteItem>,
}

impl ColorPalette {
    pub fn new(items: Vec<ColorPaletteItem>) -> Self { Self { items } }

    /// Returns the number of colors in the palette.
    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn items(&self) -> &[ColorPaletteItem] { &self.items }

    pub fn first(&self) -> Option<&ColorPaletteItem> { self.items.first() }

    /// Returns the item with the given `guid`.
    pub fn find(&self, guid: &str) -> Result<&ColorPaletteItem> {
        self.items.iter().find(|i| i.guid == guid)
            .ok_or_else(|| Error::PaletteItemNotFound(guid.to_string()))
    }

    /// Returns the item at `cursor`, wrapping around the palette.
    ///
    /// # Panics
    ///
    /// Panics if the palette is empty.
    pub fn cycle(&self, cursor: usize) -> &ColorPaletteItem {
        &self.items[cursor % self.items.len()]
    }
}

impl From<Vec<ColorPaletteItem>> for ColorPalette {
    fn from(items: Vec<ColorPaletteItem>) -> Self { Self::new(items) }
}

impl FromIterator<ColorPaletteItem> for ColorPalette {
    fn from_iter<I: IntoIterator<Item = ColorPaletteItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
