//! Built-in palettes.

use lazy_static::lazy_static;
use rgb::RGB8;
pub(crate) mod ty;
use ty::*;

fn item(guid: &str, r: u8, g: u8, b: u8) -> ColorPaletteItem {
    ColorPaletteItem::new(guid, RGB8 { r, g, b })
}

lazy_static! {
  /// Palette used when the chart configuration provides none.
  pub static ref DEFAULT_COLOR_PALETTE: ColorPalette = {
    ColorPalette::new(vec![
      item("1", 20, 178, 226),
      item("2", 0, 193, 141),
      item("3", 229, 77, 66),
      item("4", 241, 134, 0),
      item("5", 171, 85, 163),
      item("6", 244, 213, 33),
      item("7", 148, 161, 174),
      item("8", 107, 191, 216),
      item("9", 181, 136, 177),
      item("10", 238, 135, 128),
      item("11", 241, 171, 84),
      item("12", 133, 209, 188),
      item("13", 41, 117, 170),
      item("14", 4, 140, 103),
      item("15", 181, 60, 51),
      item("16", 163, 101, 46),
      item("17", 140, 57, 132),
      item("18", 136, 219, 244),
      item("19", 189, 234, 222),
      item("20", 239, 197, 194),
    ])
  };

  /// Placeholder for derived measures until their parent is known.
  pub(crate) static ref EMPTY_COLOR_PALETTE_ITEM: ColorPaletteItem =
    item("none", 0, 0, 0);
}

/// Number of steps of a heatmap gradient.
pub const HEATMAP_STEPS: usize = 7;

/// Heatmap gradient used when neither an override nor a custom palette
/// provides a base color.
pub const HEATMAP_BLUE_COLOR_PALETTE: [RGB8; HEATMAP_STEPS] = [
    RGB8 { r: 255, g: 255, b: 255 },
    RGB8 { r: 197, g: 236, b: 248 },
    RGB8 { r: 138, g: 217, b: 241 },
    RGB8 { r: 79, g: 198, b: 234 },
    RGB8 { r: 20, g: 178, b: 226 },
    RGB8 { r: 22, g: 151, b: 192 },
    RGB8 { r: 0, g: 110, b: 145 },
];

/// Whether `palette` differs from [`struct@DEFAULT_COLOR_PALETTE`].
pub fn is_custom_palette(palette: &ColorPalette) -> bool {
    *palette != *DEFAULT_COLOR_PALETTE
}
