use serde::Serialize;
use crate::palettes::ty::ColorPalette;
use crate::strategy::ColorMapItem;

/// Final color assignment reported back to the application, e.g. to
/// feed a color picker or to persist the user's choices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PushData {
    pub color_mapping: Vec<ColorMapItem>,
    pub color_palette: ColorPalette,
}
