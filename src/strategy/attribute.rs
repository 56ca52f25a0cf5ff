use crate::assignment::{Attribute, ColorAssignment, MappingHeader};
use crate::error::Result;
use crate::palettes::ty::ColorPalette;
use super::{Colored, colored, round_robin};

/// One color per value of `attribute`, in order.
pub(super) fn colors(palette: &ColorPalette, rules: &[ColorAssignment],
                     attribute: &Attribute) -> Result<Vec<Colored>> {
    let mut cursor = 0;
    attribute.items.iter().map(|item| -> Result<Colored> {
        let header = MappingHeader::Attribute(item.clone());
        let (color, rgb) = round_robin(&header, palette, rules, &mut cursor)?;
        Ok(colored(Some(header), color, rgb))
    }).collect()
}

#[cfg(test)]
mod tests {
    use rgb::RGB8;
    use crate::{color_strategy, ChartData, ChartType, ColorItem, ColorPaletteItem,
                MeasureGroup, MeasureHeader, StrategyKind,
                attribute_item_uri_predicate, DEFAULT_COLOR_PALETTE};
    use crate::strategy::tests::attribute;
    use super::*;

    fn rgb_palette() -> ColorPalette {
        ColorPalette::new(vec![
            ColorPaletteItem::new("red", RGB8::new(255, 0, 0)),
            ColorPaletteItem::new("green", RGB8::new(0, 255, 0)),
            ColorPaletteItem::new("blue", RGB8::new(0, 0, 255)),
        ])
    }

    fn bar_data(names: &[&str]) -> ChartData {
        ChartData::new(MeasureGroup::new(vec![MeasureHeader::new("m1", "Amount")]))
            .view_by(attribute(&["Q1", "Q2"]))
            .stack_by(attribute(names))
    }

    #[test]
    fn default_palette() {
        let s = color_strategy(&DEFAULT_COLOR_PALETTE, &[], &bar_data(&["East", "West"]),
                               &ChartType::Bar).unwrap();
        assert_eq!(s.kind(), StrategyKind::Attribute);
        assert_eq!(s.resolved_palette(), ["rgb(20,178,226)", "rgb(0,193,141)"]);
    }

    #[test]
    fn cycles_custom_palette() {
        let names = ["a", "b", "c", "d", "e", "f", "g"];
        let s = color_strategy(&rgb_palette(), &[], &bar_data(&names),
                               &ChartType::Bar).unwrap();
        let expected: Vec<_> = ["rgb(255,0,0)", "rgb(0,255,0)", "rgb(0,0,255)"]
            .into_iter().cycle().take(names.len()).collect();
        assert_eq!(s.resolved_palette(), expected);
    }

    #[test]
    fn overrides_applied() {
        // `attribute` gives value `i` the uri "/elements?id={i}".
        let rules = vec![
            ColorAssignment::new(attribute_item_uri_predicate("/elements?id=0"),
                                 ColorItem::Guid("blue".into())),
            ColorAssignment::new(attribute_item_uri_predicate("invalid"),
                                 ColorItem::Rgb(RGB8::new(9, 9, 9))),
            ColorAssignment::new(attribute_item_uri_predicate("/elements?id=1"),
                                 ColorItem::Rgb(RGB8::new(0, 0, 0))),
        ];
        let s = color_strategy(&rgb_palette(), &rules, &bar_data(&["East", "West", "North"]),
                               &ChartType::Bar).unwrap();
        // overridden values leave the palette cursor at "red"
        assert_eq!(s.resolved_palette(), ["rgb(0,0,255)", "rgb(0,0,0)", "rgb(255,0,0)"]);
    }
}
