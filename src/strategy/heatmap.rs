//! Heatmap gradients.

use rgb::{RGB, RGB8};
use tracing::debug;
use crate::assignment::{ColorAssignment, ColorItem, MappingHeader, MeasureGroup,
                        resolve_override};
use crate::error::Result;
use crate::palettes::{HEATMAP_BLUE_COLOR_PALETTE, HEATMAP_STEPS, is_custom_palette};
use crate::palettes::ty::ColorPalette;
use crate::RGBColor;
use super::{Colored, colored};

const WHITE: RGB8 = RGB8 { r: 255, g: 255, b: 255 };

/// Return the 7 step gradient from white to `base`, both included.
///
/// The 5 intermediate colors split each channel into 6 equal steps,
/// truncating the result.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// let g = chart_colors::heatmap_gradient(RGB8::new(195, 49, 73));
/// assert_eq!(g[1], RGB8::new(245, 220, 224));
/// assert_eq!(g[6], RGB8::new(195, 49, 73));
/// ```
pub fn heatmap_gradient(base: RGB8) -> [RGB8; HEATMAP_STEPS] {
    let intervals = (HEATMAP_STEPS - 1) as f64;
    let RGB { r, g, b } = base.to_rgb();
    let step = |c: f64| (255. - c) / intervals;
    let (dr, dg, db) = (step(r), step(g), step(b));
    let at = |i: f64| RGB8::from_rgb(RGB { r: r + i * dr, g: g + i * dg,
                                           b: b + i * db });
    [WHITE, at(5.), at(4.), at(3.), at(2.), at(1.), base]
}

/// The gradient of the chart: based on the override of its first
/// measure, else on the first color of a custom palette, else the
/// default blue one.
pub(super) fn colors(palette: &ColorPalette, rules: &[ColorAssignment],
                     group: &MeasureGroup) -> Result<Vec<Colored>> {
    let overridden = group.items.first().and_then(|m| {
        resolve_override(&MappingHeader::Measure(m.clone()), rules)
    });
    let base = match overridden {
        Some(color) => {
            debug!(?color, "heatmap based on measure color override");
            Some(color.resolve(palette)?)
        }
        None if is_custom_palette(palette) => palette.first().map(|i| i.fill),
        None => None,
    };
    let gradient = match base {
        Some(base) => heatmap_gradient(base),
        None => HEATMAP_BLUE_COLOR_PALETTE,
    };
    Ok(gradient.into_iter().map(|c| colored(None, ColorItem::Rgb(c), c)).collect())
}

#[cfg(test)]
mod tests {
    use crate::{color_strategy, ChartData, ChartType, ColorPaletteItem, MeasureHeader,
                StrategyKind, measure_local_identifier_predicate, rgb_string,
                DEFAULT_COLOR_PALETTE};
    use super::*;

    fn heatmap_palette() -> ColorPalette {
        ColorPalette::new(vec![
            ColorPaletteItem::new("01", RGB8::new(195, 49, 73)),
            ColorPaletteItem::new("02", RGB8::new(168, 194, 86)),
            ColorPaletteItem::new("03", RGB8::new(243, 217, 177)),
        ])
    }

    fn data() -> ChartData {
        ChartData::new(MeasureGroup::new(vec![MeasureHeader::new("amountMeasure", "Amount")]))
    }

    fn gradient_of(palette: &ColorPalette, rules: &[ColorAssignment]) -> Vec<String> {
        let s = color_strategy(palette, rules, &data(), &ChartType::Heatmap).unwrap();
        assert_eq!(s.kind(), StrategyKind::Heatmap);
        (0 .. HEATMAP_STEPS).map(|i| s.color_by_index(i).unwrap().to_string()).collect()
    }

    #[test]
    fn default_blue_gradient() {
        let expected: Vec<_> = HEATMAP_BLUE_COLOR_PALETTE.into_iter()
            .map(rgb_string).collect();
        assert_eq!(gradient_of(&DEFAULT_COLOR_PALETTE, &[]), expected);
        assert_eq!(gradient_of(&ColorPalette::default(), &[]), expected);
    }

    #[test]
    fn first_custom_palette_color() {
        assert_eq!(gradient_of(&heatmap_palette(), &[]), [
            "rgb(255,255,255)", "rgb(245,220,224)", "rgb(235,186,194)",
            "rgb(225,152,164)", "rgb(215,117,133)", "rgb(205,83,103)",
            "rgb(195,49,73)"]);
    }

    #[test]
    fn measure_override() {
        let rules = vec![ColorAssignment::new(
            measure_local_identifier_predicate("amountMeasure"),
            ColorItem::Guid("02".into()))];
        assert_eq!(gradient_of(&heatmap_palette(), &rules), [
            "rgb(255,255,255)", "rgb(240,244,226)", "rgb(226,234,198)",
            "rgb(211,224,170)", "rgb(197,214,142)", "rgb(182,204,114)",
            "rgb(168,194,86)"]);
    }

    #[test]
    fn pure_red() {
        let g = heatmap_gradient(RGB8::new(255, 0, 0));
        assert_eq!(g, [RGB8::new(255, 255, 255), RGB8::new(255, 212, 212),
                       RGB8::new(255, 170, 170), RGB8::new(255, 127, 127),
                       RGB8::new(255, 85, 85), RGB8::new(255, 42, 42),
                       RGB8::new(255, 0, 0)]);
    }

    #[test]
    fn endpoints_exact() {
        for base in [RGB8::new(0, 0, 0), RGB8::new(1, 2, 3), RGB8::new(254, 128, 7),
                     RGB8::new(255, 255, 255)] {
            let g = heatmap_gradient(base);
            assert_eq!(g[0], WHITE);
            assert_eq!(g[HEATMAP_STEPS - 1], base);
        }
    }

    #[test]
    fn index_wraps() {
        let s = color_strategy(&heatmap_palette(), &[], &data(),
                               &ChartType::Heatmap).unwrap();
        assert_eq!(s.color_mapping().len(), HEATMAP_STEPS);
        for i in 0 .. 20 {
            assert_eq!(s.color_by_index(i + HEATMAP_STEPS), s.color_by_index(i));
        }
        assert!(s.color_mapping().iter().all(|i| i.header.is_none()));
    }
}
