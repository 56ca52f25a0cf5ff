//! One color per measure.

use tracing::warn;
use crate::assignment::{ColorAssignment, ColorItem, MappingHeader, MeasureGroup,
                        resolve_override};
use crate::error::Result;
use crate::palettes::EMPTY_COLOR_PALETTE_ITEM;
use crate::palettes::ty::ColorPalette;
use crate::RGBColor;
use super::{Colored, colored, round_robin};

/// How much lighter than its master a derived measure is.
const DERIVED_MEASURE_LIGHTEN_RATIO: f64 = 0.6;

/// Base measures rotate through `palette` unless overridden.  Derived
/// measures get their own override or else a lighter shade of their
/// master's color.
pub(super) fn colors(palette: &ColorPalette, rules: &[ColorAssignment],
                     group: &MeasureGroup) -> Result<Vec<Colored>> {
    let placeholder = || (ColorItem::Guid(EMPTY_COLOR_PALETTE_ITEM.guid.clone()),
                          EMPTY_COLOR_PALETTE_ITEM.fill);
    let mut cursor = 0;
    let base = group.items.iter().map(|m| -> Result<_> {
        let header = MappingHeader::Measure(m.clone());
        let color = if m.is_derived() { placeholder() }
                    else { round_robin(&header, palette, rules, &mut cursor)? };
        Ok((header, color))
    }).collect::<Result<Vec<_>>>()?;

    base.iter().enumerate().map(|(i, (header, (color, rgb)))| -> Result<Colored> {
        if !group.is_derived(i) {
            return Ok(colored(Some(header.clone()), color.clone(), *rgb))
        }
        if let Some(color) = resolve_override(header, rules) {
            return Ok(colored(Some(header.clone()), color.clone(),
                              color.resolve(palette)?))
        }
        match group.parent_index(i) {
            Some(parent) => {
                let (_, (_, parent_rgb)) = &base[parent];
                let rgb = parent_rgb.lighten(DERIVED_MEASURE_LIGHTEN_RATIO);
                Ok(colored(Some(header.clone()), ColorItem::Rgb(rgb), rgb))
            }
            None => {
                warn!(measure = ?group.items[i].local_identifier,
                      "derived measure without master, keeping placeholder color");
                Ok(colored(Some(header.clone()), color.clone(), *rgb))
            }
        }
    }).collect()
}

#[cfg(test)]
mod tests {
    use rgb::RGB8;
    use crate::{color_strategy, rgb_string, ChartData, ChartType, MeasureHeader,
                StrategyKind, measure_local_identifier_predicate};
    use crate::strategy::tests::custom_palette;
    use crate::palettes::DEFAULT_COLOR_PALETTE;
    use super::*;

    /// Six measures, each preceded by its period over period variant.
    fn pop_measures() -> MeasureGroup {
        MeasureGroup::new((0 .. 6).flat_map(|i| {
            let master = format!("amountMeasure_{i}");
            [MeasureHeader::new(format!("amountPopMeasure_{i}"), "Amount - SP year ago")
                 .derived_from(master.as_str()),
             MeasureHeader::new(master, "Amount")]
        }).collect())
    }

    fn run(group: MeasureGroup, rules: &[ColorAssignment]) -> Vec<String> {
        let s = color_strategy(&custom_palette(), rules, &ChartData::new(group),
                               &ChartType::Column).unwrap();
        assert_eq!(s.kind(), StrategyKind::Measure);
        s.resolved_palette().to_vec()
    }

    fn guid_rule(id: &str, guid: &str) -> ColorAssignment {
        ColorAssignment::new(measure_local_identifier_predicate(id),
                             ColorItem::Guid(guid.into()))
    }

    #[test]
    fn round_robin_without_derived_measures() {
        let group = MeasureGroup::new((0 .. 23)
            .map(|i| MeasureHeader::new(format!("m{i}"), format!("M{i}")))
            .collect());
        let s = color_strategy(&DEFAULT_COLOR_PALETTE, &[], &ChartData::new(group),
                               &ChartType::Bar).unwrap();
        let expected: Vec<_> = DEFAULT_COLOR_PALETTE.items().iter().cycle()
            .take(23).map(|i| rgb_string(i.fill)).collect();
        assert_eq!(s.resolved_palette(), expected);
    }

    #[test]
    fn derived_measure_lighter_than_master() {
        let group = MeasureGroup::new(vec![
            MeasureHeader::new("pop", "Amount - SP year ago").derived_from("amount"),
            MeasureHeader::new("amount", "Amount"),
        ]);
        assert_eq!(run(group, &[]), ["rgb(173,173,173)", "rgb(50,50,50)"]);
    }

    #[test]
    fn rotates_palette_and_lightens_derived() {
        assert_eq!(run(pop_measures(), &[]), [
            "rgb(173,173,173)", "rgb(50,50,50)", "rgb(193,193,193)",
            "rgb(100,100,100)", "rgb(213,213,213)", "rgb(150,150,150)",
            "rgb(233,233,233)", "rgb(200,200,200)", "rgb(173,173,173)",
            "rgb(50,50,50)", "rgb(193,193,193)", "rgb(100,100,100)"]);
    }

    #[test]
    fn overrides_do_not_advance_palette() {
        let rules = vec![guid_rule("amountMeasure_0", "02"),
                         guid_rule("amountPopMeasure_0", "03"),
                         guid_rule("amountMeasure_1", "03")];
        assert_eq!(run(pop_measures(), &rules), [
            "rgb(150,150,150)", "rgb(100,100,100)", "rgb(213,213,213)",
            "rgb(150,150,150)", "rgb(173,173,173)", "rgb(50,50,50)",
            "rgb(193,193,193)", "rgb(100,100,100)", "rgb(213,213,213)",
            "rgb(150,150,150)", "rgb(233,233,233)", "rgb(200,200,200)"]);
    }

    #[test]
    fn mapping_keeps_color_kinds() {
        let rules = vec![ColorAssignment::new(
            measure_local_identifier_predicate("amount"),
            ColorItem::Rgb(RGB8::new(255, 0, 0)))];
        let group = MeasureGroup::new(vec![
            MeasureHeader::new("amount", "Amount"),
            MeasureHeader::new("pop", "Amount - SP year ago").derived_from("amount"),
            MeasureHeader::new("count", "Count"),
        ]);
        let s = color_strategy(&custom_palette(), &rules, &ChartData::new(group),
                               &ChartType::Column).unwrap();
        let colors: Vec<_> = s.color_mapping().iter().map(|i| &i.color).collect();
        assert_eq!(colors, [&ColorItem::Rgb(RGB8::new(255, 0, 0)),
                            &ColorItem::Rgb(RGB8::new(255, 153, 153)),
                            &ColorItem::Guid("01".into())]);
    }

    #[test]
    fn derived_without_master_keeps_placeholder() {
        let group = MeasureGroup::new(vec![
            MeasureHeader::new("orphan", "Orphan").derived_from("gone"),
            MeasureHeader::new("amount", "Amount"),
        ]);
        assert_eq!(run(group, &[]), ["rgb(0,0,0)", "rgb(50,50,50)"]);
    }
}
