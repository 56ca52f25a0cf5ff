use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use chart_colors::{ChartConfig, ChartData, ChartType, ColorAssignment, ColorItem,
                   ColorStrategy, MeasureGroup, MeasureHeader, Attribute,
                   AttributeHeader, attribute_item_name_predicate,
                   measure_local_identifier_predicate, heatmap_gradient,
                   rgb_string};

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, colors: &[String],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {c}\"></td>")?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td></tr>\
                  </table><br/>")?;
    Ok(())
}

fn strategy(fh: &mut impl Write, s: &ColorStrategy,
            comment: &str) -> Result<(), Err> {
    let c = format!("{comment} ({:?})", s.kind());
    table_of_colors(fh, s.resolved_palette(), 43, &c)
}

fn measures(n: usize) -> MeasureGroup {
    MeasureGroup::new((0 .. n).flat_map(|i| {
        let master = format!("m{i}");
        [MeasureHeader::new(master.as_str(), format!("Measure {i}")),
         MeasureHeader::new(format!("pop{i}"), format!("Measure {i} - year ago"))
             .derived_from(master)]
    }).collect())
}

fn regions() -> Attribute {
    Attribute::new("Region", ["East", "West", "North", "South", "Central"]
                   .iter().enumerate()
                   .map(|(i, n)| AttributeHeader::new(*n, format!("/region/{i}")))
                   .collect())
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("swatches.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>chart_colors: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Measures</h3>")?;
    let data = ChartData::new(measures(12));
    let config = ChartConfig::new(ChartType::Column);
    strategy(&mut fh, &config.color_strategy(&data)?, "default palette")?;
    let config = config.assign(ColorAssignment::new(
        measure_local_identifier_predicate("m1"),
        ColorItem::Rgb(RGB8::new(0, 0, 0))));
    strategy(&mut fh, &config.color_strategy(&data)?, "m1 overridden")?;
    let config = ChartConfig::new(ChartType::Bar)
        .colors(["rgb(94,0,99)", "rgb(255,235,170)", "rgb(0,0,128)"]);
    strategy(&mut fh, &config.color_strategy(&data)?, "legacy colors")?;

    writeln!(fh, "<h3>Attributes</h3>")?;
    let data = ChartData::new(measures(1)).view_by(regions());
    for t in ["pie", "treemap", "scatter", "column"] {
        let config = ChartConfig::new(t.parse()?)
            .assign(ColorAssignment::new(attribute_item_name_predicate("North"),
                                         ColorItem::Guid("6".into())));
        strategy(&mut fh, &config.color_strategy(&data)?, t)?;
    }

    writeln!(fh, "<h3>Heatmaps</h3>")?;
    let data = ChartData::new(measures(1));
    strategy(&mut fh, &ChartConfig::new(ChartType::Heatmap)
             .color_strategy(&data)?, "default")?;
    for base in [RGB8::new(195, 49, 73), RGB8::new(255, 0, 0),
                 RGB8::new(0, 0, 0), RGB8::new(168, 194, 86)] {
        let colors: Vec<_> = heatmap_gradient(base).into_iter()
            .map(rgb_string).collect();
        table_of_colors(&mut fh, &colors, 43, &rgb_string(base))?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
