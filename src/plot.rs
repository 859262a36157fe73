//!
//! Invoked by calling:
//! `radarplot plot <args>`

use std::path::Path;
use std::str::FromStr;

use anyhow;
use svg::Document;
use tracing::info;
use usvg::{fontdb, TreeParsing, TreeTextToPath};

use crate::cli;
use crate::config::{PlotConfig, PlotSettings};
use crate::error;
use crate::utils::format_si;

pub use cli::PlotOptions;

use self::chart::Plot;
use self::data::RadarData;
use self::style::Color;

/// Angles in radians and degrees.
pub mod angle;

/// Plot axis functions.
pub mod axis;

/// Chart options.
pub mod chart;

/// Radar input data.
pub mod data;

/// Common interface for things that can be drawn on a plot.
pub mod plottable;

/// Polar axis functions.
pub mod polar;

/// Radar plot functions.
pub mod radar;

/// Drawing backends.
pub mod render;

/// SVG styling functions.
pub mod style;

pub fn save_svg(document: &Document, output: &str) -> Result<(), error::Error> {
    svg::save(output, document)?;
    Ok(())
}

pub fn save_png(document: &Document, output: &str) -> Result<(), error::Error> {
    let mut fontdb = fontdb::Database::new();
    fontdb.load_system_fonts();
    let mut buf = Vec::new();
    svg::write(&mut buf, document)?;
    let opt = usvg::Options::default();
    let mut tree = usvg::Tree::from_data(buf.as_slice(), &opt)
        .map_err(|e| error::Error::Render(e.to_string()))?;
    tree.convert_text(&fontdb);

    let width = 2000;
    let height = (width as f64 * tree.size.height() / tree.size.width()) as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| error::Error::Render(format!("invalid image size {width}x{height}")))?;
    resvg::render(
        &tree,
        resvg::FitTo::Size(width, height),
        tiny_skia::Transform::default(),
        pixmap.as_mut(),
    )
    .ok_or_else(|| error::Error::Render("unable to rasterize svg".to_string()))?;
    pixmap
        .save_png(output)
        .map_err(|e| error::Error::Render(e.to_string()))?;
    Ok(())
}

pub enum Suffix {
    PNG,
    SVG,
}

impl FromStr for Suffix {
    type Err = ();
    fn from_str(input: &str) -> Result<Suffix, Self::Err> {
        match input {
            "png" => Ok(Suffix::PNG),
            "svg" => Ok(Suffix::SVG),
            _ => Err(()),
        }
    }
}

pub fn save_by_suffix(document: &Document, output: &str) -> Result<(), error::Error> {
    let suffix_str = Path::new(output)
        .extension()
        .and_then(|x| x.to_str())
        .unwrap_or_default()
        .to_lowercase();
    match Suffix::from_str(&suffix_str) {
        Ok(Suffix::PNG) => save_png(document, output),
        Ok(Suffix::SVG) => save_svg(document, output),
        Err(_) => Err(error::Error::InvalidImageSuffix(output.to_string())),
    }
}

pub fn default_palette(count: usize) -> Vec<Color> {
    let gradient = colorous::PAIRED;
    (0..count).map(|i| gradient[i % 12].into()).collect()
}

/// Paired palette with the light and dark member of each pair swapped.
pub fn reverse_palette(count: usize) -> Vec<Color> {
    let gradient = colorous::PAIRED;
    (0..count)
        .map(|i| {
            let j = if i % 2 == 1 { i - 1 } else { i + 1 };
            gradient[j % 12].into()
        })
        .collect()
}

pub fn viridis_palette(count: usize) -> Vec<Color> {
    let gradient = colorous::VIRIDIS;
    (0..count)
        .map(|i| {
            let t = if count > 1 {
                i as f64 / (count - 1) as f64
            } else {
                0.0
            };
            gradient.eval_continuous(t).into()
        })
        .collect()
}

pub fn category10_palette(count: usize) -> Vec<Color> {
    let gradient = colorous::CATEGORY10;
    (0..count).map(|i| gradient[i % 10].into()).collect()
}

/// Build a palette of `count` colors, then apply `<index>=<hexcode>`
/// overrides. Indices beyond the palette are ignored.
pub fn set_palette(
    name: &cli::Palette,
    colors: &[String],
    count: usize,
) -> Result<Vec<Color>, error::Error> {
    let mut color_list = match name {
        cli::Palette::Default => default_palette(count),
        cli::Palette::Inverse => reverse_palette(count),
        cli::Palette::Viridis => viridis_palette(count),
        cli::Palette::Category10 => category10_palette(count),
    };
    for color in colors {
        let (index, hex) = color
            .split_once('=')
            .ok_or_else(|| error::Error::InvalidColor(color.clone()))?;
        let i: usize = index
            .trim()
            .parse()
            .map_err(|_| error::Error::InvalidColor(color.clone()))?;
        if i < count {
            color_list[i] = Color::from_str(hex.trim())?;
        }
    }
    Ok(color_list)
}

/// Make a radar plot
pub fn plot(options: &cli::PlotOptions) -> Result<(), anyhow::Error> {
    let config = match &options.config_file {
        Some(path) => PlotConfig::from_path(path)?,
        None => PlotConfig::default(),
    };
    let settings = PlotSettings::resolve(options, &config)?;
    let data = RadarData::from_path(&options.input)?;
    let palette = set_palette(&settings.palette, &settings.colors, data.series.len())?;

    let mut radar = data.to_radar(settings.polar_axis(), &palette, &settings.series_style())?;
    radar.is_axis_above_data = settings.axis_above_data;
    info!(
        "outer ring at {} across {} spokes",
        format_si(&radar.polar_axis.max_radius(), 3),
        radar.polar_axis.spokes.len()
    );

    let mut chart = Plot::new(settings.dimensions());
    chart.add(Box::new(radar));
    let labels: Vec<String> = chart
        .legend_items()
        .into_iter()
        .map(|item| item.label)
        .collect();
    info!("plotting series {}", labels.join(", "));
    let document = chart.svg()?;
    save_by_suffix(&document, &options.output)?;
    info!("saved plot to {}", options.output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_cycles() {
        let palette = default_palette(14);
        assert_eq!(palette.len(), 14);
        assert_eq!(palette[0], palette[12]);
        assert_ne!(palette[0], palette[1]);
    }

    #[test]
    fn test_reverse_palette_swaps_pairs() {
        let forward = default_palette(4);
        let reverse = reverse_palette(4);
        assert_eq!(reverse[0], forward[1]);
        assert_eq!(reverse[1], forward[0]);
        assert_eq!(reverse[3], forward[2]);
    }

    #[test]
    fn test_viridis_palette() {
        assert_eq!(viridis_palette(1).len(), 1);
        let palette = viridis_palette(3);
        assert_ne!(palette[0], palette[2]);
    }

    #[test]
    fn test_set_palette_overrides() {
        let colors = vec!["1=#ff0000".to_string(), "7=00ff00".to_string()];
        let palette = set_palette(&cli::Palette::Category10, &colors, 3).unwrap();
        assert_eq!(palette.len(), 3);
        assert_eq!(palette[1], Color::new(255, 0, 0));
        assert_eq!(palette[0], category10_palette(1)[0]);
    }

    #[test]
    fn test_set_palette_invalid() {
        let colors = vec!["ff0000".to_string()];
        assert!(matches!(
            set_palette(&cli::Palette::Default, &colors, 2),
            Err(error::Error::InvalidColor(_))
        ));
    }

    #[test]
    fn test_save_by_suffix_rejects_unknown() {
        let document = Document::new();
        assert!(matches!(
            save_by_suffix(&document, "plot.gif"),
            Err(error::Error::InvalidImageSuffix(_))
        ));
    }
}
