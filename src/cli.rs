use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_num::number_range;
use serde::{Deserialize, Serialize};

use crate::plot::chart::{MAX_DIMENSION, MIN_DIMENSION};
use crate::plot::polar::RadialScale;

fn opacity_range(s: &str) -> Result<f64, String> {
    let value = s.parse::<f64>().map_err(|e| e.to_string())?;
    Ok(number_range::<u8>(&format!("{}", (value * 100.0).round()), 0, 100)? as f64 / 100.0)
}

fn ring_range(s: &str) -> Result<usize, String> {
    number_range(s, 1, 20)
}

fn dimension_range(s: &str) -> Result<f64, String> {
    Ok(number_range::<u32>(s, MIN_DIMENSION, MAX_DIMENSION)? as f64)
}

/// Top level arguments to `radarplot`
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Log debug output
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,
    #[clap(subcommand)]
    pub cmd: SubCommand,
}

/// `radarplot` subcommands
#[derive(Subcommand, Debug)]
pub enum SubCommand {
    /// Render a radar chart from a CSV, JSON or YAML file.
    /// Called as `radarplot plot`
    Plot(PlotOptions),
}

#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    #[default]
    Default,
    Inverse,
    Viridis,
    Category10,
}

/// Options to pass to `radarplot plot`
#[derive(Parser, Debug, Default, Clone)]
pub struct PlotOptions {
    /// Path to input file (.csv, .json, .yaml)
    #[arg(long, short = 'i')]
    pub input: PathBuf,
    /// Output filename (.svg or .png)
    #[arg(long, short = 'o', default_value_t = String::from("output.svg"))]
    pub output: String,
    /// Path to YAML format config file
    #[arg(long = "config", short = 'c')]
    pub config_file: Option<PathBuf>,
    /// Angle of the first spoke in degrees (default 90, pointing up)
    #[arg(long, allow_negative_numbers = true)]
    pub rotation: Option<f64>,
    /// Draw the polar axis above the series
    #[arg(long = "axis-above-data", default_value_t = false)]
    pub axis_above_data: bool,
    /// Do not force equal horizontal and vertical scales
    #[arg(long = "no-square", default_value_t = false)]
    pub no_square: bool,
    /// Plot width in pixels (200 - 10000)
    #[arg(long, value_parser = dimension_range)]
    pub width: Option<f64>,
    /// Plot height in pixels (200 - 10000)
    #[arg(long, value_parser = dimension_range)]
    pub height: Option<f64>,
    /// Number of rings in the polar grid (1 - 20)
    #[arg(long, value_parser = ring_range)]
    pub rings: Option<usize>,
    /// Draw polygonal rings through the spokes
    #[arg(long = "straight-lines", default_value_t = false)]
    pub straight_lines: bool,
    /// Fix the outer radius instead of fitting it to the data
    #[arg(long = "fixed-radius")]
    pub fixed_radius: Option<f64>,
    /// Radial scale function
    #[arg(long, value_enum)]
    pub scale: Option<RadialScale>,
    /// Colour palette for series
    #[arg(long, value_enum)]
    pub palette: Option<Palette>,
    /// Individual colours to modify palette (<index>=<hexcode>)
    #[arg(long)]
    pub color: Option<Vec<String>>,
    /// Fill opacity for series (0.0 - 1.0)
    #[arg(long, value_parser = opacity_range)]
    pub opacity: Option<f64>,
    /// Outline width for series
    #[arg(long = "line-width")]
    pub line_width: Option<f64>,
}

/// Command line argument parser
pub fn parse() -> Arguments {
    Arguments::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plot_options() {
        let args = Arguments::try_parse_from([
            "radarplot",
            "plot",
            "-i",
            "data.csv",
            "--rotation",
            "-45",
            "--axis-above-data",
            "--rings",
            "4",
            "--opacity",
            "0.25",
            "--palette",
            "viridis",
            "--color",
            "0=ff0000",
        ])
        .unwrap();
        let SubCommand::Plot(options) = args.cmd;
        assert_eq!(options.input, PathBuf::from("data.csv"));
        assert_eq!(options.output, "output.svg");
        assert_eq!(options.rotation, Some(-45.0));
        assert!(options.axis_above_data);
        assert!(!options.no_square);
        assert_eq!(options.rings, Some(4));
        assert_eq!(options.opacity, Some(0.25));
        assert_eq!(options.palette, Some(Palette::Viridis));
        assert_eq!(options.color, Some(vec!["0=ff0000".to_string()]));
    }

    #[test]
    fn test_option_ranges() {
        assert!(opacity_range("1.5").is_err());
        assert_eq!(opacity_range("0.4"), Ok(0.4));
        assert!(ring_range("0").is_err());
        assert_eq!(ring_range("20"), Ok(20));
        assert!(dimension_range("0").is_err());
        assert!(dimension_range("-300").is_err());
        assert_eq!(dimension_range("600"), Ok(600.0));
    }

    #[test]
    fn test_rejects_zero_width() {
        let result = Arguments::try_parse_from(["radarplot", "plot", "-i", "data.csv", "--width", "0"]);
        assert!(result.is_err());
    }
}
