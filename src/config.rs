use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cli::{Palette, PlotOptions};
use crate::error;
use crate::plot::angle::Angle;
use crate::plot::chart::{Dimensions, MAX_DIMENSION, MIN_DIMENSION};
use crate::plot::data::SeriesStyle;
use crate::plot::polar::{PolarAxis, RadialScale};

/// Plot settings read from a YAML file. Every key is optional.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    pub rotation: Option<f64>,
    pub manage_axis_limits: Option<bool>,
    pub axis_above_data: Option<bool>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rings: Option<usize>,
    pub straight_lines: Option<bool>,
    pub fixed_radius: Option<f64>,
    pub scale: Option<RadialScale>,
    pub palette: Option<Palette>,
    pub colors: Option<Vec<String>>,
    pub opacity: Option<f64>,
    pub line_width: Option<f64>,
}

impl PlotConfig {
    pub fn from_path(path: &Path) -> Result<PlotConfig, error::Error> {
        let file = File::open(path)?;
        let config: PlotConfig = serde_yaml::from_reader(file)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }
}

/// Fully resolved settings for a single plot.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotSettings {
    pub rotation: f64,
    pub manage_axis_limits: bool,
    pub axis_above_data: bool,
    pub width: f64,
    pub height: f64,
    pub rings: usize,
    pub straight_lines: bool,
    pub fixed_radius: Option<f64>,
    pub scale: RadialScale,
    pub palette: Palette,
    pub colors: Vec<String>,
    pub opacity: f64,
    pub line_width: f64,
}

impl Default for PlotSettings {
    fn default() -> PlotSettings {
        PlotSettings {
            rotation: 90.0,
            manage_axis_limits: true,
            axis_above_data: false,
            width: 900.0,
            height: 900.0,
            rings: 5,
            straight_lines: false,
            fixed_radius: None,
            scale: RadialScale::Linear,
            palette: Palette::Default,
            colors: vec![],
            opacity: 0.4,
            line_width: 2.0,
        }
    }
}

impl PlotSettings {
    /// Command line values win over the config file, which wins over defaults.
    /// Boolean flags can only switch a setting on from the command line.
    pub fn resolve(
        options: &PlotOptions,
        config: &PlotConfig,
    ) -> Result<PlotSettings, error::Error> {
        let defaults = PlotSettings::default();
        let settings = PlotSettings {
            rotation: options
                .rotation
                .or(config.rotation)
                .unwrap_or(defaults.rotation),
            manage_axis_limits: if options.no_square {
                false
            } else {
                config
                    .manage_axis_limits
                    .unwrap_or(defaults.manage_axis_limits)
            },
            axis_above_data: options.axis_above_data
                || config.axis_above_data.unwrap_or(defaults.axis_above_data),
            width: options.width.or(config.width).unwrap_or(defaults.width),
            height: options.height.or(config.height).unwrap_or(defaults.height),
            rings: options.rings.or(config.rings).unwrap_or(defaults.rings),
            straight_lines: options.straight_lines
                || config.straight_lines.unwrap_or(defaults.straight_lines),
            fixed_radius: options.fixed_radius.or(config.fixed_radius),
            scale: options.scale.or(config.scale).unwrap_or(defaults.scale),
            palette: options
                .palette
                .or(config.palette)
                .unwrap_or(defaults.palette),
            colors: options
                .color
                .clone()
                .or_else(|| config.colors.clone())
                .unwrap_or(defaults.colors),
            opacity: options
                .opacity
                .or(config.opacity)
                .unwrap_or(defaults.opacity),
            line_width: options
                .line_width
                .or(config.line_width)
                .unwrap_or(defaults.line_width),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the command line parsers would not accept.
    fn validate(&self) -> Result<(), error::Error> {
        let range = MIN_DIMENSION as f64..=MAX_DIMENSION as f64;
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !range.contains(&value) {
                return Err(error::Error::InvalidSetting(format!(
                    "{name} {value} outside {MIN_DIMENSION} - {MAX_DIMENSION}"
                )));
            }
        }
        if !(1..=20).contains(&self.rings) {
            return Err(error::Error::InvalidSetting(format!(
                "rings {} outside 1 - 20",
                self.rings
            )));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(error::Error::InvalidSetting(format!(
                "opacity {} outside 0 - 1",
                self.opacity
            )));
        }
        Ok(())
    }

    pub fn polar_axis(&self) -> PolarAxis {
        let mut polar_axis = PolarAxis::new();
        polar_axis.rotation = Angle::from_degrees(self.rotation);
        polar_axis.scale = self.scale;
        polar_axis.manage_axis_limits = self.manage_axis_limits;
        polar_axis.straight_lines = self.straight_lines;
        polar_axis.ring_count = self.rings;
        polar_axis.fixed_radius = self.fixed_radius;
        polar_axis
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
            ..Default::default()
        }
    }

    pub fn series_style(&self) -> SeriesStyle {
        SeriesStyle {
            opacity: self.opacity,
            line_width: self.line_width,
        }
    }
}
