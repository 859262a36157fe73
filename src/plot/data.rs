use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error;

use super::polar::PolarAxis;
use super::radar::{Radar, RadarSeries};
use super::style::{Color, FillStyle, LineStyle};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SeriesData {
    pub label: String,
    pub values: Vec<f64>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Category names plus one row of values per series.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RadarData {
    #[serde(default)]
    pub categories: Vec<String>,
    pub series: Vec<SeriesData>,
}

/// Per-series drawing options applied when building a `Radar`.
#[derive(Clone, Debug)]
pub struct SeriesStyle {
    pub opacity: f64,
    pub line_width: f64,
}

impl Default for SeriesStyle {
    fn default() -> SeriesStyle {
        SeriesStyle {
            opacity: 0.4,
            line_width: 2.0,
        }
    }
}

pub enum InputFormat {
    CSV,
    JSON,
    YAML,
}

impl FromStr for InputFormat {
    type Err = ();
    fn from_str(input: &str) -> Result<InputFormat, Self::Err> {
        match input {
            "csv" => Ok(InputFormat::CSV),
            "json" => Ok(InputFormat::JSON),
            "yaml" | "yml" => Ok(InputFormat::YAML),
            _ => Err(()),
        }
    }
}

impl RadarData {
    /// Parse CSV with a header row of category names. The first column of
    /// every row holds the series label.
    pub fn from_csv<R: Read>(reader: R) -> Result<RadarData, error::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let categories = csv_reader
            .headers()?
            .iter()
            .skip(1)
            .map(|x| x.to_string())
            .collect();
        let mut series = vec![];
        for result in csv_reader.records() {
            let record = result?;
            let label = record.get(0).unwrap_or_default().to_string();
            let mut values = vec![];
            for field in record.iter().skip(1) {
                let value = field.parse::<f64>().map_err(|_| {
                    error::Error::ReaderError(format!(
                        "invalid value {:?} for series {:?}",
                        field, label
                    ))
                })?;
                values.push(value);
            }
            series.push(SeriesData {
                label,
                values,
                color: None,
            });
        }
        Ok(RadarData { categories, series })
    }

    pub fn from_json<R: Read>(reader: R) -> Result<RadarData, error::Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_yaml<R: Read>(reader: R) -> Result<RadarData, error::Error> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// Load from a file, choosing the parser by suffix.
    pub fn from_path(path: &Path) -> Result<RadarData, error::Error> {
        let suffix = path
            .extension()
            .and_then(|x| x.to_str())
            .unwrap_or_default()
            .to_lowercase();
        let format = InputFormat::from_str(&suffix)
            .map_err(|_| error::Error::InvalidInputSuffix(path.display().to_string()))?;
        let file = File::open(path)?;
        let data = match format {
            InputFormat::CSV => RadarData::from_csv(file)?,
            InputFormat::JSON => RadarData::from_json(file)?,
            InputFormat::YAML => RadarData::from_yaml(file)?,
        };
        info!(
            "read {} series from {}",
            data.series.len(),
            path.display()
        );
        Ok(data)
    }

    /// Build a `Radar` on `polar_axis`, coloring series from `palette` unless
    /// they carry their own color.
    pub fn to_radar(
        &self,
        polar_axis: PolarAxis,
        palette: &[Color],
        style: &SeriesStyle,
    ) -> Result<Radar, error::Error> {
        let mut radar = Radar::with_axis(polar_axis);
        for (i, entry) in self.series.iter().enumerate() {
            if !self.categories.is_empty() && entry.values.len() != self.categories.len() {
                warn!(
                    "series {:?} has {} values for {} categories",
                    entry.label,
                    entry.values.len(),
                    self.categories.len()
                );
            }
            let color = match &entry.color {
                Some(hex) => Color::from_str(hex)?,
                None if palette.is_empty() => Color::GRAY,
                None => palette[i % palette.len()],
            };
            radar.add_series(RadarSeries {
                values: entry.values.clone(),
                fill_style: FillStyle::new(color.with_alpha(style.opacity)),
                line_style: LineStyle::new(color, style.line_width),
                legend_text: entry.label.clone(),
            });
        }
        Ok(radar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "series,speed,power,range,cost\n\
                       alpha,1,2,3,4\n\
                       beta, 4, 3, 2, 1\n";

    #[test]
    fn test_from_csv() {
        let data = RadarData::from_csv(CSV.as_bytes()).unwrap();
        assert_eq!(data.categories, vec!["speed", "power", "range", "cost"]);
        assert_eq!(data.series.len(), 2);
        assert_eq!(data.series[1].label, "beta");
        assert_eq!(data.series[1].values, vec![4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_from_csv_invalid_value() {
        let result = RadarData::from_csv("series,a,b\nalpha,1,x\n".as_bytes());
        assert!(matches!(result, Err(error::Error::ReaderError(_))));
    }

    #[test]
    fn test_from_json() {
        let json = r##"{"categories": ["a", "b", "c"],
            "series": [{"label": "one", "values": [1, 2, 3], "color": "#ff0000"}]}"##;
        let data = RadarData::from_json(json.as_bytes()).unwrap();
        assert_eq!(data.series[0].color, Some("#ff0000".to_string()));
        assert_eq!(data.series[0].values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = "series:\n  - label: one\n    values: [2, 2, 2, 2]\n";
        let data = RadarData::from_yaml(yaml.as_bytes()).unwrap();
        assert!(data.categories.is_empty());
        assert_eq!(data.series[0].values.len(), 4);
    }

    #[test]
    fn test_from_path_rejects_suffix() {
        let result = RadarData::from_path(Path::new("values.txt"));
        assert!(matches!(result, Err(error::Error::InvalidInputSuffix(_))));
    }

    #[test]
    fn test_to_radar() {
        let mut data = RadarData::from_csv(CSV.as_bytes()).unwrap();
        data.series[1].color = Some("#00ff00".to_string());
        let palette = vec![Color::new(255, 0, 0)];
        let radar = data
            .to_radar(PolarAxis::new(), &palette, &SeriesStyle::default())
            .unwrap();
        assert_eq!(radar.series().len(), 2);
        assert_eq!(radar.series()[0].line_style.color, Color::new(255, 0, 0));
        assert_eq!(radar.series()[0].fill_style.color.alpha, 0.4);
        assert_eq!(radar.series()[1].line_style.color, Color::new(0, 255, 0));
        assert_eq!(radar.series()[0].legend_text, "alpha");
        assert_eq!(radar.polar_axis.spokes.len(), 4);
    }

    #[test]
    fn test_to_radar_keeps_axis_settings() {
        let data = RadarData::from_csv(CSV.as_bytes()).unwrap();
        let mut polar_axis = PolarAxis::new();
        polar_axis.ring_count = 3;
        let radar = data
            .to_radar(polar_axis, &[], &SeriesStyle::default())
            .unwrap();
        assert_eq!(radar.polar_axis.circles.len(), 3);
        assert_eq!(radar.series()[0].line_style.color, Color::GRAY);
    }

    #[test]
    fn test_to_radar_invalid_color() {
        let mut data = RadarData::from_csv(CSV.as_bytes()).unwrap();
        data.series[0].color = Some("red".to_string());
        assert!(matches!(
            data.to_radar(PolarAxis::new(), &[], &SeriesStyle::default()),
            Err(error::Error::InvalidColor(_))
        ));
    }
}
