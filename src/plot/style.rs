use std::str::FromStr;

use svg::node::element::path::Data;
use svg::node::element::Path;

use crate::error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Default for Color {
    fn default() -> Color {
        Color::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        alpha: 1.0,
    };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        alpha: 1.0,
    };
    pub const GRAY: Color = Color {
        r: 153,
        g: 153,
        b: 153,
        alpha: 1.0,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Color {
        Color {
            r,
            g,
            b,
            alpha: 1.0,
        }
    }

    pub fn with_alpha(self, alpha: f64) -> Color {
        Color {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Convert to a 6 digit hex string, ignoring alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<colorous::Color> for Color {
    fn from(color: colorous::Color) -> Self {
        Color::new(color.r, color.g, color.b)
    }
}

impl FromStr for Color {
    type Err = error::Error;
    fn from_str(input: &str) -> Result<Color, Self::Err> {
        let hex = input.trim().trim_start_matches("hex").trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(error::Error::InvalidColor(input.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| error::Error::InvalidColor(input.to_string()))
        };
        Ok(Color::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FillStyle {
    pub color: Color,
    pub is_visible: bool,
}

impl Default for FillStyle {
    fn default() -> FillStyle {
        FillStyle {
            color: Color::GRAY.with_alpha(0.5),
            is_visible: true,
        }
    }
}

impl FillStyle {
    pub fn new(color: Color) -> FillStyle {
        FillStyle {
            color,
            is_visible: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
    pub dash: Option<Vec<f64>>,
    pub is_visible: bool,
}

impl Default for LineStyle {
    fn default() -> LineStyle {
        LineStyle {
            color: Color::BLACK,
            width: 1.0,
            dash: None,
            is_visible: true,
        }
    }
}

impl LineStyle {
    pub fn new(color: Color, width: f64) -> LineStyle {
        LineStyle {
            color,
            width,
            ..Default::default()
        }
    }

    pub fn dashed(self, pattern: Vec<f64>) -> LineStyle {
        LineStyle {
            dash: Some(pattern),
            ..self
        }
    }
}

pub fn path_filled(path_data: Data, style: &FillStyle) -> Path {
    Path::new()
        .set("stroke", "none")
        .set("fill", style.color.to_hex())
        .set("fill-opacity", style.color.alpha)
        .set("stroke-width", 0)
        .set("d", path_data)
}

pub fn path_open(path_data: Data, style: &LineStyle) -> Path {
    let path = Path::new()
        .set("stroke", style.color.to_hex())
        .set("stroke-opacity", style.color.alpha)
        .set("fill", "none")
        .set("stroke-width", style.width)
        .set("stroke-linejoin", "round")
        .set("d", path_data);
    match &style.dash {
        Some(pattern) if !pattern.is_empty() => path.set(
            "stroke-dasharray",
            pattern
                .iter()
                .map(|x| x.to_string())
                .collect::<Vec<String>>()
                .join(", "),
        ),
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_str() {
        assert_eq!(Color::from_str("#ff7f00").unwrap(), Color::new(255, 127, 0));
        assert_eq!(Color::from_str("hexff7f00").unwrap(), Color::new(255, 127, 0));
        assert_eq!(Color::from_str("1f78b4").unwrap().to_hex(), "#1f78b4");
        assert!(Color::from_str("#ff7f0").is_err());
        assert!(Color::from_str("#gg7f00").is_err());
    }

    #[test]
    fn test_color_alpha() {
        assert_eq!(Color::BLACK.with_alpha(2.0).alpha, 1.0);
        assert_eq!(Color::BLACK.with_alpha(0.25).alpha, 0.25);
    }

    #[test]
    fn test_path_open_dash() {
        let style = LineStyle::new(Color::BLACK, 2.0).dashed(vec![5.0, 5.0]);
        let path = path_open(Data::new().move_to((0, 0)).line_to((1, 1)), &style);
        assert!(path.to_string().contains("stroke-dasharray=\"5, 5\""));
    }
}
