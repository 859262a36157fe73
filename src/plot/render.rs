use svg::node::element::path::Data;
use svg::node::element::Group;
use tracing::trace;

use crate::error;

use super::axis::{Pixel, PlotAxes};
use super::style::{path_filled, path_open, FillStyle, LineStyle};

/// Drawing state held for the duration of a single render call.
///
/// A `Paint` is created at the top of a `render` and dropped on every exit
/// path, including early returns and propagated backend errors.
#[derive(Debug, Default)]
pub struct Paint {
    draw_calls: usize,
}

impl Paint {
    pub fn new() -> Paint {
        Paint {
            ..Default::default()
        }
    }

    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }

    fn record(&mut self) {
        self.draw_calls += 1;
    }
}

impl Drop for Paint {
    fn drop(&mut self) {
        trace!("paint released after {} draw calls", self.draw_calls);
    }
}

/// Immediate-mode drawing backend.
pub trait Canvas {
    fn fill_path(
        &mut self,
        paint: &mut Paint,
        pixels: &[Pixel],
        style: &FillStyle,
    ) -> Result<(), error::Error>;

    fn draw_path(
        &mut self,
        paint: &mut Paint,
        pixels: &[Pixel],
        style: &LineStyle,
        close: bool,
    ) -> Result<(), error::Error>;
}

/// Everything a plottable needs to paint itself.
pub struct RenderPack<'a> {
    pub canvas: &'a mut dyn Canvas,
    pub axes: &'a PlotAxes,
}

impl<'a> RenderPack<'a> {
    pub fn new(canvas: &'a mut dyn Canvas, axes: &'a PlotAxes) -> RenderPack<'a> {
        RenderPack { canvas, axes }
    }
}

fn pixels_to_path(pixels: &[Pixel], close: bool) -> Data {
    let mut path_data = Data::new();
    for (i, pixel) in pixels.iter().enumerate() {
        if i == 0 {
            path_data = path_data.move_to((pixel.x, pixel.y));
        } else {
            path_data = path_data.line_to((pixel.x, pixel.y));
        }
    }
    if close {
        path_data = path_data.close();
    }
    path_data
}

fn check_pixels(pixels: &[Pixel]) -> Result<(), error::Error> {
    match pixels
        .iter()
        .find(|pixel| !pixel.x.is_finite() || !pixel.y.is_finite())
    {
        Some(pixel) => Err(error::Error::Render(format!(
            "non-finite pixel ({}, {})",
            pixel.x, pixel.y
        ))),
        None => Ok(()),
    }
}

fn check_line_style(style: &LineStyle) -> Result<(), error::Error> {
    if !style.width.is_finite() || style.width < 0.0 {
        return Err(error::Error::Render(format!(
            "invalid line width {}",
            style.width
        )));
    }
    Ok(())
}

/// Canvas that accumulates SVG elements into a group.
#[derive(Clone, Debug)]
pub struct SvgCanvas {
    group: Group,
}

impl Default for SvgCanvas {
    fn default() -> SvgCanvas {
        SvgCanvas {
            group: Group::new(),
        }
    }
}

impl SvgCanvas {
    pub fn new() -> SvgCanvas {
        SvgCanvas {
            ..Default::default()
        }
    }

    pub fn into_group(self) -> Group {
        self.group
    }

    fn push<T>(&mut self, node: T)
    where
        T: Into<Box<dyn svg::Node>>,
    {
        let group = std::mem::replace(&mut self.group, Group::new());
        self.group = group.add(node);
    }
}

impl Canvas for SvgCanvas {
    fn fill_path(
        &mut self,
        paint: &mut Paint,
        pixels: &[Pixel],
        style: &FillStyle,
    ) -> Result<(), error::Error> {
        check_pixels(pixels)?;
        paint.record();
        if !style.is_visible || pixels.is_empty() {
            return Ok(());
        }
        self.push(path_filled(pixels_to_path(pixels, true), style));
        Ok(())
    }

    fn draw_path(
        &mut self,
        paint: &mut Paint,
        pixels: &[Pixel],
        style: &LineStyle,
        close: bool,
    ) -> Result<(), error::Error> {
        check_pixels(pixels)?;
        check_line_style(style)?;
        paint.record();
        if !style.is_visible || pixels.is_empty() {
            return Ok(());
        }
        self.push(path_open(pixels_to_path(pixels, close), style));
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;
    use crate::plot::style::Color;

    #[derive(Clone, Debug, PartialEq)]
    pub enum DrawCall {
        Fill {
            pixels: Vec<Pixel>,
            color: Color,
        },
        Stroke {
            pixels: Vec<Pixel>,
            color: Color,
            close: bool,
        },
    }

    impl DrawCall {
        pub fn color(&self) -> Color {
            match self {
                DrawCall::Fill { color, .. } => *color,
                DrawCall::Stroke { color, .. } => *color,
            }
        }
    }

    /// Canvas that remembers every call made to it, in order.
    #[derive(Debug, Default)]
    pub struct RecordingCanvas {
        pub calls: Vec<DrawCall>,
    }

    impl Canvas for RecordingCanvas {
        fn fill_path(
            &mut self,
            paint: &mut Paint,
            pixels: &[Pixel],
            style: &FillStyle,
        ) -> Result<(), error::Error> {
            paint.record();
            self.calls.push(DrawCall::Fill {
                pixels: pixels.to_vec(),
                color: style.color,
            });
            Ok(())
        }

        fn draw_path(
            &mut self,
            paint: &mut Paint,
            pixels: &[Pixel],
            style: &LineStyle,
            close: bool,
        ) -> Result<(), error::Error> {
            check_line_style(style)?;
            paint.record();
            self.calls.push(DrawCall::Stroke {
                pixels: pixels.to_vec(),
                color: style.color,
                close,
            });
            Ok(())
        }
    }
}
