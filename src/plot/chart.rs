use svg::node::element::Rectangle;
use svg::Document;
use tracing::{debug, info};

use crate::error;

use super::axis::{AxisLimits, PixelRect, PlotAxes};
use super::plottable::{LegendItem, Plottable};
use super::render::{Canvas, RenderPack, SvgCanvas};
use super::style::Color;

/// Smallest width or height, in pixels, that leaves room for the data rect.
pub const MIN_DIMENSION: u32 = 200;
pub const MAX_DIMENSION: u32 = 10000;

#[derive(Clone, Debug)]
pub struct Dimensions {
    pub height: f64,
    pub width: f64,
    /// top, right, bottom, left
    pub margin: [f64; 4],
    pub padding: [f64; 4],
}

impl Default for Dimensions {
    fn default() -> Dimensions {
        Dimensions {
            height: 900.0,
            width: 900.0,
            margin: [10.0, 10.0, 10.0, 10.0],
            padding: [50.0, 50.0, 50.0, 50.0],
        }
    }
}

impl Dimensions {
    pub fn data_rect(&self) -> PixelRect {
        PixelRect::new(
            self.margin[3] + self.padding[3],
            self.width - self.margin[1] - self.padding[1],
            self.margin[0] + self.padding[0],
            self.height - self.margin[2] - self.padding[2],
        )
    }
}

/// Container that lays out, scales and renders a set of plottables.
pub struct Plot {
    pub dimensions: Dimensions,
    pub background: Color,
    plottables: Vec<Box<dyn Plottable>>,
    axes: PlotAxes,
    frozen_limits: Option<AxisLimits>,
}

impl Default for Plot {
    fn default() -> Plot {
        let dimensions = Dimensions::default();
        Plot {
            axes: PlotAxes::new(AxisLimits::default(), dimensions.data_rect()),
            dimensions,
            background: Color::WHITE,
            plottables: vec![],
            frozen_limits: None,
        }
    }
}

impl Plot {
    pub fn new(dimensions: Dimensions) -> Plot {
        Plot {
            axes: PlotAxes::new(AxisLimits::default(), dimensions.data_rect()),
            dimensions,
            ..Default::default()
        }
    }

    pub fn add(&mut self, plottable: Box<dyn Plottable>) {
        self.plottables.push(plottable);
    }

    pub fn axes(&self) -> &PlotAxes {
        &self.axes
    }

    /// Fix the displayed region; autoscaling is skipped until `autoscale`.
    pub fn set_limits(&mut self, limits: AxisLimits) {
        self.frozen_limits = Some(limits);
    }

    pub fn autoscale(&mut self) {
        self.frozen_limits = None;
    }

    /// Union of the limits requested by every visible plottable.
    pub fn data_limits(&self) -> Option<AxisLimits> {
        self.plottables
            .iter()
            .filter(|plottable| plottable.is_visible())
            .filter_map(|plottable| plottable.axis_limits())
            .reduce(|a, b| a.union(&b))
    }

    /// Limits pass: autoscale (unless frozen), then let each visible
    /// plottable adjust the shared view.
    pub fn update_limits(&mut self) {
        let limits = match self.frozen_limits {
            Some(limits) => limits,
            None => self.data_limits().unwrap_or_default(),
        }
        .with_minimum_span();
        self.axes = PlotAxes::new(limits, self.dimensions.data_rect());
        for plottable in self.plottables.iter() {
            if !plottable.is_visible() {
                continue;
            }
            if let Some(manager) = plottable.limit_manager() {
                manager.update_axis_limits(&mut self.axes);
            }
        }
        debug!("plot limits {:?}", self.axes.limits);
    }

    pub fn render(&mut self, canvas: &mut dyn Canvas) -> Result<(), error::Error> {
        self.update_limits();
        for plottable in self.plottables.iter() {
            if !plottable.is_visible() {
                continue;
            }
            let mut rp = RenderPack::new(&mut *canvas, &self.axes);
            plottable.render(&mut rp)?;
        }
        Ok(())
    }

    pub fn legend_items(&self) -> Vec<LegendItem> {
        self.plottables
            .iter()
            .filter(|plottable| plottable.is_visible())
            .flat_map(|plottable| plottable.legend_items())
            .collect()
    }

    pub fn svg(&mut self) -> Result<Document, error::Error> {
        let mut canvas = SvgCanvas::new();
        self.render(&mut canvas)?;
        info!(
            "rendered {} plottables at {}x{}",
            self.plottables.len(),
            self.dimensions.width,
            self.dimensions.height
        );
        let document = Document::new()
            .set("viewBox", (0, 0, self.dimensions.width, self.dimensions.height))
            .add(
                Rectangle::new()
                    .set("fill", self.background.to_hex())
                    .set("stroke", "none")
                    .set("width", self.dimensions.width)
                    .set("height", self.dimensions.height),
            )
            .add(canvas.into_group());
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::polar::PolarAxis;
    use crate::plot::radar::{Radar, RadarSeries};
    use crate::plot::render::recording::RecordingCanvas;

    fn radar() -> Radar {
        let mut radar = Radar::new();
        radar.add_series(RadarSeries::new(
            vec![1.0, 2.0, 3.0, 4.0],
            "first",
            Color::new(255, 0, 0),
        ));
        radar.add_series(RadarSeries::new(
            vec![4.0, 3.0, 2.0, 1.0],
            "second",
            Color::new(0, 0, 255),
        ));
        radar
    }

    fn plot(width: f64, height: f64) -> Plot {
        let mut plot = Plot::new(Dimensions {
            width,
            height,
            ..Default::default()
        });
        plot.add(Box::new(radar()));
        plot
    }

    #[test]
    fn test_data_rect() {
        let rect = Dimensions::default().data_rect();
        assert_eq!(rect, PixelRect::new(60.0, 840.0, 60.0, 840.0));
    }

    #[test]
    fn test_square_units_for_several_aspects() {
        for (width, height) in [(900.0, 500.0), (400.0, 1200.0), (700.0, 700.0)] {
            let mut plot = plot(width, height);
            plot.update_limits();
            let axes = plot.axes();
            let ratio = axes.units_per_pixel_x() / axes.units_per_pixel_y();
            assert!((ratio - 1.0).abs() < 1e-9);
            assert!(axes.limits.left <= -4.0 && axes.limits.right >= 4.0);
            assert!(axes.limits.bottom <= -4.0 && axes.limits.top >= 4.0);
        }
    }

    #[test]
    fn test_unmanaged_limits_are_not_squared() {
        let mut radar = radar();
        radar.set_manage_axis_limits(false);
        let mut plot = Plot::new(Dimensions {
            width: 900.0,
            height: 500.0,
            ..Default::default()
        });
        plot.add(Box::new(radar));
        plot.update_limits();
        assert_eq!(plot.axes().limits, AxisLimits::square(4.0));
    }

    #[test]
    fn test_frozen_limits() {
        let mut plot = plot(700.0, 700.0);
        plot.set_limits(AxisLimits::square(10.0));
        plot.update_limits();
        assert_eq!(plot.axes().limits, AxisLimits::square(10.0));
        plot.autoscale();
        plot.update_limits();
        assert_eq!(plot.axes().limits, AxisLimits::square(4.0));
    }

    #[test]
    fn test_empty_plot() {
        let mut plot = Plot::default();
        let mut canvas = RecordingCanvas::default();
        plot.render(&mut canvas).unwrap();
        assert!(canvas.calls.is_empty());
        assert_eq!(plot.axes().limits, AxisLimits::default());
    }

    #[test]
    fn test_render_twice_is_identical() {
        let mut plot = plot(900.0, 500.0);
        let mut first = RecordingCanvas::default();
        plot.render(&mut first).unwrap();
        let mut second = RecordingCanvas::default();
        plot.render(&mut second).unwrap();
        assert!(!first.calls.is_empty());
        assert_eq!(first.calls, second.calls);
    }

    #[test]
    fn test_legend_items() {
        let mut plot = plot(700.0, 700.0);
        plot.add(Box::new(PolarAxis::new()));
        let labels: Vec<String> = plot
            .legend_items()
            .into_iter()
            .map(|item| item.label)
            .collect();
        assert_eq!(labels, vec!["first", "second"]);
    }

    #[test]
    fn test_svg_document() {
        let mut plot = plot(700.0, 700.0);
        let document = plot.svg().unwrap().to_string();
        assert!(document.contains("viewBox=\"0 0 700 700\""));
        assert!(document.contains("fill=\"#ff0000\""));
        assert!(document.contains("fill=\"#0000ff\""));
    }
}
