use std::f64::consts::PI;

use clap::ValueEnum;
use coord_transforms::d2::polar2cartesian;
use coord_transforms::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error;

use super::angle::Angle;
use super::axis::{AxisLimits, Coordinates, Pixel, PlotAxes};
use super::plottable::{LegendItem, ManagesAxisLimits, Plottable};
use super::render::{Paint, RenderPack};
use super::style::{Color, LineStyle};

/// Number of segments used to draw a circular ring.
const RING_RESOLUTION: usize = 180;

/// Order in which successive vertices are placed around the centre.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Winding {
    Clockwise,
    #[default]
    CounterClockwise,
}

/// Mapping from a value to a distance from the centre.
#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RadialScale {
    #[default]
    Linear,
    Sqrt,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PolarAxisSpoke {
    /// Offset from the axis rotation.
    pub angle: Angle,
    pub length: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PolarAxisCircle {
    pub radius: f64,
}

#[derive(Clone, Debug)]
pub struct PolarAxis {
    pub is_visible: bool,
    pub rotation: Angle,
    pub scale: RadialScale,
    pub manage_axis_limits: bool,
    /// Draw rings as polygons through the spokes rather than as circles.
    pub straight_lines: bool,
    /// Rebuild spokes and rings whenever new values are fitted.
    pub auto_grid: bool,
    pub ring_count: usize,
    /// Outer ring value. The grid is drawn to this value instead of
    /// following the fitted data.
    pub fixed_radius: Option<f64>,
    pub spokes: Vec<PolarAxisSpoke>,
    pub circles: Vec<PolarAxisCircle>,
    pub spoke_style: LineStyle,
    pub circle_style: LineStyle,
    data_value: f64,
    data_spokes: usize,
}

impl Default for PolarAxis {
    fn default() -> PolarAxis {
        let grid_color = Color::new(204, 204, 204);
        PolarAxis {
            is_visible: true,
            rotation: Angle::from_degrees(90.0),
            scale: RadialScale::Linear,
            manage_axis_limits: true,
            straight_lines: false,
            auto_grid: true,
            ring_count: 5,
            fixed_radius: None,
            spokes: vec![],
            circles: vec![],
            spoke_style: LineStyle::new(grid_color, 1.0),
            circle_style: LineStyle::new(grid_color, 1.0).dashed(vec![5.0, 5.0]),
            data_value: 0.0,
            data_spokes: 0,
        }
    }
}

impl PolarAxis {
    pub fn new() -> PolarAxis {
        PolarAxis {
            ..Default::default()
        }
    }

    /// Distance from the centre for a value on the radial scale.
    pub fn radius(&self, value: f64) -> f64 {
        match self.scale {
            RadialScale::Linear => value,
            RadialScale::Sqrt => value.signum() * value.abs().sqrt(),
        }
    }

    /// Angular offset from the rotation of vertex `index` out of `count`.
    pub fn spoke_angle(index: usize, count: usize, winding: Winding) -> Angle {
        if count == 0 {
            return Angle::default();
        }
        let offset = Angle::from_radians(2.0 * PI / count as f64) * index as f64;
        match winding {
            Winding::Clockwise => -offset,
            Winding::CounterClockwise => offset,
        }
    }

    /// Plane coordinates of a point `radius` from the centre at `offset`
    /// from the axis rotation.
    pub fn get_coordinates_at(&self, radius: f64, offset: Angle) -> Coordinates {
        let angle = (self.rotation + offset).normalized();
        let polar_coord = Vector2::new(radius, angle.radians());
        let cartesian_coord = polar2cartesian(&polar_coord);
        Coordinates::new(cartesian_coord[0], cartesian_coord[1])
    }

    /// One vertex per value, evenly spaced from the rotation angle in the
    /// given winding direction. The polygon is left open.
    pub fn get_coordinates(&self, values: &[f64], winding: Winding) -> Vec<Coordinates> {
        let count = values.len();
        values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                self.get_coordinates_at(
                    self.radius(*value),
                    PolarAxis::spoke_angle(i, count, winding),
                )
            })
            .collect()
    }

    /// Replace the spokes with `count` evenly spaced lines of `length` value units.
    pub fn set_spokes(&mut self, count: usize, length: f64) {
        let radius = self.radius(length).abs();
        if radius == 0.0 || !radius.is_finite() {
            self.spokes.clear();
            return;
        }
        self.spokes = (0..count)
            .map(|i| PolarAxisSpoke {
                angle: PolarAxis::spoke_angle(i, count, Winding::Clockwise),
                length: radius,
            })
            .collect();
    }

    /// Replace the rings with `count` rings evenly spaced in value units up to
    /// `max_value`.
    pub fn set_circles(&mut self, max_value: f64, count: usize) {
        if max_value == 0.0 || !max_value.is_finite() {
            self.circles.clear();
            return;
        }
        self.circles = (1..count + 1)
            .map(|i| PolarAxisCircle {
                radius: self.radius(max_value * i as f64 / count as f64).abs(),
            })
            .collect();
    }

    /// Extend the data extent to cover `values`.
    pub fn fit(&mut self, values: &[f64]) {
        self.data_value = self.data_value.max(PolarAxis::max_value(values));
        self.data_spokes = self.data_spokes.max(values.len());
        debug!(
            "polar axis fitted to {} values, max value {}",
            values.len(),
            self.data_value
        );
        if self.auto_grid {
            let max_value = self.fixed_radius.unwrap_or(self.data_value);
            self.set_spokes(self.data_spokes, max_value);
            self.set_circles(max_value, self.ring_count);
        }
    }

    /// Forget everything previously fitted. A manual grid is kept.
    pub fn reset_fit(&mut self) {
        self.data_value = 0.0;
        self.data_spokes = 0;
        if self.auto_grid {
            self.spokes.clear();
            self.circles.clear();
        }
    }

    /// Largest finite magnitude in `values`, or zero.
    pub fn max_value(values: &[f64]) -> f64 {
        values
            .iter()
            .filter(|value| value.is_finite())
            .map(|value| value.abs())
            .fold(0.0, f64::max)
    }

    /// Extent of the grid, including a fixed outer ring.
    pub fn grid_radius(&self) -> f64 {
        let fixed = self
            .fixed_radius
            .map(|value| self.radius(value).abs())
            .unwrap_or_default();
        self.circles
            .iter()
            .map(|circle| circle.radius)
            .chain(self.spokes.iter().map(|spoke| spoke.length))
            .fold(fixed, f64::max)
    }

    /// Largest distance from the centre that must stay visible. The fitted
    /// data is measured on the current radial scale.
    pub fn max_radius(&self) -> f64 {
        self.grid_radius()
            .max(self.radius(self.data_value).abs())
    }

    /// Square region, centred on the axis, that holds the outermost ring.
    pub fn get_axis_limits(&self) -> AxisLimits {
        AxisLimits::square(self.max_radius()).with_minimum_span()
    }

    fn ring_pixels(&self, radius: f64, axes: &PlotAxes) -> Vec<Pixel> {
        if self.straight_lines && self.spokes.len() >= 3 {
            self.spokes
                .iter()
                .map(|spoke| axes.get_pixel(&self.get_coordinates_at(radius, spoke.angle)))
                .collect()
        } else {
            (0..RING_RESOLUTION)
                .map(|i| {
                    let offset = Angle::from_radians(2.0 * PI * i as f64 / RING_RESOLUTION as f64);
                    axes.get_pixel(&self.get_coordinates_at(radius, offset))
                })
                .collect()
        }
    }

    fn render_grid(&self, rp: &mut RenderPack) -> Result<(), error::Error> {
        let mut paint = Paint::new();
        for circle in self.circles.iter() {
            let pixels = self.ring_pixels(circle.radius, rp.axes);
            rp.canvas
                .draw_path(&mut paint, &pixels, &self.circle_style, true)?;
        }
        let center = rp.axes.get_pixel(&Coordinates::default());
        for spoke in self.spokes.iter() {
            let tip = rp
                .axes
                .get_pixel(&self.get_coordinates_at(spoke.length, spoke.angle));
            rp.canvas
                .draw_path(&mut paint, &[center, tip], &self.spoke_style, false)?;
        }
        Ok(())
    }
}

impl Plottable for PolarAxis {
    fn is_visible(&self) -> bool {
        self.is_visible
    }

    fn axis_limits(&self) -> Option<AxisLimits> {
        if self.max_radius() > 0.0 {
            Some(self.get_axis_limits())
        } else {
            None
        }
    }

    fn legend_items(&self) -> Vec<LegendItem> {
        vec![]
    }

    fn render(&self, rp: &mut RenderPack) -> Result<(), error::Error> {
        if !self.is_visible {
            return Ok(());
        }
        self.render_grid(rp)
    }

    fn limit_manager(&self) -> Option<&dyn ManagesAxisLimits> {
        Some(self)
    }
}

impl ManagesAxisLimits for PolarAxis {
    fn update_axis_limits(&self, axes: &mut PlotAxes) {
        if !self.manage_axis_limits {
            return;
        }
        axes.square_units();
        debug!(
            "squared axis limits to {:?} ({} units/px)",
            axes.limits,
            axes.units_per_pixel_x()
        );
    }
}
