use crate::error;

use super::axis::{AxisLimits, PlotAxes};
use super::render::RenderPack;
use super::style::{FillStyle, LineStyle};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegendItem {
    pub label: String,
    pub fill_style: FillStyle,
    pub line_style: LineStyle,
}

/// Anything that can take part in a plot's layout, legend and render cycle.
pub trait Plottable {
    fn is_visible(&self) -> bool;

    /// Plane region needed to show this item, or `None` if it has no extent.
    fn axis_limits(&self) -> Option<AxisLimits>;

    fn legend_items(&self) -> Vec<LegendItem>;

    fn render(&self, rp: &mut RenderPack) -> Result<(), error::Error>;

    /// Items that adjust the shared view during the limits pass expose it here.
    fn limit_manager(&self) -> Option<&dyn ManagesAxisLimits> {
        None
    }
}

/// Hook run once per limits pass, after autoscaling.
pub trait ManagesAxisLimits {
    fn update_axis_limits(&self, axes: &mut PlotAxes);
}
