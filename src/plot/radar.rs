use tracing::{debug, trace};

use crate::error;

use super::axis::{AxisLimits, Pixel, PlotAxes};
use super::plottable::{LegendItem, ManagesAxisLimits, Plottable};
use super::polar::{PolarAxis, Winding};
use super::render::{Paint, RenderPack};
use super::style::{Color, FillStyle, LineStyle};

/// Values for one polygon plus how to draw it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RadarSeries {
    pub values: Vec<f64>,
    pub fill_style: FillStyle,
    pub line_style: LineStyle,
    pub legend_text: String,
}

impl RadarSeries {
    pub fn new(values: Vec<f64>, legend_text: &str, color: Color) -> RadarSeries {
        RadarSeries {
            values,
            fill_style: FillStyle::new(color.with_alpha(0.5)),
            line_style: LineStyle::new(color, 2.0),
            legend_text: legend_text.to_string(),
        }
    }
}

/// Series drawn as polygons over one shared polar axis.
#[derive(Clone, Debug)]
pub struct Radar {
    pub polar_axis: PolarAxis,
    pub is_visible: bool,
    /// Draw the polar axis over the series instead of under them.
    pub is_axis_above_data: bool,
    series: Vec<RadarSeries>,
}

impl Default for Radar {
    fn default() -> Radar {
        Radar {
            polar_axis: PolarAxis::new(),
            is_visible: true,
            is_axis_above_data: false,
            series: vec![],
        }
    }
}

impl Radar {
    pub fn new() -> Radar {
        Radar {
            ..Default::default()
        }
    }

    /// Radar drawn on a preconfigured axis. Configure the axis before adding
    /// series, as each added series refits its grid.
    pub fn with_axis(polar_axis: PolarAxis) -> Radar {
        Radar {
            polar_axis,
            ..Default::default()
        }
    }

    /// One series per row, colored from `palette` in order.
    pub fn from_values(rows: &[Vec<f64>], palette: &[Color]) -> Radar {
        let mut radar = Radar::new();
        for (i, values) in rows.iter().enumerate() {
            let color = if palette.is_empty() {
                Color::GRAY
            } else {
                palette[i % palette.len()]
            };
            radar.add_series(RadarSeries::new(values.clone(), "", color));
        }
        radar
    }

    pub fn add_series(&mut self, series: RadarSeries) {
        self.polar_axis.fit(&series.values);
        debug!(
            "added radar series {:?} with {} values",
            series.legend_text,
            series.values.len()
        );
        self.series.push(series);
    }

    pub fn series(&self) -> &[RadarSeries] {
        &self.series
    }

    pub fn clear_series(&mut self) {
        self.series.clear();
        self.polar_axis.reset_fit();
    }

    pub fn manage_axis_limits(&self) -> bool {
        self.polar_axis.manage_axis_limits
    }

    pub fn set_manage_axis_limits(&mut self, value: bool) {
        self.polar_axis.manage_axis_limits = value;
    }

    /// Square region holding the grid and every vertex of every series,
    /// measured with the polar axis as it is configured now.
    pub fn get_axis_limits(&self) -> AxisLimits {
        let data_radius = self
            .series
            .iter()
            .map(|series| {
                self.polar_axis
                    .radius(PolarAxis::max_value(&series.values))
                    .abs()
            })
            .fold(0.0, f64::max);
        let radius = self.polar_axis.max_radius().max(data_radius);
        AxisLimits::square(radius).with_minimum_span()
    }

    fn series_pixels(&self, series: &RadarSeries, axes: &PlotAxes) -> Vec<Pixel> {
        self.polar_axis
            .get_coordinates(&series.values, Winding::Clockwise)
            .iter()
            .map(|coordinates| axes.get_pixel(coordinates))
            .collect()
    }
}

impl Plottable for Radar {
    fn is_visible(&self) -> bool {
        self.is_visible
    }

    fn axis_limits(&self) -> Option<AxisLimits> {
        Some(self.get_axis_limits())
    }

    fn legend_items(&self) -> Vec<LegendItem> {
        self.series
            .iter()
            .map(|series| LegendItem {
                label: series.legend_text.clone(),
                fill_style: series.fill_style.clone(),
                line_style: series.line_style.clone(),
            })
            .collect()
    }

    fn render(&self, rp: &mut RenderPack) -> Result<(), error::Error> {
        if !self.is_visible || self.series.is_empty() {
            return Ok(());
        }

        let mut paint = Paint::new();

        if !self.is_axis_above_data {
            self.polar_axis.render(rp)?;
        }

        for series in self.series.iter() {
            let pixels = self.series_pixels(series, rp.axes);
            rp.canvas
                .fill_path(&mut paint, &pixels, &series.fill_style)?;
            rp.canvas
                .draw_path(&mut paint, &pixels, &series.line_style, true)?;
        }

        if self.is_axis_above_data {
            self.polar_axis.render(rp)?;
        }
        trace!("radar painted {} series paths", paint.draw_calls());
        Ok(())
    }

    fn limit_manager(&self) -> Option<&dyn ManagesAxisLimits> {
        Some(self)
    }
}

impl ManagesAxisLimits for Radar {
    fn update_axis_limits(&self, axes: &mut PlotAxes) {
        self.polar_axis.update_axis_limits(axes);
    }
}
