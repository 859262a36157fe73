/// A location in plane (data) units. The y axis points up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    pub fn new(x: f64, y: f64) -> Coordinates {
        Coordinates { x, y }
    }

    pub fn distance(&self, other: &Coordinates) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A location in screen units. The y axis points down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl Pixel {
    pub fn new(x: f64, y: f64) -> Pixel {
        Pixel { x, y }
    }
}

/// Rectangular region in plane units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLimits {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Default for AxisLimits {
    fn default() -> AxisLimits {
        AxisLimits {
            left: -1.0,
            right: 1.0,
            bottom: -1.0,
            top: 1.0,
        }
    }
}

impl AxisLimits {
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> AxisLimits {
        AxisLimits {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Square region centred on the origin with half-width `radius`.
    pub fn square(radius: f64) -> AxisLimits {
        let radius = radius.abs();
        AxisLimits::new(-radius, radius, -radius, radius)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn center(&self) -> Coordinates {
        Coordinates::new(
            (self.left + self.right) / 2.0,
            (self.bottom + self.top) / 2.0,
        )
    }

    pub fn contains(&self, coordinates: &Coordinates) -> bool {
        coordinates.x >= self.left
            && coordinates.x <= self.right
            && coordinates.y >= self.bottom
            && coordinates.y <= self.top
    }

    pub fn union(&self, other: &AxisLimits) -> AxisLimits {
        AxisLimits::new(
            self.left.min(other.left),
            self.right.max(other.right),
            self.bottom.min(other.bottom),
            self.top.max(other.top),
        )
    }

    /// Widen any zero-span dimension so the region can be mapped onto pixels.
    pub fn with_minimum_span(&self) -> AxisLimits {
        let mut limits = *self;
        if limits.width() <= 0.0 {
            limits.left -= 1.0;
            limits.right += 1.0;
        }
        if limits.height() <= 0.0 {
            limits.bottom -= 1.0;
            limits.top += 1.0;
        }
        limits
    }
}

/// Rectangular region in screen units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelRect {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PixelRect {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> PixelRect {
        PixelRect {
            left,
            right,
            top,
            bottom,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// The shared view of a plot: which plane region is shown and where on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlotAxes {
    pub limits: AxisLimits,
    pub data_rect: PixelRect,
}

impl PlotAxes {
    pub fn new(limits: AxisLimits, data_rect: PixelRect) -> PlotAxes {
        PlotAxes { limits, data_rect }
    }

    pub fn get_pixel(&self, coordinates: &Coordinates) -> Pixel {
        let x = self.data_rect.left
            + (coordinates.x - self.limits.left) / self.limits.width() * self.data_rect.width();
        let y = self.data_rect.bottom
            - (coordinates.y - self.limits.bottom) / self.limits.height()
                * self.data_rect.height();
        Pixel::new(x, y)
    }

    pub fn units_per_pixel_x(&self) -> f64 {
        self.limits.width() / self.data_rect.width()
    }

    pub fn units_per_pixel_y(&self) -> f64 {
        self.limits.height() / self.data_rect.height()
    }

    /// Zoom out the more tightly scaled axis so both axes share one
    /// units-per-pixel value, keeping the current centre.
    pub fn square_units(&mut self) {
        let width = self.data_rect.width();
        let height = self.data_rect.height();
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let units_per_pixel = self.units_per_pixel_x().max(self.units_per_pixel_y());
        let center = self.limits.center();
        let half_width = units_per_pixel * width / 2.0;
        let half_height = units_per_pixel * height / 2.0;
        self.limits = AxisLimits::new(
            center.x - half_width,
            center.x + half_width,
            center.y - half_height,
            center.y + half_height,
        );
    }
}
