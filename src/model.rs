//! Geometry and zoom state for the preview image.
//! Everything in here is pure so it can be exercised without a browser.

use serde::{Deserialize, Serialize};

/// Scales are snapped to 1/SCALE_GRID so repeated wheel steps do not drift
/// (1.0 + 0.1 + 0.1 ... should land back on exactly 1.0 on the way out).
const SCALE_GRID: f64 = 1e6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True once layout has produced something measurable.
    pub fn is_measurable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Axis-aligned box, usually a bounding client rect made relative to the
/// content container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Re-express this rect relative to `origin`'s top-left corner.
    pub fn relative_to(&self, origin: &Rect) -> Rect {
        Rect::new(
            self.left - origin.left,
            self.top - origin.top,
            self.width,
            self.height,
        )
    }
}

/// Translation + uniform scale applied to the preview image. The scale is
/// applied around the element's own center.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform {
    pub fn at(position: Point, scale: f64) -> Self {
        Self {
            x: position.x,
            y: position.y,
            scale,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn with_position(self, position: Point) -> Self {
        Self {
            x: position.x,
            y: position.y,
            ..self
        }
    }

    /// CSS `transform` value. Pairs with `transform-origin: 50% 50%`.
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.x, self.y, self.scale
        )
    }

    /// Component-wise interpolation, `t` in [0, 1].
    pub fn lerp(&self, to: &Transform, t: f64) -> Transform {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Transform {
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
        }
    }
}

/// Offset that centers an element of `element` size inside `container`.
pub fn centering_offset(container: Size, element: Size) -> Point {
    Point::new(
        (container.width - element.width) / 2.0,
        (container.height - element.height) / 2.0,
    )
}

/// Translation correction that keeps `cursor` visually fixed when the scale
/// changes by `ratio` around `element_center`. Both points share one frame.
pub fn zoom_offset(cursor: Point, element_center: Point, ratio: f64) -> Point {
    Point::new(
        (cursor.x - element_center.x) * (1.0 - ratio),
        (cursor.y - element_center.y) * (1.0 - ratio),
    )
}

fn quantize(scale: f64) -> f64 {
    (scale * SCALE_GRID).round() / SCALE_GRID
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Scale change per wheel tick.
    pub step: f64,
    /// Scale a double-click jumps to from `min_scale`.
    pub toggle_scale: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: 3.0,
            step: 0.1,
            toggle_scale: 3.0,
        }
    }
}

/// A pending scale change, anchored on the cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomChange {
    pub from_scale: f64,
    pub to_scale: f64,
    pub offset: Point,
}

impl ZoomChange {
    pub fn ratio(&self) -> f64 {
        self.to_scale / self.from_scale
    }

    /// Target transform once the change has been applied to `current`.
    pub fn apply(&self, current: Transform) -> Transform {
        Transform {
            x: current.x + self.offset.x,
            y: current.y + self.offset.y,
            scale: self.to_scale,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ZoomState {
    current_scale: f64,
    limits: ZoomLimits,
}

impl ZoomState {
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            current_scale: limits.min_scale,
            limits,
        }
    }

    pub fn current_scale(&self) -> f64 {
        self.current_scale
    }

    /// Signed wheel step: scrolling down (positive delta) zooms out.
    pub fn wheel_step(&self, delta_y: f64) -> f64 {
        if delta_y > 0.0 {
            -self.limits.step
        } else {
            self.limits.step
        }
    }

    pub fn clamp(&self, scale: f64) -> f64 {
        quantize(scale).clamp(self.limits.min_scale, self.limits.max_scale)
    }

    /// Scale a wheel event with `delta_y` would move to.
    pub fn propose_wheel(&self, delta_y: f64) -> f64 {
        self.clamp(self.current_scale + self.wheel_step(delta_y))
    }

    /// Double-click toggles between the floor and the toggle scale.
    pub fn double_click_target(&self) -> f64 {
        if self.current_scale > self.limits.min_scale {
            self.limits.min_scale
        } else {
            self.clamp(self.limits.toggle_scale)
        }
    }

    /// Plan a move to `new_scale`. Returns `None` when the scale would not
    /// change, which covers wheeling against either clamp boundary.
    pub fn plan(&self, new_scale: f64, cursor: Point, element_center: Point) -> Option<ZoomChange> {
        if new_scale == self.current_scale {
            return None;
        }
        let ratio = new_scale / self.current_scale;
        Some(ZoomChange {
            from_scale: self.current_scale,
            to_scale: new_scale,
            offset: zoom_offset(cursor, element_center, ratio),
        })
    }

    pub fn plan_wheel(&self, delta_y: f64, cursor: Point, element_center: Point) -> Option<ZoomChange> {
        self.plan(self.propose_wheel(delta_y), cursor, element_center)
    }

    pub fn plan_double_click(&self, cursor: Point, element_center: Point) -> Option<ZoomChange> {
        self.plan(self.double_click_target(), cursor, element_center)
    }

    pub fn commit(&mut self, change: &ZoomChange) {
        self.current_scale = change.to_scale;
    }

    /// Adopt a scale observed from outside (e.g. an interrupted transition).
    pub fn sync_to(&mut self, scale: f64) {
        self.current_scale = self.clamp(scale);
    }
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}
