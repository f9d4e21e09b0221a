//! Pointer dragging with container bounds and an inertial throw on release.
//!
//! Positions are the image's translation (the `x`/`y` of its transform), in
//! CSS pixels relative to where layout put the element.

use std::collections::VecDeque;

use crate::model::{Point, Size};

/// Samples older than this (relative to the newest) do not count towards the
/// release velocity.
const VELOCITY_WINDOW_MS: f64 = 100.0;
/// A pointer held still this long before release throws nothing.
const RELEASE_IDLE_MS: f64 = 50.0;
/// Throws slower than this (px/s) are dropped.
const MIN_THROW_SPEED: f64 = 10.0;

/// Allowed translation range on each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl DragBounds {
    /// Bounds that keep the element's visual box inside `container`.
    ///
    /// `origin` is the element's layout position inside the container at zero
    /// translation, `element` its untransformed size. The scale is applied
    /// around the element center, so the visual box grows on both sides. When
    /// the scaled element is larger than the container the range flips, and the
    /// element may then only move so that the container stays covered.
    pub fn compute(container: Size, origin: Point, element: Size, scale: f64) -> Self {
        let axis = |container: f64, origin: f64, len: f64| {
            let lo = (scale - 1.0) * len / 2.0 - origin;
            let hi = container - origin - (1.0 + scale) * len / 2.0;
            if lo <= hi { (lo, hi) } else { (hi, lo) }
        };
        let (min_x, max_x) = axis(container.width, origin.x, element.width);
        let (min_y, max_y) = axis(container.height, origin.y, element.height);
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    pub fn clamp(&self, p: Point) -> Point {
        Point::new(p.x.clamp(self.min_x, self.max_x), p.y.clamp(self.min_y, self.max_y))
    }

    #[cfg(test)]
    pub fn contains(&self, p: Point) -> bool {
        self.clamp(p) == p
    }
}

/// Recent pointer positions, used to estimate the release velocity.
#[derive(Default, Debug, Clone)]
pub struct VelocityTracker {
    samples: VecDeque<(f64, Point)>,
}

impl VelocityTracker {
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    pub fn last(&self) -> Option<Point> {
        self.samples.back().map(|&(_, p)| p)
    }

    pub fn push(&mut self, at_ms: f64, p: Point) {
        self.samples.push_back((at_ms, p));
        while let Some(&(t, _)) = self.samples.front() {
            if at_ms - t > VELOCITY_WINDOW_MS && self.samples.len() > 2 {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Velocity in px/s at `now_ms`.
    pub fn velocity(&self, now_ms: f64) -> Point {
        let (Some(&(t0, p0)), Some(&(t1, p1))) = (self.samples.front(), self.samples.back()) else {
            return Point::ZERO;
        };
        let dt = t1 - t0;
        if dt < 1.0 || now_ms - t1 > RELEASE_IDLE_MS {
            return Point::ZERO;
        }
        Point::new((p1.x - p0.x) / dt * 1000.0, (p1.y - p0.y) / dt * 1000.0)
    }
}

/// Constant-deceleration glide after a release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Throw {
    pub velocity: Point,
    /// px/s²
    pub resistance: f64,
}

impl Throw {
    pub fn speed(&self) -> f64 {
        self.velocity.x.hypot(self.velocity.y)
    }

    /// Distance the throw would cover with no bounds in the way.
    #[cfg(test)]
    pub fn travel(&self) -> f64 {
        let v = self.speed();
        v * v / (2.0 * self.resistance)
    }

    /// Advance by `dt` seconds. Returns the displacement and whether the throw
    /// is still moving afterwards.
    pub fn step(&mut self, dt: f64) -> (Point, bool) {
        let speed = self.speed();
        if speed <= 0.0 || dt <= 0.0 {
            return (Point::ZERO, speed > 0.0);
        }
        let t = dt.min(speed / self.resistance);
        let distance = speed * t - 0.5 * self.resistance * t * t;
        let (ux, uy) = (self.velocity.x / speed, self.velocity.y / speed);
        let new_speed = (speed - self.resistance * t).max(0.0);
        self.velocity = Point::new(ux * new_speed, uy * new_speed);
        (Point::new(ux * distance, uy * distance), new_speed > 0.0)
    }
}

#[derive(Clone, Copy, Debug)]
struct Press {
    pointer: Point,
    start: Point,
}

/// Drag state for one preview image.
#[derive(Debug, Clone)]
pub struct DragController {
    position: Point,
    bounds: Option<DragBounds>,
    press: Option<Press>,
    tracker: VelocityTracker,
    throw: Option<Throw>,
    resistance: f64,
}

impl DragController {
    pub fn new(resistance: f64) -> Self {
        Self {
            position: Point::ZERO,
            bounds: None,
            press: None,
            tracker: VelocityTracker::default(),
            throw: None,
            resistance,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    #[cfg(test)]
    pub fn is_dragging(&self) -> bool {
        self.press.is_some()
    }

    pub fn is_throwing(&self) -> bool {
        self.throw.is_some()
    }

    /// Move without applying bounds (initial centering, zoom corrections).
    /// A press in progress continues from `p` at the last pointer sample.
    pub fn set_position(&mut self, p: Point) {
        self.position = p;
        if let Some(press) = self.press.as_mut() {
            press.start = p;
            if let Some(pointer) = self.tracker.last() {
                press.pointer = pointer;
            }
        }
    }

    /// Install fresh bounds and pull the position back inside them.
    pub fn update_bounds(&mut self, bounds: DragBounds) -> Point {
        self.bounds = Some(bounds);
        self.set_position(bounds.clamp(self.position));
        self.position
    }

    fn clamp(&self, p: Point) -> Point {
        match self.bounds {
            Some(b) => b.clamp(p),
            None => p,
        }
    }

    pub fn press(&mut self, pointer: Point, at_ms: f64) {
        self.throw = None;
        self.tracker.reset();
        self.tracker.push(at_ms, pointer);
        self.press = Some(Press {
            pointer,
            start: self.position,
        });
    }

    /// Follow the pointer. Returns the new position, or `None` if no press is
    /// active.
    pub fn drag(&mut self, pointer: Point, at_ms: f64) -> Option<Point> {
        let press = self.press?;
        self.tracker.push(at_ms, pointer);
        let target = Point::new(
            press.start.x + pointer.x - press.pointer.x,
            press.start.y + pointer.y - press.pointer.y,
        );
        self.position = self.clamp(target);
        Some(self.position)
    }

    /// End the press. Returns true when an inertial throw was started.
    pub fn release(&mut self, at_ms: f64) -> bool {
        if self.press.take().is_none() {
            return false;
        }
        let throw = Throw {
            velocity: self.tracker.velocity(at_ms),
            resistance: self.resistance,
        };
        self.tracker.reset();
        if throw.speed() < MIN_THROW_SPEED {
            return false;
        }
        self.throw = Some(throw);
        true
    }

    pub fn cancel_throw(&mut self) {
        self.throw = None;
    }

    /// Advance an active throw by `dt` seconds. Returns the new position while
    /// the throw is running, `None` once it has stopped (or none was active).
    /// Hitting a bound stops motion on that axis.
    pub fn step_throw(&mut self, dt: f64) -> Option<Point> {
        let mut throw = self.throw?;
        let (delta, moving) = throw.step(dt);
        let target = Point::new(self.position.x + delta.x, self.position.y + delta.y);
        let clamped = self.clamp(target);
        if clamped.x != target.x {
            throw.velocity.x = 0.0;
        }
        if clamped.y != target.y {
            throw.velocity.y = 0.0;
        }
        self.position = clamped;
        if moving && throw.speed() > 0.0 {
            self.throw = Some(throw);
        } else {
            self.throw = None;
        }
        Some(self.position)
    }
}
