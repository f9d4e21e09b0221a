use crate::model::Transform;

/// Eased transition between two transforms, driven by frame timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: Transform,
    to: Transform,
    duration_ms: f64,
    started_at: Option<f64>,
}

// Quadratic ease-out.
fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}

impl Tween {
    pub fn new(from: Transform, to: Transform, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            started_at: None,
        }
    }

    #[cfg(test)]
    pub fn target(&self) -> Transform {
        self.to
    }

    /// Transform at frame time `now_ms`, and whether the tween has finished.
    /// The first sampled frame fixes the start time.
    pub fn sample(&mut self, now_ms: f64) -> (Transform, bool) {
        let start = *self.started_at.get_or_insert(now_ms);
        if self.duration_ms <= 0.0 {
            return (self.to, true);
        }
        let t = ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0);
        if t >= 1.0 {
            return (self.to, true);
        }
        (self.from.lerp(&self.to, ease_out(t)), false)
    }
}
