//! Per-window zoom level.

/// Amount one Zoom In / Zoom Out step changes the level
pub const ZOOM_STEP: f64 = 0.5;
/// Smallest scale factor a window can reach
pub const MIN_FACTOR: f64 = 0.25;
/// Largest scale factor a window can reach
pub const MAX_FACTOR: f64 = 5.0;

const BASE: f64 = 1.2;

/// Zoom level of one window. The scale factor is `1.2^level`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ZoomLevel(f64);

impl ZoomLevel {
    pub fn level(self) -> f64 {
        self.0
    }

    /// Scale factor to hand to the webview
    pub fn factor(self) -> f64 {
        BASE.powf(self.0).clamp(MIN_FACTOR, MAX_FACTOR)
    }

    /// Step in. Returns false when the next step would exceed the maximum.
    pub fn zoom_in(&mut self) -> bool {
        self.step(ZOOM_STEP)
    }

    /// Step out. Returns false when the next step would go below the minimum.
    pub fn zoom_out(&mut self) -> bool {
        self.step(-ZOOM_STEP)
    }

    pub fn reset(&mut self) {
        self.0 = 0.0;
    }

    fn step(&mut self, delta: f64) -> bool {
        let next = self.0 + delta;
        let factor = BASE.powf(next);
        if !(MIN_FACTOR..=MAX_FACTOR).contains(&factor) {
            return false;
        }
        self.0 = next;
        true
    }
}
