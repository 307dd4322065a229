/// Turns absolute cursor positions into look deltas.
///
/// The first sample after creation or [`reset`](Self::reset) only records
/// the position, so grabbing the cursor does not produce a jump.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorTracker {
    first_mouse: bool,
    last_x: f32,
    last_y: f32,
}

impl Default for CursorTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorTracker {
    /// Tracker waiting for its first sample.
    #[must_use]
    pub fn new() -> Self {
        Self {
            first_mouse: true,
            last_x: 0.0,
            last_y: 0.0,
        }
    }

    /// Forget the last position; the next sample yields no delta.
    pub fn reset(&mut self) {
        self.first_mouse = true;
    }

    /// Whether the next sample will be swallowed.
    #[must_use]
    pub fn is_waiting_for_first_sample(&self) -> bool {
        self.first_mouse
    }

    /// Record a cursor position and return `(xoffset, yoffset)` since the
    /// previous one.
    ///
    /// Screen y grows downwards, so `yoffset` is inverted here: positive
    /// means look up.
    pub fn sample(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        if self.first_mouse {
            self.last_x = x;
            self.last_y = y;
            self.first_mouse = false;
            return None;
        }

        let offsets = (x - self.last_x, self.last_y - y);
        self.last_x = x;
        self.last_y = y;
        Some(offsets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_is_swallowed() {
        let mut tracker = CursorTracker::new();
        assert!(tracker.is_waiting_for_first_sample());
        assert_eq!(tracker.sample(400.0, 300.0), None);
        assert!(!tracker.is_waiting_for_first_sample());
    }

    #[test]
    fn y_offset_is_inverted() {
        let mut tracker = CursorTracker::new();
        let _ = tracker.sample(400.0, 300.0);
        // Cursor moved right and up the screen.
        assert_eq!(tracker.sample(410.0, 290.0), Some((10.0, 10.0)));
        // Cursor moved left and down the screen.
        assert_eq!(tracker.sample(405.0, 295.0), Some((-5.0, -5.0)));
    }

    #[test]
    fn reset_rearms_first_sample() {
        let mut tracker = CursorTracker::new();
        let _ = tracker.sample(0.0, 0.0);
        let _ = tracker.sample(5.0, 5.0);
        tracker.reset();
        assert_eq!(tracker.sample(900.0, 900.0), None);
        assert_eq!(tracker.sample(901.0, 900.0), Some((1.0, 0.0)));
    }
}
