use glam::Vec2;

/// Turns absolute cursor positions into look deltas.
///
/// The first sample after construction or [`MouseTracker::reset`] only
/// primes the tracker; without it the first delta would be measured from
/// an arbitrary origin and snap the view.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MouseTracker {
    last: Option<Vec2>,
}

impl MouseTracker {
    /// Record a new cursor position and return the look delta since the
    /// previous one.
    ///
    /// Vertical delta is `last_y - y`: screen Y grows downward while pitch
    /// grows upward.
    pub(crate) fn handle_position(&mut self, x: f32, y: f32) -> Option<Vec2> {
        let current = Vec2::new(x, y);
        let delta = self
            .last
            .map(|last| Vec2::new(current.x - last.x, last.y - current.y));
        self.last = Some(current);
        delta
    }

    /// Forget the last position so the next sample primes again.
    pub(crate) fn reset(&mut self) {
        self.last = None;
    }

    /// Last recorded cursor position, if any.
    pub(crate) fn position(&self) -> Option<Vec2> {
        self.last
    }
}
