/// An angle that advances at a fixed rate.
///
/// Angles are kept in degrees and wrapped into `[0, 360)` so long sessions do not
/// lose float precision.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Spin {
    /// Current angle in degrees.
    pub degrees: f32,

    /// Rate in degrees per second. May be negative.
    pub rate: f32,
}

impl Spin {
    #[inline]
    pub const fn new(rate: f32) -> Self {
        Self { degrees: 0.0, rate }
    }

    /// Advances by `rate * dt` degrees.
    pub fn advance(&mut self, dt: f32) {
        self.degrees = (self.degrees + self.rate * dt).rem_euclid(360.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_is_rate_times_dt() {
        let mut spin = Spin::new(90.0);
        spin.advance(0.5);
        assert!((spin.degrees - 45.0).abs() < 1e-4);
    }

    #[test]
    fn result_is_independent_of_frame_rate() {
        let mut fast = Spin::new(270.0);
        let mut slow = Spin::new(270.0);

        for _ in 0..60 {
            fast.advance(1.0 / 60.0);
        }
        for _ in 0..15 {
            slow.advance(1.0 / 15.0);
        }

        assert!((fast.degrees - slow.degrees).abs() < 1e-2);
    }

    #[test]
    fn zero_dt_does_not_move() {
        let mut spin = Spin::new(360.0);
        spin.advance(0.0);
        assert_eq!(spin.degrees, 0.0);
    }

    #[test]
    fn angle_wraps_in_both_directions() {
        let mut fwd = Spin::new(360.0);
        fwd.advance(1.25);
        assert!((fwd.degrees - 90.0).abs() < 1e-3);

        let mut back = Spin::new(-90.0);
        back.advance(1.0);
        assert!((back.degrees - 270.0).abs() < 1e-3);
    }
}
