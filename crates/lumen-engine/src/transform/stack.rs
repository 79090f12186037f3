use glam::{Mat4, Vec3};

use super::TransformError;

/// Current model-view matrix plus a LIFO stack of saved snapshots.
///
/// One instance is owned by the frame driver and lent to scene code by `&mut`.
///
/// # Hierarchical composition
///
/// ```
/// # use lumen_engine::transform::{TransformError, TransformStack};
/// # use glam::Vec3;
/// # fn main() -> Result<(), TransformError> {
/// let mut stack = TransformStack::new();
/// stack.reset();
/// stack.translate(Vec3::new(0.0, 0.0, -7.0));
/// stack.save();
/// stack.rotate_degrees(30.0, Vec3::Y); // parent
///
/// stack.save();
/// stack.translate(Vec3::new(-1.5, 0.0, 0.0)); // first child
/// let _child_a = stack.current();
/// stack.restore()?;
///
/// stack.save();
/// stack.translate(Vec3::new(1.5, 0.0, 0.0)); // second child, same parent
/// let _child_b = stack.current();
/// stack.restore()?;
///
/// stack.restore()?;
/// stack.finish_frame()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TransformStack {
    current: Mat4,
    saved: Vec<Mat4>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformStack {
    pub fn new() -> Self {
        Self {
            current: Mat4::IDENTITY,
            saved: Vec::new(),
        }
    }

    /// Starts a frame: current becomes identity and leftover snapshots are dropped.
    ///
    /// Leftovers only exist after an aborted frame.
    pub fn reset(&mut self) {
        self.current = Mat4::IDENTITY;
        self.saved.clear();
    }

    /// Post-multiplies the current matrix by a translation.
    pub fn translate(&mut self, offset: Vec3) {
        self.current *= Mat4::from_translation(offset);
    }

    /// Post-multiplies the current matrix by a rotation of `angle` radians about `axis`.
    ///
    /// `axis` does not need to be unit length but must be non-zero.
    pub fn rotate(&mut self, angle: f32, axis: Vec3) {
        debug_assert!(axis.length_squared() > 0.0, "rotation axis must be non-zero");
        self.current *= Mat4::from_axis_angle(axis.normalize(), angle);
    }

    /// [`rotate`](Self::rotate) with the angle given in degrees.
    pub fn rotate_degrees(&mut self, degrees: f32, axis: Vec3) {
        self.rotate(degrees.to_radians(), axis);
    }

    /// Pushes a copy of the current matrix.
    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Pops the most recent snapshot and makes it current.
    ///
    /// Fails with [`TransformError::StackUnderflow`] when nothing is saved; the
    /// current matrix is left untouched in that case.
    pub fn restore(&mut self) -> Result<(), TransformError> {
        self.current = self.saved.pop().ok_or(TransformError::StackUnderflow)?;
        Ok(())
    }

    /// Runs `f` between a `save()` and its matching `restore()`.
    ///
    /// If `f` fails the `restore()` is skipped: the snapshot stays on the stack
    /// and the frame is unbalanced until the next [`reset`](Self::reset).
    pub fn scoped<R>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<R, TransformError>,
    ) -> Result<R, TransformError> {
        self.save();
        let out = f(self)?;
        self.restore()?;
        Ok(out)
    }

    /// Matrix for the next draw call.
    #[inline]
    pub fn current(&self) -> Mat4 {
        self.current
    }

    /// Number of saved snapshots.
    #[inline]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Frame-end balance check.
    ///
    /// Reports [`TransformError::UnbalancedFrame`] if snapshots remain and drops
    /// them so the next frame starts from an empty stack.
    pub fn finish_frame(&mut self) -> Result<(), TransformError> {
        let depth = self.saved.len();
        if depth == 0 {
            return Ok(());
        }
        self.saved.clear();
        Err(TransformError::UnbalancedFrame { depth })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    fn assert_mat_eq(actual: Mat4, expected: Mat4) {
        assert!(
            actual.abs_diff_eq(expected, EPS),
            "matrices differ:\n actual   {actual:?}\n expected {expected:?}"
        );
    }

    // ── basics ────────────────────────────────────────────────────────────

    #[test]
    fn new_stack_is_identity_and_empty() {
        let stack = TransformStack::new();
        assert_eq!(stack.current(), Mat4::IDENTITY);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn reset_returns_to_identity() {
        let mut stack = TransformStack::new();
        stack.translate(Vec3::new(1.0, 2.0, 3.0));
        stack.rotate(0.3, Vec3::Z);
        stack.reset();
        assert_eq!(stack.current(), Mat4::IDENTITY);
    }

    #[test]
    fn reset_drops_leftover_snapshots() {
        let mut stack = TransformStack::new();
        stack.save();
        stack.save();
        stack.reset();
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.restore(), Err(TransformError::StackUnderflow));
    }

    #[test]
    fn translate_sets_fourth_column() {
        let mut stack = TransformStack::new();
        stack.translate(Vec3::new(-1.5, 0.0, -7.0));
        let cols = stack.current().to_cols_array();
        assert_eq!(&cols[12..16], &[-1.5, 0.0, -7.0, 1.0]);
    }

    #[test]
    fn rotate_normalizes_axis() {
        let mut a = TransformStack::new();
        let mut b = TransformStack::new();
        a.rotate(0.7, Vec3::new(1.0, 1.0, 1.0));
        b.rotate(0.7, Vec3::ONE.normalize());
        assert_mat_eq(a.current(), b.current());
    }

    #[test]
    fn rotate_degrees_matches_radians() {
        let mut a = TransformStack::new();
        let mut b = TransformStack::new();
        a.rotate_degrees(90.0, Vec3::X);
        b.rotate(FRAC_PI_2, Vec3::X);
        assert_mat_eq(a.current(), b.current());
    }

    // ── save / restore ────────────────────────────────────────────────────

    #[test]
    fn restore_on_empty_stack_underflows() {
        let mut stack = TransformStack::new();
        assert_eq!(stack.restore(), Err(TransformError::StackUnderflow));
    }

    #[test]
    fn failed_restore_keeps_current() {
        let mut stack = TransformStack::new();
        stack.translate(Vec3::X);
        let before = stack.current();
        assert!(stack.restore().is_err());
        assert_eq!(stack.current(), before);
    }

    #[test]
    fn saved_copy_is_independent_of_later_mutation() {
        let mut stack = TransformStack::new();
        stack.translate(Vec3::new(0.0, 0.0, -5.0));
        let saved = stack.current();

        stack.save();
        stack.rotate(1.0, Vec3::Y);
        stack.translate(Vec3::new(4.0, 0.0, 0.0));
        assert_ne!(stack.current(), saved);

        stack.restore().unwrap();
        assert_eq!(stack.current(), saved);
    }

    #[test]
    fn balanced_sequence_round_trips_current() {
        let mut stack = TransformStack::new();
        stack.translate(Vec3::new(0.5, -2.0, -3.0));
        let before = stack.current();

        for i in 0..5 {
            stack.save();
            stack.rotate(0.1 * i as f32 + 0.2, Vec3::new(1.0, 0.5, 0.0));
            stack.translate(Vec3::splat(i as f32));
        }
        assert_eq!(stack.depth(), 5);
        for _ in 0..5 {
            stack.restore().unwrap();
        }

        assert_eq!(stack.current(), before);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn restores_come_back_in_reverse_order() {
        let mut stack = TransformStack::new();

        stack.translate(Vec3::X);
        let level0 = stack.current();
        stack.save();

        stack.translate(Vec3::Y);
        let level1 = stack.current();
        stack.save();

        stack.translate(Vec3::Z);
        stack.save();
        let level2 = stack.current();

        stack.rotate(0.5, Vec3::Y);

        stack.restore().unwrap();
        assert_eq!(stack.current(), level2);
        stack.restore().unwrap();
        assert_eq!(stack.current(), level1);
        stack.restore().unwrap();
        assert_eq!(stack.current(), level0);
        assert_eq!(stack.restore(), Err(TransformError::StackUnderflow));
    }

    // ── composition order ─────────────────────────────────────────────────

    #[test]
    fn translate_then_rotate_matches_hand_computed_matrix() {
        let mut stack = TransformStack::new();
        stack.translate(Vec3::new(3.0, 0.0, 0.0));
        stack.rotate(FRAC_PI_2, Vec3::Y);

        // T(3,0,0) · Ry(90°), written out column by column.
        let expected = Mat4::from_cols_array(&[
            0.0, 0.0, -1.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, 0.0, //
            3.0, 0.0, 0.0, 1.0, //
        ]);
        assert_mat_eq(stack.current(), expected);
    }

    #[test]
    fn rotate_then_translate_moves_the_origin_elsewhere() {
        let mut stack = TransformStack::new();
        stack.rotate(FRAC_PI_2, Vec3::Y);
        stack.translate(Vec3::new(3.0, 0.0, 0.0));

        // Ry(90°) · T(3,0,0): the offset itself is rotated onto -Z.
        let expected = Mat4::from_cols_array(&[
            0.0, 0.0, -1.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, -3.0, 1.0, //
        ]);
        assert_mat_eq(stack.current(), expected);

        let mut other = TransformStack::new();
        other.translate(Vec3::new(3.0, 0.0, 0.0));
        other.rotate(FRAC_PI_2, Vec3::Y);
        assert!(!stack.current().abs_diff_eq(other.current(), EPS));
    }

    // ── scoped ────────────────────────────────────────────────────────────

    #[test]
    fn scoped_restores_after_closure() {
        let mut stack = TransformStack::new();
        stack.translate(Vec3::new(0.0, 0.0, -7.0));
        let before = stack.current();

        let inner = stack
            .scoped(|s| {
                s.rotate(1.2, Vec3::X);
                Ok(s.current())
            })
            .unwrap();

        assert_ne!(inner, before);
        assert_eq!(stack.current(), before);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn scoped_propagates_inner_underflow() {
        let mut stack = TransformStack::new();
        let result = stack.scoped(|s| {
            s.restore()?; // consumes the scope's own snapshot
            s.restore()
        });
        assert_eq!(result, Err(TransformError::StackUnderflow));
    }

    #[test]
    fn failed_scope_leaves_its_snapshot_until_reset() {
        let mut stack = TransformStack::new();
        stack.reset();
        let result: Result<(), TransformError> = stack.scoped(|s| {
            s.translate(Vec3::X);
            Err(TransformError::StackUnderflow)
        });

        assert_eq!(result, Err(TransformError::StackUnderflow));
        assert_eq!(stack.depth(), 1);

        stack.reset();
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.finish_frame(), Ok(()));
    }

    // ── frame balance ─────────────────────────────────────────────────────

    #[test]
    fn finish_frame_accepts_balanced_frame() {
        let mut stack = TransformStack::new();
        stack.reset();
        stack.save();
        stack.restore().unwrap();
        assert_eq!(stack.finish_frame(), Ok(()));
    }

    #[test]
    fn finish_frame_reports_and_clears_leftovers() {
        let mut stack = TransformStack::new();
        stack.save();
        stack.save();
        assert_eq!(
            stack.finish_frame(),
            Err(TransformError::UnbalancedFrame { depth: 2 })
        );
        assert_eq!(stack.depth(), 0);
    }
}
