use thiserror::Error;

/// Save/restore misuse detected by [`TransformStack`](super::TransformStack).
///
/// Both variants are programming errors in scene code. They abort the draw pass
/// of the frame in which they occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransformError {
    /// `restore()` was called with no saved snapshot.
    #[error("transform stack underflow: restore() without a matching save()")]
    StackUnderflow,

    /// The frame ended with saved snapshots still on the stack.
    #[error("unbalanced frame: {depth} saved transform(s) were never restored")]
    UnbalancedFrame { depth: usize },
}
