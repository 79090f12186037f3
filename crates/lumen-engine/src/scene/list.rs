use glam::Mat4;

use super::{DrawCmd, Material, MeshId};

/// Draw calls recorded during one frame, in submission order.
///
/// Cleared at the start of every frame; capacity is kept for reuse.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Records a draw of `mesh` at `model_view`.
    #[inline]
    pub fn push(&mut self, mesh: MeshId, material: Material, model_view: Mat4) {
        self.items.push(DrawCmd {
            mesh,
            material,
            model_view,
        });
    }

    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
