use glam::Mat4;

use super::Material;

/// Index of a mesh in the scene's [`meshes`](super::Scene::meshes) list.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MeshId(pub usize);

/// One draw call: which mesh, how to shade it, and where to put it.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCmd {
    pub mesh: MeshId,
    pub material: Material,
    /// Model-view matrix captured from the transform stack at record time.
    pub model_view: Mat4,
}
