//! CPU-side geometry for the tutorial primitives.
//!
//! Geometry is plain data: vertex arrays, optional `u16` indices and a topology.
//! The render layer uploads it once and refers to it by `MeshId` afterwards.
//!
//! Model space: unit-ish shapes centred on the origin, +Y up, front faces toward +Z.

mod primitives;
mod vertex;

pub use primitives::{color_cube, flat_triangle, pyramid, square, textured_cube, triangle};
pub use vertex::{ColorVertex, TexturedVertex};

/// How consecutive vertices form triangles.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    TriangleList,
    TriangleStrip,
}

/// Vertex data of a mesh; the variant decides which pipeline can draw it.
#[derive(Debug, Clone, PartialEq)]
pub enum Vertices {
    Color(Vec<ColorVertex>),
    Textured(Vec<TexturedVertex>),
}

impl Vertices {
    pub fn len(&self) -> usize {
        match self {
            Vertices::Color(v) => v.len(),
            Vertices::Textured(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A drawable shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub label: &'static str,
    pub vertices: Vertices,
    pub indices: Option<Vec<u16>>,
    pub topology: Topology,
}

impl Geometry {
    /// Number of vertices (or indices, when indexed) consumed by one draw.
    pub fn element_count(&self) -> u32 {
        match &self.indices {
            Some(indices) => indices.len() as u32,
            None => self.vertices.len() as u32,
        }
    }

    /// True when every index refers to an existing vertex.
    pub fn indices_in_bounds(&self) -> bool {
        let n = self.vertices.len();
        self.indices
            .as_ref()
            .is_none_or(|ix| ix.iter().all(|&i| (i as usize) < n))
    }
}
