use wgpu::util::DeviceExt;

use crate::geometry::{ColorVertex, Geometry, TexturedVertex, Topology, Vertices};
use crate::scene::{DrawCmd, DrawList, Material};

/// Vertex layout family of a mesh; selects the pipeline.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub(crate) enum VertexKind {
    Color,
    Textured,
}

impl VertexKind {
    pub(crate) fn of(vertices: &Vertices) -> Self {
        match vertices {
            Vertices::Color(_) => VertexKind::Color,
            Vertices::Textured(_) => VertexKind::Textured,
        }
    }

    /// Whether a mesh of this kind can be shaded with `material`.
    pub(crate) fn accepts(self, material: Material) -> bool {
        matches!(
            (self, material),
            (VertexKind::Color, Material::VertexColor) | (VertexKind::Textured, Material::Texture(_))
        )
    }

    pub(crate) fn layout(self) -> wgpu::VertexBufferLayout<'static> {
        const COLOR_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
            0 => Float32x3, // position
            1 => Float32x4  // color
        ];
        const TEXTURED_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
            0 => Float32x3, // position
            1 => Float32x2  // uv
        ];

        match self {
            VertexKind::Color => wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<ColorVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &COLOR_ATTRS,
            },
            VertexKind::Textured => wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<TexturedVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &TEXTURED_ATTRS,
            },
        }
    }
}

pub(crate) fn primitive_topology(topology: Topology) -> wgpu::PrimitiveTopology {
    match topology {
        Topology::TriangleList => wgpu::PrimitiveTopology::TriangleList,
        Topology::TriangleStrip => wgpu::PrimitiveTopology::TriangleStrip,
    }
}

/// Geometry resident on the GPU.
pub(crate) struct GpuMesh {
    pub(crate) kind: VertexKind,
    pub(crate) topology: Topology,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: Option<wgpu::Buffer>,
    pub(crate) element_count: u32,
}

impl GpuMesh {
    pub(crate) fn upload(device: &wgpu::Device, geometry: &Geometry) -> Self {
        let label = format!("lumen {} vbo", geometry.label);
        let contents: &[u8] = match &geometry.vertices {
            Vertices::Color(v) => bytemuck::cast_slice(v),
            Vertices::Textured(v) => bytemuck::cast_slice(v),
        };
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&label),
            contents,
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = geometry.indices.as_ref().map(|indices| {
            let label = format!("lumen {} ibo", geometry.label);
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&label),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            })
        });

        Self {
            kind: VertexKind::of(&geometry.vertices),
            topology: geometry.topology,
            vertex_buffer,
            index_buffer,
            element_count: geometry.element_count(),
        }
    }
}

/// Why a recorded draw was dropped.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Rejection {
    UnknownMesh,
    MaterialMismatch,
}

/// Splits `list` into drawable commands and the first rejection, if any.
///
/// `kinds[i]` is the vertex kind of `MeshId(i)`.
pub(crate) fn accepted_draws<'l>(
    kinds: &[VertexKind],
    list: &'l DrawList,
) -> (Vec<&'l DrawCmd>, Option<(usize, Rejection)>) {
    let mut accepted = Vec::with_capacity(list.len());
    let mut first_rejection = None;

    for (i, cmd) in list.items().iter().enumerate() {
        let verdict = match kinds.get(cmd.mesh.0) {
            None => Err(Rejection::UnknownMesh),
            Some(kind) if !kind.accepts(cmd.material) => Err(Rejection::MaterialMismatch),
            Some(_) => Ok(()),
        };
        match verdict {
            Ok(()) => accepted.push(cmd),
            Err(r) => {
                first_rejection.get_or_insert((i, r));
            }
        }
    }

    (accepted, first_rejection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{MeshId, SamplingMode};
    use glam::Mat4;

    #[test]
    fn material_must_match_vertex_kind() {
        assert!(VertexKind::Color.accepts(Material::VertexColor));
        assert!(VertexKind::Textured.accepts(Material::Texture(SamplingMode::Linear)));
        assert!(!VertexKind::Color.accepts(Material::Texture(SamplingMode::Nearest)));
        assert!(!VertexKind::Textured.accepts(Material::VertexColor));
    }

    #[test]
    fn layouts_match_vertex_sizes() {
        assert_eq!(VertexKind::Color.layout().array_stride, 28);
        assert_eq!(VertexKind::Textured.layout().array_stride, 20);
    }

    #[test]
    fn bad_draws_are_dropped_and_order_is_kept() {
        let kinds = [VertexKind::Color, VertexKind::Textured];
        let mut list = DrawList::new();
        list.push(MeshId(1), Material::Texture(SamplingMode::Nearest), Mat4::IDENTITY);
        list.push(MeshId(7), Material::VertexColor, Mat4::IDENTITY);
        list.push(MeshId(1), Material::VertexColor, Mat4::IDENTITY);
        list.push(MeshId(0), Material::VertexColor, Mat4::IDENTITY);

        let (ok, rejected) = accepted_draws(&kinds, &list);
        let meshes: Vec<usize> = ok.iter().map(|c| c.mesh.0).collect();
        assert_eq!(meshes, vec![1, 0]);
        assert_eq!(rejected, Some((1, Rejection::UnknownMesh)));
    }

    #[test]
    fn clean_list_has_no_rejection() {
        let mut list = DrawList::new();
        list.push(MeshId(0), Material::VertexColor, Mat4::IDENTITY);
        let (ok, rejected) = accepted_draws(&[VertexKind::Color], &list);
        assert_eq!(ok.len(), 1);
        assert_eq!(rejected, None);
    }
}
