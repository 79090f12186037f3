use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Per-draw uniform block (128 bytes), matching `DrawUniform` in the shaders.
///
///  offset   0  projection  mat4x4<f32>  column-major
///  offset  64  model_view  mat4x4<f32>  column-major
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(crate) struct DrawUniform {
    projection: [f32; 16],
    model_view: [f32; 16],
}

impl DrawUniform {
    pub(crate) const SIZE: u64 = std::mem::size_of::<DrawUniform>() as u64;

    pub(crate) fn new(projection: Mat4, model_view: Mat4) -> Self {
        Self {
            projection: projection.to_cols_array(),
            model_view: model_view.to_cols_array(),
        }
    }
}

/// Distance between consecutive uniforms in the dynamic-offset buffer.
pub(crate) fn uniform_stride(alignment: u32) -> u64 {
    let alignment = u64::from(alignment.max(1));
    DrawUniform::SIZE.div_ceil(alignment) * alignment
}

/// Packs `uniforms` at `stride` byte intervals; the gaps are zeroed.
pub(crate) fn pack_uniforms(uniforms: &[DrawUniform], stride: u64) -> Vec<u8> {
    let stride = stride as usize;
    let mut bytes = vec![0u8; uniforms.len() * stride];
    for (chunk, u) in bytes.chunks_exact_mut(stride).zip(uniforms) {
        chunk[..DrawUniform::SIZE as usize].copy_from_slice(bytemuck::bytes_of(u));
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn uniform_is_two_matrices() {
        assert_eq!(DrawUniform::SIZE, 128);
    }

    #[test]
    fn stride_rounds_up_to_alignment() {
        assert_eq!(uniform_stride(256), 256);
        assert_eq!(uniform_stride(64), 128);
        assert_eq!(uniform_stride(0), 128);
    }

    #[test]
    fn model_view_lands_after_projection() {
        let mv = Mat4::from_translation(Vec3::new(-1.5, 0.0, -7.0));
        let u = DrawUniform::new(Mat4::IDENTITY, mv);
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&u));
        assert_eq!(floats[0], 1.0);
        assert_eq!(&floats[16 + 12..], &[-1.5, 0.0, -7.0, 1.0]);
    }

    #[test]
    fn packed_uniforms_start_on_stride_boundaries() {
        let a = DrawUniform::new(Mat4::IDENTITY, Mat4::IDENTITY);
        let b = DrawUniform::new(Mat4::from_scale(Vec3::splat(2.0)), Mat4::IDENTITY);
        let bytes = pack_uniforms(&[a, b], 256);
        assert_eq!(bytes.len(), 512);
        assert_eq!(&bytes[..128], bytemuck::bytes_of(&a));
        assert!(bytes[128..256].iter().all(|&x| x == 0));
        assert_eq!(&bytes[256..384], bytemuck::bytes_of(&b));
    }
}
