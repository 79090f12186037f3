use std::fmt;

/// Texture filtering configuration.
///
/// Cycles `Nearest -> Linear -> LinearMipmap -> Nearest`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum SamplingMode {
    /// Nearest texel for both magnification and minification. Blocky when scaled.
    #[default]
    Nearest,
    /// Bilinear for both directions; smooth but blurry up close.
    Linear,
    /// Bilinear magnification, mipmapped minification.
    LinearMipmap,
}

impl SamplingMode {
    pub const ALL: [SamplingMode; 3] = [
        SamplingMode::Nearest,
        SamplingMode::Linear,
        SamplingMode::LinearMipmap,
    ];

    /// The next mode in the cycle.
    pub fn next(self) -> Self {
        match self {
            SamplingMode::Nearest => SamplingMode::Linear,
            SamplingMode::Linear => SamplingMode::LinearMipmap,
            SamplingMode::LinearMipmap => SamplingMode::Nearest,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SamplingMode::Nearest => "NEAREST",
            SamplingMode::Linear => "LINEAR",
            SamplingMode::LinearMipmap => "LINEAR/MIPMAP",
        }
    }

    /// Position in [`SamplingMode::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SamplingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a mesh is shaded.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Material {
    /// Interpolated per-vertex colours. Requires colour vertices.
    VertexColor,
    /// The scene texture, sampled with the given mode. Requires textured vertices.
    Texture(SamplingMode),
}
