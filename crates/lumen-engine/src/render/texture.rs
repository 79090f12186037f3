use std::path::Path;

use anyhow::{Context, Result};
use image::{imageops, Rgba, RgbaImage};

use crate::scene::SamplingMode;

/// RGBA8 image for the textured scenes, stored bottom row first.
///
/// Texture coordinate (0, 0) is the bottom-left corner of the source picture,
/// so rows are flipped once when the image is created.
#[derive(Debug, Clone)]
pub struct TextureImage {
    pixels: RgbaImage,
}

impl TextureImage {
    /// Decodes an image file (PNG, JPEG, BMP or GIF).
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let decoded = image::load_from_memory(&bytes)
            .with_context(|| format!("failed to decode {}", path.display()))?;
        Ok(Self::from_top_down(decoded.to_rgba8()))
    }

    /// Loads `path` if given; otherwise, or if loading fails, a checkerboard.
    pub fn load_or_checkerboard(path: Option<&Path>) -> Self {
        match path {
            Some(path) => match Self::load(path) {
                Ok(img) => {
                    log::info!("loaded texture {} ({}x{})", path.display(), img.width(), img.height());
                    img
                }
                Err(e) => {
                    log::warn!("{e:#}; using checkerboard texture");
                    Self::checkerboard(256, 8)
                }
            },
            None => {
                log::debug!("no texture given; using checkerboard texture");
                Self::checkerboard(256, 8)
            }
        }
    }

    /// Two-tone wooden checkerboard with a darker border, `cells` squares per side.
    pub fn checkerboard(size: u32, cells: u32) -> Self {
        const LIGHT: Rgba<u8> = Rgba([196, 146, 84, 255]);
        const DARK: Rgba<u8> = Rgba([139, 94, 46, 255]);
        const EDGE: Rgba<u8> = Rgba([84, 54, 24, 255]);

        let size = size.max(1);
        let cell = (size / cells.max(1)).max(1);
        let border = (size / 32).max(1);

        let pixels = RgbaImage::from_fn(size, size, |x, y| {
            if x < border || y < border || x >= size - border || y >= size - border {
                EDGE
            } else if ((x / cell) + (y / cell)) % 2 == 0 {
                LIGHT
            } else {
                DARK
            }
        });
        Self::from_top_down(pixels)
    }

    fn from_top_down(mut pixels: RgbaImage) -> Self {
        imageops::flip_vertical_in_place(&mut pixels);
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Number of levels in a full mip chain down to 1×1.
    pub fn mip_level_count(&self) -> u32 {
        32 - self.width().max(self.height()).max(1).leading_zeros()
    }

    /// Level 0 followed by successive halvings (box-filtered), ending at 1×1.
    pub(crate) fn mip_chain(&self) -> Vec<RgbaImage> {
        let mut levels = Vec::with_capacity(self.mip_level_count() as usize);
        levels.push(self.pixels.clone());

        for _ in 1..self.mip_level_count() {
            let Some(prev) = levels.last() else { break };
            let w = (prev.width() / 2).max(1);
            let h = (prev.height() / 2).max(1);
            let next = imageops::resize(prev, w, h, imageops::FilterType::Triangle);
            levels.push(next);
        }
        levels
    }

    /// Row `y` counted from the bottom of the picture.
    #[cfg(test)]
    fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }
}

/// Uploaded texture plus one bind group per [`SamplingMode`].
pub(crate) struct SceneTexture {
    bind_groups: [wgpu::BindGroup; 3],
}

impl SceneTexture {
    pub(crate) fn bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("lumen texture bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        })
    }

    pub(crate) fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        image: &TextureImage,
        srgb: bool,
    ) -> Self {
        let levels = image.mip_chain();
        let format = if srgb {
            wgpu::TextureFormat::Rgba8UnormSrgb
        } else {
            wgpu::TextureFormat::Rgba8Unorm
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("lumen scene texture"),
            size: wgpu::Extent3d {
                width: image.width(),
                height: image.height(),
                depth_or_array_layers: 1,
            },
            mip_level_count: levels.len() as u32,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        for (mip_level, level) in levels.iter().enumerate() {
            let (w, h) = level.dimensions();
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level: mip_level as u32,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                level.as_raw(),
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * w),
                    rows_per_image: Some(h),
                },
                wgpu::Extent3d { width: w, height: h, depth_or_array_layers: 1 },
            );
        }

        // Non-mipmapped modes only ever see level 0.
        let base_view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("lumen scene texture base level"),
            base_mip_level: 0,
            mip_level_count: Some(1),
            ..Default::default()
        });
        let full_view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let bind_groups = SamplingMode::ALL.map(|mode| {
            let sampler = create_sampler(device, mode);
            let view = match mode {
                SamplingMode::LinearMipmap => &full_view,
                SamplingMode::Nearest | SamplingMode::Linear => &base_view,
            };
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(mode.label()),
                layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&sampler),
                    },
                ],
            })
        });

        log::debug!(
            "uploaded scene texture {}x{} with {} mip levels",
            image.width(),
            image.height(),
            levels.len()
        );

        Self { bind_groups }
    }

    pub(crate) fn bind_group(&self, mode: SamplingMode) -> &wgpu::BindGroup {
        &self.bind_groups[mode.index()]
    }
}

fn create_sampler(device: &wgpu::Device, mode: SamplingMode) -> wgpu::Sampler {
    let (mag_filter, min_filter) = match mode {
        SamplingMode::Nearest => (wgpu::FilterMode::Nearest, wgpu::FilterMode::Nearest),
        SamplingMode::Linear | SamplingMode::LinearMipmap => {
            (wgpu::FilterMode::Linear, wgpu::FilterMode::Linear)
        }
    };

    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some(mode.label()),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter,
        min_filter,
        mipmap_filter: wgpu::MipmapFilterMode::Nearest,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mip_count_covers_largest_side() {
        assert_eq!(TextureImage::checkerboard(256, 8).mip_level_count(), 9);
        assert_eq!(TextureImage::checkerboard(1, 1).mip_level_count(), 1);
    }

    #[test]
    fn mip_chain_halves_to_one_pixel() {
        let levels = TextureImage::checkerboard(64, 4).mip_chain();
        let sizes: Vec<u32> = levels.iter().map(|l| l.width()).collect();
        assert_eq!(sizes, vec![64, 32, 16, 8, 4, 2, 1]);
        assert!(levels.iter().all(|l| l.width() == l.height()));
    }

    #[test]
    fn non_square_chain_clamps_short_side() {
        let img = TextureImage::from_top_down(RgbaImage::new(8, 2));
        let sizes: Vec<(u32, u32)> = img.mip_chain().iter().map(|l| l.dimensions()).collect();
        assert_eq!(sizes, vec![(8, 2), (4, 1), (2, 1), (1, 1)]);
    }

    #[test]
    fn rows_are_flipped_on_creation() {
        let mut top_down = RgbaImage::new(2, 2);
        top_down.put_pixel(0, 0, Rgba([255, 0, 0, 255])); // top-left
        let img = TextureImage::from_top_down(top_down);
        assert_eq!(img.pixel(0, 1), Rgba([255, 0, 0, 255]));
        assert_eq!(img.pixel(0, 0), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn missing_file_falls_back_to_checkerboard() {
        let img = TextureImage::load_or_checkerboard(Some(Path::new("/nonexistent/crate.gif")));
        assert_eq!((img.width(), img.height()), (256, 256));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = TextureImage::load(Path::new("/nonexistent/crate.gif")).unwrap_err();
        assert!(format!("{err:#}").contains("crate.gif"));
    }
}
