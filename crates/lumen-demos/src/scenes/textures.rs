use glam::Vec3;
use lumen_engine::geometry::{self, Geometry};
use lumen_engine::scene::{DrawList, Material, MeshId, SamplingMode, Scene};
use lumen_engine::time::Spin;
use lumen_engine::transform::{TransformError, TransformStack};

const CUBE: MeshId = MeshId(0);

/// Textured cube rotating about all three axes at different rates.
#[derive(Debug)]
pub struct Textures {
    x: Spin,
    y: Spin,
    z: Spin,
}

impl Default for Textures {
    fn default() -> Self {
        Self {
            x: Spin::new(25.0),
            y: Spin::new(90.0),
            z: Spin::new(90.0),
        }
    }
}

impl Scene for Textures {
    fn title(&self) -> &str {
        "3D textures"
    }

    fn meshes(&self) -> Vec<Geometry> {
        vec![geometry::textured_cube()]
    }

    fn draw(&self, stack: &mut TransformStack, list: &mut DrawList) -> Result<(), TransformError> {
        stack.translate(Vec3::new(0.0, 0.0, -5.0));
        stack.rotate_degrees(self.x.degrees, Vec3::X);
        stack.rotate_degrees(self.y.degrees, Vec3::Y);
        stack.rotate_degrees(self.z.degrees, Vec3::Z);
        list.push(CUBE, Material::Texture(SamplingMode::Nearest), stack.current());
        Ok(())
    }

    fn animate(&mut self, dt: f32) {
        self.x.advance(dt);
        self.y.advance(dt);
        self.z.advance(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::testing::{assert_mat_eq, record};
    use glam::Mat4;

    #[test]
    fn rotations_apply_x_then_y_then_z() {
        let mut scene = Textures::default();
        scene.animate(1.0);
        let list = record(&scene).unwrap();

        let expected = Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0))
            * Mat4::from_rotation_x(25f32.to_radians())
            * Mat4::from_rotation_y(90f32.to_radians())
            * Mat4::from_rotation_z(90f32.to_radians());
        assert_mat_eq(list.items()[0].model_view, expected);
        assert_eq!(list.items()[0].material, Material::Texture(SamplingMode::Nearest));
    }
}
