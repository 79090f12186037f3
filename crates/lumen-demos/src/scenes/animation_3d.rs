use glam::Vec3;
use lumen_engine::geometry::{self, Geometry};
use lumen_engine::scene::{DrawList, Material, MeshId, Scene};
use lumen_engine::time::Spin;
use lumen_engine::transform::{TransformError, TransformStack};

const PYRAMID: MeshId = MeshId(0);
const CUBE: MeshId = MeshId(1);

/// Pyramid turning about Y and a colour cube tumbling about (1, 1, 1).
#[derive(Debug)]
pub struct Animation3d {
    pyramid: Spin,
    cube: Spin,
}

impl Default for Animation3d {
    fn default() -> Self {
        Self {
            pyramid: Spin::new(90.0),
            cube: Spin::new(-75.0),
        }
    }
}

impl Scene for Animation3d {
    fn title(&self) -> &str {
        "3D animation"
    }

    fn meshes(&self) -> Vec<Geometry> {
        vec![geometry::pyramid(), geometry::color_cube()]
    }

    fn draw(&self, stack: &mut TransformStack, list: &mut DrawList) -> Result<(), TransformError> {
        stack.translate(Vec3::new(-1.5, 0.0, -7.0));
        stack.scoped(|s| {
            s.rotate_degrees(self.pyramid.degrees, Vec3::Y);
            list.push(PYRAMID, Material::VertexColor, s.current());
            Ok(())
        })?;

        stack.translate(Vec3::new(3.0, 0.0, 0.0));
        stack.scoped(|s| {
            s.rotate_degrees(self.cube.degrees, Vec3::ONE);
            list.push(CUBE, Material::VertexColor, s.current());
            Ok(())
        })
    }

    fn animate(&mut self, dt: f32) {
        self.pyramid.advance(dt);
        self.cube.advance(dt);
    }
}
