use glam::Vec3;
use lumen_engine::geometry::{self, Geometry};
use lumen_engine::scene::{DrawList, Material, MeshId, Scene};
use lumen_engine::time::Spin;
use lumen_engine::transform::{TransformError, TransformStack};

const TRIANGLE: MeshId = MeshId(0);
const SQUARE: MeshId = MeshId(1);

/// Triangle spinning about Y next to a square spinning about X.
///
/// Each spin is applied inside a save/restore pair, so moving on to the square
/// starts from the triangle's unrotated position.
#[derive(Debug)]
pub struct Animation {
    triangle: Spin,
    square: Spin,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            triangle: Spin::new(90.0),
            square: Spin::new(75.0),
        }
    }
}

impl Scene for Animation {
    fn title(&self) -> &str {
        "basic animation"
    }

    fn meshes(&self) -> Vec<Geometry> {
        vec![geometry::triangle(), geometry::square([0.5, 0.5, 1.0, 1.0])]
    }

    fn draw(&self, stack: &mut TransformStack, list: &mut DrawList) -> Result<(), TransformError> {
        stack.translate(Vec3::new(-1.5, 0.0, -7.0));
        stack.save();
        stack.rotate_degrees(self.triangle.degrees, Vec3::Y);
        list.push(TRIANGLE, Material::VertexColor, stack.current());
        stack.restore()?;

        stack.translate(Vec3::new(3.0, 0.0, 0.0));
        stack.save();
        stack.rotate_degrees(self.square.degrees, Vec3::X);
        list.push(SQUARE, Material::VertexColor, stack.current());
        stack.restore()?;
        Ok(())
    }

    fn animate(&mut self, dt: f32) {
        self.triangle.advance(dt);
        self.square.advance(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::testing::{assert_mat_eq, record};
    use glam::Mat4;

    #[test]
    fn spins_do_not_leak_into_the_square_position() {
        let mut scene = Animation::default();
        scene.animate(1.0);
        let list = record(&scene).unwrap();

        let tri = Mat4::from_translation(Vec3::new(-1.5, 0.0, -7.0))
            * Mat4::from_rotation_y(90f32.to_radians());
        let square = Mat4::from_translation(Vec3::new(1.5, 0.0, -7.0))
            * Mat4::from_rotation_x(75f32.to_radians());
        assert_mat_eq(list.items()[0].model_view, tri);
        assert_mat_eq(list.items()[1].model_view, square);
    }

    #[test]
    fn rates_are_per_second() {
        let mut scene = Animation::default();
        for _ in 0..30 {
            scene.animate(1.0 / 60.0);
        }
        assert!((scene.triangle.degrees - 45.0).abs() < 1e-3);
        assert!((scene.square.degrees - 37.5).abs() < 1e-3);
    }
}
