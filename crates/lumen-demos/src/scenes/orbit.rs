use glam::Vec3;
use lumen_engine::geometry::{self, Geometry};
use lumen_engine::scene::{DrawList, Material, MeshId, Scene};
use lumen_engine::time::Spin;
use lumen_engine::transform::{TransformError, TransformStack};

const TRIANGLE: MeshId = MeshId(0);
const SQUARE: MeshId = MeshId(1);

/// Triangle and square orbiting a common centre while each spins on its own axis.
///
/// The scene rotation is the parent of both shapes; each shape's own spin is
/// applied in a nested save/restore so it only affects that shape.
#[derive(Debug)]
pub struct Orbit {
    scene: Spin,
    triangle: Spin,
    square: Spin,
}

impl Default for Orbit {
    fn default() -> Self {
        Self {
            scene: Spin::new(90.0),
            triangle: Spin::new(270.0),
            square: Spin::new(360.0),
        }
    }
}

impl Scene for Orbit {
    fn title(&self) -> &str {
        "orbit animation"
    }

    fn meshes(&self) -> Vec<Geometry> {
        vec![geometry::triangle(), geometry::square([0.5, 0.5, 1.0, 1.0])]
    }

    fn draw(&self, stack: &mut TransformStack, list: &mut DrawList) -> Result<(), TransformError> {
        stack.translate(Vec3::new(0.0, 0.0, -7.0));

        stack.save();
        stack.rotate_degrees(self.scene.degrees, Vec3::Y);

        stack.save();
        stack.translate(Vec3::new(-1.5, 0.0, 0.0));
        stack.rotate_degrees(self.triangle.degrees, Vec3::Y);
        list.push(TRIANGLE, Material::VertexColor, stack.current());
        stack.restore()?;

        stack.save();
        stack.translate(Vec3::new(1.5, 0.0, 0.0));
        stack.rotate_degrees(self.square.degrees, Vec3::X);
        list.push(SQUARE, Material::VertexColor, stack.current());
        stack.restore()?;

        // Scene level.
        stack.restore()?;
        Ok(())
    }

    fn animate(&mut self, dt: f32) {
        self.scene.advance(dt);
        self.triangle.advance(dt);
        self.square.advance(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::testing::{assert_mat_eq, record};
    use glam::Mat4;

    fn expected(scene: f32, tri: f32, square: f32) -> (Mat4, Mat4) {
        let parent = Mat4::from_translation(Vec3::new(0.0, 0.0, -7.0))
            * Mat4::from_rotation_y(scene.to_radians());
        (
            parent
                * Mat4::from_translation(Vec3::new(-1.5, 0.0, 0.0))
                * Mat4::from_rotation_y(tri.to_radians()),
            parent
                * Mat4::from_translation(Vec3::new(1.5, 0.0, 0.0))
                * Mat4::from_rotation_x(square.to_radians()),
        )
    }

    #[test]
    fn first_frame_is_the_rest_pose() {
        let list = record(&Orbit::default()).unwrap();
        let (tri, square) = expected(0.0, 0.0, 0.0);
        assert_mat_eq(list.items()[0].model_view, tri);
        assert_mat_eq(list.items()[1].model_view, square);
    }

    #[test]
    fn children_combine_scene_and_own_spin() {
        let mut scene = Orbit::default();
        scene.animate(0.1); // scene 9°, triangle 27°, square 36°
        let list = record(&scene).unwrap();

        let (tri, square) = expected(9.0, 27.0, 36.0);
        assert_mat_eq(list.items()[0].model_view, tri);
        assert_mat_eq(list.items()[1].model_view, square);
    }

    #[test]
    fn leaves_the_stack_balanced() {
        let mut stack = TransformStack::new();
        let mut list = DrawList::new();
        Orbit::default().draw(&mut stack, &mut list).unwrap();
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.current(), Mat4::from_translation(Vec3::new(0.0, 0.0, -7.0)));
    }
}
