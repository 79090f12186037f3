use glam::Vec3;
use lumen_engine::geometry::{self, Geometry};
use lumen_engine::scene::{DrawList, Material, MeshId, Scene};
use lumen_engine::transform::{TransformError, TransformStack};

const TRIANGLE: MeshId = MeshId(0);
const SQUARE: MeshId = MeshId(1);
const WHITE: [f32; 4] = [1.0; 4];

/// Static white triangle and square side by side.
#[derive(Debug, Default)]
pub struct SquareTriangle;

impl Scene for SquareTriangle {
    fn title(&self) -> &str {
        "square and triangle"
    }

    fn meshes(&self) -> Vec<Geometry> {
        vec![geometry::flat_triangle(WHITE), geometry::square(WHITE)]
    }

    fn draw(&self, stack: &mut TransformStack, list: &mut DrawList) -> Result<(), TransformError> {
        stack.translate(Vec3::new(-1.5, 0.0, -5.0));
        list.push(TRIANGLE, Material::VertexColor, stack.current());

        // Relative to the triangle: 1.5 right of centre.
        stack.translate(Vec3::new(3.0, 0.0, 0.0));
        list.push(SQUARE, Material::VertexColor, stack.current());
        Ok(())
    }

    fn animate(&mut self, _dt: f32) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::testing::record;
    use glam::Mat4;

    #[test]
    fn square_sits_right_of_the_triangle() {
        let list = record(&SquareTriangle).unwrap();
        let items = list.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].mesh, TRIANGLE);
        assert_eq!(items[0].model_view, Mat4::from_translation(Vec3::new(-1.5, 0.0, -5.0)));
        assert_eq!(items[1].model_view, Mat4::from_translation(Vec3::new(1.5, 0.0, -5.0)));
    }
}
