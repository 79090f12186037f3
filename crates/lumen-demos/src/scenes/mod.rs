//! The tutorial scenes.

mod animation;
mod animation_3d;
mod keyboard_filters;
mod orbit;
mod square_triangle;
mod textures;

use clap::ValueEnum;
use lumen_engine::scene::Scene;

pub use animation::Animation;
pub use animation_3d::Animation3d;
pub use keyboard_filters::KeyboardFilters;
pub use orbit::Orbit;
pub use square_triangle::SquareTriangle;
pub use textures::Textures;

/// Scene names accepted on the command line.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, ValueEnum)]
pub enum SceneName {
    SquareTriangle,
    Animation,
    #[value(name = "animation-3d")]
    Animation3d,
    Textures,
    KeyboardFilters,
    #[default]
    Orbit,
}

impl SceneName {
    pub fn build(self) -> Box<dyn Scene> {
        match self {
            SceneName::SquareTriangle => Box::new(SquareTriangle),
            SceneName::Animation => Box::new(Animation::default()),
            SceneName::Animation3d => Box::new(Animation3d::default()),
            SceneName::Textures => Box::new(Textures::default()),
            SceneName::KeyboardFilters => Box::new(KeyboardFilters::default()),
            SceneName::Orbit => Box::new(Orbit::default()),
        }
    }

    /// The name as typed on the command line.
    pub fn cli_name(self) -> String {
        self.to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use glam::Mat4;
    use lumen_engine::scene::{DrawList, Scene};
    use lumen_engine::transform::{TransformError, TransformStack};

    /// Records one frame the way the driver does.
    pub(crate) fn record(scene: &dyn Scene) -> Result<DrawList, TransformError> {
        let mut stack = TransformStack::new();
        let mut list = DrawList::new();
        stack.reset();
        scene.draw(&mut stack, &mut list)?;
        stack.finish_frame()?;
        Ok(list)
    }

    pub(crate) fn assert_mat_eq(actual: Mat4, expected: Mat4) {
        assert!(
            actual.abs_diff_eq(expected, 1e-5),
            "matrices differ:\n actual   {actual:?}\n expected {expected:?}"
        );
    }
}
