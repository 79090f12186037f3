use glam::Vec3;
use lumen_engine::geometry::{self, Geometry};
use lumen_engine::input::Key;
use lumen_engine::scene::{DrawList, Material, MeshId, SamplingMode, Scene, SceneInput};
use lumen_engine::time::Spin;
use lumen_engine::transform::{TransformError, TransformStack};

const CUBE: MeshId = MeshId(0);

const ZOOM_STEP: f32 = 0.05;
const SPEED_STEP: f32 = 1.0;

/// Textured cube steered from the keyboard.
///
/// - `E` / `W`: move away / closer (held)
/// - Left / Right: spin slower / faster about Y (held, per frame)
/// - Up / Down: spin slower / faster about X (held, per frame)
/// - `F`: next texture filter
#[derive(Debug)]
pub struct KeyboardFilters {
    z: f32,
    x_rot: Spin,
    y_rot: Spin,
    filter: SamplingMode,
}

impl Default for KeyboardFilters {
    fn default() -> Self {
        Self {
            z: -5.0,
            x_rot: Spin::new(0.0),
            y_rot: Spin::new(0.0),
            filter: SamplingMode::Nearest,
        }
    }
}

impl Scene for KeyboardFilters {
    fn title(&self) -> &str {
        "keyboard and texture filters"
    }

    fn meshes(&self) -> Vec<Geometry> {
        vec![geometry::textured_cube()]
    }

    fn handle_keys(&mut self, input: &SceneInput<'_>) {
        let held = |key| input.keys.key_down(key);

        if held(Key::E) {
            self.z -= ZOOM_STEP;
        }
        if held(Key::W) {
            self.z += ZOOM_STEP;
        }
        if held(Key::ArrowLeft) {
            self.y_rot.rate -= SPEED_STEP;
        }
        if held(Key::ArrowRight) {
            self.y_rot.rate += SPEED_STEP;
        }
        if held(Key::ArrowUp) {
            self.x_rot.rate -= SPEED_STEP;
        }
        if held(Key::ArrowDown) {
            self.x_rot.rate += SPEED_STEP;
        }

        if input.frame.pressed(Key::F) {
            self.filter = self.filter.next();
            log::info!("texture filter: {}", self.filter);
        }
    }

    fn draw(&self, stack: &mut TransformStack, list: &mut DrawList) -> Result<(), TransformError> {
        stack.translate(Vec3::new(0.0, 0.0, self.z));
        stack.rotate_degrees(self.x_rot.degrees, Vec3::X);
        stack.rotate_degrees(self.y_rot.degrees, Vec3::Y);
        list.push(CUBE, Material::Texture(self.filter), stack.current());
        Ok(())
    }

    fn animate(&mut self, dt: f32) {
        self.x_rot.advance(dt);
        self.y_rot.advance(dt);
    }
}
