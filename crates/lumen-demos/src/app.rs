use lumen_engine::core::{App, AppControl, FrameCtx};
use lumen_engine::input::Key;
use lumen_engine::render::{MeshRenderer, TextureImage};
use lumen_engine::scene::{DrawList, Scene, SceneInput};
use lumen_engine::transform::{TransformError, TransformStack};

const CLEAR: wgpu::Color = wgpu::Color::BLACK;

/// Per-tick scene driving, independent of the window and GPU.
///
/// Owns the transform stack and the draw list and lends them to the scene.
/// Time from aborted ticks is banked and handed to the next `animate`, so an
/// aborted frame delays animation without losing it.
pub struct SceneDriver {
    scene: Box<dyn Scene>,
    stack: TransformStack,
    list: DrawList,
    skipped_dt: f32,
}

impl SceneDriver {
    pub fn new(scene: Box<dyn Scene>) -> Self {
        Self {
            scene,
            stack: TransformStack::new(),
            list: DrawList::new(),
            skipped_dt: 0.0,
        }
    }

    /// Polls keys and records this tick's draw calls.
    ///
    /// On error the recorded list must not be rendered and `animate` should not
    /// be called for this tick; its `dt` is carried over.
    pub fn record(&mut self, input: &SceneInput<'_>) -> Result<&DrawList, TransformError> {
        self.scene.handle_keys(input);

        if let Err(e) = self.draw() {
            self.skipped_dt += input.dt;
            return Err(e);
        }
        Ok(&self.list)
    }

    fn draw(&mut self) -> Result<(), TransformError> {
        self.stack.reset();
        self.list.clear();
        self.scene.draw(&mut self.stack, &mut self.list)?;
        self.stack.finish_frame()
    }

    /// Advances the scene by `dt` plus any time banked by aborted ticks.
    pub fn animate(&mut self, dt: f32) {
        self.scene.animate(dt + self.skipped_dt);
        self.skipped_dt = 0.0;
    }
}

/// Window-facing app: one scene, one mesh renderer.
pub struct DemoApp {
    driver: SceneDriver,
    renderer: MeshRenderer,
}

impl DemoApp {
    pub fn new(scene: Box<dyn Scene>, texture: Option<TextureImage>) -> Self {
        let renderer = MeshRenderer::new(scene.meshes(), texture);
        Self {
            driver: SceneDriver::new(scene),
            renderer,
        }
    }
}

impl App for DemoApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.pressed(Key::Escape) {
            return AppControl::Exit;
        }

        let input = SceneInput {
            keys: ctx.input,
            frame: ctx.input_frame,
            dt: ctx.time.dt,
        };

        let list = match self.driver.record(&input) {
            Ok(list) => list,
            Err(e) => {
                // The frame is dropped; the next tick starts from a reset stack.
                log::error!("frame {} aborted: {e}", ctx.time.frame_index);
                return AppControl::Continue;
            }
        };

        let renderer = &mut self.renderer;
        let control = ctx.render(CLEAR, |rctx, target| renderer.render(rctx, target, list));

        self.driver.animate(ctx.time.dt);
        control
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use lumen_engine::geometry::{self, Geometry};
    use lumen_engine::input::{InputFrame, InputState};
    use lumen_engine::scene::{Material, MeshId};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Misbehaves on demand: pops once too often or leaves a push behind.
    #[derive(Default)]
    struct Faulty {
        extra_pop: Rc<Cell<bool>>,
        missing_pop: bool,
        animated: Rc<Cell<f32>>,
    }

    impl Scene for Faulty {
        fn title(&self) -> &str {
            "faulty"
        }

        fn meshes(&self) -> Vec<Geometry> {
            vec![geometry::triangle()]
        }

        fn draw(&self, stack: &mut TransformStack, list: &mut DrawList) -> Result<(), TransformError> {
            stack.translate(Vec3::new(0.0, 0.0, -5.0));
            stack.save();
            list.push(MeshId(0), Material::VertexColor, stack.current());
            if !self.missing_pop {
                stack.restore()?;
            }
            if self.extra_pop.get() {
                stack.restore()?;
            }
            Ok(())
        }

        fn animate(&mut self, dt: f32) {
            self.animated.set(self.animated.get() + dt);
        }
    }

    fn driver(extra_pop: bool, missing_pop: bool) -> SceneDriver {
        SceneDriver::new(Box::new(Faulty {
            extra_pop: Rc::new(Cell::new(extra_pop)),
            missing_pop,
            ..Default::default()
        }))
    }

    fn record(driver: &mut SceneDriver, dt: f32) -> Result<usize, TransformError> {
        let keys = InputState::default();
        let frame = InputFrame::default();
        let input = SceneInput {
            keys: &keys,
            frame: &frame,
            dt,
        };
        driver.record(&input).map(|list| list.len())
    }

    #[test]
    fn balanced_scene_records_its_draws() {
        let mut d = driver(false, false);
        assert_eq!(record(&mut d, 0.016), Ok(1));
        assert_eq!(record(&mut d, 0.016), Ok(1), "list is cleared between ticks");
    }

    #[test]
    fn extra_pop_aborts_the_frame() {
        let mut d = driver(true, false);
        assert_eq!(record(&mut d, 0.016), Err(TransformError::StackUnderflow));
    }

    #[test]
    fn missing_pop_is_reported_at_frame_end() {
        let mut d = driver(false, true);
        assert_eq!(record(&mut d, 0.016), Err(TransformError::UnbalancedFrame { depth: 1 }));
        // Leftovers are gone: the next frame reports the same single level again.
        assert_eq!(record(&mut d, 0.016), Err(TransformError::UnbalancedFrame { depth: 1 }));
    }

    #[test]
    fn aborted_ticks_hand_their_time_to_the_next_animate() {
        let fail = Rc::new(Cell::new(true));
        let animated = Rc::new(Cell::new(0.0));
        let mut d = SceneDriver::new(Box::new(Faulty {
            extra_pop: Rc::clone(&fail),
            missing_pop: false,
            animated: Rc::clone(&animated),
        }));

        assert!(record(&mut d, 0.25).is_err());
        assert!(record(&mut d, 0.25).is_err());

        fail.set(false);
        assert_eq!(record(&mut d, 0.125), Ok(1));
        d.animate(0.125);
        assert_eq!(animated.get(), 0.625);

        // Banked time is spent once.
        assert_eq!(record(&mut d, 0.125), Ok(1));
        d.animate(0.125);
        assert_eq!(animated.get(), 0.75);
    }
}
