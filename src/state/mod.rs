pub mod camera;
pub mod frame;
pub mod input;
pub mod viewport;

pub use camera::CameraState;
pub use input::{InputState, NavKey};
pub use viewport::{ViewportManager, ViewportRect};

use crate::model::{ShaderUniforms, ViewerConfig};

/// Everything the render loop mutates, owned by the view that drives it.
#[derive(Debug, Clone)]
pub struct Viewer {
    pub config: ViewerConfig,
    pub input: InputState,
    pub camera: CameraState,
    pub viewport: ViewportManager,
    pub uniforms: ShaderUniforms,
}

impl Viewer {
    pub fn new(config: ViewerConfig) -> Self {
        let camera = CameraState::default();
        let mut uniforms = ShaderUniforms { offset: [0.0; 2], zoom: 0.0, iterations: 0.0 };
        frame::publish(&camera, &mut uniforms);
        Self {
            config,
            input: InputState::default(),
            camera,
            viewport: ViewportManager::default(),
            uniforms,
        }
    }

    /// Returns true if the key is a navigation key (its default action should be suppressed).
    pub fn on_key_down(&mut self, key: &str) -> bool {
        match NavKey::from_key(key, &self.config.key_bindings) {
            Some(k) => {
                self.input.on_key_down(k);
                true
            }
            None => false,
        }
    }

    pub fn on_key_up(&mut self, key: &str) -> bool {
        match NavKey::from_key(key, &self.config.key_bindings) {
            Some(k) => {
                self.input.on_key_up(k);
                true
            }
            None => false,
        }
    }

    pub fn tick(&mut self, elapsed_ms: f64) -> ShaderUniforms {
        frame::drive_frame(
            &mut self.camera,
            &self.input,
            &self.config,
            elapsed_ms,
            &mut self.uniforms,
        );
        self.uniforms
    }

    pub fn on_resize(&mut self, width: f64, height: f64) -> Option<ViewportRect> {
        self.viewport.on_resize(width, height).then(|| self.viewport.rect())
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}
