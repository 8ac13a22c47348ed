// Per-frame driver: input -> camera -> uniforms.
use super::camera::CameraState;
use super::input::InputState;
use crate::model::{ShaderUniforms, TimeStep, ViewerConfig};

const REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;
/// Upper bound on frames of motion a single elapsed-time tick may apply.
const MAX_ELAPSED_STEP: f64 = 4.0;

/// Frames of motion to apply for a tick that took `elapsed_ms`.
pub fn step_for(mode: TimeStep, elapsed_ms: f64) -> f64 {
    match mode {
        TimeStep::PerFrame => 1.0,
        TimeStep::Elapsed => {
            if elapsed_ms.is_finite() {
                (elapsed_ms / REFERENCE_FRAME_MS).clamp(0.0, MAX_ELAPSED_STEP)
            } else {
                0.0
            }
        }
    }
}

/// Advances the camera one frame and writes the result into `uniforms`.
pub fn drive_frame(
    camera: &mut CameraState,
    input: &InputState,
    config: &ViewerConfig,
    elapsed_ms: f64,
    uniforms: &mut ShaderUniforms,
) {
    let step = step_for(config.time_step, elapsed_ms);
    camera.advance(input, config.move_speed, config.zoom_speed, step);
    publish(camera, uniforms);
}

pub fn publish(camera: &CameraState, uniforms: &mut ShaderUniforms) {
    uniforms.offset = [camera.offset_x, camera.offset_y];
    uniforms.zoom = camera.zoom();
    uniforms.iterations = camera.iterations();
}
