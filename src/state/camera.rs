// Continuous camera over the complex plane.
use super::input::InputState;

/// Iterations handed to the shader before the first frame is driven.
pub const BOOTSTRAP_ITERATIONS: f64 = 15.0;
pub const BASE_ITERATIONS: f64 = 20.0;
pub const ITERATIONS_PER_LN_ZOOM: f64 = 4.0;
/// Pan distance per frame at unit move speed and zoom 1.
const PAN_SCALE: f64 = 0.1;

/// Iteration budget for a magnification; grows with `ln(zoom)`.
pub fn iterations_for_zoom(zoom: f64) -> f64 {
    BASE_ITERATIONS + zoom.ln() * ITERATIONS_PER_LN_ZOOM
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    pub offset_x: f64,
    pub offset_y: f64,
    /// Always > 0: only ever multiplied or divided by a factor > 1.
    zoom: f64,
    iterations: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
            iterations: BOOTSTRAP_ITERATIONS,
        }
    }
}

impl CameraState {
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn iterations(&self) -> f64 {
        self.iterations
    }

    /// Advance by `step` frames worth of motion (1.0 for a single fixed frame).
    ///
    /// Pan speed is divided by the zoom so screen-space motion feels the same at
    /// every magnification. Zoom is applied as a ratio, giving exponential zoom
    /// over time.
    pub fn advance(&mut self, input: &InputState, move_speed: f64, zoom_speed: f64, step: f64) {
        let pan = move_speed * PAN_SCALE * step / self.zoom;
        self.offset_x += f64::from(input.pan_x) * pan;
        self.offset_y += f64::from(input.pan_y) * pan;

        let factor = if step == 1.0 { zoom_speed } else { zoom_speed.powf(step) };
        match input.zoom_dir {
            1 => self.zoom *= factor,
            -1 => self.zoom /= factor,
            _ => {}
        }

        self.iterations = iterations_for_zoom(self.zoom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::input::NavKey;

    const MOVE: f64 = 0.5;
    const ZOOM: f64 = 1.025;

    fn held(keys: &[NavKey]) -> InputState {
        let mut input = InputState::default();
        for k in keys {
            input.on_key_down(*k);
        }
        input
    }

    #[test]
    fn starts_at_origin_with_bootstrap_iterations() {
        let cam = CameraState::default();
        assert_eq!((cam.offset_x, cam.offset_y), (0.0, 0.0));
        assert_eq!(cam.zoom(), 1.0);
        assert_eq!(cam.iterations(), BOOTSTRAP_ITERATIONS);
    }

    #[test]
    fn first_idle_frame_derives_iterations() {
        let mut cam = CameraState::default();
        cam.advance(&InputState::default(), MOVE, ZOOM, 1.0);
        assert_eq!(cam.iterations(), 20.0);
    }

    #[test]
    fn idle_frames_change_nothing() {
        let mut cam = CameraState::default();
        let input = InputState::default();
        cam.advance(&input, MOVE, ZOOM, 1.0);
        let before = cam.clone();
        for _ in 0..100 {
            cam.advance(&input, MOVE, ZOOM, 1.0);
        }
        assert_eq!(cam, before);
    }

    #[test]
    fn zoom_in_ten_frames() {
        let mut cam = CameraState::default();
        let input = held(&[NavKey::ZoomIn]);
        for _ in 0..10 {
            cam.advance(&input, MOVE, ZOOM, 1.0);
        }
        assert!((cam.zoom() - 1.2801).abs() < 1e-4);
        assert!((cam.iterations() - 20.988).abs() < 1e-3);
    }

    #[test]
    fn zoom_grows_exponentially() {
        let mut cam = CameraState::default();
        let input = held(&[NavKey::ZoomIn]);
        for n in 1..=200 {
            cam.advance(&input, MOVE, ZOOM, 1.0);
            let expected = ZOOM.powi(n);
            assert!((cam.zoom() - expected).abs() <= expected * 1e-12);
        }
    }

    #[test]
    fn zoom_stays_positive() {
        let mut cam = CameraState::default();
        let out = held(&[NavKey::ZoomOut]);
        for _ in 0..20_000 {
            cam.advance(&out, MOVE, ZOOM, 1.0);
            assert!(cam.zoom() > 0.0);
        }
        let inn = held(&[NavKey::ZoomIn]);
        for _ in 0..5_000 {
            cam.advance(&inn, MOVE, ZOOM, 1.0);
            assert!(cam.zoom() > 0.0);
        }
    }

    #[test]
    fn iterations_increase_with_zoom() {
        assert_eq!(iterations_for_zoom(1.0), 20.0);
        let mut prev = iterations_for_zoom(1.0);
        let mut z = 1.0;
        for _ in 0..500 {
            z *= ZOOM;
            let it = iterations_for_zoom(z);
            assert!(it > prev);
            prev = it;
        }
    }

    #[test]
    fn pan_right_five_frames() {
        let mut cam = CameraState::default();
        let input = held(&[NavKey::PanRight]);
        for _ in 0..5 {
            cam.advance(&input, MOVE, ZOOM, 1.0);
        }
        assert!((cam.offset_x - 0.25).abs() < 1e-12);
        assert_eq!(cam.offset_y, 0.0);
    }

    #[test]
    fn pan_slows_when_zoomed_in() {
        let mut cam = CameraState::default();
        let zoom_in = held(&[NavKey::ZoomIn]);
        for _ in 0..28 {
            cam.advance(&zoom_in, MOVE, ZOOM, 1.0);
        }
        let z = cam.zoom();
        let up = held(&[NavKey::PanUp]);
        cam.advance(&up, MOVE, ZOOM, 1.0);
        assert!((cam.offset_y + MOVE * 0.1 / z).abs() < 1e-12);
    }

    #[test]
    fn fractional_step_scales_motion() {
        let input = held(&[NavKey::PanRight, NavKey::ZoomIn]);
        let mut half = CameraState::default();
        half.advance(&input, MOVE, ZOOM, 0.5);
        half.advance(&input, MOVE, ZOOM, 0.5);
        assert!((half.zoom() - ZOOM).abs() < 1e-12);
        assert!(half.offset_x > 0.0 && half.offset_x < 0.05);
    }
}
