// Held-key navigation intent, fed by keydown/keyup.
use crate::model::KeyBindings;

/// Logical navigation keys recognised by the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    PanRight,
    PanLeft,
    PanDown,
    PanUp,
    ZoomIn,
    ZoomOut,
}

impl NavKey {
    /// Which axis the key drives and the value it writes there.
    fn target(self) -> (Axis, i8) {
        match self {
            NavKey::PanRight => (Axis::X, 1),
            NavKey::PanLeft => (Axis::X, -1),
            NavKey::PanDown => (Axis::Y, 1),
            NavKey::PanUp => (Axis::Y, -1),
            NavKey::ZoomIn => (Axis::Zoom, 1),
            NavKey::ZoomOut => (Axis::Zoom, -1),
        }
    }

    /// Resolve a raw `KeyboardEvent.key` value. Zoom keys match case-insensitively.
    pub fn from_key(key: &str, bindings: &KeyBindings) -> Option<NavKey> {
        if key == bindings.pan_right {
            Some(NavKey::PanRight)
        } else if key == bindings.pan_left {
            Some(NavKey::PanLeft)
        } else if key == bindings.pan_down {
            Some(NavKey::PanDown)
        } else if key == bindings.pan_up {
            Some(NavKey::PanUp)
        } else if key.eq_ignore_ascii_case(&bindings.zoom_in) {
            Some(NavKey::ZoomIn)
        } else if key.eq_ignore_ascii_case(&bindings.zoom_out) {
            Some(NavKey::ZoomOut)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    X,
    Y,
    Zoom,
}

/// Current pan/zoom direction, each in {-1, 0, 1}.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub pan_x: i8,
    pub pan_y: i8,
    pub zoom_dir: i8,
}

impl InputState {
    fn axis_mut(&mut self, axis: Axis) -> &mut i8 {
        match axis {
            Axis::X => &mut self.pan_x,
            Axis::Y => &mut self.pan_y,
            Axis::Zoom => &mut self.zoom_dir,
        }
    }

    /// Last pressed key wins its axis.
    pub fn on_key_down(&mut self, key: NavKey) {
        let (axis, value) = key.target();
        *self.axis_mut(axis) = value;
    }

    /// Releasing a key only clears its axis when that key is still the active one,
    /// so a stale release cannot cancel a later press of the opposite key.
    pub fn on_key_up(&mut self, key: NavKey) {
        let (axis, value) = key.target();
        let slot = self.axis_mut(axis);
        if *slot == value {
            *slot = 0;
        }
    }

    pub fn is_idle(&self) -> bool {
        self.pan_x == 0 && self.pan_y == 0 && self.zoom_dir == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_keys_last_press_wins() {
        let mut input = InputState::default();
        input.on_key_down(NavKey::PanRight);
        input.on_key_down(NavKey::PanLeft);
        assert_eq!(input.pan_x, -1);
    }

    #[test]
    fn stale_release_keeps_newer_direction() {
        let mut input = InputState::default();
        input.on_key_down(NavKey::PanRight);
        input.on_key_down(NavKey::PanLeft);
        input.on_key_up(NavKey::PanRight);
        assert_eq!(input.pan_x, -1);
        input.on_key_up(NavKey::PanLeft);
        assert_eq!(input.pan_x, 0);
    }

    #[test]
    fn zoom_release_guard() {
        let mut input = InputState::default();
        input.on_key_down(NavKey::ZoomIn);
        input.on_key_down(NavKey::ZoomOut);
        input.on_key_up(NavKey::ZoomIn);
        assert_eq!(input.zoom_dir, -1);
        input.on_key_up(NavKey::ZoomOut);
        assert!(input.is_idle());
    }

    #[test]
    fn axes_are_independent() {
        let mut input = InputState::default();
        input.on_key_down(NavKey::PanDown);
        input.on_key_down(NavKey::PanRight);
        input.on_key_down(NavKey::ZoomIn);
        assert_eq!((input.pan_x, input.pan_y, input.zoom_dir), (1, 1, 1));
        input.on_key_up(NavKey::PanRight);
        assert_eq!((input.pan_x, input.pan_y, input.zoom_dir), (0, 1, 1));
    }

    #[test]
    fn key_resolution() {
        let b = KeyBindings::default();
        assert_eq!(NavKey::from_key("ArrowUp", &b), Some(NavKey::PanUp));
        assert_eq!(NavKey::from_key("W", &b), Some(NavKey::ZoomIn));
        assert_eq!(NavKey::from_key("s", &b), Some(NavKey::ZoomOut));
        assert_eq!(NavKey::from_key("arrowup", &b), None);
        assert_eq!(NavKey::from_key("q", &b), None);
    }
}
