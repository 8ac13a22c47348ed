/// Render target size and the region the shader runs over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl ViewportRect {
    pub fn full(width: u32, height: u32) -> Self {
        Self { x: 0, y: 0, width, height }
    }
}

/// Converts window size notifications into the active render region.
#[derive(Clone, Debug, Default)]
pub struct ViewportManager {
    rect: ViewportRect,
}

impl ViewportManager {
    pub fn rect(&self) -> ViewportRect {
        self.rect
    }

    /// Returns true when the render region actually changed.
    pub fn on_resize(&mut self, width: f64, height: f64) -> bool {
        let next = ViewportRect::full(to_pixels(width), to_pixels(height));
        if next == self.rect {
            return false;
        }
        self.rect = next;
        true
    }
}

fn to_pixels(v: f64) -> u32 {
    if v.is_finite() { v.max(0.0) as u32 } else { 0 }
}
