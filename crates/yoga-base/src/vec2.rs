use std::fmt;

#[derive(Clone, Copy, PartialEq)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T: fmt::Debug> fmt::Debug for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vec2").field(&self.x).field(&self.y).finish()
    }
}

impl<T> Vec2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<[T; 2]> for Vec2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl Vec2<f32> {
    /// Map normalised image coordinates (0.0..=1.0) onto a `width` x `height` pixel grid.
    /// Fractions are truncated toward zero.
    pub fn to_pixel(self, width: u32, height: u32) -> Vec2<i32> {
        Vec2::new(
            (self.x * width as f32) as i32,
            (self.y * height as f32) as i32,
        )
    }
}
