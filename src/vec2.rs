use std::ops::{Add, Mul, Neg, Sub};

/// Integer grid vector. Plain value type, always copied.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Vec2 { x, y }
    }

    pub fn scale(self, alpha: i32) -> Self {
        Vec2::new(alpha * self.x, alpha * self.y)
    }

    pub fn length(self) -> f64 {
        f64::from(self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<i32> for Vec2 {
    type Output = Vec2;

    fn mul(self, alpha: i32) -> Vec2 {
        self.scale(alpha)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        self.scale(-1)
    }
}
