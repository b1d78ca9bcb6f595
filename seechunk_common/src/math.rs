use serde::{
    Deserialize,
    Serialize,
};
use std::ops::{
    Index,
    IndexMut,
};

pub type Vec2I32 = Vec2<i32>;
pub type Vec3F32 = Vec3<f32>;

#[derive(Serialize, Deserialize, PartialEq, Eq, Copy, Clone, Hash, Debug)]
pub struct Vec2<T>([T; 2]);

impl<T> Vec2<T> {
    pub const fn new(new: [T; 2]) -> Self {
        Self(new)
    }
}

impl<T> Index<usize> for Vec2<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.0[idx]
    }
}

#[derive(Serialize, Deserialize, PartialEq, Copy, Clone, Debug)]
pub struct Vec3<T>([T; 3]);

impl<T> Vec3<T> {
    pub const fn new(new: [T; 3]) -> Self {
        Self(new)
    }
}

impl<T> Index<usize> for Vec3<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.0[idx]
    }
}

impl<T> IndexMut<usize> for Vec3<T> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.0[idx]
    }
}

impl<T> From<Vec3<T>> for [T; 3] {
    fn from(from: Vec3<T>) -> Self {
        from.0
    }
}

impl Vec3<f32> {
    /// Horizontal block column the point is in.
    pub fn column(self) -> Vec2I32 {
        Vec2::new([self[0].floor() as i32, self[2].floor() as i32])
    }
}
