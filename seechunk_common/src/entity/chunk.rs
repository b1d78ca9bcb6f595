use crate::math::{
    Vec2I32,
    Vec3F32,
};
use serde::{
    Deserialize,
    Serialize,
};
use std::fmt;

/// Side length of a chunk in blocks.
pub const CHUNK_SIZE: i32 = 16;

/// A 16x16 column of terrain, identified by its horizontal coordinates.
#[derive(Serialize, Deserialize, Hash, PartialEq, Eq, Copy, Clone, Debug)]
pub struct Chunk {
    pub position: Vec2I32,
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.position[0], self.position[1])
    }
}

impl Chunk {
    pub const fn new(x: i32, z: i32) -> Self {
        Self {
            position: Vec2I32::new([x, z]),
        }
    }

    /// Chunk containing the given block column.
    pub fn from_block(x: i32, z: i32) -> Self {
        Self::new(x.div_euclid(CHUNK_SIZE), z.div_euclid(CHUNK_SIZE))
    }

    /// Chunk containing the given world position.
    pub fn containing(position: Vec3F32) -> Self {
        let column = position.column();
        Self::from_block(column[0], column[1])
    }

    /// Smallest block (x, z) of the chunk.
    ///
    /// `None` if the chunk lies outside of the block coordinate range.
    pub fn min_block(&self) -> Option<(i32, i32)> {
        Some((
            self.position[0].checked_mul(CHUNK_SIZE)?,
            self.position[1].checked_mul(CHUNK_SIZE)?,
        ))
    }

    /// Block (x, z) of the far corner, one past the last block on each axis.
    ///
    /// `None` if the corner does not fit the block coordinate range.
    pub fn end_block(&self) -> Option<(i32, i32)> {
        let (min_x, min_z) = self.min_block()?;
        Some((
            min_x.checked_add(CHUNK_SIZE)?,
            min_z.checked_add(CHUNK_SIZE)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_block() {
        assert_eq!(Chunk::from_block(0, 15), Chunk::new(0, 0));
        assert_eq!(Chunk::from_block(16, -1), Chunk::new(1, -1));
        assert_eq!(Chunk::from_block(-16, -17), Chunk::new(-1, -2));
    }

    #[test]
    fn test_bounds() {
        let chunk = Chunk::new(-2, 3);
        assert_eq!(chunk.min_block(), Some((-32, 48)));
        assert_eq!(chunk.end_block(), Some((-16, 64)));
    }

    #[test]
    fn test_bounds_limits() {
        let last = Chunk::new(i32::MAX / CHUNK_SIZE - 1, 0);
        assert_eq!(last.end_block(), Some((i32::MAX - 15, 16)));

        // The far corner of this one is one past i32::MAX.
        let edge = Chunk::new(i32::MAX / CHUNK_SIZE, 0);
        assert!(edge.min_block().is_some());
        assert_eq!(edge.end_block(), None);

        let first = Chunk::new(i32::MIN / CHUNK_SIZE, 0);
        assert_eq!(first.min_block(), Some((i32::MIN, 0)));

        assert_eq!(Chunk::new(i32::MAX, 0).min_block(), None);
        assert_eq!(Chunk::new(0, i32::MIN).min_block(), None);
    }

    #[test]
    fn test_containing() {
        let chunk = Chunk::containing(Vec3F32::new([-0.1, 70.0, 31.9]));
        assert_eq!(chunk, Chunk::new(-1, 1));
    }
}
