//! Chunk border geometry.
//!
//! A border is a closed loop of columns walked along the four edges of a
//! chunk. The vertical position of a drawn border follows the viewer and is
//! refreshed every redraw, the columns never change.

use crate::{
    entity::chunk::{
        Chunk,
        CHUNK_SIZE,
    },
    math::{
        Vec2I32,
        Vec3F32,
    },
    particle::{
        Particle,
        ParticleKind,
    },
};
use thiserror::Error;

#[derive(Error, PartialEq, Eq, Debug)]
pub enum BorderError {
    #[error("invalid step(={step}) for chunk {chunk} remainder: {remainder}")]
    InvalidStep {
        step: i32,
        chunk: Chunk,
        remainder: i32,
    },
    #[error("chunk {chunk} is outside of the block coordinate range")]
    OutOfRange { chunk: Chunk },
}

/// Whether columns spaced by `step` land exactly on both corners of a chunk edge.
pub fn is_valid_step(step: i32) -> bool {
    step > 0 && step <= CHUNK_SIZE && CHUNK_SIZE % step == 0
}

/// Columns along the chunk edges, starting at the minimal corner.
///
/// Yields exactly `4 * (16 / step)` distinct columns with every corner visited once.
pub fn border_columns(chunk: Chunk, step: i32) -> Result<Vec<Vec2I32>, BorderError> {
    if !is_valid_step(step) {
        return Err(BorderError::InvalidStep {
            step,
            chunk,
            remainder: if step > 0 { CHUNK_SIZE % step } else { 0 },
        });
    }

    let ((min_x, min_z), (end_x, end_z)) = chunk
        .min_block()
        .zip(chunk.end_block())
        .ok_or(BorderError::OutOfRange { chunk })?;

    let mut columns = Vec::with_capacity((4 * CHUNK_SIZE / step) as usize);

    // (min_x, min_z) -> (end_x, min_z)
    for x in (min_x ..= end_x).step_by(step as usize) {
        columns.push(Vec2I32::new([x, min_z]));
    }

    // (end_x, min_z) -> (end_x, end_z)
    for z in (min_z + step ..= end_z).step_by(step as usize) {
        columns.push(Vec2I32::new([end_x, z]));
    }

    // (end_x, end_z) -> (min_x, end_z)
    for x in (min_x ..= end_x - step).rev().step_by(step as usize) {
        columns.push(Vec2I32::new([x, end_z]));
    }

    // (min_x, end_z) -> (min_x, min_z), the starting corner is already there
    for z in (min_z + step ..= end_z - step).rev().step_by(step as usize) {
        columns.push(Vec2I32::new([min_x, z]));
    }

    Ok(columns)
}

/// Particles outlining one chunk.
///
/// Kind and horizontal positions are fixed on creation,
/// only the height is picked when drawing with [`Brush::at_heights`].
#[derive(Clone, Debug)]
pub struct Brush {
    chunk: Chunk,
    particles: Vec<Particle>,
}

impl Brush {
    pub fn new(chunk: Chunk, step: i32, y: f32, kind: ParticleKind) -> Result<Self, BorderError> {
        let particles = border_columns(chunk, step)?
            .into_iter()
            .map(|column| {
                Particle {
                    position: Vec3F32::new([column[0] as f32, y, column[1] as f32]),
                    kind,
                }
            })
            .collect();

        Ok(Self { chunk, particles })
    }

    pub fn chunk(&self) -> Chunk {
        self.chunk
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Every particle repeated at each of the given heights, column by column.
    pub fn at_heights<'a>(&'a self, heights: &'a [f32]) -> impl Iterator<Item = Particle> + 'a {
        self.particles.iter().flat_map(move |particle| {
            heights.iter().map(move |y| {
                let mut particle = *particle;
                particle.position[1] = *y;
                particle
            })
        })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

/// Several copies of a border stacked around the viewer's height.
#[derive(Clone, Copy, Debug)]
pub struct VerticalFan {
    pub levels: u32,
    pub margin: f32,
}

impl VerticalFan {
    /// Lowest level, never below zero.
    pub fn base(&self, y: f32) -> f32 {
        (y - self.half_levels() * self.margin).max(0.0)
    }

    /// Number of levels drawn per redraw.
    pub fn count(&self) -> usize {
        if self.margin <= 0.0 {
            return 0;
        }

        let span = self.levels as f32 + self.half_levels() * self.margin;

        (span / self.margin).floor() as usize + 1
    }

    /// Heights to draw at for a viewer standing at `y`.
    pub fn heights(&self, y: f32) -> impl Iterator<Item = f32> {
        let base = self.base(y);
        let margin = self.margin;

        (0 .. self.count()).map(move |level| base + level as f32 * margin + margin / 2.0 + 0.5)
    }

    fn half_levels(&self) -> f32 {
        self.levels as f32 / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_point_count() {
        for step in [1, 2, 4, 8, 16] {
            for chunk in [Chunk::new(0, 0), Chunk::new(-3, 7), Chunk::new(100, -100)] {
                let columns = border_columns(chunk, step).unwrap();
                assert_eq!(columns.len(), 4 * (16 / step) as usize, "step {}", step);

                let unique: HashSet<_> = columns.iter().copied().collect();
                assert_eq!(unique.len(), columns.len(), "step {}", step);
            }
        }
    }

    #[test]
    fn test_on_edges() {
        let chunk = Chunk::new(-1, 2);
        let (min_x, min_z) = chunk.min_block().unwrap();
        let (end_x, end_z) = chunk.end_block().unwrap();

        for column in border_columns(chunk, 4).unwrap() {
            let (x, z) = (column[0], column[1]);
            assert!(x >= min_x && x <= end_x && z >= min_z && z <= end_z);
            assert!(x == min_x || x == end_x || z == min_z || z == end_z);
        }
    }

    #[test]
    fn test_closed_loop() {
        let columns = border_columns(Chunk::new(1, 1), 2).unwrap();

        // Each column is one step away from the next one, including the wrap-around.
        for (i, a) in columns.iter().enumerate() {
            let b = columns[(i + 1) % columns.len()];
            let distance = (a[0] - b[0]).abs() + (a[1] - b[1]).abs();
            assert_eq!(distance, 2, "between {:?} and {:?}", a, b);
        }
    }

    #[test]
    fn test_origin_step_2() {
        let columns = border_columns(Chunk::new(0, 0), 2).unwrap();

        assert_eq!(columns.len(), 32);
        assert_eq!(columns[0], Vec2I32::new([0, 0]));
        assert_eq!(columns[8], Vec2I32::new([16, 0]));
        assert_eq!(columns[16], Vec2I32::new([16, 16]));
        assert_eq!(columns[24], Vec2I32::new([0, 16]));
        assert_eq!(columns[31], Vec2I32::new([0, 2]));

        let bottom: Vec<i32> = columns[.. 9].iter().map(|c| c[0]).collect();
        assert_eq!(bottom, vec![0, 2, 4, 6, 8, 10, 12, 14, 16]);
    }

    #[test]
    fn test_whole_chunk_step() {
        let columns = border_columns(Chunk::new(0, 0), 16).unwrap();
        assert_eq!(
            columns,
            vec![
                Vec2I32::new([0, 0]),
                Vec2I32::new([16, 0]),
                Vec2I32::new([16, 16]),
                Vec2I32::new([0, 16]),
            ]
        );
    }

    #[test]
    fn test_invalid_step() {
        for step in [3, 5, 6, 7, 0, -2, 32] {
            assert!(border_columns(Chunk::new(0, 0), step).is_err(), "step {}", step);
        }

        assert_eq!(
            border_columns(Chunk::new(2, 3), 3),
            Err(BorderError::InvalidStep {
                step: 3,
                chunk: Chunk::new(2, 3),
                remainder: 1,
            })
        );
    }

    #[test]
    fn test_coordinate_limits() {
        for chunk in [
            Chunk::new(i32::MAX, 0),
            Chunk::new(0, i32::MAX),
            Chunk::new(i32::MIN, 0),
            Chunk::new(0, i32::MIN),
            Chunk::new(134_217_727, 0),
        ] {
            assert_eq!(
                border_columns(chunk, 2),
                Err(BorderError::OutOfRange { chunk })
            );
        }

        // Extreme chunks whose corners still fit are drawn normally.
        for chunk in [Chunk::new(134_217_726, 0), Chunk::new(-134_217_728, 0)] {
            let columns = border_columns(chunk, 2).unwrap();
            assert_eq!(columns.len(), 32);
            assert_eq!(columns[0][0], chunk.min_block().unwrap().0);
        }
    }

    #[test]
    fn test_brush_at_heights() {
        let brush = Brush::new(Chunk::new(0, 0), 4, 64.8, ParticleKind::Plain).unwrap();
        assert_eq!(brush.len(), 16);
        assert!(brush.particles().iter().all(|p| p.position[1] == 64.8));
        assert_eq!(brush.particles()[4].position[0], 16.0);

        let drawn: Vec<_> = brush.at_heights(&[10.0, 20.0]).collect();
        assert_eq!(drawn.len(), 32);
        assert_eq!(<[f32; 3]>::from(drawn[0].position), [0.0, 10.0, 0.0]);
        assert_eq!(<[f32; 3]>::from(drawn[1].position), [0.0, 20.0, 0.0]);
        assert_eq!(<[f32; 3]>::from(drawn[2].position), [4.0, 10.0, 0.0]);

        // Drawing does not move the brush itself.
        assert!(brush.particles().iter().all(|p| p.position[1] == 64.8));
    }

    #[test]
    fn test_fan() {
        let fan = VerticalFan {
            levels: 4,
            margin: 5.0,
        };

        assert_eq!(fan.count(), 3);
        assert_eq!(fan.heights(64.0).collect::<Vec<_>>(), vec![57.0, 62.0, 67.0]);
    }

    #[test]
    fn test_fan_floor() {
        let fan = VerticalFan {
            levels: 4,
            margin: 5.0,
        };

        assert_eq!(fan.base(3.0), 0.0);
        assert_eq!(fan.heights(-20.0).next(), Some(3.0));
    }

    #[test]
    fn test_fan_zero_margin() {
        let fan = VerticalFan {
            levels: 4,
            margin: 0.0,
        };

        assert_eq!(fan.heights(64.0).count(), 0);
    }
}
