use crate::{
    math::Vec3F32,
    relation::Relation,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Lifetime of redstone particles, in ticks.
pub const DEFAULT_INTERVAL: u32 = 5;

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum ParticleKind {
    Dust { color: [u8; 3], alpha: u8 },
    Redstone { interval: u32 },
    Plain,
}

#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Particle {
    pub position: Vec3F32,
    pub kind: ParticleKind,
}

/// Which particle a border is drawn with.
#[derive(Serialize, Deserialize, PartialEq, Eq, Copy, Clone, Default, Debug)]
pub enum BrushKind {
    #[default]
    Dust,
    Redstone,
    Plain,
}

impl BrushKind {
    /// Resolves the particle for a member standing in a plot with the given relation.
    pub fn particle_kind(self, relation: Relation) -> ParticleKind {
        match self {
            Self::Dust => {
                ParticleKind::Dust {
                    color: relation.border_color().rgb(),
                    alpha: 255,
                }
            },
            Self::Redstone => {
                ParticleKind::Redstone {
                    interval: DEFAULT_INTERVAL,
                }
            },
            Self::Plain => ParticleKind::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_kind() {
        assert_eq!(
            BrushKind::Dust.particle_kind(Relation::Officer),
            ParticleKind::Dust {
                color: [255, 85, 255],
                alpha: 255,
            }
        );
        assert_eq!(
            BrushKind::Redstone.particle_kind(Relation::Enemy),
            ParticleKind::Redstone { interval: 5 }
        );
        assert_eq!(
            BrushKind::Plain.particle_kind(Relation::Neutral),
            ParticleKind::Plain
        );
    }
}
