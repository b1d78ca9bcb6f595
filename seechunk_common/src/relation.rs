use crate::text::TextColor;
use serde::{
    Deserialize,
    Serialize,
};

/// How a member relates to the owner of the plot they stand in.
///
/// The first four variants are faction ranks, i.e. the plot belongs to
/// the member's own faction.
#[derive(Serialize, Deserialize, PartialEq, Eq, Copy, Clone, Hash, Debug)]
pub enum Relation {
    Leader,
    Officer,
    Member,
    Recruit,
    Ally,
    Truce,
    Neutral,
    Enemy,
}

impl Relation {
    pub fn is_rank(self) -> bool {
        matches!(
            self,
            Self::Leader | Self::Officer | Self::Member | Self::Recruit
        )
    }

    pub fn color(self) -> TextColor {
        match self {
            Self::Leader | Self::Officer | Self::Member | Self::Recruit => TextColor::Green,
            Self::Ally => TextColor::LightPurple,
            Self::Truce => TextColor::DarkPurple,
            Self::Neutral => TextColor::White,
            Self::Enemy => TextColor::Red,
        }
    }

    /// Color of a chunk border seen from this relation.
    /// Own faction land is drawn the same way as allied land.
    pub fn border_color(self) -> TextColor {
        if self.is_rank() {
            Self::Ally.color()
        } else {
            self.color()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_drawn_as_ally() {
        for rank in [
            Relation::Leader,
            Relation::Officer,
            Relation::Member,
            Relation::Recruit,
        ] {
            assert!(rank.is_rank());
            assert_eq!(rank.border_color(), TextColor::LightPurple);
        }
    }

    #[test]
    fn test_border_colors() {
        assert_eq!(Relation::Enemy.border_color().rgb(), [255, 85, 85]);
        assert_eq!(Relation::Neutral.border_color().rgb(), [255, 255, 255]);
        assert_eq!(Relation::Truce.border_color(), TextColor::DarkPurple);
        assert!(!Relation::Ally.is_rank());
    }
}
