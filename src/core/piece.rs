//! Player pieces.
//!
//! A fixed set of tokens; each player picks one and no two players may
//! share one. Icon paths and colors are rendering hints.

use serde::{Deserialize, Serialize};

/// Player token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Piece {
    Gauntlet,
    Rose,
    Slipper,
    Ship,
}

impl Piece {
    /// All pieces, in stable order.
    pub const ALL: [Piece; 4] = [Piece::Gauntlet, Piece::Rose, Piece::Slipper, Piece::Ship];

    /// Icon asset path (rendering hint).
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Piece::Gauntlet => "icons/gauntlet.png",
            Piece::Rose => "icons/rose.png",
            Piece::Slipper => "icons/slipper.png",
            Piece::Ship => "icons/ship.png",
        }
    }

    /// Accent color (hex, rendering hint).
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Piece::Gauntlet => "#FFD700",
            Piece::Rose => "#FFB6C1",
            Piece::Slipper => "#87CEEB",
            Piece::Ship => "#98D8C8",
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Piece::Gauntlet => "gauntlet",
            Piece::Rose => "rose",
            Piece::Slipper => "slipper",
            Piece::Ship => "ship",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_metadata() {
        assert_eq!(Piece::Rose.icon(), "icons/rose.png");
        assert_eq!(Piece::Ship.color(), "#98D8C8");
        assert_eq!(format!("{}", Piece::Gauntlet), "gauntlet");
    }

    #[test]
    fn test_piece_serde() {
        let json = serde_json::to_string(&Piece::Slipper).unwrap();
        assert_eq!(json, "\"slipper\"");
    }
}
