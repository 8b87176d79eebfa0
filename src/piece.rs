//! Pieces and their kinds.

use std::fmt;

use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// The shape of a piece, one of the seven tetrominoes.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PieceKind {
    /// Straight line of four.
    I,
    /// Two by two square.
    O,
    /// Three in a row with a bump in the middle.
    T,
    /// Three in a row with a foot on the right.
    L,
    /// Three in a row with a foot on the left.
    J,
    /// Skew, stepping down to the right.
    Z,
    /// Skew, stepping up to the right.
    S,
}

impl PieceKind {
    /// Every kind, in label order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::Z,
        PieceKind::S,
    ];

    /// Returns the one-letter label of the kind.
    pub fn label(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::Z => "Z",
            PieceKind::S => "S",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Picks a kind uniformly at random.
impl Distribution<PieceKind> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())]
    }
}

/// One upcoming piece.
///
/// Pieces produced by a [`PieceQueue`](crate::PieceQueue) have ids starting
/// at 1, unique for the lifetime of that queue.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Piece {
    id: u64,
    kind: PieceKind,
}

impl Piece {
    /// Creates a piece.
    #[inline]
    pub fn new(id: u64, kind: PieceKind) -> Self {
        Piece { id, kind }
    }

    /// Unique id, in generation order.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The shape of the piece.
    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }
}

/// Formats as `(K #id)`.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} #{})", self.kind, self.id)
    }
}
