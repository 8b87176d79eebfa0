//! Error types for the ring and the piece queue.

use std::fmt;

use thiserror::Error;

use crate::piece::Piece;

/// Error value indicating insufficient capacity
///
/// Returned when pushing onto a full ring. The rejected element is handed
/// back so nothing is silently dropped.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd, Error)]
#[error("insufficient capacity")]
pub struct CapacityError<T = ()> {
    /// The element that caused the error.
    pub element: T,
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", "CapacityError", "insufficient capacity")
    }
}

/// Error value indicating a removal from an empty queue.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Error)]
#[error("queue is empty, no pieces available")]
pub struct UnderflowError;

/// Any failure reported by [`PieceQueue`](crate::PieceQueue).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum QueueError {
    /// An insert was attempted while the queue held `CAPACITY` pieces.
    #[error("piece queue is full, cannot insert {}", .0.element)]
    CapacityExceeded(#[from] CapacityError<Piece>),
    /// A removal was attempted while the queue was empty.
    #[error(transparent)]
    Underflow(#[from] UnderflowError),
}
