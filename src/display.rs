//! The text preview of a [`PieceQueue`].

use std::fmt;

use crate::queue::PieceQueue;

/// Renders the preview block shown before every menu prompt.
///
/// ```text
/// --- Upcoming pieces (limit: 5) ---
/// Queue: [ (I #1) (O #2) (T #3) (L #4) (J #5) ]
/// -> Next piece (front): (I #1)
/// -> Insertion point (back): 0
/// ----------------------------------
/// ```
impl<R> fmt::Display for PieceQueue<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let header = format!("--- Upcoming pieces (limit: {}) ---", self.capacity());
        writeln!(f, "{}", header)?;

        let front = match self.front() {
            Some(front) => front,
            None => return writeln!(f, "No pieces in queue."),
        };

        write!(f, "Queue: [ ")?;
        for piece in self {
            write!(f, "{} ", piece)?;
        }
        writeln!(f, "]")?;
        writeln!(f, "-> Next piece (front): {}", front)?;
        writeln!(f, "-> Insertion point (back): {}", self.back_index())?;
        writeln!(f, "{}", "-".repeat(header.chars().count()))
    }
}
