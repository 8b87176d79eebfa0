//! The queue of upcoming pieces.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

use crate::error::{CapacityError, QueueError, UnderflowError};
use crate::piece::Piece;
use crate::ring::{Iter, Ring};
use crate::CAPACITY;

/// The outcome of a successful [`PieceQueue::play`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Played {
    /// The piece taken from the front.
    pub removed: Piece,
    /// The freshly generated piece appended to the back.
    pub inserted: Piece,
}

/// A preview of the next [`CAPACITY`] pieces.
///
/// The queue owns its id counter and its random source. Ids start at 1 and
/// are never reused, even after the piece carrying one has been removed.
///
/// # Examples
///
/// ```
/// use nextpieces::PieceQueue;
///
/// let mut queue = PieceQueue::initialize();
/// let ids: Vec<_> = queue.iter().map(|p| p.id()).collect();
/// assert_eq!(ids, vec![1, 2, 3, 4, 5]);
///
/// let played = queue.play().unwrap();
/// assert_eq!(played.removed.id(), 1);
/// assert_eq!(played.inserted.id(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct PieceQueue<R = StdRng> {
    pieces: Ring<Piece, CAPACITY>,
    next_id: u64,
    rng: R,
}

impl PieceQueue<StdRng> {
    /// Creates an empty queue that has not been filled yet.
    ///
    /// The random source is seeded from the operating system, once.
    pub fn new() -> Self {
        PieceQueue::with_rng(StdRng::from_entropy())
    }

    /// Creates a queue already holding [`CAPACITY`] fresh pieces.
    ///
    /// The random source is seeded from the operating system, once.
    pub fn initialize() -> Self {
        PieceQueue::initialize_with(StdRng::from_entropy())
    }
}

impl Default for PieceQueue<StdRng> {
    fn default() -> Self {
        PieceQueue::new()
    }
}

impl<R: Rng> PieceQueue<R> {
    /// Creates an empty queue drawing piece kinds from `rng`.
    pub fn with_rng(rng: R) -> Self {
        PieceQueue {
            pieces: Ring::new(),
            next_id: 1,
            rng,
        }
    }

    /// Creates a queue drawing piece kinds from `rng`, and fills it with
    /// [`CAPACITY`] pieces numbered `1..=CAPACITY`.
    pub fn initialize_with(rng: R) -> Self {
        let mut queue = PieceQueue::with_rng(rng);
        for _ in 0..CAPACITY {
            let piece = queue.generate();
            let inserted = queue.insert(piece);
            debug_assert!(inserted.is_ok());
        }
        debug!(len = queue.len(), next_id = queue.next_id, "initialized piece queue");
        queue
    }

    /// Produces a new piece without inserting it.
    ///
    /// Takes the next id and draws a kind uniformly at random.
    pub fn generate(&mut self) -> Piece {
        let id = self.next_id;
        self.next_id += 1;
        let piece = Piece::new(id, self.rng.gen());
        trace!(id, kind = %piece.kind(), "generated piece");
        piece
    }

    /// Appends `piece` to the back of the queue.
    ///
    /// Fails with the piece handed back when the queue is full; the queue is
    /// left unchanged in that case.
    pub fn insert(&mut self, piece: Piece) -> Result<(), CapacityError<Piece>> {
        match self.pieces.push_back(piece) {
            Ok(()) => {
                trace!(id = piece.id(), back = self.pieces.back_index(), "inserted piece");
                Ok(())
            }
            Err(err) => {
                warn!(id = piece.id(), "piece queue is full, insert rejected");
                Err(err)
            }
        }
    }

    /// Takes the piece at the front of the queue.
    pub fn remove(&mut self) -> Result<Piece, UnderflowError> {
        match self.pieces.pop_front() {
            Some(piece) => {
                trace!(id = piece.id(), front = self.pieces.front_index(), "removed piece");
                Ok(piece)
            }
            None => {
                warn!("piece queue is empty, nothing to remove");
                Err(UnderflowError)
            }
        }
    }

    /// Plays the front piece and refills the back with a new one.
    ///
    /// A new piece is generated only after the removal succeeded, so a
    /// failed play consumes no id.
    pub fn play(&mut self) -> Result<Played, QueueError> {
        let removed = self.remove()?;
        let inserted = self.generate();
        self.insert(inserted)?;
        debug!(removed = removed.id(), inserted = inserted.id(), "played piece");
        Ok(Played { removed, inserted })
    }
}

impl<R> PieceQueue<R> {
    /// Returns true if the queue holds [`CAPACITY`] pieces.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.pieces.is_full()
    }

    /// Returns true if the queue holds no pieces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Number of pieces held.
    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Always [`CAPACITY`].
    #[inline]
    pub fn capacity(&self) -> usize {
        self.pieces.capacity()
    }

    /// The next piece to be played.
    #[inline]
    pub fn front(&self) -> Option<&Piece> {
        self.pieces.front()
    }

    /// The id the next generated piece will receive.
    #[inline]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Slot of the front piece.
    #[inline]
    pub fn front_index(&self) -> usize {
        self.pieces.front_index()
    }

    /// Slot the next inserted piece lands in.
    #[inline]
    pub fn back_index(&self) -> usize {
        self.pieces.back_index()
    }

    /// Returns the held pieces, front first.
    #[inline]
    pub fn iter(&self) -> Iter<Piece> {
        self.pieces.iter()
    }
}

impl<'a, R> IntoIterator for &'a PieceQueue<R> {
    type Item = &'a Piece;
    type IntoIter = Iter<'a, Piece>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
