//! A fixed capacity queue of upcoming pieces for a falling-block game.
//!
//! The queue always previews the next [`CAPACITY`] pieces. Playing takes the
//! piece at the front and appends a freshly generated one at the back, so the
//! preview stays full. Every piece gets an id that is unique for the lifetime
//! of its queue, and a kind drawn uniformly from the seven tetrominoes.
//!
//! The storage is a [`Ring`]: a circular buffer over a fixed array whose
//! front and back indices advance modulo its capacity.
//!
//! # Feature Flags
//! The **nextpieces** crate has the following cargo feature flags:
//!
//! - `cli`
//!   - Optional, enabled by default
//!   - Builds the interactive `nextpieces` binary and pulls in its log
//!     subscriber and error reporter
//!
//! # Examples
//! ```
//! use nextpieces::{PieceQueue, CAPACITY};
//!
//! let mut queue = PieceQueue::initialize();
//! assert_eq!(queue.len(), CAPACITY);
//!
//! let played = queue.play().unwrap();
//! assert_eq!(played.removed.id(), 1);
//!
//! let ids: Vec<_> = queue.iter().map(|p| p.id()).collect();
//! assert_eq!(ids, vec![2, 3, 4, 5, 6]);
//! ```
//!
//! # Errors
//! ```
//! use nextpieces::{PieceQueue, UnderflowError};
//!
//! let mut queue = PieceQueue::new();
//! assert_eq!(queue.remove(), Err(UnderflowError));
//! ```

#![deny(missing_docs)]

mod display;
pub mod error;
pub mod menu;
mod piece;
mod queue;
mod ring;
mod utils;

pub use error::{CapacityError, QueueError, UnderflowError};
pub use piece::{Piece, PieceKind};
pub use queue::{PieceQueue, Played};
pub use ring::{Iter, Ring};

/// Number of pieces a [`PieceQueue`] holds.
pub const CAPACITY: usize = 5;
