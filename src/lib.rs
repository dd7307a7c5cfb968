//! Fixed-capacity ring buffer with random-access cursors.
//!
//! # Features
//!
//! * `serde`: `Serialize` / `Deserialize` for [`Ring`] as its logical
//!   sequence. Off by default, and so are its tests: run
//!   `cargo test --features serde` (or `--all-features`) to cover them.

pub mod cursor;
pub mod error;
pub mod interleave;
pub mod ring;
#[cfg(feature = "serde")]
mod serde_impl;

pub use cursor::{Cursor, CursorMut};
pub use error::{ErrorKind, Result, RingError};
pub use interleave::{Interleave, interleave};
pub use ring::{IntoIter, Iter, IterMut, Ring};
