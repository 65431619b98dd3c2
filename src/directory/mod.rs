//! The contact directory.
//!
//! Records are kept in an insertion-ordered map that is never handed out
//! directly; callers go through find, add, delete and iteration.

pub mod store;

pub use store::{Directory, Iter};
