//! Shared CLI infrastructure: logging setup and table rendering.
//!
//! Kept in the library so integration tests can exercise rendering
//! without spawning the binary.

pub mod logging;
pub mod table;
