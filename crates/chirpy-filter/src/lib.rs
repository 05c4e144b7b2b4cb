//! Chirpy Filter Library
//!
//! Everything a chirp body passes through before it is stored or echoed back:
//! a length check against the configured maximum, then whole-word masking of
//! blocklisted words. Pure functions only, no I/O.

pub mod blocklist;
pub mod validate;

pub use blocklist::{Blocklist, DEFAULT_BLOCKLIST, MASK, censor};
pub use validate::{ValidationError, validate};
