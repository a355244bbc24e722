//! Loading of externally-sourced curriculum data.

pub mod topics;

pub use topics::*;
