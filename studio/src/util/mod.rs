//! Small client-side utilities.

pub mod push;
