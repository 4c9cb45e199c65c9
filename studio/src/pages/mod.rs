//! Top-level pages, one per route.

pub mod library;
pub mod login;
pub mod media;
pub mod upload;
