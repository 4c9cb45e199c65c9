//! Reusable view components.

pub mod media_card;
pub mod nav;
