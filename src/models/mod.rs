//! Domain model module declarations.

pub mod event;
pub mod tile;
