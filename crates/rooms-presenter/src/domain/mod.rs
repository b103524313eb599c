//! Domain layer for presentation.

pub mod navigation;
