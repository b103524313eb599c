//! Application layer for presentation.

pub mod presenter;
