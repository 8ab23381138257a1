//! HTTP handlers

pub mod collect;
pub mod health;
pub mod predict;
pub mod train;
