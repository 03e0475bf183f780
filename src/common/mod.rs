//! Common utilities shared across quadrature modules.
//!
//! This module contains helpers for building sample grids that are fed to
//! the sampled-data integrators.

pub mod grid;

pub use grid::span;
