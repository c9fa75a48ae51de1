//! Common utility functions shared across the domain and engine crates.
//!
//! Pure functions only: no side effects, no I/O.

pub mod string;

pub use string::{non_blank, non_blank_owned};
