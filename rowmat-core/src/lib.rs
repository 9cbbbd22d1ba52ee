#![no_std]

//! Rowmat Core - Dense Row-Major Matrix Definitions
//!
//! This crate provides the core traits, layout math, and error types for
//! dense row-major matrix storage

pub mod coords;
pub mod error;
pub mod layout;
pub mod traits;

pub use coords::*;
pub use error::*;
pub use layout::*;
pub use traits::*;
