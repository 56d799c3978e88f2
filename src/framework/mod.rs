//! Generic synthesis framework.
//!
//! # Main Components
//!
//! - [`Synthesizer`] - Trait implemented by every transformation step
//! - [`Pipeline`] - Runs steps in a fixed order, stopping at the first failure
//! - [`SynthesisError`] - Errors surfaced to the caller

pub mod core;
pub mod error;

pub use self::core::*;
pub use self::error::*;
