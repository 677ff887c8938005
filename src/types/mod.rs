//! Type definitions for Txbit API payloads.

pub mod common;
pub mod serde_helpers;

pub use common::*;
