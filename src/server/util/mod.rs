//! Utility functions and helpers for server operations.
//!
//! - `hierarchy` - Encoding of selected state/city ID lists into their stored text form

pub mod hierarchy;
