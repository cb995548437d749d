//! Server application models and type definitions.
//!
//! This module contains the application state shared by HTTP handlers and the session data
//! structures.

pub mod app;
pub mod session;
