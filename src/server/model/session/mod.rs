//! Session data models and utilities.
//!
//! Type-safe wrappers for state kept in the tower-sessions store (Redis-backed in
//! production, memory-backed in tests).

pub mod selection;
