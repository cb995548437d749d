//! Service layer for business logic and orchestration.
//!
//! Services compose the repositories: geo catalog lookups with soft degradation, the
//! per-session selection set manager, company validation, identity generation and
//! persistence, and the retry helper used for reads against the store.

pub mod company;
pub mod geo;
pub mod retry;
pub mod selection;
