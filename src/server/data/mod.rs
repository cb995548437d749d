//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries for a single aggregate and are generic over
//! `ConnectionTrait` so they run equally against a pool or inside a transaction.
//!
//! - `geo` - Read-only country/state/city catalog
//! - `company` - Company records keyed by their 8 character identity

pub mod company;
pub mod geo;

#[cfg(test)]
mod tests;
