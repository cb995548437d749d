//! Test fixture modules for database record creation.
//!
//! - `geo` - Country, state and city catalog records
//! - `company` - Company records and the raw field values used to build candidates

pub mod company;
pub mod geo;
