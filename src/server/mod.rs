//! Server application core modules.
//!
//! This module contains the server-side functionality of the company master service:
//! HTTP routing, configuration, database access, the cascading state/city selection
//! session, company validation and identity assignment, and the company upsert flow.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
