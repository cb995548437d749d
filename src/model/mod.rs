//! Data transfer objects shared between the HTTP layer and the services.

pub mod api;
pub mod company;
pub mod geo;
pub mod selection;
