//! Database model type aliases for test utilities.
//!
//! These aliases match the ones used by the main crate so fixtures and tests read the same.

/// Type alias for the company database model.
pub type CompanyModel = entity::company::Model;

/// Type alias for the country catalog model.
pub type GeoCountryModel = entity::geo_country::Model;

/// Type alias for the state catalog model.
pub type GeoStateModel = entity::geo_state::Model;

/// Type alias for the city catalog model.
pub type GeoCityModel = entity::geo_city::Model;
