pub use super::company::Entity as Company;
pub use super::geo_city::Entity as GeoCity;
pub use super::geo_country::Entity as GeoCountry;
pub use super::geo_state::Entity as GeoState;
