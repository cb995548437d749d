pub mod prelude;

pub mod company;
pub mod geo_city;
pub mod geo_country;
pub mod geo_state;
