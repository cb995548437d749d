use company_master_test_utils::prelude::*;

use crate::server::data::geo::GeoRepository;

mod get_by_ids;
mod list_cities;
mod list_countries;
mod list_states;
