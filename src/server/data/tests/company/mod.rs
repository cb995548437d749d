use company_master_test_utils::prelude::*;

use crate::server::data::company::CompanyRepository;

mod create;
mod find_by_field_value;
mod list_active_names;
mod soft_delete;
