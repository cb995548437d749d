pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_geo_country_table;
mod m20250301_000002_create_geo_state_table;
mod m20250301_000003_create_geo_city_table;
mod m20250301_000004_create_company_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_geo_country_table::Migration),
            Box::new(m20250301_000002_create_geo_state_table::Migration),
            Box::new(m20250301_000003_create_geo_city_table::Migration),
            Box::new(m20250301_000004_create_company_table::Migration),
        ]
    }
}
