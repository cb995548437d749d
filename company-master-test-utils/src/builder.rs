//! Declarative test builder.
//!
//! `TestBuilder` collects tables and catalog/company fixtures, then creates them in
//! dependency order during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_geo_tables()
///     .with_company_tables()
///     .with_mock_state(10, 1, "Karnataka")
///     .with_mock_city(100, 10, "Bengaluru")
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_geo_tables: bool,
    include_company_tables: bool,

    countries: Vec<(i32, String)>,
    states: Vec<(i32, i32, String)>, // (state_id, country_id, name)
    cities: Vec<(i32, i32, String)>, // (city_id, state_id, name)
    companies: Vec<(String, u32)>,   // (company_id, seed)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_geo_tables: false,
            include_company_tables: false,
            countries: Vec::new(),
            states: Vec::new(),
            cities: Vec::new(),
            companies: Vec::new(),
        }
    }

    /// Add the country, state and city catalog tables.
    pub fn with_geo_tables(mut self) -> Self {
        self.include_geo_tables = true;
        self
    }

    /// Add the company table.
    pub fn with_company_tables(mut self) -> Self {
        self.include_company_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queue a country fixture.
    pub fn with_mock_country(mut self, country_id: i32, name: &str) -> Self {
        self.countries.push((country_id, name.to_string()));
        self
    }

    /// Queue a state fixture; its country is created if missing.
    pub fn with_mock_state(mut self, state_id: i32, country_id: i32, name: &str) -> Self {
        self.states.push((state_id, country_id, name.to_string()));
        self
    }

    /// Queue a city fixture; its state must be queued or already exist.
    pub fn with_mock_city(mut self, city_id: i32, state_id: i32, name: &str) -> Self {
        self.cities.push((city_id, state_id, name.to_string()));
        self
    }

    /// Queue an active company fixture built from `seed`.
    pub fn with_mock_company(mut self, company_id: &str, seed: u32) -> Self {
        self.companies.push((company_id.to_string(), seed));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);

        let mut all_tables = Vec::new();

        if self.include_geo_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::GeoCountry),
                schema.create_table_from_entity(entity::prelude::GeoState),
                schema.create_table_from_entity(entity::prelude::GeoCity),
            ]);
        }

        if self.include_company_tables {
            all_tables.push(schema.create_table_from_entity(entity::prelude::Company));
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for (country_id, name) in self.countries {
            setup.geo().insert_mock_country(country_id, &name).await?;
        }

        for (state_id, country_id, name) in self.states {
            setup
                .geo()
                .insert_mock_state(state_id, country_id, &name)
                .await?;
        }

        for (city_id, state_id, name) in self.cities {
            setup.geo().insert_mock_city(city_id, state_id, &name).await?;
        }

        for (company_id, seed) in self.companies {
            setup.company().insert_mock_company(&company_id, seed).await?;
        }

        Ok(setup)
    }
}
