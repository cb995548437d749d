//! Geo catalog database insertion utilities.
//!
//! Parent records are created automatically when missing so that foreign keys hold:
//! inserting a city for an unknown state creates the state (and its country).

use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::geo::{factory, GeoFixtures},
    model::{GeoCityModel, GeoCountryModel, GeoStateModel},
};

impl<'a> GeoFixtures<'a> {
    /// Insert a mock country, returning the existing record if the ID is taken.
    ///
    /// # Arguments
    /// - `country_id` - Catalog ID of the country
    /// - `name` - Display name
    ///
    /// # Returns
    /// - `Ok(GeoCountryModel)` - The created or existing country record
    /// - `Err(TestError::DbErr)` - Database query or insert failed
    pub async fn insert_mock_country(
        &self,
        country_id: i32,
        name: &str,
    ) -> Result<GeoCountryModel, TestError> {
        if let Some(existing) = entity::prelude::GeoCountry::find_by_id(country_id)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        Ok(
            entity::prelude::GeoCountry::insert(factory::mock_country(country_id, name))
                .exec_with_returning(&self.setup.db)
                .await?,
        )
    }

    /// Insert a country with an arbitrary currency and timezone payload.
    pub async fn insert_country_with_meta(
        &self,
        country_id: i32,
        name: &str,
        currency: Option<&str>,
        currency_symbol: Option<&str>,
        timezones: Option<&str>,
    ) -> Result<GeoCountryModel, TestError> {
        Ok(
            entity::prelude::GeoCountry::insert(entity::geo_country::ActiveModel {
                id: ActiveValue::Set(country_id),
                name: ActiveValue::Set(name.to_string()),
                currency: ActiveValue::Set(currency.map(str::to_string)),
                currency_symbol: ActiveValue::Set(currency_symbol.map(str::to_string)),
                timezones: ActiveValue::Set(timezones.map(str::to_string)),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock state, creating its country if it doesn't exist.
    ///
    /// # Arguments
    /// - `state_id` - Catalog ID of the state
    /// - `country_id` - Country the state belongs to
    /// - `name` - Display name
    pub async fn insert_mock_state(
        &self,
        state_id: i32,
        country_id: i32,
        name: &str,
    ) -> Result<GeoStateModel, TestError> {
        if let Some(existing) = entity::prelude::GeoState::find_by_id(state_id)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        self.insert_mock_country(country_id, &format!("Country {}", country_id))
            .await?;

        Ok(
            entity::prelude::GeoState::insert(entity::geo_state::ActiveModel {
                id: ActiveValue::Set(state_id),
                country_id: ActiveValue::Set(country_id),
                name: ActiveValue::Set(name.to_string()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock city. The parent state must exist or `country_id` is used to create it.
    ///
    /// # Arguments
    /// - `city_id` - Catalog ID of the city
    /// - `state_id` - State the city belongs to
    /// - `name` - Display name
    pub async fn insert_mock_city(
        &self,
        city_id: i32,
        state_id: i32,
        name: &str,
    ) -> Result<GeoCityModel, TestError> {
        if let Some(existing) = entity::prelude::GeoCity::find_by_id(city_id)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        if entity::prelude::GeoState::find_by_id(state_id)
            .one(&self.setup.db)
            .await?
            .is_none()
        {
            self.insert_mock_state(state_id, 1, &format!("State {}", state_id))
                .await?;
        }

        Ok(
            entity::prelude::GeoCity::insert(entity::geo_city::ActiveModel {
                id: ActiveValue::Set(city_id),
                state_id: ActiveValue::Set(state_id),
                name: ActiveValue::Set(name.to_string()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
