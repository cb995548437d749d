//! Geo catalog repository.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

/// Queries over the country, state and city catalog tables.
pub struct GeoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GeoRepository<'a, C> {
    /// Creates a new instance of [`GeoRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists every country sorted by name
    pub async fn list_countries(&self) -> Result<Vec<entity::geo_country::Model>, DbErr> {
        entity::prelude::GeoCountry::find()
            .order_by_asc(entity::geo_country::Column::Name)
            .all(self.db)
            .await
    }

    /// Finds a country by ID
    pub async fn find_country(
        &self,
        country_id: i32,
    ) -> Result<Option<entity::geo_country::Model>, DbErr> {
        entity::prelude::GeoCountry::find_by_id(country_id)
            .one(self.db)
            .await
    }

    /// Lists the states of a country sorted by name
    ///
    /// An unknown country yields an empty list.
    pub async fn list_states(
        &self,
        country_id: i32,
    ) -> Result<Vec<entity::geo_state::Model>, DbErr> {
        entity::prelude::GeoState::find()
            .filter(entity::geo_state::Column::CountryId.eq(country_id))
            .order_by_asc(entity::geo_state::Column::Name)
            .all(self.db)
            .await
    }

    /// Lists the cities belonging to any of `state_ids`, sorted by name
    ///
    /// An empty `state_ids` returns an empty list without querying.
    pub async fn list_cities(
        &self,
        state_ids: &[i32],
    ) -> Result<Vec<entity::geo_city::Model>, DbErr> {
        if state_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::GeoCity::find()
            .filter(entity::geo_city::Column::StateId.is_in(state_ids.iter().copied()))
            .order_by_asc(entity::geo_city::Column::Name)
            .all(self.db)
            .await
    }

    /// Fetches states by ID sorted by name, unknown IDs are skipped
    pub async fn get_states_by_ids(
        &self,
        state_ids: &[i32],
    ) -> Result<Vec<entity::geo_state::Model>, DbErr> {
        if state_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::GeoState::find()
            .filter(entity::geo_state::Column::Id.is_in(state_ids.iter().copied()))
            .order_by_asc(entity::geo_state::Column::Name)
            .all(self.db)
            .await
    }

    /// Fetches cities by ID sorted by name, unknown IDs are skipped
    pub async fn get_cities_by_ids(
        &self,
        city_ids: &[i32],
    ) -> Result<Vec<entity::geo_city::Model>, DbErr> {
        if city_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::GeoCity::find()
            .filter(entity::geo_city::Column::Id.is_in(city_ids.iter().copied()))
            .order_by_asc(entity::geo_city::Column::Name)
            .all(self.db)
            .await
    }
}
