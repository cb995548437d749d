//! Synthetic company identities.
//!
//! Generated identities are the prefix `99` followed by a uniformly drawn six digit
//! number, `99100000` through `99999999`.

use std::future::Future;

use dioxus_logger::tracing;
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{data::company::CompanyRepository, error::Error};

/// Prefix distinguishing generated identities from externally supplied ones.
pub const COMPANY_ID_PREFIX: &str = "99";

/// Supplies the identities new companies are stored under.
pub trait IdentitySource {
    /// Next identity to attempt an insert with.
    fn next_identity(&mut self) -> impl Future<Output = Result<String, Error>> + Send;
}

/// Draws random identities not yet held by a stored company.
pub struct CompanyIdentityGenerator<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyIdentityGenerator<'a> {
    /// Creates a generator checking candidates against `db`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Draws a candidate identity without checking the store.
    pub fn draw_candidate<R: Rng>(rng: &mut R) -> String {
        format!(
            "{}{}",
            COMPANY_ID_PREFIX,
            rng.random_range(100_000..=999_999)
        )
    }

    /// Draws identities until one isn't held by any stored company.
    ///
    /// The existence check and the later insert aren't atomic, so the caller must still
    /// handle an identity collision when saving.
    pub async fn generate(&self) -> Result<String, Error> {
        self.generate_with(|| Self::draw_candidate(&mut rand::rng())).await
    }

    /// Same as [`Self::generate`] with candidates taken from `draw`.
    pub async fn generate_with<F>(&self, mut draw: F) -> Result<String, Error>
    where
        F: FnMut() -> String,
    {
        let company_repo = CompanyRepository::new(self.db);

        loop {
            let candidate = draw();

            if !company_repo.exists(&candidate).await? {
                return Ok(candidate);
            }

            tracing::warn!("Drawn company ID {} is taken, drawing again", candidate);
        }
    }
}

impl IdentitySource for CompanyIdentityGenerator<'_> {
    async fn next_identity(&mut self) -> Result<String, Error> {
        self.generate().await
    }
}
