//! Company form selection session data.
//!
//! The [`SelectionSetManager`] of the company form being filled in is stored in the
//! session so that country, state and city picks survive across requests until the
//! company is saved.

use tower_sessions::Session;

use crate::server::{error::Error, service::selection::SelectionSetManager};

/// Session key for the company form selection.
pub const SESSION_SELECTION_KEY: &str = "company_master:selection";

/// Reads and writes the [`SelectionSetManager`] stored under [`SESSION_SELECTION_KEY`].
pub struct SessionSelection;

impl SessionSelection {
    /// Inserts the selection into the session, replacing any previous one
    pub async fn insert(session: &Session, selection: &SelectionSetManager) -> Result<(), Error> {
        session.insert(SESSION_SELECTION_KEY, selection).await?;

        Ok(())
    }

    /// Gets the selection from the session, an empty selection when none is stored
    pub async fn get(session: &Session) -> Result<SelectionSetManager, Error> {
        Ok(session
            .get::<SelectionSetManager>(SESSION_SELECTION_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Removes the selection, used after the company has been saved
    pub async fn clear(session: &Session) -> Result<(), Error> {
        session
            .remove::<SelectionSetManager>(SESSION_SELECTION_KEY)
            .await?;

        Ok(())
    }
}
