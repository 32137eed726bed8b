//! Schema bootstrap
//!
//! The storefront owns a single table, created on startup when missing.

use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};

use crate::entity::contact_messages;
use crate::error::DomainError;

/// Create the `contactmessage` table if it does not already exist
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut stmt = schema.create_table_from_entity(contact_messages::Entity);
    stmt.if_not_exists();

    db.execute(backend.build(&stmt))
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    Ok(())
}
