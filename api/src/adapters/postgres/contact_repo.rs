//! PostgreSQL adapter for ContactRepository and StoreProbe

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbBackend, Set, Statement,
};
use uuid::Uuid;

use crate::domain::entities::{ContactMessage, ContactMessageId, NewContactMessage};
use crate::domain::ports::{ContactRepository, StoreProbe};
use crate::entity::contact_messages;
use crate::error::DomainError;

const LIST_TABLES_SQL: &str = "SELECT table_name::text AS table_name FROM information_schema.tables \
     WHERE table_schema = current_schema() ORDER BY table_name";

/// PostgreSQL implementation of ContactRepository
pub struct PostgresContactRepository {
    db: DatabaseConnection,
}

impl PostgresContactRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn create(&self, message: &NewContactMessage) -> Result<ContactMessage, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let model = contact_messages::ActiveModel {
            id: Set(id),
            name: Set(message.name.clone()),
            email: Set(message.email.clone()),
            message: Set(message.message.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }
}

#[async_trait]
impl StoreProbe for PostgresContactRepository {
    fn is_connected(&self) -> bool {
        true
    }

    async fn list_collections(&self) -> Result<Vec<String>, DomainError> {
        let rows = self
            .db
            .query_all(Statement::from_string(
                DbBackend::Postgres,
                LIST_TABLES_SQL.to_string(),
            ))
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        rows.iter()
            .map(|row| {
                row.try_get::<String>("", "table_name")
                    .map_err(|e| DomainError::Database(e.to_string()))
            })
            .collect()
    }
}

/// Convert SeaORM model to domain entity
impl From<contact_messages::Model> for ContactMessage {
    fn from(model: contact_messages::Model) -> Self {
        ContactMessage {
            id: ContactMessageId(model.id),
            name: model.name,
            email: model.email,
            message: model.message,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
