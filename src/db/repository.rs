//! Repository pattern implementation for data access layer
//!
//! The repository is the injected store capability handed to handlers via
//! application state; nothing else touches the database directly.

use crate::core::error::{GateError, Result};
use crate::db::manager::DatabaseManager;
use crate::db::models::User;
use rusqlite::{OptionalExtension, Row};
use std::sync::Arc;

const USER_COLUMNS: &str = "id, name, email, password_hash, created_at";

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        password_hash: row.get(3)?,
        created_at: row.get(4)?,
    })
}

/// Repository for User entities
pub struct UserRepository {
    db: Arc<DatabaseManager>,
}

impl UserRepository {
    /// Create a new UserRepository
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }

    /// Insert a new user and return the record with its store-assigned id
    pub async fn create(&self, name: &str, email: &str, password_hash: &str) -> Result<User> {
        let name = name.to_string();
        let email = email.to_string();
        let password_hash = password_hash.to_string();
        self.db
            .execute(move |conn| {
                conn.execute(
                    "INSERT INTO users (name, email, password_hash) VALUES (?, ?, ?)",
                    rusqlite::params![&name, &email, &password_hash],
                )
                .map_err(GateError::DatabaseError)?;

                let id = conn.last_insert_rowid();
                conn.query_row(
                    &format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS),
                    [id],
                    user_from_row,
                )
                .map_err(GateError::DatabaseError)
            })
            .await
    }

    /// Find a user by id
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        self.db
            .execute(move |conn| {
                conn.query_row(
                    &format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS),
                    [id],
                    user_from_row,
                )
                .optional()
                .map_err(GateError::DatabaseError)
            })
            .await
    }

    /// Find a user matching both email and name
    ///
    /// The login flow requires both fields to match; an email-only match is
    /// treated as no match.
    pub async fn find_by_email_and_name(&self, email: &str, name: &str) -> Result<Option<User>> {
        let email = email.to_string();
        let name = name.to_string();
        self.db
            .execute(move |conn| {
                conn.query_row(
                    &format!(
                        "SELECT {} FROM users WHERE email = ? AND name = ?",
                        USER_COLUMNS
                    ),
                    [&email, &name],
                    user_from_row,
                )
                .optional()
                .map_err(GateError::DatabaseError)
            })
            .await
    }

    /// Update a user's display name
    pub async fn update_name(&self, id: i64, name: &str) -> Result<()> {
        let name = name.to_string();
        self.db
            .execute(move |conn| {
                conn.execute(
                    "UPDATE users SET name = ? WHERE id = ?",
                    rusqlite::params![&name, id],
                )
                .map_err(GateError::DatabaseError)?;
                Ok(())
            })
            .await
    }

    /// Update a user's password hash
    pub async fn update_password(&self, id: i64, password_hash: &str) -> Result<()> {
        let password_hash = password_hash.to_string();
        self.db
            .execute(move |conn| {
                conn.execute(
                    "UPDATE users SET password_hash = ? WHERE id = ?",
                    rusqlite::params![&password_hash, id],
                )
                .map_err(GateError::DatabaseError)?;
                Ok(())
            })
            .await
    }

    /// Delete a user by id
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.db
            .execute(move |conn| {
                conn.execute("DELETE FROM users WHERE id = ?", [id])
                    .map_err(GateError::DatabaseError)?;
                Ok(())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_repo() -> UserRepository {
        let db = Arc::new(DatabaseManager::new_in_memory().unwrap());
        UserRepository::new(db)
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let repo = test_repo();

        let user = repo.create("A", "a@x.com", "hash-a").await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "A");
        assert_eq!(user.email, "a@x.com");

        let user2 = repo.create("B", "b@x.com", "hash-b").await.unwrap();
        assert_eq!(user2.id, 2);
    }

    #[tokio::test]
    async fn test_find_by_email_and_name_requires_both() {
        let repo = test_repo();
        repo.create("A", "a@x.com", "hash").await.unwrap();

        let found = repo.find_by_email_and_name("a@x.com", "A").await.unwrap();
        assert!(found.is_some());

        // Correct email, wrong name: no match
        let miss = repo.find_by_email_and_name("a@x.com", "B").await.unwrap();
        assert!(miss.is_none());

        let miss = repo.find_by_email_and_name("b@x.com", "A").await.unwrap();
        assert!(miss.is_none());
    }

    #[tokio::test]
    async fn test_update_name_and_password() {
        let repo = test_repo();
        let user = repo.create("A", "a@x.com", "hash").await.unwrap();

        repo.update_name(user.id, "Alice").await.unwrap();
        repo.update_password(user.id, "new-hash").await.unwrap();

        let updated = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(updated.name, "Alice");
        assert_eq!(updated.password_hash, "new-hash");
        assert_eq!(updated.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = test_repo();
        let user = repo.create("A", "a@x.com", "hash").await.unwrap();

        repo.delete(user.id).await.unwrap();
        assert!(repo.find_by_id(user.id).await.unwrap().is_none());
    }
}
