//! Test database utilities
//!
//! Each test gets an isolated in-memory SQLite database with migrations applied.

use super::fixtures::{ItemFactory, UserFactory};
use itemvault::config::DatabaseConfig;
use itemvault::core::models::User;
use itemvault::storage::database::Database;
use std::sync::Arc;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

/// Users created by [`TestDatabase::seeded`]
#[derive(Debug, Clone)]
pub struct Seed {
    pub alice: User,
    pub bob: User,
    pub admin: User,
}

impl TestDatabase {
    /// Create a new migrated in-memory database
    pub async fn new() -> Self {
        let db = Database::new(&DatabaseConfig::in_memory())
            .await
            .expect("Failed to create in-memory test database");

        db.migrate()
            .await
            .expect("Failed to run database migrations");

        Self {
            inner: Arc::new(db),
        }
    }

    /// Create a database holding two regular users and a superuser
    ///
    /// Alice owns two items, Bob owns one.
    pub async fn seeded() -> (Self, Seed) {
        let test_db = Self::new().await;
        let db = test_db.db();

        let alice = db.create_user(&UserFactory::new_user("alice")).await.unwrap();
        let bob = db.create_user(&UserFactory::new_user("bob")).await.unwrap();
        let admin = db
            .create_user(&UserFactory::superuser("admin"))
            .await
            .unwrap();

        for title in ["first", "second"] {
            db.create_item(alice.id, &ItemFactory::titled(title))
                .await
                .unwrap();
        }
        db.create_item(bob.id, &ItemFactory::titled("bobs"))
            .await
            .unwrap();

        (test_db, Seed { alice, bob, admin })
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }
}
