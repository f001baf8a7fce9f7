//! Persistence adapter for todos.
//!
//! Todos live in a MongoDB collection; every operation is a direct
//! delegation to the driver with no retry, transaction, or batching. An
//! in-memory backend with identical semantics backs the tests.
//!
//! ## Components
//!
//! - [`TodoStore`]: backend-dispatching handle injected into the GraphQL schema
//! - [`MongoStore`]: CRUD against a `mongodb::Collection`
//! - [`MemoryStore`]: CRUD against a `HashMap` behind a lock

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use crate::error::Result;
use crate::model::{Todo, TodoDraft, TodoPatch};

/// Confirmation text returned by a successful delete.
pub const DELETE_CONFIRMATION: &str = "Todo deleted successfully";

/// A connected store handle. Cheap to clone; connected once at startup and
/// shared across requests.
#[derive(Clone)]
pub enum TodoStore {
    Mongo(MongoStore),
    Memory(MemoryStore),
}

impl TodoStore {
    pub async fn list(&self) -> Result<Vec<Todo>> {
        match self {
            TodoStore::Mongo(store) => store.list().await,
            TodoStore::Memory(store) => store.list(),
        }
    }

    pub async fn get(&self, id: &str) -> Result<Todo> {
        match self {
            TodoStore::Mongo(store) => store.get(id).await,
            TodoStore::Memory(store) => store.get(id),
        }
    }

    pub async fn create(&self, draft: TodoDraft) -> Result<Todo> {
        match self {
            TodoStore::Mongo(store) => store.create(draft).await,
            TodoStore::Memory(store) => store.create(draft),
        }
    }

    pub async fn update(&self, id: &str, patch: TodoPatch) -> Result<Todo> {
        match self {
            TodoStore::Mongo(store) => store.update(id, patch).await,
            TodoStore::Memory(store) => store.update(id, patch),
        }
    }

    pub async fn delete(&self, id: &str) -> Result<String> {
        match self {
            TodoStore::Mongo(store) => store.delete(id).await?,
            TodoStore::Memory(store) => store.delete(id)?,
        }
        Ok(DELETE_CONFIRMATION.to_string())
    }
}
