use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use crate::config::DatabaseSettings;
use crate::error::{Result, TodoError};
use crate::model::{Todo, TodoDraft, TodoPatch};

/// Wire representation of a todo inside the collection. The identity lives
/// in `_id` and is surfaced to the rest of the crate as a hex string.
#[derive(Debug, Serialize, Deserialize)]
struct TodoDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,

    title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(default)]
    completed: bool,
}

impl From<TodoDocument> for Todo {
    fn from(doc: TodoDocument) -> Self {
        Todo {
            id: doc.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            title: doc.title,
            description: doc.description,
            completed: doc.completed,
        }
    }
}

impl From<TodoDraft> for TodoDocument {
    fn from(draft: TodoDraft) -> Self {
        TodoDocument {
            id: None,
            title: draft.title,
            description: draft.description,
            completed: draft.completed,
        }
    }
}

/// CRUD against a MongoDB collection. Every operation is a single driver
/// call; the driver pools connections internally, so cloning is cheap.
#[derive(Clone)]
pub struct MongoStore {
    collection: Collection<TodoDocument>,
}

impl MongoStore {
    /// Connects to the store and pings it, so an unreachable endpoint
    /// fails here rather than on the first request.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self> {
        let client = Client::with_uri_str(&settings.uri)
            .await
            .map_err(|e| TodoError::Connection(e.to_string()))?;

        let database = client.database(&settings.database);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| TodoError::Connection(e.to_string()))?;

        tracing::info!(uri = %settings.uri, database = %settings.database, "Connected to MongoDB");

        Ok(Self {
            collection: database.collection(&settings.collection),
        })
    }

    fn object_id(id: &str) -> Result<ObjectId> {
        ObjectId::parse_str(id).map_err(|_| TodoError::InvalidId(id.to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Todo>> {
        let cursor = self.collection.find(doc! {}).await?;
        let docs: Vec<TodoDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Todo::from).collect())
    }

    pub async fn get(&self, id: &str) -> Result<Todo> {
        let oid = Self::object_id(id)?;
        let doc = self
            .collection
            .find_one(doc! { "_id": oid })
            .await?
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;
        Ok(doc.into())
    }

    pub async fn create(&self, draft: TodoDraft) -> Result<Todo> {
        tracing::info!(title = %draft.title, "Creating todo");

        let mut document = TodoDocument::from(draft);
        let result = self.collection.insert_one(&document).await?;
        document.id = result.inserted_id.as_object_id();
        Ok(document.into())
    }

    pub async fn update(&self, id: &str, patch: TodoPatch) -> Result<Todo> {
        tracing::info!(id = %id, "Updating todo");

        // An empty $set is rejected by the server; an empty patch is a read.
        if patch.is_empty() {
            return self.get(id).await;
        }

        let oid = Self::object_id(id)?;
        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set_document(&patch) })
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;
        Ok(updated.into())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        tracing::info!(id = %id, "Deleting todo");

        let oid = Self::object_id(id)?;
        self.collection
            .find_one_and_delete(doc! { "_id": oid })
            .await?
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;
        Ok(())
    }
}

fn set_document(patch: &TodoPatch) -> Document {
    let mut set = Document::new();
    if let Some(ref title) = patch.title {
        set.insert("title", title);
    }
    if let Some(ref description) = patch.description {
        set.insert("description", description);
    }
    if let Some(completed) = patch.completed {
        set.insert("completed", completed);
    }
    set
}
