use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use mongodb::bson::oid::ObjectId;

use crate::error::{Result, TodoError};
use crate::model::{Todo, TodoDraft, TodoPatch};

/// In-memory todo store with the same semantics as [`super::MongoStore`].
/// Used by tests and offline runs; ids are ObjectId hex strings so the two
/// backends are interchangeable.
#[derive(Clone, Default)]
pub struct MemoryStore {
    todos: Arc<RwLock<HashMap<String, Todo>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Ids must parse as ObjectIds here too, so a malformed id is rejected
    // the same way regardless of backend
    fn check_id(id: &str) -> Result<()> {
        ObjectId::parse_str(id)
            .map(|_| ())
            .map_err(|_| TodoError::InvalidId(id.to_string()))
    }

    pub fn list(&self) -> Result<Vec<Todo>> {
        let todos = self.todos.read().expect("lock poisoned");
        let mut all: Vec<Todo> = todos.values().cloned().collect();
        // HashMap iteration order is arbitrary; keep listings stable
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }

    pub fn get(&self, id: &str) -> Result<Todo> {
        Self::check_id(id)?;
        let todos = self.todos.read().expect("lock poisoned");
        todos
            .get(id)
            .cloned()
            .ok_or_else(|| TodoError::NotFound(id.to_string()))
    }

    pub fn create(&self, draft: TodoDraft) -> Result<Todo> {
        let todo = Todo {
            id: ObjectId::new().to_hex(),
            title: draft.title,
            description: draft.description,
            completed: draft.completed,
        };
        let mut todos = self.todos.write().expect("lock poisoned");
        todos.insert(todo.id.clone(), todo.clone());
        Ok(todo)
    }

    pub fn update(&self, id: &str, patch: TodoPatch) -> Result<Todo> {
        Self::check_id(id)?;
        let mut todos = self.todos.write().expect("lock poisoned");
        let todo = todos
            .get_mut(id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;
        patch.apply(todo);
        Ok(todo.clone())
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        Self::check_id(id)?;
        let mut todos = self.todos.write().expect("lock poisoned");
        todos
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| TodoError::NotFound(id.to_string()))
    }
}
