use async_graphql::{ID, SimpleObject};

use crate::model;

#[derive(SimpleObject, Clone)]
pub struct Todo {
    pub id: ID,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl From<model::Todo> for Todo {
    fn from(todo: model::Todo) -> Self {
        Self {
            id: ID(todo.id),
            title: todo.title,
            description: todo.description,
            completed: todo.completed,
        }
    }
}
