use async_graphql::{Context, EmptySubscription, ErrorExtensions, ID, Object, Schema};
use serde_json::{Map, Value, json};

use crate::error::TodoError;
use crate::model::{TodoDraft, TodoPatch};
use crate::storage::TodoStore;
use crate::validation;

use super::types::Todo;

pub type TodoSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: TodoStore) -> TodoSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

fn get_store<'a>(ctx: &Context<'a>) -> &'a TodoStore {
    ctx.data_unchecked::<TodoStore>()
}

/// Logs a failure and converts it into a GraphQL error, keeping the
/// original error text rather than a generic user-facing message.
fn graphql_error(err: TodoError) -> async_graphql::Error {
    tracing::error!(code = err.code(), "{err}");
    err.extend()
}

fn check(data: Value, rules: &[(&str, &str)]) -> async_graphql::Result<()> {
    let data: Map<String, Value> = match data {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    validation::validate(&data, rules).map_err(graphql_error)?;
    Ok(())
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List all todos
    async fn todos(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Todo>> {
        let store = get_store(ctx);
        let todos = store.list().await.map_err(graphql_error)?;
        Ok(todos.into_iter().map(Todo::from).collect())
    }

    /// Get a single todo by ID. An absent ID is a NOT_FOUND error, not null.
    async fn todo(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Todo>> {
        check(json!({ "id": id.as_str() }), &[("id", "required|string")])?;

        let store = get_store(ctx);
        let todo = store.get(id.as_str()).await.map_err(graphql_error)?;
        Ok(Some(todo.into()))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new todo
    async fn create_todo(
        &self,
        ctx: &Context<'_>,
        title: String,
        description: Option<String>,
        completed: bool,
    ) -> async_graphql::Result<Option<Todo>> {
        check(
            json!({
                "title": &title,
                "description": &description,
                "completed": completed,
            }),
            &[
                ("title", "required|string|minLength:3"),
                ("description", "string"),
                ("completed", "required|boolean"),
            ],
        )?;

        let store = get_store(ctx);
        let draft = TodoDraft::new(title)
            .with_description(description)
            .with_completed(completed);
        let todo = store.create(draft).await.map_err(graphql_error)?;
        Ok(Some(todo.into()))
    }

    /// Update an existing todo; only the provided fields change
    async fn update_todo(
        &self,
        ctx: &Context<'_>,
        id: ID,
        title: Option<String>,
        description: Option<String>,
        completed: Option<bool>,
    ) -> async_graphql::Result<Option<Todo>> {
        check(
            json!({
                "id": id.as_str(),
                "title": &title,
                "description": &description,
                "completed": completed,
            }),
            &[
                ("id", "required|string"),
                ("title", "string|minLength:3"),
                ("description", "string"),
                ("completed", "boolean"),
            ],
        )?;

        let store = get_store(ctx);
        let patch = TodoPatch {
            title,
            description,
            completed,
        };
        let todo = store
            .update(id.as_str(), patch)
            .await
            .map_err(graphql_error)?;
        Ok(Some(todo.into()))
    }

    /// Delete a todo permanently, returning a confirmation message
    async fn delete_todo(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<String>> {
        check(json!({ "id": id.as_str() }), &[("id", "required|string")])?;

        let store = get_store(ctx);
        let confirmation = store.delete(id.as_str()).await.map_err(graphql_error)?;
        Ok(Some(confirmation))
    }
}
