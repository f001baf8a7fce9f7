use serde_json::{Value, json};
use todoql::graphql::{TodoSchema, build_schema};
use todoql::storage::{MemoryStore, TodoStore};

fn schema() -> TodoSchema {
    build_schema(TodoStore::Memory(MemoryStore::new()))
}

/// Executes a request and returns the full serialized response.
async fn execute(schema: &TodoSchema, query: &str) -> Value {
    let response = schema.execute(query).await;
    serde_json::to_value(&response).unwrap()
}

async fn create_todo(schema: &TodoSchema, title: &str) -> String {
    let response = execute(
        schema,
        &format!(
            r#"mutation {{ createTodo(title: "{}", description: "2 liters", completed: false) {{ id }} }}"#,
            title
        ),
    )
    .await;
    response["data"]["createTodo"]["id"]
        .as_str()
        .expect("createTodo should return an id")
        .to_string()
}

fn error_message(response: &Value) -> &str {
    response["errors"][0]["message"].as_str().unwrap_or("")
}

fn error_code(response: &Value) -> &str {
    response["errors"][0]["extensions"]["code"]
        .as_str()
        .unwrap_or("")
}

// =============================================================================
// Queries
// =============================================================================

#[tokio::test]
async fn test_todos_empty_list() {
    let schema = schema();
    let response = execute(&schema, "{ todos { id title } }").await;
    assert_eq!(response["data"]["todos"], json!([]));
}

#[tokio::test]
async fn test_create_then_get_returns_equal_record() {
    let schema = schema();
    let id = create_todo(&schema, "Buy milk").await;

    let response = execute(
        &schema,
        &format!(r#"{{ todo(id: "{}") {{ id title description completed }} }}"#, id),
    )
    .await;

    let todo = &response["data"]["todo"];
    assert_eq!(todo["id"], json!(id));
    assert_eq!(todo["title"], json!("Buy milk"));
    assert_eq!(todo["description"], json!("2 liters"));
    assert_eq!(todo["completed"], json!(false));
}

#[tokio::test]
async fn test_get_absent_id_is_not_found() {
    let schema = schema();
    let response = execute(
        &schema,
        r#"{ todo(id: "ffffffffffffffffffffffff") { id } }"#,
    )
    .await;

    assert!(error_message(&response).contains("Todo not found"));
    assert_eq!(error_code(&response), "NOT_FOUND");
}

#[tokio::test]
async fn test_get_malformed_id_is_bad_user_input() {
    let schema = schema();
    let response = execute(&schema, r#"{ todo(id: "not-a-hex-id") { id } }"#).await;

    assert!(error_message(&response).contains("Invalid todo ID"));
    assert_eq!(error_code(&response), "BAD_USER_INPUT");
}

#[tokio::test]
async fn test_get_empty_id_fails_validation() {
    let schema = schema();
    let response = execute(&schema, r#"{ todo(id: "") { id } }"#).await;

    assert!(error_message(&response).contains("id is required"));
    assert_eq!(error_code(&response), "BAD_USER_INPUT");
}

// =============================================================================
// createTodo
// =============================================================================

#[tokio::test]
async fn test_create_rejects_short_title() {
    let schema = schema();
    let response = execute(
        &schema,
        r#"mutation { createTodo(title: "ab", completed: false) { id } }"#,
    )
    .await;

    assert!(error_message(&response).contains("title must be at least 3 characters"));
    assert_eq!(error_code(&response), "BAD_USER_INPUT");
    assert_eq!(
        response["errors"][0]["extensions"]["violations"],
        json!(["title must be at least 3 characters"])
    );
}

#[tokio::test]
async fn test_create_accepts_three_char_title() {
    let schema = schema();
    let response = execute(
        &schema,
        r#"mutation { createTodo(title: "abc", completed: true) { title completed } }"#,
    )
    .await;

    assert_eq!(response["data"]["createTodo"]["title"], json!("abc"));
    assert_eq!(response["data"]["createTodo"]["completed"], json!(true));
}

#[tokio::test]
async fn test_create_without_description() {
    let schema = schema();
    let response = execute(
        &schema,
        r#"mutation { createTodo(title: "Buy milk", completed: false) { description } }"#,
    )
    .await;

    assert_eq!(response["data"]["createTodo"]["description"], Value::Null);
}

// =============================================================================
// updateTodo
// =============================================================================

#[tokio::test]
async fn test_update_changes_only_provided_fields() {
    let schema = schema();
    let id = create_todo(&schema, "Buy milk").await;

    let response = execute(
        &schema,
        &format!(
            r#"mutation {{ updateTodo(id: "{}", completed: true) {{ title description completed }} }}"#,
            id
        ),
    )
    .await;

    let todo = &response["data"]["updateTodo"];
    assert_eq!(todo["title"], json!("Buy milk"));
    assert_eq!(todo["description"], json!("2 liters"));
    assert_eq!(todo["completed"], json!(true));
}

#[tokio::test]
async fn test_update_absent_id_is_not_found() {
    let schema = schema();
    let response = execute(
        &schema,
        r#"mutation { updateTodo(id: "ffffffffffffffffffffffff", completed: true) { id } }"#,
    )
    .await;

    assert!(error_message(&response).contains("Todo not found"));
    assert_eq!(error_code(&response), "NOT_FOUND");
}

#[tokio::test]
async fn test_update_rejects_short_title() {
    let schema = schema();
    let id = create_todo(&schema, "Buy milk").await;

    let response = execute(
        &schema,
        &format!(r#"mutation {{ updateTodo(id: "{}", title: "ab") {{ id }} }}"#, id),
    )
    .await;

    assert!(error_message(&response).contains("title must be at least 3 characters"));
}

// =============================================================================
// deleteTodo
// =============================================================================

#[tokio::test]
async fn test_delete_returns_confirmation_and_removes_record() {
    let schema = schema();
    let id = create_todo(&schema, "Buy milk").await;

    let response = execute(
        &schema,
        &format!(r#"mutation {{ deleteTodo(id: "{}") }}"#, id),
    )
    .await;
    assert_eq!(
        response["data"]["deleteTodo"],
        json!("Todo deleted successfully")
    );

    let response = execute(&schema, &format!(r#"{{ todo(id: "{}") {{ id }} }}"#, id)).await;
    assert_eq!(error_code(&response), "NOT_FOUND");
}

#[tokio::test]
async fn test_delete_absent_id_is_not_found() {
    let schema = schema();
    let response = execute(
        &schema,
        r#"mutation { deleteTodo(id: "ffffffffffffffffffffffff") }"#,
    )
    .await;

    assert!(error_message(&response).contains("Todo not found"));
    assert_eq!(error_code(&response), "NOT_FOUND");
}

// =============================================================================
// Schema shape
// =============================================================================

#[test]
fn test_sdl_matches_published_schema() {
    let sdl = schema().sdl();
    assert!(sdl.contains("todos: [Todo!]!"));
    assert!(sdl.contains("todo(id: ID!): Todo"));
    assert!(sdl.contains("createTodo(title: String!, description: String, completed: Boolean!): Todo"));
    assert!(sdl.contains("updateTodo(id: ID!, title: String, description: String, completed: Boolean): Todo"));
    assert!(sdl.contains("deleteTodo(id: ID!): String"));
}
