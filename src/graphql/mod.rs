//! GraphQL schema and resolvers for todos.
//!
//! Exposes CRUD over the todo collection for HTTP clients and for one-shot
//! CLI execution.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! todoql serve --port 4000
//!
//! # Execute a query from the CLI
//! todoql query '{ todos { id title completed } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `todos`, `todo`
//! - **Mutations**: `createTodo`, `updateTodo`, `deleteTodo`

mod schema;
mod server;
mod types;

pub use schema::{TodoSchema, build_schema};
pub use server::run_server;
pub use types::*;
