//! # todoql - A minimal GraphQL todo API
//!
//! todoql exposes CRUD over a single `Todo` entity stored in MongoDB,
//! behind a GraphQL schema served over HTTP or executed one-shot from the
//! CLI. Incoming field values are checked against pipe-delimited rule
//! strings (e.g. `"required|string|minLength:3"`) before any store call.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server against a local MongoDB
//! MONGO_URI=mongodb://localhost:27017 todoql serve
//!
//! # Create a todo
//! todoql query 'mutation { createTodo(title: "Buy milk", completed: false) { id } }'
//!
//! # List todos
//! todoql query '{ todos { id title completed } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Connection and server settings
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers, and HTTP transport
//! - [`logging`]: tracing subscriber setup
//! - [`model`]: The `Todo` entity and its draft/patch shapes
//! - [`storage`]: MongoDB and in-memory persistence adapters
//! - [`validation`]: Rule-string input validation

/// Command-line interface definitions using clap.
pub mod cli;

/// Connection and server settings with defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `TodoError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers, and HTTP transport.
pub mod graphql;

/// Logging setup via tracing subscribers.
pub mod logging;

/// Data model: `Todo`, `TodoDraft`, and `TodoPatch`.
pub mod model;

/// Persistence adapters for MongoDB and in-memory storage.
pub mod storage;

/// Rule-string input validation.
pub mod validation;
