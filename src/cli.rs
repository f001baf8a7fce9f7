use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::TodoConfig;

#[derive(Parser)]
#[command(name = "todoql", version, about = "A minimal GraphQL todo API backed by MongoDB")]
pub struct Cli {
    /// MongoDB connection string
    #[arg(long, env = "MONGO_URI", global = true)]
    pub mongo_uri: Option<String>,

    /// Database name
    #[arg(long, env = "TODOQL_DB", global = true)]
    pub database: Option<String>,

    /// Collection name
    #[arg(long, env = "TODOQL_COLLECTION", global = true)]
    pub collection: Option<String>,

    /// Use a transient in-memory store instead of MongoDB
    #[arg(long, global = true)]
    pub in_memory: bool,

    /// Enable verbose (DEBUG) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write structured JSON logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "TODOQL_PORT")]
        port: Option<u16>,
    },

    /// Execute a single GraphQL request and print the JSON response
    Query {
        /// GraphQL document to execute
        query: String,

        /// JSON-encoded variables for the request
        #[arg(long)]
        variables: Option<String>,
    },
}

impl Cli {
    /// Resolved configuration: defaults overridden by flags/env vars.
    pub fn config(&self) -> TodoConfig {
        let mut config = TodoConfig::default();
        if let Some(ref uri) = self.mongo_uri {
            config.database.uri = uri.clone();
        }
        if let Some(ref database) = self.database {
            config.database.database = database.clone();
        }
        if let Some(ref collection) = self.collection {
            config.database.collection = collection.clone();
        }
        config
    }
}
