use anyhow::Result;
use clap::Parser;

use todoql::cli::{Cli, Commands};
use todoql::graphql::{build_schema, run_server};
use todoql::storage::{MemoryStore, MongoStore, TodoStore};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    todoql::logging::init(cli.verbose, cli.log_file.clone());

    let config = cli.config();

    // Connect once; the handle is shared by every resolver. An unreachable
    // store aborts the process instead of failing on the first request.
    let store = if cli.in_memory {
        TodoStore::Memory(MemoryStore::new())
    } else {
        match MongoStore::connect(&config.database).await {
            Ok(store) => TodoStore::Mongo(store),
            Err(e) => {
                tracing::error!("{e}");
                return Err(e.into());
            }
        }
    };

    let schema = build_schema(store);

    match cli.command {
        Commands::Serve { port } => {
            let port = port.unwrap_or(config.server.port);
            println!("Starting GraphQL server on http://localhost:{}", port);
            println!("GraphQL Playground: http://localhost:{}", port);
            run_server(schema, port).await?;
        }
        Commands::Query { query, variables } => {
            let mut request = async_graphql::Request::new(query);
            if let Some(vars) = variables {
                let json: serde_json::Value = serde_json::from_str(&vars)?;
                request = request.variables(async_graphql::Variables::from_json(json));
            }
            let response = schema.execute(request).await;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
