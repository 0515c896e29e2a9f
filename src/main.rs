//! Neoviz - 3D graph database visualizer

use clap::Parser;

use neoviz::api::ApiClient;
use neoviz::config::Config;
use neoviz::error::AppError;
use neoviz::models::GraphData;
use neoviz::visualization::run_visualizer;

#[derive(Parser)]
#[command(name = "neoviz")]
#[command(about = "3D visualizer for graph database nodes and relationships")]
#[command(version)]
struct Cli {
    /// Run in verbose mode
    #[arg(short, long)]
    verbose: bool,

    /// Override the graph API origin (e.g. http://localhost:8199)
    #[arg(long)]
    origin: Option<String>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration; the CLI flag has the final say
    let config = Config::load()?;
    let origin = cli.origin.unwrap_or(config.api.origin);
    tracing::info!("Using graph API at {origin}");

    let client = ApiClient::new(origin);
    let runtime = tokio::runtime::Runtime::new()?;

    // Node and relationship listings are fetched concurrently and both must
    // land before the scene is built. On failure the error is logged and the
    // window opens on an empty scene.
    let graph = match runtime.block_on(load_graph(&client)) {
        Ok(graph) => {
            tracing::info!(
                "Loaded {} nodes and {} relationships",
                graph.nodes.len(),
                graph.relationships.len()
            );
            graph
        }
        Err(err) => {
            tracing::error!("Failed to load graph data: {err}");
            GraphData::default()
        }
    };

    // Blocks until the window is closed. Detail fetches triggered by clicks
    // run on the runtime's worker threads in the meantime.
    run_visualizer(graph, client, runtime.handle().clone());

    Ok(())
}

async fn load_graph(client: &ApiClient) -> Result<GraphData, AppError> {
    let (nodes, relationships) =
        tokio::try_join!(client.list_nodes(), client.list_relationships())?;
    Ok(GraphData {
        nodes,
        relationships,
    })
}
