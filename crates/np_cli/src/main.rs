use clap::Parser;
use np_core::query::{self, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};
use np_core::{create_source, ArticleStore, CategoryFilter, Pagination};
use np_web::{AppState, ServerConfig};
use serde::Serialize;
use tracing::info;

mod logging;

#[derive(Parser, Debug)]
#[command(author, version, about = "News portal backend with REST and MCP endpoints", long_about = None)]
pub struct Cli {
    /// Where articles come from. Available sources: seed (default)
    #[arg(long, global = true, env = "NEWS_PORTAL_SOURCE", default_value = "seed")]
    source: String,
    #[arg(long, global = true, env = "NEWS_PORTAL_LOG_LEVEL", default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve {
        #[arg(long, env = "NEWS_PORTAL_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "NEWS_PORTAL_PORT", default_value_t = 8000)]
        port: u16,
        /// Page size used when a request does not name one
        #[arg(long, env = "NEWS_PORTAL_DEFAULT_LIMIT", default_value_t = DEFAULT_LIMIT)]
        default_limit: usize,
        /// Largest page size a request may ask for
        #[arg(long, env = "NEWS_PORTAL_MAX_LIMIT", default_value_t = MAX_LIMIT)]
        max_limit: usize,
    },
    /// List articles, optionally filtered by category
    News {
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value_t = DEFAULT_LIMIT as i64, allow_negative_numbers = true)]
        limit: i64,
        #[arg(long, default_value_t = DEFAULT_PAGE as i64, allow_negative_numbers = true)]
        page: i64,
    },
    /// Show a single article
    Article { id: String },
    /// List the categories present in the store
    Categories,
    /// Search titles, summaries, bodies and tags
    Search {
        query: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value_t = DEFAULT_LIMIT as i64, allow_negative_numbers = true)]
        limit: i64,
    },
}

/// Local queries apply the same page-size cap as a default-configured server.
fn pagination(limit: i64, page: i64) -> Pagination {
    Pagination::from_params(Some(limit), Some(page), DEFAULT_LIMIT, MAX_LIMIT)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(logging::parse_level(&cli.log_level)?);

    let source = create_source(&cli.source)?;
    let store = ArticleStore::from_source(source.as_ref()).await?;
    info!("📰 Loaded {} articles from {} source", store.len(), source.name());

    match cli.command {
        Commands::Serve { host, port, default_limit, max_limit } => {
            let config = ServerConfig { host, port, default_limit, max_limit };
            config.validate()?;
            let addr = config.socket_addr()?;
            info!("🚀 Starting news portal on {}", addr);
            np_web::serve(AppState::new(store, config), addr).await?;
        }
        Commands::News { category, limit, page } => {
            let filter = CategoryFilter::from_param(category.as_deref());
            print_json(&query::list(&store, filter, pagination(limit, page)))?;
        }
        Commands::Article { id } => {
            print_json(query::get_article(&store, &id)?)?;
        }
        Commands::Categories => {
            print_json(&serde_json::json!({ "categories": query::list_categories(&store) }))?;
        }
        Commands::Search { query: text, category, limit } => {
            let filter = CategoryFilter::from_param(category.as_deref());
            print_json(&query::search(&store, &text, filter, pagination(limit, DEFAULT_PAGE as i64).limit))?;
        }
    }

    Ok(())
}
