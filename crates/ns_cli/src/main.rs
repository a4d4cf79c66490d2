use clap::Parser;
use ns_core::Result;
use ns_inference::{InferenceConfig, ReportBuilder, SpeechSynthesizer};
use ns_scrappers::search::newsapi::DEFAULT_BASE_URL;
use ns_scrappers::{ArticleFetcher, HttpPageFetcher, NewsApiSearch, SearchConfig};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

mod commands;

#[derive(Parser, Debug)]
#[command(author, version, about = "Company news summaries and sentiment reports", long_about = None)]
pub struct Cli {
    /// NewsAPI key used for article search
    #[arg(long, env = "NEWSAPI_KEY", hide_env_values = true)]
    newsapi_key: String,
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    newsapi_url: String,
    #[arg(long, default_value = "huggingface", help = "Model to use for inference. Available models: huggingface (default), dummy")]
    model: String,
    #[arg(long)]
    model_url: Option<String>,
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    hf_token: Option<String>,
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the raw articles found for a company
    News {
        company: String,
    },
    /// Build a sentiment report for a company
    Analyze {
        company: String,
        /// Also write a Hindi audio narration of the report to this file
        #[arg(long)]
        audio: Option<PathBuf>,
    },
    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value = "0.0.0.0:8000")]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    ns_scrappers::init_logging(cli.verbose);

    let search = NewsApiSearch::new(SearchConfig::new(cli.newsapi_key).with_base_url(cli.newsapi_url))?;
    let pages = HttpPageFetcher::new()?;
    info!("🦗 News search ready: {:?}", search);

    let inference_config = InferenceConfig {
        model_name: cli.model,
        api_key: cli.hf_token,
        model_url: cli.model_url,
    };
    let models = ns_inference::create_models(&inference_config)?;
    info!("🧠 Inference models initialized successfully (using {:?})", models);

    match cli.command {
        Commands::News { company } => {
            let fetcher = ArticleFetcher::new(Arc::new(search), Arc::new(pages));
            commands::news(&fetcher, &company, &mut std::io::stdout()).await?;
        }
        Commands::Analyze { company, audio } => {
            let fetcher = ArticleFetcher::new(Arc::new(search), Arc::new(pages));
            let reports = ReportBuilder::new(models.sentiment, models.summary);
            let speech = SpeechSynthesizer::new(models.speech);
            commands::analyze(&fetcher, &reports, &speech, &company, audio.as_deref(), &mut std::io::stdout()).await?;
        }
        Commands::Serve { addr } => {
            let state = ns_web::AppState::new(Arc::new(search), Arc::new(pages), models);
            ns_web::serve(addr, state).await?;
        }
    }

    Ok(())
}
