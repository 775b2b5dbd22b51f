use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use liftoff::core::config;
use liftoff::core::state::{App, Phase};
use liftoff::graphql::{LaunchSource, SpaceXClient};
use liftoff::render;

#[derive(Parser)]
#[command(name = "liftoff", about = "SpaceX launch browser with mission-name filtering")]
struct Args {
    /// Maximum number of past launches to request
    #[arg(short, long)]
    limit: Option<u32>,

    /// GraphQL endpoint override
    #[arg(long)]
    endpoint: Option<String>,

    /// Show only the latest launch and exit
    #[arg(long)]
    latest: bool,

    /// Search term applied to the fetched list
    #[arg(short, long)]
    term: Option<String>,

    /// Keep reading search terms from stdin after the first render
    #[arg(short, long)]
    interactive: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to liftoff.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("liftoff.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Liftoff starting up");

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(&file_config, args.endpoint.as_deref(), args.limit);
    log::info!("Using endpoint {} with limit {}", resolved.endpoint, resolved.limit);

    // The one fetch service for this session, created here and handed down.
    let source: Arc<dyn LaunchSource> = Arc::new(SpaceXClient::new(Some(resolved.endpoint)));
    log::info!("Launch source '{}' ready", source.name());

    if args.latest {
        return match source.fetch_latest().await {
            Ok(Some(launch)) => {
                render::print_card(&launch);
                ExitCode::SUCCESS
            }
            Ok(None) => {
                println!("No launch on record yet.");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Could not load the latest launch: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let mut app = App::new(source);
    println!("Loading...");
    let result = app.source.clone().fetch_past(resolved.limit).await;
    app.finish_load(result);

    if let Phase::Failed(e) = app.phase() {
        eprintln!("Could not load launches: {e}");
        return ExitCode::FAILURE;
    }

    if let Some(term) = args.term {
        app.set_search_term(term);
    }
    render::print_launches(app.filtered_launches());

    if args.interactive {
        render::run_interactive(&mut app);
    }

    ExitCode::SUCCESS
}
