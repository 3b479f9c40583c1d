mod cli;
mod commands;
mod utils;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("NUTRIGENE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let args = cli::Args::parse();

    let result = commands::open_service(args.store_dir).and_then(|service| match args.command {
        cli::Commands::Catalog { format } => commands::catalog::run(&service, format),
        cli::Commands::Template => commands::catalog::template(&service),
        cli::Commands::Analyze {
            file,
            output_file,
            format,
        } => commands::analyze::run(service, file, output_file, format),
        cli::Commands::Questionnaire {
            session_id,
            answers_file,
        } => commands::questionnaire::run(&service, &session_id, answers_file),
        cli::Commands::Recommend {
            session_id,
            output_file,
            format,
        } => commands::recommend::run(&service, &session_id, output_file, format),
        cli::Commands::Radar { session_id, format } => {
            commands::radar::run(&service, &session_id, format)
        }
        cli::Commands::MealPlan {
            session_id,
            days,
            output_file,
            format,
        } => commands::meal_plan::run(&service, &session_id, days, output_file, format),
        cli::Commands::Status { session_id } => commands::session::status(&service, &session_id),
        cli::Commands::Delete { session_id } => commands::session::delete(&service, &session_id),
        cli::Commands::Config { save } => commands::config::run(service.config(), save),
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
