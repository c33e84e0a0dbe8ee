use chrono::Local;
use clap::Parser;
use dotenv::dotenv;
use std::error::Error;
use std::path::PathBuf;
use stundenzettel::api::ClockifyClient;
use stundenzettel::date_ext::NaiveDateExt;
use stundenzettel::{materialize_week, schedule, submit_week};

#[derive(Parser)]
#[command(
    name = "stundenzettel",
    about = "Log the weekly time entries for MSE Practicum 2025 on Clockify",
    version
)]
struct Args {
    /// Clockify API key
    #[arg(long, env = "CLOCKIFY_API_KEY", hide_env_values = true)]
    clockify_api_key: String,

    /// Actually create the time entries
    #[arg(long)]
    commit: bool,

    /// JSON file replacing the built-in weekly schedule
    #[arg(long, value_name = "FILE")]
    schedule: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let entries = match &args.schedule {
        Some(path) => schedule::load_file(path)?,
        None => schedule::builtin(),
    };
    schedule::validate(&entries)?;

    let today = Local::now().date_naive();
    let monday = today.week_monday();
    log::info!("Filling the week of {}", monday);

    let week = materialize_week(&entries, monday)?;

    let report = if args.commit {
        let client = ClockifyClient::new(args.clockify_api_key)?;
        submit_week(&week, &Local, true, |request| client.create_time_entry(request))?
    } else {
        submit_week(&week, &Local, false, |_| Ok(()))?
    };

    if args.commit {
        log::info!("Done: {} created, {} failed", report.created(), report.failed());
    } else {
        log::info!(
            "Dry run: {} entries planned, pass --commit to create them",
            report.planned()
        );
    }

    Ok(())
}
