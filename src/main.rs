// File: ./src/main.rs
use anyhow::{Context, Result, bail};
use fixcal::config::Config;
use fixcal::export::CalendarExporter;
use fixcal::source::FixtureSource;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::path::PathBuf;

fn print_help(binary_name: &str) {
    println!(
        "fixcal v{} - Exports a team's upcoming fixtures as an iCalendar file",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {binary_name} [--config <path>]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <path>   Read configuration from a TOML file.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("Without --config, configuration comes from the environment:");
    println!("    URL           Fixtures page to scrape (required)");
    println!("    TEAM          Team name to match exactly (required)");
    println!("    EXPORT_PATH   Directory for MyCalendar/MyCalendar.ics (required)");
    println!("    LOCATION      Venue text stamped on every event (optional)");
}

fn parse_args() -> Result<Option<PathBuf>> {
    let args: Vec<String> = env::args().collect();
    let binary_name = args
        .first()
        .map(String::as_str)
        .unwrap_or("fixcal")
        .to_string();

    let mut config_path = None;
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help(&binary_name);
                std::process::exit(0);
            }
            "-c" | "--config" => {
                let path = iter
                    .next()
                    .with_context(|| format!("{arg} requires a path argument"))?;
                config_path = Some(PathBuf::from(path));
            }
            other => bail!("Unknown argument '{other}' (try --help)"),
        }
    }
    Ok(config_path)
}

fn main() -> Result<()> {
    let config_path = parse_args()?;

    TermLogger::init(
        LevelFilter::Info,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logging")?;

    let config = match config_path {
        Some(path) => Config::load(&path)?,
        None => Config::from_env()?,
    };

    let source = FixtureSource::new(&config)?;
    let fixtures = source.team_fixtures()?;
    log::info!(
        "Found {} upcoming fixture(s) for {}",
        fixtures.len(),
        config.team
    );

    let path = CalendarExporter::new(&config).export(&fixtures)?;
    log::info!("Calendar exported to {}", path.display());
    Ok(())
}
