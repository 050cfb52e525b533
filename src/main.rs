use clap::{Args, Parser, Subcommand};
use mission_readiness::config::AppConfig;
use mission_readiness::corpus::PublicationImporter;
use mission_readiness::error::AppError;
use mission_readiness::readiness::catalog::CategoryDefinition;
use mission_readiness::readiness::{Publication, ReadinessEngine, TargetEnvironment};
use mission_readiness::telemetry;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Mission Readiness Scoring Engine",
    about = "Score a research-publication corpus for mission readiness from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a mission readiness analysis for a publication export
    Report(ReportArgs),
    /// List the category catalog, optionally gated to one environment
    Categories(CategoriesArgs),
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Publication export to score (.csv or .json)
    #[arg(long)]
    publications: PathBuf,
    /// Target environment: moon, mars, or transit
    #[arg(long, value_parser = parse_environment)]
    environment: TargetEnvironment,
    /// Minimum publication year; 0 disables year filtering
    #[arg(long)]
    min_year: Option<u16>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct CategoriesArgs {
    /// Restrict the listing to categories applicable to one environment
    #[arg(long, value_parser = parse_environment)]
    environment: Option<TargetEnvironment>,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Report(args) => run_report(args, &config),
        Command::Categories(args) => run_categories(args),
    }
}

fn parse_environment(raw: &str) -> Result<TargetEnvironment, String> {
    raw.parse::<TargetEnvironment>().map_err(|err| err.to_string())
}

fn run_report(args: ReportArgs, config: &AppConfig) -> Result<(), AppError> {
    let min_year = args.min_year.unwrap_or(config.report.min_year);
    let publications = load_publications(&args.publications)?;

    info!(
        corpus = publications.len(),
        environment = %args.environment,
        min_year,
        "computing mission readiness analysis"
    );

    let engine = ReadinessEngine::standard();
    let analysis = engine.analyze(&publications, args.environment, min_year);

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&analysis)?
    } else {
        serde_json::to_string(&analysis)?
    };

    println!("{rendered}");
    Ok(())
}

fn run_categories(args: CategoriesArgs) -> Result<(), AppError> {
    let engine = ReadinessEngine::standard();
    let catalog = engine.catalog();

    let listing: Vec<serde_json::Value> = match args.environment {
        Some(environment) => catalog
            .categories_for(environment)
            .into_iter()
            .map(category_entry)
            .collect(),
        None => catalog.categories().iter().map(category_entry).collect(),
    };

    let rendered = serde_json::to_string_pretty(&json!({ "categories": listing }))?;
    println!("{rendered}");
    Ok(())
}

fn category_entry(category: &CategoryDefinition) -> serde_json::Value {
    let environments: Vec<&str> = if category.environments.is_empty() {
        TargetEnvironment::ordered()
            .iter()
            .map(|environment| environment.as_str())
            .collect()
    } else {
        category
            .environments
            .iter()
            .map(|environment| environment.as_str())
            .collect()
    };

    json!({
        "id": category.id,
        "name": category.name,
        "environments": environments,
        "matchTerms": category.match_terms,
    })
}

fn load_publications(path: &Path) -> Result<Vec<Publication>, AppError> {
    let is_json = path
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));

    let publications = if is_json {
        PublicationImporter::from_json_path(path)?
    } else {
        PublicationImporter::from_csv_path(path)?
    };

    Ok(publications)
}
