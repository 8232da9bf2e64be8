use anyhow::Context;
use clap::Parser;
use std::path::Path;
use terrascope::cli::{Cli, Commands};
use terrascope::config::Config;
use terrascope::logic::advisor::SoilAdvisor;
use terrascope::logic::crops::{sample_showcase, CropCatalog};
use terrascope::logic::scoring::RuleTableScorer;
use terrascope::logic::validate;
use terrascope::logic::RecommendationEngine;
use terrascope::models::{Season, SoilAssessmentReport, SoilMeasurement};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = Config::load(cli.config.clone()).context("failed to load configuration")?;

    let catalog = match &config.catalog_path {
        Some(path) => CropCatalog::from_path(path),
        None => CropCatalog::embedded(),
    }
    .context("failed to load crop catalog")?;

    // One engine instance for the whole process
    let engine = RecommendationEngine::new(Box::new(RuleTableScorer), catalog);

    match cli.command {
        Commands::Assess {
            input,
            season,
            json,
            showcase,
            seed,
        } => {
            let mut measurement = read_measurement(&input, &config)?;
            if let Some(s) = season {
                measurement.season = Season::from_str(&s)
                    .with_context(|| format!("unknown season '{}'", s))?;
            }

            let report = engine.assess(&measurement);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&measurement, &report, showcase, seed);
            }
        }
        Commands::Ask { question, input } => {
            let advisor = SoilAdvisor::new();
            let reply = match input {
                Some(path) => {
                    let measurement = read_measurement(&path, &config)?;
                    let report = engine.assess(&measurement);
                    advisor.reply(&question, Some((&measurement, &report)))
                }
                None => advisor.reply(&question, None),
            };
            println!("{}", reply);
        }
        Commands::Rules => {
            for (id, name) in engine.rules().list_rules() {
                println!("{:<16} {}", id, name);
            }
        }
        Commands::Check => {
            println!("Config: OK (moisture default {:.1}%)", config.default_moisture);
            let catalog = match &config.catalog_path {
                Some(path) => CropCatalog::from_path(path)?,
                None => CropCatalog::embedded()?,
            };
            println!("Catalog: OK ({} crops)", catalog.len());
        }
    }

    Ok(())
}

fn read_measurement(path: &Path, config: &Config) -> anyhow::Result<SoilMeasurement> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read measurement file {:?}", path))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("measurement file {:?} is not valid JSON", path))?;
    let measurement = validate::validate(&value, &config.measurement_defaults())?;
    Ok(measurement)
}

fn print_report(
    measurement: &SoilMeasurement,
    report: &SoilAssessmentReport,
    showcase: Option<usize>,
    seed: u64,
) {
    let fertility = &report.fertility;
    println!(
        "Fertility: {:.1}/100 ({})",
        fertility.score, fertility.level
    );
    let (n, p, k) = measurement.npk_ratio();
    println!("NPK split: {:.0}/{:.0}/{:.0}", n, p, k);
    println!();

    println!("Fertilizer actions:");
    for action in &report.fertilizer_actions {
        println!(
            "  [{}] {} - {} ({})",
            action.priority, action.name, action.application_rate, action.purpose
        );
        println!("        timing: {}", action.timing);
    }
    println!();

    match showcase {
        Some(count) => {
            let mut pool = report.crop_suggestions.highly_suitable.clone();
            pool.extend(report.crop_suggestions.moderately_suitable.iter().cloned());
            println!("Crop showcase ({} of {}):", count.min(pool.len()), pool.len());
            for crop in sample_showcase(&pool, count, seed) {
                print_crop(&crop);
            }
        }
        None => {
            println!("Highly suitable crops:");
            for crop in &report.crop_suggestions.highly_suitable {
                print_crop(crop);
            }
            println!("Moderately suitable crops:");
            for crop in &report.crop_suggestions.moderately_suitable {
                print_crop(crop);
            }
        }
    }
    println!();

    if !report.warnings.is_empty() {
        println!("Warnings:");
        for warning in &report.warnings {
            println!("  ! {}", warning);
        }
        println!();
    }

    println!("Application timing:");
    for line in &report.application_timing {
        println!("  - {}", line);
    }
    println!();

    println!("{}", report.analysis);
}

fn print_crop(crop: &terrascope::models::CropSuggestion) {
    let season_marker = if crop.season_match { "in season" } else { "off season" };
    println!(
        "  {:<12} {:>5.1}  {:<10} [{}]  {}",
        crop.name,
        crop.suitability_score,
        crop.category,
        season_marker,
        crop.top_factors.join("; ")
    );
}
