mod cli;
mod config;
mod report;
mod wizard;

use clap::Parser;
use cli::{Cli, Commands, EnvironmentArgs, RankingArgs};
use config::{Config, OutputFormat};
use cropyield::error::Result;
use cropyield::models::{
    parse_lenient, parse_strict, Crop, Environment, Fertilizer, SoilColor, Vocabulary,
};
use cropyield::{predict, recommend, YieldPredictor};
use report::Report;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over -v flags
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = match load_config(&cli.command, cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Fix the file or run `cropyield init` to write a new one");
            std::process::exit(1);
        }
    };

    let format = cli.format.unwrap_or(config.output.format);

    if let Err(e) = run(cli.command, &config, format) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(command: Commands, config: &Config, format: OutputFormat) -> Result<()> {
    match command {
        Commands::Predict {
            environment,
            fertilizer,
            crop,
            ranking,
            no_recommend,
        } => {
            let lenient = environment.lenient || config.input.lenient;
            let env = parse_environment(environment, lenient)?;
            let input = env.with_parsed_choice(
                parse_label::<Crop>(&crop, lenient)?,
                parse_label::<Fertilizer>(&fertilizer, lenient)?,
            );
            input.validate()?;

            let prediction = predict(&input);
            let recommendations = if no_recommend {
                Vec::new()
            } else {
                recommend(&env, top_n(&ranking, config))
            };

            print(&Report::for_prediction(input, prediction, recommendations), format)
        }
        Commands::Recommend {
            environment,
            ranking,
        } => {
            let lenient = environment.lenient || config.input.lenient;
            let env = parse_environment(environment, lenient)?;
            env.validate()?;

            let recommendations = recommend(&env, top_n(&ranking, config));
            print(&Report::for_environment(env, recommendations), format)
        }
        Commands::Wizard { ranking } => {
            let input = wizard::collect(config)?;
            input.validate()?;

            let prediction = predict(&input);
            let recommendations = recommend(&input.environment(), top_n(&ranking, config));
            print(&Report::for_prediction(input, prediction, recommendations), format)
        }
        Commands::List => {
            print_vocabulary();
            Ok(())
        }
        Commands::Init => {
            Config::setup_interactive()?;
            Ok(())
        }
    }
}

/// `init` writes a fresh file, so it never needs the existing one to parse.
fn load_config(command: &Commands, path: Option<PathBuf>) -> Result<Config> {
    match command {
        Commands::Init => Ok(Config::default()),
        _ => Config::load(path),
    }
}

fn print(report: &Report, format: OutputFormat) -> Result<()> {
    println!("{}", report.render(format)?);
    Ok(())
}

fn top_n(ranking: &RankingArgs, config: &Config) -> usize {
    ranking
        .top
        .map(usize::from)
        .unwrap_or(config.recommend.top_n)
}

fn parse_label<T: Vocabulary>(value: &str, lenient: bool) -> Result<Option<T>> {
    if lenient {
        Ok(parse_lenient(value))
    } else {
        parse_strict(value).map(Some)
    }
}

fn parse_environment(args: EnvironmentArgs, lenient: bool) -> Result<Environment> {
    Ok(Environment {
        soil_color: parse_label::<SoilColor>(&args.soil_color, lenient)?,
        district: args.district,
        nitrogen: args.nitrogen,
        phosphorous: args.phosphorous,
        rainfall: args.rainfall,
    })
}

fn print_vocabulary() {
    println!("Soil colors (quality bonus):");
    for color in SoilColor::all() {
        println!("  {:<8} +{}", color.as_str(), color.quality_bonus());
    }
    println!();

    println!("Fertilizers:");
    for fertilizer in Fertilizer::all() {
        println!("  {}", fertilizer);
    }
    println!();

    println!("Crops:");
    println!(
        "  {:<10} {:>9} {:>9} {:>18} {}",
        "Crop", "N (ppm)", "P (ppm)", "Rain min/opt/max", "Preferred fertilizers"
    );
    for crop in Crop::all() {
        let n = crop.nutrient_requirement();
        let r = crop.rainfall_requirement();
        let preferred = crop
            .preferred_fertilizers()
            .map(|list| {
                list.iter()
                    .map(|f| f.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<10} {:>9} {:>9} {:>18} {}",
            crop.as_str(),
            format!("{}-{}", n.n_min, n.n_max),
            format!("{}-{}", n.p_min, n.p_max),
            format!("{}/{}/{}", r.min, r.optimal, r.max),
            preferred
        );
    }
    println!();

    println!("Yield factors:");
    for (_, name, weight) in YieldPredictor::new().list_factors() {
        println!("  {:<22} {:.0}%", name, weight * 100.0);
    }
}
