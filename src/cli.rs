use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cropyield",
    version,
    about = "Estimate crop yield efficiency and find better crop/fertilizer pairings"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict yield for a crop and fertilizer on your land
    Predict {
        #[command(flatten)]
        environment: EnvironmentArgs,

        /// Fertilizer you plan to use, e.g. "NPK (20-20-20)" or urea
        #[arg(long)]
        fertilizer: String,

        /// Crop you plan to grow
        #[arg(long)]
        crop: String,

        #[command(flatten)]
        ranking: RankingArgs,

        /// Skip the alternative crop recommendations
        #[arg(long)]
        no_recommend: bool,
    },
    /// Rank crops and their best fertilizer for your land
    Recommend {
        #[command(flatten)]
        environment: EnvironmentArgs,

        #[command(flatten)]
        ranking: RankingArgs,
    },
    /// Enter farm details step by step
    Wizard {
        #[command(flatten)]
        ranking: RankingArgs,
    },
    /// Write a config file interactively
    Init,
    /// Show soil colors, fertilizers, crops and their requirement tables
    List,
}

#[derive(Args)]
pub struct EnvironmentArgs {
    /// District name
    #[arg(long)]
    pub district: String,

    /// Soil color (Black, Brown, Red, Sandy, Clay, Loam)
    #[arg(long)]
    pub soil_color: String,

    /// Soil nitrogen in ppm
    #[arg(long)]
    pub nitrogen: f64,

    /// Soil phosphorous in ppm
    #[arg(long)]
    pub phosphorous: f64,

    /// Annual rainfall in mm
    #[arg(long)]
    pub rainfall: f64,

    /// Score unknown labels with no bonus instead of rejecting them
    #[arg(long)]
    pub lenient: bool,
}

#[derive(Args)]
pub struct RankingArgs {
    /// Number of alternative crops to show (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub top: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_predict() {
        let cli = Cli::try_parse_from([
            "cropyield",
            "predict",
            "--district",
            "Pune",
            "--soil-color",
            "Loam",
            "--nitrogen",
            "150",
            "--phosphorous",
            "45",
            "--rainfall",
            "1500",
            "--fertilizer",
            "NPK (20-20-20)",
            "--crop",
            "Rice",
            "--top",
            "5",
            "-f",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Predict {
                environment,
                fertilizer,
                crop,
                ranking,
                no_recommend,
            } => {
                assert_eq!(environment.district, "Pune");
                assert_eq!(environment.nitrogen, 150.0);
                assert!(!environment.lenient);
                assert_eq!(fertilizer, "NPK (20-20-20)");
                assert_eq!(crop, "Rice");
                assert_eq!(ranking.top, Some(5));
                assert!(!no_recommend);
            }
            _ => panic!("expected predict"),
        }
    }

    #[test]
    fn rejects_zero_top() {
        let result = Cli::try_parse_from([
            "cropyield",
            "recommend",
            "--district",
            "Pune",
            "--soil-color",
            "Loam",
            "--nitrogen",
            "150",
            "--phosphorous",
            "45",
            "--rainfall",
            "1500",
            "--top",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn counts_verbosity() {
        let cli = Cli::try_parse_from(["cropyield", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::List));
    }
}
