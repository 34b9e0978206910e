use aoe4data::UnitRepository;
use aoe4heatmap::{BonusScale, HeatmapConfig, SelectionController};
use anyhow::{Context, Result};
use clap::Parser;

mod args;
mod ops;

use args::{Cli, Commands, OutputFormat};

fn run(args: Cli) -> Result<()> {
    let config = match &args.config {
        Some(path) => HeatmapConfig::load(path)?,
        None => HeatmapConfig::default(),
    };

    let repo = UnitRepository::load(&args.data)
        .with_context(|| format!("Failed to load unit data from {}", args.data.display()))?;

    match args.command {
        Commands::Civs => {
            let ctl = SelectionController::from_repository(&repo, &config);
            print!("{}", ops::render_civs(&ctl)?);
        }
        Commands::Heatmap {
            attacker,
            defender,
            relevant_attackers,
            relevant_defenders,
            format,
            shade,
        } => {
            let mut ctl = SelectionController::from_repository(&repo, &config);
            if let Some(attacker) = attacker {
                ctl.select_attacker(&attacker)?;
            }
            if let Some(defender) = defender {
                ctl.select_defender(&defender)?;
            }
            if relevant_attackers {
                ctl.set_filter_attacker(true);
            }
            if relevant_defenders {
                ctl.set_filter_defender(true);
            }

            let view = ctl.current_view()?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
                OutputFormat::Table => {
                    let scale = BonusScale::for_matrix(&view);
                    print!("{}", ops::render_heatmap(&view, &ctl, &scale, shade)?);
                }
            }
        }
        Commands::Units { civ } => {
            let code = config.civs.resolve(&civ).unwrap_or(civ.as_str()).to_string();
            print!("{}", ops::render_units(&repo, &code)?);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = std::str::FromStr::from_str(&args.log_level).unwrap_or(log::LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    run(args)
}
