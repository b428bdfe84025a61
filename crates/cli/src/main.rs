use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use warmap::api::{ArmyCfg, LabelCfg};

mod commands;
mod model;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Map-building driver: labels, boundary checks, army balancing")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Place a label point inside every polygon
    Label {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Absolute tolerance in polygon units
        #[arg(long, default_value_t = 1.0)]
        precision: f64,
    },
    /// Check polygon boundaries for self-intersections
    Validate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Assign army values to bonuses and super-bonuses
    Armies {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 1)]
        min_armies: u32,
        #[arg(long, default_value_t = 10)]
        max_armies: u32,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Label {
            input,
            out,
            precision,
        } => {
            tracing::info!(input = %input.display(), out = %out.display(), precision, "label");
            commands::label(&input, &out, LabelCfg { precision })?;
        }
        Action::Validate { input, out } => {
            tracing::info!(input = %input.display(), out = %out.display(), "validate");
            commands::validate(&input, &out)?;
        }
        Action::Armies {
            input,
            out,
            min_armies,
            max_armies,
        } => {
            tracing::info!(input = %input.display(), out = %out.display(), min_armies, max_armies, "armies");
            let cfg = ArmyCfg {
                min_armies,
                max_armies,
                ..ArmyCfg::default()
            };
            commands::armies(&input, &out, cfg)?;
        }
        Action::Report => report()?,
    }
    Ok(())
}

fn report() -> Result<()> {
    let payload = provenance::Payload::new("report", serde_json::json!({}));
    let obj = provenance::document(&payload, &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
