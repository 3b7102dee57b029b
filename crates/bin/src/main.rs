use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("setmatch=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let passed = match &cli.command {
        Commands::ElemAttr(args) => commands::check::run(&cli.state, args.into(), cli.format)?,
        Commands::NestedAttrs(args) => commands::check::run(&cli.state, args.into(), cli.format)?,
        Commands::AttrPair(args) => commands::check::run(&cli.state, args.into(), cli.format)?,
        Commands::Run(args) => commands::run::run(&cli.state, args, cli.format)?,
        Commands::Resources => {
            commands::resources::run(&cli.state, cli.format)?;
            true
        }
    };

    if !passed {
        std::process::exit(1);
    }
    Ok(())
}
