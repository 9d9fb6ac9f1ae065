mod app;
mod commands;
mod input;
mod labels;
mod output;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // graphstep info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("graphstep", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::Dijkstra { matrix, from, to } => {
            commands::dijkstra::run(matrix, from, to, &cli.global)
        }
        Command::Floyd {
            matrix,
            route,
            final_only,
        } => commands::floyd::run(matrix, route.as_deref(), *final_only, &cli.global),
        Command::Kruskal { matrix } => commands::kruskal::run(matrix, &cli.global),
        Command::Analyze { matrix, totals } => {
            commands::analyze::run(matrix, *totals, &cli.global)
        }
        Command::Knapsack {
            items,
            capacity,
            value_first,
            alternatives,
            exact,
            max_items,
        } => commands::knapsack::run(
            items,
            &commands::knapsack::KnapsackOptions {
                capacity: *capacity,
                value_first: *value_first,
                alternatives: *alternatives,
                exact: *exact,
                max_items: *max_items,
            },
            &cli.global,
        ),
        Command::Ops { matrix, op } => commands::ops::run(matrix, op, &cli.global),
    }
}
