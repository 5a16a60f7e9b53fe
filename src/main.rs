use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, ValueHint};
use tracing::info;

use crate::components::product_table::ProductTable;
use crate::config::get_config_path;
use crate::models::Product;

mod cli;
mod components;
mod config;
mod logging;
mod models;
mod panic;
mod utils;

fn main() -> Result<()> {
    panic::init()?;

    // Enhance the help message for the config argument
    let help = match get_config_path() {
        Ok(def) => format!("Path to config file (default: {})", def.display()),
        Err(_) => "Path to config file".to_owned(),
    };
    let cmd = cli::Args::command()
        .mut_arg("config", |a| a.help(help).value_hint(ValueHint::FilePath).next_line_help(true));
    let args = cli::Args::from_arg_matches(&cmd.get_matches())?;

    let mut config = config::Config::new(args.config)?;
    config.override_sort(args.sort_column, args.sort_direction);
    logging::init(&config)?;

    let products = load_products(&args.products)?;
    info!("Loaded {} products from `{}`", products.len(), args.products.display());

    let mut table = ProductTable::new(products, trace_dbg!(config.initial_sort()));
    for column in &args.sort_by {
        table.on_header_click(column);
    }
    info!("Rendering with sort {:?}", table.sort());
    println!("{}", table.render());

    Ok(())
}

fn load_products(path: &Path) -> Result<Vec<Product>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Fail to open file `{}`", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Fail to deserialize file `{}`", path.display()))
}
