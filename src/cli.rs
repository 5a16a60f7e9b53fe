use std::path::PathBuf;

use clap::Parser;

use crate::models::SortDir;

#[derive(Parser, Debug)]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_BUILD_DATE"), ")"),
    about
)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON file holding an array of products
    #[arg(value_name = "PRODUCTS")]
    pub products: PathBuf,

    /// Initial sort column, overrides `sort-column` from the config
    #[arg(long, value_name = "COLUMN")]
    pub sort_column: Option<String>,

    /// Initial sort direction (asc or desc), overrides `sort-direction` from the config
    #[arg(long, value_name = "DIR")]
    pub sort_direction: Option<SortDir>,

    /// Click a column header; repeat to replay several clicks in order
    #[arg(short, long = "sort-by", value_name = "COLUMN")]
    pub sort_by: Vec<String>,
}
