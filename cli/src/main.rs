#![deny(missing_docs)]

//! # Swaggen CLI
//!
//! Merges endpoint validator schemas into a Swagger header document and
//! writes the complete API specification as pretty-printed JSON.

use clap::Parser;
use swaggen_core::AppResult;

mod discovery;
mod generate;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Validator-to-Swagger document generator",
    after_help = "Example: swaggen -r -v ./validators -H ./header.json -o ./swagger.json"
)]
struct Cli {
    #[clap(flatten)]
    args: generate::GenerateArgs,
}

fn main() -> AppResult<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    generate::execute(&cli.args)
}
