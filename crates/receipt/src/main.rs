use clap::Parser;

use posdelivery_receipt::cli::{self, Args};

fn main() -> anyhow::Result<()> {
    posdelivery_observability::init();

    let args = Args::parse();
    cli::run(&args, std::io::stdin().lock(), std::io::stdout().lock())
}
