use clap::Parser;
use fuzzy_rank::cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    fuzzy_rank::logging::init(cli.verbose);

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    run(&cli, stdin, &mut stdout).inspect_err(|e| {
        tracing::error!("fuzzy-rank failed: {:#}", e);
    })
}
