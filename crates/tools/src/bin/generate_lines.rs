use clap::Parser;
use sortl_model::Case;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    let cases = if config.cases.is_empty() {
        Case::ALL.to_vec()
    } else {
        config.cases
    };

    std::fs::create_dir_all(&config.out_dir)?;
    let written = sortl_model::generate_data(&config.out_dir, cases, config.count, config.seed)?;
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

/// Writes bestCase.txt, worstCase.txt and randomCase.txt test inputs.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
struct Config {
    #[arg()]
    out_dir: std::path::PathBuf,
    /// Number of lines per file.
    #[arg(short = 'n', long, default_value_t = 1000)]
    count: usize,
    /// Seed for reproducible output.
    #[arg(short, long)]
    seed: Option<u64>,
    /// Cases to write; all of them when omitted.
    #[arg(short, long = "case")]
    cases: Vec<Case>,
}
