use clap::Parser;
use log::error;

use fraig_dofile::common::utils::{init_logger, seeded_rng};
use fraig_dofile::testgen::pattern_gen::write_random_patterns;

#[derive(Parser, Debug)]
#[command(version, about = "Generate random simulation patterns for an aag file", long_about = None)]
pub struct PatternGenArgs {
    /// aag file whose primary inputs set the pattern width
    #[arg(short, long)]
    pub aag: String,

    /// Output pattern file path
    #[arg(short, long)]
    pub output: String,

    /// Number of patterns
    #[arg(short, long, default_value_t = 64)]
    pub count: u32,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

fn main() {
    let args = PatternGenArgs::parse();
    init_logger(args.verbose);

    let mut rng = seeded_rng(args.seed);
    if let Err(e) = write_random_patterns(&args.aag, &args.output, args.count, &mut rng) {
        error!("{}", e);
        std::process::exit(1);
    }
}
