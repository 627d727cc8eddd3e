use clap::Parser;
use log::error;

use fraig_dofile::common::utils::{init_logger, seeded_rng};
use fraig_dofile::testgen::aag_gen::write_random_aag;

#[derive(Parser, Debug)]
#[command(version, about = "Generate a random combinational aag file", long_about = None)]
pub struct AagGenArgs {
    /// Number of variable slots, including the constant
    pub num_vars: u32,

    /// Output aag file path
    pub output: String,

    /// Shuffle variable ids so the file is not topologically numbered
    #[arg(short, long, default_value_t = false)]
    pub randomize: bool,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

fn main() {
    let args = AagGenArgs::parse();
    init_logger(args.verbose);

    let mut rng = seeded_rng(args.seed);
    if let Err(e) = write_random_aag(&args.output, args.num_vars, args.randomize, &mut rng) {
        error!("{}", e);
        std::process::exit(1);
    }
}
