use clap::Parser;
use log::{error, info};

use fraig_dofile::common::config::DofileArgs;
use fraig_dofile::common::utils::init_logger;
use fraig_dofile::dofile;

fn main() {
    let args = DofileArgs::parse();
    init_logger(args.verbose);

    let cfg = args.config();
    match dofile::run(&cfg, args.lower, args.upper) {
        Ok(_) => {
            info!("dofiles written to {}", cfg.output_paths.join(", "));
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
