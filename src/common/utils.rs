use std::fs;
use std::io::Write;
use env_logger::Env;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::common::errors::*;

pub fn write_string_to_file(input: &str, file_path: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(file_path)?;
    file.write_all(input.as_bytes())?;
    Ok(())
}

pub fn write_file(input: &str, file_path: &str) -> Result<()> {
    write_string_to_file(input, file_path).map_err(|io_error| Error::WriteFile {
        path: file_path.to_string(),
        io_error,
    })
}

pub fn read_file(file_path: &str) -> Result<String> {
    fs::read_to_string(file_path).map_err(|io_error| Error::Read {
        path: file_path.to_string(),
        io_error,
    })
}

/// Test indices below 10 are zero padded to two digits, everything else is
/// printed as is: 3 -> "03", 10 -> "10", 123 -> "123"
pub fn padded_index(index: u32) -> String {
    format!("{:02}", index)
}

pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// `RUST_LOG` wins over the verbosity flag when set
pub fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
