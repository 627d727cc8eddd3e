use log::{info, warn};
use rand::Rng;

use crate::aag::AagHeader;
use crate::common::errors::*;
use crate::common::utils::write_file;

/// Largest pattern file generated in one go
pub const MAX_PATTERN_BYTES: u64 = 1 << 30;

/// Size of `count` patterns of `width` bits, newlines included
fn pattern_bytes(width: u64, count: u32) -> Result<u64> {
    let too_large = Error::PatternTooLarge {
        inputs: width,
        count,
        limit: MAX_PATTERN_BYTES,
    };
    match width.checked_add(1).and_then(|w| w.checked_mul(count as u64)) {
        Some(bytes) if bytes <= MAX_PATTERN_BYTES => Ok(bytes),
        _ => Err(too_large),
    }
}

/// One pattern per line, one `0`/`1` character per primary input
pub fn generate_random_patterns<R: Rng>(width: u64, count: u32, rng: &mut R) -> Result<String> {
    let bytes = pattern_bytes(width, count)?;
    let mut ret = String::with_capacity(bytes as usize);
    for _ in 0..count {
        for _ in 0..width {
            ret.push(if rng.gen_bool(0.5) { '1' } else { '0' });
        }
        ret.push('\n');
    }
    return Ok(ret);
}

/// Writes `count` random patterns sized to the primary inputs of `aag_path`
pub fn write_random_patterns<R: Rng>(
    aag_path: &str,
    file_path: &str,
    count: u32,
    rng: &mut R,
) -> Result<()> {
    let header = AagHeader::read_from(aag_path)?;
    if header.inputs == 0 {
        warn!("{} has no primary inputs, writing an empty pattern file", aag_path);
        write_file("", file_path)?;
        return Ok(());
    }
    let patterns = generate_random_patterns(header.inputs, count, rng)?;
    write_file(&patterns, file_path)?;
    info!("wrote {} patterns of width {} to {}", count, header.inputs, file_path);
    Ok(())
}
