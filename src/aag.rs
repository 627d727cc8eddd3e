use std::fmt;
use std::fs;
use std::io::{BufRead, BufReader};
use std::str::FromStr;
use lazy_static::lazy_static;
use regex::Regex;

use crate::common::errors::*;

lazy_static! {
    static ref HEADER_RE: Regex =
        Regex::new(r"^aag\s+(\d+)\s+(\d+)\s+(\d+)\s+(\d+)\s+(\d+)").unwrap();
}

/// The `aag M I L O A` line that opens every AIGER ASCII file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AagHeader {
    /// Maximum variable index (M)
    pub max_var: u64,

    /// Number of primary inputs (I)
    pub inputs: u64,

    /// Number of latches (L)
    pub latches: u64,

    /// Number of primary outputs (O)
    pub outputs: u64,

    /// Number of and gates (A)
    pub ands: u64,
}

impl AagHeader {
    /// Only the prefix of `line` has to match, trailing text is ignored.
    /// Returns `None` when a field does not fit in a `u64`.
    pub fn parse_first_line(line: &str) -> Option<AagHeader> {
        let caps = HEADER_RE.captures(line)?;
        let mut miloa = [0u64; 5];
        for (i, field) in miloa.iter_mut().enumerate() {
            *field = caps.get(i + 1)?.as_str().parse().ok()?;
        }
        Some(AagHeader {
            max_var: miloa[0],
            inputs:  miloa[1],
            latches: miloa[2],
            outputs: miloa[3],
            ands:    miloa[4],
        })
    }

    /// Reads just the first line of `file_path`
    pub fn read_from(file_path: &str) -> Result<AagHeader> {
        let read_err = |io_error| Error::Read {
            path: file_path.to_string(),
            io_error,
        };
        let file = fs::File::open(file_path).map_err(read_err)?;
        let mut bytes = vec![];
        BufReader::new(file).read_until(b'\n', &mut bytes).map_err(read_err)?;

        // non utf-8 bytes can never match, they just show up as U+FFFD
        let line = String::from_utf8_lossy(&bytes);
        match AagHeader::parse_first_line(&line) {
            Some(header) => Ok(header),
            None => Err(Error::MalformedHeader {
                path: file_path.to_string(),
                line: line.trim_end().to_string(),
            }),
        }
    }

    /// The fraig tool numbers primary outputs right after the last variable,
    /// so gate ids run from 0 to M + O
    pub fn max_gate_id(self: &Self) -> Option<u64> {
        self.max_var.checked_add(self.outputs)
    }
}

impl FromStr for AagHeader {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        AagHeader::parse_first_line(s).ok_or_else(|| format!("malformed aag header {:?}", s))
    }
}

impl fmt::Display for AagHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "aag {} {} {} {} {}",
            self.max_var, self.inputs, self.latches, self.outputs, self.ands
        )
    }
}
