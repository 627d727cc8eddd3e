use indicatif::ProgressBar;
use log::{debug, error, info, warn};
use rand::rngs::StdRng;
use rand::Rng;

use crate::aag::AagHeader;
use crate::common::config::DofileConfig;
use crate::common::errors::*;
use crate::common::utils::*;

/// Appended once after the last test case
pub const TRAILER: &str = "usage\nq -f\n";

#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub index: u32,
    pub padded_index: String,
    pub header: AagHeader,
}

impl TestCase {
    pub fn aag_path(test_dir: &str, padded_index: &str) -> String {
        format!("{}/sim{}.aag", test_dir, padded_index)
    }

    pub fn pattern_path(test_dir: &str, padded_index: &str) -> String {
        format!("{}/pattern.{}", test_dir, padded_index)
    }

    pub fn log_path(padded_index: &str) -> String {
        format!("out{}.log", padded_index)
    }

    pub fn load(index: u32, test_dir: &str) -> Result<Self> {
        let padded_index = padded_index(index);
        let header = AagHeader::read_from(&TestCase::aag_path(test_dir, &padded_index))?;
        Ok(TestCase {
            index,
            padded_index,
            header,
        })
    }

    /// Last gate id probed with `cirg`
    pub fn max_index(self: &Self, test_dir: &str) -> Result<u64> {
        self.header.max_gate_id().ok_or_else(|| Error::MalformedHeader {
            path: TestCase::aag_path(test_dir, &self.padded_index),
            line: self.header.to_string(),
        })
    }
}

pub struct DofileGenerator {
    cfg: DofileConfig,
    fragment: String,
    rng: StdRng,
}

impl DofileGenerator {
    /// Reads the fragment file up front, its content is reused for every
    /// test case
    pub fn new(cfg: DofileConfig) -> Result<Self> {
        if cfg.emits_probes() && cfg.max_level == 0 {
            return Err(Error::InvalidMaxLevel);
        }
        let fragment = read_file(&cfg.fragment_path)?;
        if !fragment.is_empty() && !fragment.ends_with('\n') {
            warn!("fragment {} does not end with a newline", cfg.fragment_path);
        }
        let rng = seeded_rng(cfg.seed);
        Ok(DofileGenerator { cfg, fragment, rng })
    }

    fn random_level(self: &mut Self) -> u32 {
        self.rng.gen_range(0..self.cfg.max_level)
    }

    /// Appends the command block of a single test case to `out`
    pub fn emit_test_case(self: &mut Self, tc: &TestCase, out: &mut String) -> Result<()> {
        let test_dir = self.cfg.test_dir.clone();
        let max_index = tc.max_index(&test_dir)?;
        debug!("sim{}: {} -> gate ids 0..={}", tc.padded_index, tc.header, max_index);

        out.push_str(&format!("cirr {} -r\n", TestCase::aag_path(&test_dir, &tc.padded_index)));
        out.push_str(&format!(
            "cirsim -f {} -o {}\n",
            TestCase::pattern_path(&test_dir, &tc.padded_index),
            TestCase::log_path(&tc.padded_index)
        ));
        out.push_str("cirp -fec\n");
        for j in 0..=max_index {
            out.push_str(&format!("cirg {}\n", j));
        }
        if self.cfg.fanout {
            for j in 0..=max_index {
                let level = self.random_level();
                out.push_str(&format!("cirg {} -fanout {}\n", j, level));
            }
        }
        if self.cfg.fanin {
            for j in 0..=max_index {
                let level = self.random_level();
                out.push_str(&format!("cirg {} -fanin {}\n", j, level));
            }
        }
        out.push_str(&self.fragment);
        Ok(())
    }

    /// Builds the whole dofile for test cases `lower..=upper`. Nothing is
    /// returned unless every test case loaded.
    pub fn generate(self: &mut Self, lower: u32, upper: u32) -> Result<String> {
        if lower > upper {
            return Err(Error::InvalidRange { lower, upper });
        }

        let mut ret = String::new();
        let bar = ProgressBar::new((upper - lower) as u64 + 1);
        for index in lower..=upper {
            bar.inc(1);
            let tc = TestCase::load(index, &self.cfg.test_dir)?;
            self.emit_test_case(&tc, &mut ret)?;
        }
        bar.finish_and_clear();

        ret.push_str(TRAILER);
        return Ok(ret);
    }
}

/// Every path gets a write attempt even if an earlier one failed
pub fn write_dofiles(contents: &str, paths: &[String]) -> Result<()> {
    let mut failed = vec![];
    for path in paths.iter() {
        match write_string_to_file(contents, path) {
            Ok(_) => info!("wrote {} ({} bytes)", path, contents.len()),
            Err(e) => {
                error!("failed to write {}: {}", path, e);
                failed.push(path.clone());
            }
        }
    }
    if failed.is_empty() {
        Ok(())
    } else {
        Err(Error::Write { failed })
    }
}

pub fn run(cfg: &DofileConfig, lower: u32, upper: u32) -> Result<()> {
    info!("generating dofiles for test cases {}..={}", lower, upper);
    let mut generator = DofileGenerator::new(cfg.clone())?;
    let contents = generator.generate(lower, upper)?;
    write_dofiles(&contents, &cfg.output_paths)
}
