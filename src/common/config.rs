use clap::Parser;

/// # Context
/// - Everything the dofile generator needs besides the test range
#[derive(Debug, Clone)]
pub struct DofileConfig {
    /// Directory containing `sim<NN>.aag` and `pattern.<NN>`
    pub test_dir: String,

    /// Shared block of driver commands appended to every test case
    pub fragment_path: String,

    /// Every path in here receives the same dofile
    pub output_paths: Vec<String>,

    /// Emit `cirg <j> -fanout <level>` probes
    pub fanout: bool,

    /// Emit `cirg <j> -fanin <level>` probes
    pub fanin: bool,

    /// Probe levels are drawn from `0..max_level`
    pub max_level: u32,

    /// Seed for the probe levels
    pub seed: Option<u64>,
}

impl Default for DofileConfig {
    fn default() -> Self {
        DofileConfig {
            test_dir: "tests.fraig".to_string(),
            fragment_path: "dofraig".to_string(),
            output_paths: vec!["sim_mydo".to_string(), "sim_refdo".to_string()],
            fanout: false,
            fanin: false,
            max_level: 100,
            seed: None,
        }
    }
}

impl DofileConfig {
    pub fn emits_probes(self: &Self) -> bool {
        self.fanout || self.fanin
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Generate fraig regression dofiles", long_about = None)]
pub struct DofileArgs {
    /// First test index (inclusive)
    pub lower: u32,

    /// Last test index (inclusive)
    pub upper: u32,

    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Directory holding sim<NN>.aag and pattern.<NN>
    #[arg(long, default_value = "tests.fraig")]
    pub test_dir: String,

    /// Command fragment appended to every test case
    #[arg(long, default_value = "dofraig")]
    pub fragment: String,

    /// Primary dofile path
    #[arg(long, default_value = "sim_mydo")]
    pub my_dofile: String,

    /// Reference dofile path
    #[arg(long, default_value = "sim_refdo")]
    pub ref_dofile: String,

    /// Also emit `cirg <j> -fanout <level>` for every gate id
    #[arg(long, default_value_t = false)]
    pub fanout: bool,

    /// Also emit `cirg <j> -fanin <level>` for every gate id
    #[arg(long, default_value_t = false)]
    pub fanin: bool,

    /// Exclusive upper bound of the random fanout/fanin levels
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_level: u32,

    /// Seed for the random fanout/fanin levels
    #[arg(long)]
    pub seed: Option<u64>,
}

impl DofileArgs {
    pub fn config(self: &Self) -> DofileConfig {
        DofileConfig {
            test_dir:      self.test_dir.clone(),
            fragment_path: self.fragment.clone(),
            output_paths:  vec![self.my_dofile.clone(), self.ref_dofile.clone()],
            fanout:        self.fanout,
            fanin:         self.fanin,
            max_level:     self.max_level,
            seed:          self.seed,
        }
    }
}

#[cfg(test)]
mod config_test {
    use super::*;

    #[test]
    pub fn test_defaults_match_cli_defaults() {
        let args = DofileArgs::try_parse_from(["fraig-dofile", "1", "12"]).unwrap();
        assert_eq!(args.lower, 1);
        assert_eq!(args.upper, 12);

        let from_cli = args.config();
        let default = DofileConfig::default();
        assert_eq!(from_cli.test_dir, default.test_dir);
        assert_eq!(from_cli.fragment_path, default.fragment_path);
        assert_eq!(from_cli.output_paths, default.output_paths);
        assert_eq!(from_cli.max_level, default.max_level);
        assert!(!from_cli.emits_probes());
    }

    #[test]
    pub fn test_rejects_non_numeric_bounds() {
        assert!(DofileArgs::try_parse_from(["fraig-dofile", "one", "3"]).is_err());
        assert!(DofileArgs::try_parse_from(["fraig-dofile", "1", "-3"]).is_err());
        assert!(DofileArgs::try_parse_from(["fraig-dofile", "1"]).is_err());
    }

    #[test]
    pub fn test_rejects_zero_max_level() {
        assert!(DofileArgs::try_parse_from(["fraig-dofile", "1", "2", "--max-level", "0"]).is_err());
    }

    #[test]
    pub fn test_probe_flags() {
        let args = DofileArgs::try_parse_from([
            "fraig-dofile", "3", "4", "--fanin", "--seed", "9", "--my-dofile", "a", "--ref-dofile", "b",
        ])
        .unwrap();
        let cfg = args.config();
        assert!(cfg.fanin);
        assert!(!cfg.fanout);
        assert!(cfg.emits_probes());
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.output_paths, vec!["a".to_string(), "b".to_string()]);
    }
}
