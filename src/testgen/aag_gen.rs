use std::fmt;
use log::info;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::aag::AagHeader;
use crate::common::errors::*;
use crate::common::utils::write_file;

/// A combinational AIG with random structure, kept as literals so it can be
/// printed straight into an `.aag` file
#[derive(Debug, Clone, PartialEq)]
pub struct RandomAag {
    pub header: AagHeader,
    pub inputs: Vec<u64>,
    pub outputs: Vec<u64>,
    /// (lhs, rhs0, rhs1)
    pub ands: Vec<(u64, u64, u64)>,
}

fn literal(var: u64, inverted: bool) -> u64 {
    2 * var + inverted as u64
}

/// Variable 0 is the constant, the next 20~29% are primary inputs and the
/// rest are and gates fed by lower variables. Variables nothing reads from
/// become primary outputs. With `randomize` the non-constant variable ids
/// are shuffled so the file is no longer topologically numbered.
pub fn generate_random_aag<R: Rng>(num_vars: u32, randomize: bool, rng: &mut R) -> Result<RandomAag> {
    if num_vars < 2 {
        return Err(Error::InvalidVarCount(num_vars));
    }
    let n = num_vars as u64;
    let num_inputs = n * (20 + rng.gen_range(0..10)) / 100;

    let mut fanins: Vec<Option<(u64, u64)>> = vec![None; n as usize];
    for v in (num_inputs + 1)..n {
        let f0 = literal(rng.gen_range(0..v), rng.gen_bool(0.5));
        let f1 = literal(rng.gen_range(0..v), rng.gen_bool(0.5));
        fanins[v as usize] = Some((f0, f1));
    }

    let mut var_map: Vec<u64> = (0..n).collect();
    if randomize {
        var_map[1..].shuffle(rng);
    }
    let remap = |lit: u64| literal(var_map[(lit / 2) as usize], lit % 2 == 1);

    let mut has_fanout = vec![false; n as usize];
    for (f0, f1) in fanins.iter().flatten() {
        has_fanout[(f0 / 2) as usize] = true;
        has_fanout[(f1 / 2) as usize] = true;
    }

    let inputs: Vec<u64> = (1..=num_inputs).map(|v| literal(var_map[v as usize], false)).collect();
    let outputs: Vec<u64> = (1..n)
        .filter(|v| !has_fanout[*v as usize])
        .map(|v| literal(var_map[v as usize], false))
        .collect();
    let mut ands = vec![];
    for (v, fanin) in fanins.iter().enumerate() {
        if let Some((f0, f1)) = fanin {
            ands.push((literal(var_map[v], false), remap(*f0), remap(*f1)));
        }
    }

    let header = AagHeader {
        max_var: n - 1,
        inputs:  inputs.len() as u64,
        latches: 0,
        outputs: outputs.len() as u64,
        ands:    ands.len() as u64,
    };
    return Ok(RandomAag { header, inputs, outputs, ands });
}

impl fmt::Display for RandomAag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        for i in self.inputs.iter() {
            writeln!(f, "{}", i)?;
        }
        for o in self.outputs.iter() {
            writeln!(f, "{}", o)?;
        }
        for (lhs, rhs0, rhs1) in self.ands.iter() {
            writeln!(f, "{} {} {}", lhs, rhs0, rhs1)?;
        }
        Ok(())
    }
}

pub fn write_random_aag<R: Rng>(
    file_path: &str,
    num_vars: u32,
    randomize: bool,
    rng: &mut R,
) -> Result<AagHeader> {
    let aag = generate_random_aag(num_vars, randomize, rng)?;
    write_file(&aag.to_string(), file_path)?;
    info!("wrote {} ({})", file_path, aag.header);
    Ok(aag.header)
}
