pub mod aag_gen;
pub mod pattern_gen;
