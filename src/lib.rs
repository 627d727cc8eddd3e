pub mod aag;
pub mod common;
pub mod dofile;
pub mod testgen;
