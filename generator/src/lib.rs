//! The vecgen generator produces the paired stimulus/expected-result files a
//! hardware simulation testbench feeds into the power datapath under test,
//! according to the configured options.
//!
//! ```text
//! User configuration ------> GenOptions     \
//!                                            |
//! Seed (option or clock) --> DomainSampler    > Generator --> input.txt, output.txt
//!                                            |
//! Golden model (vecgen-core) ---------------/
//! ```

pub mod gen_options;
mod generator;
mod sampler;
mod writer;

pub use gen_options::*;
pub use generator::*;
pub use sampler::*;
pub use writer::*;
