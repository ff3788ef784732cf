//! Drives vector generation end to end.

use anyhow::{Context, Result};
use tracing::{debug, info};
use vecgen_core::{domain_max, TestVector, OUTPUT_WIDTH_BITS};

use crate::{clock_seed, DomainSampler, GenOptions, VectorWriter};

/// One-shot batch generator: samples stimulus within the derived domain,
/// runs the golden model and writes the paired files described by the
/// options. The process holds no state once a run completes.
pub struct Generator {
    options: GenOptions,
}

impl Generator {
    /// Creates a generator instance with this configuration
    pub fn new(options: GenOptions) -> Self {
        Self { options }
    }

    /// Runs the whole batch: opens both destinations, emits one
    /// stimulus/expected pair per iteration and finalizes the files.
    ///
    /// Aborts before generating anything if either destination cannot be
    /// opened. Once generation starts, the arithmetic cannot fail: the
    /// derived domain bound keeps every power inside the result bus width.
    pub fn run(&self) -> Result<()> {
        let options = &self.options;

        let bound = domain_max(options.exponent, OUTPUT_WIDTH_BITS);

        let mut writer =
            VectorWriter::create(&options.input, &options.output).with_context(|| {
                format!(
                    "Could not open output destinations {} / {}",
                    options.input, options.output
                )
            })?;

        let seed = options.seed.unwrap_or_else(clock_seed);
        let mut sampler = DomainSampler::new(bound, seed);

        debug!("exponent={} domain_max={} seed={}", options.exponent, bound, seed);

        for _ in 0..options.count {
            let vector = TestVector::from_input(sampler.next(), options.exponent);
            writer.write(&vector).context("Could not append vector")?;
        }

        writer.close().context("Could not finalize output files")?;

        info!("Wrote {} vectors to {} and {}", options.count, options.input, options.output);

        Ok(())
    }
}
