//! OFDM throughput from resource-grid dimensions.

use serde::{Deserialize, Serialize};

use crate::results::ResultSet;
use crate::validate::{Checker, Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfdmInput {
    /// Modulation order M (e.g. 4 for QPSK, 16 for 16-QAM).
    pub m_order: i64,
    /// Subcarriers per resource block.
    pub n_subcarriers: i64,
    /// OFDM symbol duration (s).
    pub t_sym: f64,
    /// Symbols per resource block.
    pub n_symbols_prb: i64,
    /// Resource blocks transmitted in parallel.
    pub n_prb_parallel: i64,
    /// Occupied bandwidth (Hz).
    pub bandwidth: f64,
}

impl Validate for OfdmInput {
    fn validate(&self) -> Result<(), ValidationError> {
        Checker::new()
            .int_greater_than("m_order", self.m_order, 1)
            .int_greater_than("n_subcarriers", self.n_subcarriers, 0)
            .positive("t_sym", self.t_sym)
            .int_greater_than("n_symbols_prb", self.n_symbols_prb, 0)
            .int_greater_than("n_prb_parallel", self.n_prb_parallel, 0)
            .positive("bandwidth", self.bandwidth)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OfdmThroughput {
    pub bits_per_re: f64,
    pub re_rate_bps: f64,
    pub symbol_rate_bps: f64,
    pub rb_rate_bps: f64,
    pub throughput_bps: f64,
    /// bit/s/Hz
    pub spectral_efficiency: f64,
}

impl OfdmThroughput {
    pub fn results(&self) -> ResultSet {
        [
            ("RE_rate_bps", self.re_rate_bps),
            ("Symbol_rate_bps", self.symbol_rate_bps),
            ("RB_rate_bps", self.rb_rate_bps),
            ("Throughput_bps", self.throughput_bps),
            ("Spectral_eff_bpsHz", self.spectral_efficiency),
        ]
        .into_iter()
        .collect()
    }
}

pub fn compute(input: &OfdmInput) -> Result<OfdmThroughput, ValidationError> {
    input.validate()?;

    let bits_per_re = (input.m_order as f64).log2();
    let re_rate_bps = bits_per_re / input.t_sym;
    let symbol_rate_bps = re_rate_bps * input.n_subcarriers as f64;
    let rb_rate_bps = symbol_rate_bps * input.n_symbols_prb as f64;
    let throughput_bps = rb_rate_bps * input.n_prb_parallel as f64;

    Ok(OfdmThroughput {
        bits_per_re,
        re_rate_bps,
        symbol_rate_bps,
        rb_rate_bps,
        throughput_bps,
        spectral_efficiency: throughput_bps / input.bandwidth,
    })
}
