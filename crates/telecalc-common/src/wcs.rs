//! Bit rates through a wireless communication system's source and channel
//! coding chain: sampler → quantizer → source coder → channel coder →
//! interleaver → burst formatter.

use serde::{Deserialize, Serialize};

use crate::results::ResultSet;
use crate::validate::{Checker, Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WcsInput {
    /// Signal bandwidth (Hz).
    pub bandwidth: f64,
    pub quantizer_bits: i64,
    pub source_code_rate: f64,
    pub channel_code_rate: f64,
    /// Burst formatting overhead (percent).
    pub burst_overhead: f64,
}

impl Validate for WcsInput {
    fn validate(&self) -> Result<(), ValidationError> {
        Checker::new()
            .positive("bandwidth", self.bandwidth)
            .int_greater_than("quantizer_bits", self.quantizer_bits, 0)
            .unit_rate("source_code_rate", self.source_code_rate)
            .unit_rate("channel_code_rate", self.channel_code_rate)
            .non_negative("burst_overhead", self.burst_overhead)
            .finish()
    }
}

/// Rates at each stage, in Hz or bit/s. Unrounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodingChain {
    pub sampling_rate_hz: f64,
    pub quantizer_rate_bps: f64,
    pub source_coder_rate_bps: f64,
    pub channel_coder_rate_bps: f64,
    pub interleaver_rate_bps: f64,
    pub burst_rate_bps: f64,
}

impl CodingChain {
    pub fn results(&self) -> ResultSet {
        [
            ("fs_Hz", self.sampling_rate_hz),
            ("Rq_bps", self.quantizer_rate_bps),
            ("Rs_bps", self.source_coder_rate_bps),
            ("Rc_bps", self.channel_coder_rate_bps),
            ("Ri_bps", self.interleaver_rate_bps),
            ("Rb_bps", self.burst_rate_bps),
        ]
        .into_iter()
        .collect()
    }
}

pub fn compute(input: &WcsInput) -> Result<CodingChain, ValidationError> {
    input.validate()?;

    // Nyquist
    let fs = 2.0 * input.bandwidth;
    let rq = fs * input.quantizer_bits as f64;
    let rs = rq * input.source_code_rate;
    let rc = rs * input.channel_code_rate;
    // Interleaving reorders bits without adding any.
    let ri = rc;
    let rb = ri * (1.0 + input.burst_overhead / 100.0);

    Ok(CodingChain {
        sampling_rate_hz: fs,
        quantizer_rate_bps: rq,
        source_coder_rate_bps: rs,
        channel_coder_rate_bps: rc,
        interleaver_rate_bps: ri,
        burst_rate_bps: rb,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> WcsInput {
        WcsInput {
            bandwidth: 4000.0,
            quantizer_bits: 8,
            source_code_rate: 0.8,
            channel_code_rate: 0.9,
            burst_overhead: 10.0,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn voice_channel_chain() {
        let chain = compute(&input()).unwrap();
        assert!(close(chain.sampling_rate_hz, 8000.0));
        assert!(close(chain.quantizer_rate_bps, 64000.0));
        assert!(close(chain.source_coder_rate_bps, 51200.0));
        assert!(close(chain.channel_coder_rate_bps, 46080.0));
        assert!(close(chain.interleaver_rate_bps, 46080.0));
        assert!(close(chain.burst_rate_bps, 50688.0));
    }

    #[test]
    fn burst_rate_scales_source_rate() {
        let i = input();
        let chain = compute(&i).unwrap();
        let expected =
            chain.source_coder_rate_bps * i.channel_code_rate * (1.0 + i.burst_overhead / 100.0);
        assert!(close(chain.burst_rate_bps, expected));
    }

    #[test]
    fn results_keys() {
        let set = compute(&input()).unwrap().results();
        let labels: Vec<_> = set.labels().collect();
        assert_eq!(labels, vec!["fs_Hz", "Rq_bps", "Rs_bps", "Rc_bps", "Ri_bps", "Rb_bps"]);
    }

    #[test]
    fn code_rates_must_be_in_unit_interval() {
        let mut bad = input();
        bad.source_code_rate = 0.0;
        bad.channel_code_rate = 1.2;
        let err = compute(&bad).unwrap_err();
        assert_eq!(err.field_names(), vec!["source_code_rate", "channel_code_rate"]);

        let mut edge = input();
        edge.source_code_rate = 1.0;
        edge.channel_code_rate = 1.0;
        assert!(compute(&edge).is_ok());
    }

    #[test]
    fn rejects_zero_bits_and_negative_overhead() {
        let mut bad = input();
        bad.quantizer_bits = 0;
        bad.burst_overhead = -5.0;
        let err = compute(&bad).unwrap_err();
        assert_eq!(err.field_names(), vec!["quantizer_bits", "burst_overhead"]);
    }
}
