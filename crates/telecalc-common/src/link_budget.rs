//! Point-to-point link budget.
//!
//! All powers are in dBm and all gains/losses in dB, so the budget is a sum.
//! Path loss uses the km/MHz form of the Friis free-space equation.

use serde::{Deserialize, Serialize};

use crate::results::ResultSet;
use crate::round_to;
use crate::validate::{Checker, Validate, ValidationError};

/// Constant term of FSPL with distance in km and frequency in MHz.
pub const FSPL_CONSTANT_DB: f64 = 32.44;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkBudgetInput {
    /// Transmit power (dBm).
    pub tx_power: f64,
    /// Transmit antenna gain (dBi).
    pub tx_gain: f64,
    /// Transmit cable loss (dB).
    pub tx_cable_loss: f64,
    /// Receive antenna gain (dBi).
    pub rx_gain: f64,
    /// Receive cable loss (dB).
    pub rx_cable_loss: f64,
    pub distance_km: f64,
    #[serde(rename = "frequencyMHz")]
    pub frequency_mhz: f64,
    /// Additional environment losses (dB).
    #[serde(default)]
    pub extra_loss: f64,
    /// Receiver amplifier gain (dB).
    #[serde(default)]
    pub ar_gain: f64,
}

impl Validate for LinkBudgetInput {
    fn validate(&self) -> Result<(), ValidationError> {
        Checker::new()
            .finite("txPower", self.tx_power)
            .finite("txGain", self.tx_gain)
            .non_negative("txCableLoss", self.tx_cable_loss)
            .finite("rxGain", self.rx_gain)
            .non_negative("rxCableLoss", self.rx_cable_loss)
            .positive("distanceKm", self.distance_km)
            .positive("frequencyMHz", self.frequency_mhz)
            .non_negative("extraLoss", self.extra_loss)
            .finite("arGain", self.ar_gain)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkBudget {
    pub eirp_dbm: f64,
    pub fspl_db: f64,
    pub total_loss_db: f64,
    pub received_power_dbm: f64,
}

impl LinkBudget {
    pub fn results(&self) -> ResultSet {
        [
            ("EIRP (dBm)", round_to(self.eirp_dbm, 2)),
            ("Received Power (dBm)", round_to(self.received_power_dbm, 2)),
        ]
        .into_iter()
        .collect()
    }
}

/// Free-space path loss in dB.
///
/// Callers must pass positive arguments; [`compute`] guarantees this through
/// validation.
pub fn free_space_path_loss(distance_km: f64, frequency_mhz: f64) -> f64 {
    FSPL_CONSTANT_DB + 20.0 * distance_km.log10() + 20.0 * frequency_mhz.log10()
}

pub fn compute(input: &LinkBudgetInput) -> Result<LinkBudget, ValidationError> {
    input.validate()?;

    let eirp_dbm = input.tx_power + input.tx_gain - input.tx_cable_loss;
    let fspl_db = free_space_path_loss(input.distance_km, input.frequency_mhz);
    let total_loss_db = fspl_db + input.extra_loss;
    let received_power_dbm =
        eirp_dbm + input.rx_gain + input.ar_gain - total_loss_db - input.rx_cable_loss;

    Ok(LinkBudget {
        eirp_dbm,
        fspl_db,
        total_loss_db,
        received_power_dbm,
    })
}
