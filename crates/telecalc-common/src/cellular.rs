//! Cellular system dimensioning.
//!
//! Hexagonal cells of radius R cover a service area; channels are split
//! evenly across the N cells of a reuse cluster.

use serde::{Deserialize, Serialize};

use crate::cluster;
use crate::results::{MetricValue, ResultSet};
use crate::round_to;
use crate::validate::{Checker, Validate, ValidationError};

/// Hexagon area ≈ 2.6·R² (exact value is 3√3/2 ≈ 2.598).
pub const HEX_AREA_FACTOR: f64 = 2.6;

/// Largest accepted reuse factor. Practical plans use N well under 100.
pub const MAX_CLUSTER_SIZE: i64 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellularInput {
    /// Total area to cover (km²).
    pub total_area: f64,
    /// Radius of one cell (km).
    pub cell_radius: f64,
    pub total_channels: i64,
    /// Cells per cluster (reuse factor N).
    pub cluster_size: i64,
    /// Subscribers per cell; 0 means no subscriber data.
    #[serde(default)]
    pub subs_per_cell: i64,
}

impl Validate for CellularInput {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checker = Checker::new();
        checker
            .positive("totalArea", self.total_area)
            .positive("cellRadius", self.cell_radius)
            .int_greater_than("totalChannels", self.total_channels, 0)
            .int_greater_than("clusterSize", self.cluster_size, 1)
            .int_at_least("subsPerCell", self.subs_per_cell, 0);

        if self.cluster_size > MAX_CLUSTER_SIZE {
            checker.reject("clusterSize", format!("must be at most {MAX_CLUSTER_SIZE}"));
        }

        // The cell count must fit an i64.
        if self.total_area.is_finite() && self.total_area > 0.0 && self.cell_radius > 0.0 {
            let cell_area = HEX_AREA_FACTOR * self.cell_radius.powi(2);
            let cells = self.total_area / cell_area;
            if !cell_area.is_finite() {
                checker.reject("cellRadius", "is too large");
            } else if !cells.is_finite() || cells >= i64::MAX as f64 {
                checker.reject("cellRadius", "is too small for totalArea");
            }
        }

        // Per-channel load is undefined once floor division leaves no
        // channels in a cell.
        if self.subs_per_cell > 0
            && self.cluster_size > 1
            && self.total_channels > 0
            && self.total_channels < self.cluster_size
        {
            checker.reject(
                "totalChannels",
                "must be at least clusterSize when subsPerCell is set",
            );
        }
        checker.finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellularPlan {
    pub cell_area_km2: f64,
    pub total_cells: i64,
    pub channels_per_cell: i64,
    pub total_clusters: i64,
    pub reuse_distance_km: f64,
    pub total_subscribers: i64,
    /// `None` when no subscriber data was given.
    pub subscribers_per_channel: Option<f64>,
    pub freq_reuse_factor: f64,
    pub cochannel_ratio: f64,
    /// `channels_per_cell · N`. Falls short of the total channel count when
    /// it is not a multiple of N.
    pub channels_per_cluster: i64,
    pub system_capacity: i64,
    pub hex_move: Option<(u64, u64)>,
}

impl CellularPlan {
    pub fn results(&self) -> ResultSet {
        let entries: Vec<(&str, MetricValue)> = vec![
            ("Cell Area (km²)", round_to(self.cell_area_km2, 2).into()),
            ("Total Cells", self.total_cells.into()),
            ("Channels per Cell", self.channels_per_cell.into()),
            ("Total Clusters", self.total_clusters.into()),
            ("Reuse Distance (km)", round_to(self.reuse_distance_km, 2).into()),
            ("Total Subscribers", self.total_subscribers.into()),
            ("Subscribers per Channel", self.subscribers_per_channel.into()),
            ("Frequency Reuse Factor", round_to(self.freq_reuse_factor, 3).into()),
            ("Co-channel Reuse Ratio Q", round_to(self.cochannel_ratio, 2).into()),
            ("Channels per Cluster", self.channels_per_cluster.into()),
            ("System Capacity (channels)", self.system_capacity.into()),
            ("(i,j) Move", cluster::format_move(self.hex_move).into()),
        ];
        entries.into_iter().collect()
    }
}

pub fn compute(input: &CellularInput) -> Result<CellularPlan, ValidationError> {
    input.validate()?;

    let n = input.cluster_size;
    let cell_area_km2 = HEX_AREA_FACTOR * input.cell_radius.powi(2);
    let total_cells = (input.total_area / cell_area_km2).ceil() as i64;
    let channels_per_cell = input.total_channels / n;
    let total_clusters = total_cells / n + i64::from(total_cells % n != 0);
    let reuse_distance_km = input.cell_radius * (3.0 * n as f64).sqrt();

    let total_subscribers = total_cells.checked_mul(input.subs_per_cell).ok_or_else(|| {
        ValidationError::field("subsPerCell", "total subscribers out of range")
    })?;
    let system_capacity = total_clusters.checked_mul(input.total_channels).ok_or_else(|| {
        ValidationError::field("totalChannels", "system capacity out of range")
    })?;
    let subscribers_per_channel = (input.subs_per_cell > 0)
        .then(|| round_to(input.subs_per_cell as f64 / channels_per_cell as f64, 2));

    Ok(CellularPlan {
        cell_area_km2,
        total_cells,
        channels_per_cell,
        total_clusters,
        reuse_distance_km,
        total_subscribers,
        subscribers_per_channel,
        freq_reuse_factor: 1.0 / n as f64,
        cochannel_ratio: (3.0 * n as f64).sqrt(),
        channels_per_cluster: channels_per_cell * n,
        system_capacity,
        hex_move: cluster::hex_move(n as u64),
    })
}
