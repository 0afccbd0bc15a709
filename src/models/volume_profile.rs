use serde::{Deserialize, Serialize};

/// Full volume-by-price histogram, exposed for rendering independently of the
/// top-cluster selection. Empty when the source series was empty or its price
/// range had zero width.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeProfile {
    pub bin_centers: Vec<f64>,
    pub volumes: Vec<f64>,
    pub min_price: f64,
    pub max_price: f64,
    pub bin_width: f64,
}

impl VolumeProfile {
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }
}
