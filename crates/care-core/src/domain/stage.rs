//! Growth stage of a plant and the care hint each stage implies.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthStage {
    Bloom,
    Foliage,
    Recover,
    Dormant,
}

impl GrowthStage {
    /// Case-insensitive; unknown labels yield None
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "bloom" | "flowering" => Some(GrowthStage::Bloom),
            "foliage" | "growth" => Some(GrowthStage::Foliage),
            "recover" | "recovery" => Some(GrowthStage::Recover),
            "dormant" | "dormancy" => Some(GrowthStage::Dormant),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthStage::Bloom => "bloom",
            GrowthStage::Foliage => "foliage",
            GrowthStage::Recover => "recover",
            GrowthStage::Dormant => "dormant",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            GrowthStage::Bloom => "Blooming: weak PK feed (K above N), no growth stimulants.",
            GrowthStage::Foliage => "Foliage: steady growth, no sudden stimulation.",
            GrowthStage::Recover => "Recovering: no stimulants or PK, roots come first.",
            GrowthStage::Dormant => "Dormant: water only, no feeding.",
        }
    }
}
