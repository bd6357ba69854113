//! Classification policy: fixed thresholds mapping a CHI score to a health
//! status, and the interpretation paragraph shown for each status.
//!
//! Everything here is pure; two records with the same score always carry
//! the same status and interpretation.

use serde::{Deserialize, Serialize};

/// Closed, ordered set of health categories, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
    Excellent,
    Good,
    Moderate,
    Poor,
    Critical,
}

/// Map a score to its status. Scores conventionally lie in 0-100 but any
/// real number classifies by threshold alone; there is no clamping.
pub fn classify(score: f64) -> HealthStatus {
    if score >= 75.0 {
        HealthStatus::Excellent
    } else if score >= 60.0 {
        HealthStatus::Good
    } else if score >= 45.0 {
        HealthStatus::Moderate
    } else if score >= 30.0 {
        HealthStatus::Poor
    } else {
        HealthStatus::Critical
    }
}

impl HealthStatus {
    pub const fn label(self) -> &'static str {
        match self {
            HealthStatus::Excellent => "Excellent",
            HealthStatus::Good => "Good",
            HealthStatus::Moderate => "Moderate",
            HealthStatus::Poor => "Poor",
            HealthStatus::Critical => "Critical",
        }
    }

    /// Human-readable interpretation text. Total over the closed set.
    pub const fn interpretation(self) -> &'static str {
        match self {
            HealthStatus::Excellent => {
                "The vegetation in this area shows exceptional health with robust canopy \
                 coverage. Photosynthetic activity is optimal, indicating well-maintained \
                 green spaces with adequate water and nutrient availability."
            }
            HealthStatus::Good => {
                "The vegetation displays healthy characteristics with good canopy density. \
                 Minor stress indicators may be present but overall ecosystem function is \
                 maintained."
            }
            HealthStatus::Moderate => {
                "The vegetation shows mixed health signals. Some areas display stress \
                 patterns that may indicate water scarcity, nutrient deficiency, or \
                 early-stage disease."
            }
            HealthStatus::Poor => {
                "Significant vegetation stress detected. Canopy coverage is sparse with \
                 visible decline in plant health. Immediate intervention may be required."
            }
            HealthStatus::Critical => {
                "Severe vegetation degradation observed. Urgent attention needed to prevent \
                 further ecosystem decline. Consider reforestation or intensive care \
                 programs."
            }
        }
    }
}
