use serde::{Deserialize, Serialize};

/// Thresholds applied when selecting the matches returned to a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub minimum_alignment: f64,
    pub max_matches: usize,
}

impl MatchingConfig {
    pub const DEFAULT_MINIMUM_ALIGNMENT: f64 = 40.0;
    pub const DEFAULT_MAX_MATCHES: usize = 10;
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            minimum_alignment: Self::DEFAULT_MINIMUM_ALIGNMENT,
            max_matches: Self::DEFAULT_MAX_MATCHES,
        }
    }
}
