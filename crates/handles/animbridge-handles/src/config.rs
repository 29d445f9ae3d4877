//! Pool configuration.

use serde::{Deserialize, Serialize};

use crate::error::PoolError;
use crate::handle::HandleRange;

/// Configuration for a handle pool. Hosts usually load this alongside their
/// engine settings; the defaults suit a single view hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// First handle value (inclusive).
    pub start: i32,
    /// One past the last handle value.
    pub end: i32,
}

impl Default for PoolConfig {
    fn default() -> Self {
        let range = HandleRange::default();
        Self {
            start: range.start(),
            end: range.end(),
        }
    }
}

impl PoolConfig {
    pub fn range(&self) -> Result<HandleRange, PoolError> {
        HandleRange::new(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: PoolConfig = serde_json::from_str(r#"{"end":16}"#).unwrap();
        assert_eq!(cfg, PoolConfig { start: 0, end: 16 });
        assert_eq!(cfg.range().unwrap().len(), 16);
    }

    #[test]
    fn inverted_config_reports_range_error() {
        let cfg = PoolConfig { start: 10, end: 2 };
        assert_eq!(
            cfg.range(),
            Err(PoolError::InvalidRange { start: 10, end: 2 })
        );
    }
}
