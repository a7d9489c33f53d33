//! Configuration parameters for a generation run
//!
//! Provides sensible defaults and presets for different use cases.

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, MissionError, Result};
use crate::export::OutputFormat;

/// Configuration for one generation run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionParams {
    /// Total number of briefs to produce
    pub count: i64,
    /// Fixed seed for reproducible runs; auto-seeded when absent
    pub seed: Option<i64>,
    /// Independent streams to spread the run across (1 = single stream)
    pub workers: usize,
    pub format: OutputFormat,
}

impl Default for MissionParams {
    fn default() -> Self {
        Self {
            count: 3,
            seed: None,
            workers: 1,
            format: OutputFormat::Markdown,
        }
    }
}

impl MissionParams {
    /// A single brief, for quick previews
    pub fn quick() -> Self {
        Self {
            count: 1,
            ..Default::default()
        }
    }

    /// A full campaign's worth of briefs spread over several streams
    pub fn campaign() -> Self {
        Self {
            count: 12,
            workers: 4,
            ..Default::default()
        }
    }

    pub fn from_json_str(json: &str) -> std::result::Result<Self, LoadError> {
        let params: MissionParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.count <= 0 {
            return Err(MissionError::InvalidArgument {
                argument: "count",
                value: self.count,
            });
        }
        if self.workers == 0 {
            return Err(MissionError::InvalidArgument {
                argument: "workers",
                value: 0,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for params in [
            MissionParams::default(),
            MissionParams::quick(),
            MissionParams::campaign(),
        ] {
            assert!(params.validate().is_ok(), "{:?}", params);
        }
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let params = MissionParams::from_json_str(r#"{"seed": 42, "format": "json"}"#).unwrap();
        assert_eq!(params.seed, Some(42));
        assert_eq!(params.count, 3);
        assert_eq!(params.workers, 1);
        assert_eq!(params.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        match MissionParams::from_json_str(r#"{"count": 0}"#) {
            Err(LoadError::Invalid(err)) => assert!(err.is_invalid_argument()),
            other => panic!("expected invalid params, got {:?}", other),
        }
        let params = MissionParams {
            workers: 0,
            ..Default::default()
        };
        assert!(params.validate().unwrap_err().is_invalid_argument());
    }
}
