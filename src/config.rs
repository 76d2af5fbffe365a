//! Limits applied while forcing a sequence.
//!
//! Forcing has no intrinsic guard against infinite sources. A
//! [`ForceConfig`] with `max_pulls` set turns "never terminates" into an
//! [`InfiniteSequence`](crate::SeqError::InfiniteSequence) error instead.
//!
//! # Example
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let config = ForceConfig::default().with_max_pulls(100);
//! assert!(to_vec_with(&count_from(0), &config).is_err());
//! assert_eq!(to_vec_with(&up_to(100), &config).unwrap().len(), 100);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeqError};

/// Environment variable read by [`ForceConfig::from_env`].
pub const MAX_PULLS_ENV: &str = "LAZYSEQ_MAX_PULLS";

/// Settings for forcing operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceConfig {
    /// Most values a single traversal may produce; `None` means unbounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pulls: Option<usize>,
}

impl ForceConfig {
    /// No limit on traversal length.
    pub const fn unbounded() -> Self {
        Self { max_pulls: None }
    }

    pub const fn with_max_pulls(mut self, max_pulls: usize) -> Self {
        self.max_pulls = Some(max_pulls);
        self
    }

    /// Read the limit from `LAZYSEQ_MAX_PULLS`, falling back to unbounded when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var(MAX_PULLS_ENV) {
            Ok(raw) => Self::parse_max_pulls(&raw),
            Err(_) => Ok(Self::unbounded()),
        }
    }

    fn parse_max_pulls(raw: &str) -> Result<Self> {
        let max_pulls = raw.trim().parse::<usize>().map_err(|e| {
            SeqError::invalid("max_pulls", format!("{MAX_PULLS_ENV}={raw:?}: {e}"))
        })?;
        let config = Self::unbounded().with_max_pulls(max_pulls);
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no traversal could satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.max_pulls == Some(0) {
            return Err(SeqError::invalid("max_pulls", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        assert_eq!(ForceConfig::default(), ForceConfig::unbounded());
        assert!(ForceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_limit_is_invalid() {
        assert!(ForceConfig::default().with_max_pulls(0).validate().is_err());
    }

    #[test]
    fn test_parse_max_pulls() {
        assert_eq!(
            ForceConfig::parse_max_pulls(" 250 ").unwrap().max_pulls,
            Some(250)
        );
        assert!(matches!(
            ForceConfig::parse_max_pulls("lots"),
            Err(SeqError::InvalidArgument { name: "max_pulls", .. })
        ));
    }

    #[test]
    fn test_json_roundtrip_omits_unbounded_limit() {
        let json = serde_json::to_string(&ForceConfig::unbounded()).unwrap();
        assert_eq!(json, "{}");

        let loaded: ForceConfig = serde_json::from_str(r#"{"max_pulls": 12}"#).unwrap();
        assert_eq!(loaded, ForceConfig::default().with_max_pulls(12));
    }
}
