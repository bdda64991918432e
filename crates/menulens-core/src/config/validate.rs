//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_upload_mb == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_upload_mb must be > 0".into(),
            ));
        }
        if self.limits.extraction_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "limits.extraction_timeout_ms must be > 0".into(),
            ));
        }
        if self.limits.generation_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "limits.generation_timeout_ms must be > 0".into(),
            ));
        }
        if self.extraction.endpoint.is_empty() {
            return Err(ConfigError::ValidationError(
                "extraction.endpoint must not be empty".into(),
            ));
        }
        if self.extraction.model.is_empty() {
            return Err(ConfigError::ValidationError(
                "extraction.model must not be empty".into(),
            ));
        }
        if self.extraction.max_tokens == 0 {
            return Err(ConfigError::ValidationError(
                "extraction.max_tokens must be > 0".into(),
            ));
        }
        if self.generation.endpoint.is_empty() {
            return Err(ConfigError::ValidationError(
                "generation.endpoint must not be empty".into(),
            ));
        }
        if self.generation.model.is_empty() {
            return Err(ConfigError::ValidationError(
                "generation.model must not be empty".into(),
            ));
        }
        if self.generation.fan_out_cap == 0 {
            return Err(ConfigError::ValidationError(
                "generation.fan_out_cap must be > 0".into(),
            ));
        }
        if self.generation.placeholder_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "generation.placeholder_url must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_upload_limit_rejected() {
        let mut config = Config::default();
        config.limits.max_upload_mb = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_upload_mb"));
    }

    #[test]
    fn test_zero_fan_out_cap_rejected() {
        let mut config = Config::default();
        config.generation.fan_out_cap = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("fan_out_cap"));
    }

    #[test]
    fn test_empty_placeholder_rejected() {
        let mut config = Config::default();
        config.generation.placeholder_url.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_model_rejected() {
        let mut config = Config::default();
        config.extraction.model.clear();
        assert!(config.validate().is_err());
    }
}
