//! Full configuration validation.
//!
//! Validates numeric ranges and persona declarations. Each section has its
//! own submodule; this orchestrator calls them all and collects errors into
//! a single `ConfigError`.

mod gemini;
mod helpers;
mod personas;
mod session;


use crate::schema::ParleyConfig;
use parley_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ParleyConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    gemini::validate_gemini(&mut errors, config);
    session::validate_session(&mut errors, config);
    personas::validate_personas(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
