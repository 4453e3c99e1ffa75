use crate::schema::ParleyConfig;

use super::helpers::{check_non_empty, check_range};

pub(crate) fn validate_gemini(errors: &mut Vec<String>, config: &ParleyConfig) {
    let gemini = &config.gemini;

    check_non_empty(errors, "gemini.model", &gemini.model);
    check_range(errors, "gemini.max_tokens", gemini.max_tokens, 1, 65536);
    check_range(errors, "gemini.temperature", gemini.temperature, 0.0, 2.0);
    check_range(errors, "gemini.timeout_secs", gemini.timeout_secs, 5, 600);
}
