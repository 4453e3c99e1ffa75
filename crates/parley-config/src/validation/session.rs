use crate::schema::ParleyConfig;

use super::helpers::check_range;

pub(crate) fn validate_session(errors: &mut Vec<String>, config: &ParleyConfig) {
    check_range(
        errors,
        "session.context_window",
        config.session.context_window,
        0,
        50,
    );
}
