//! Checks shared by the section validators. Each pushes a message naming
//! the offending key instead of returning early, so one pass reports
//! everything wrong with a file.

/// Push an error if `value` falls outside `[min, max]`.
pub(crate) fn check_range<T>(errors: &mut Vec<String>, key: &str, value: T, min: T, max: T)
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min || value > max {
        errors.push(format!("{key} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is empty or whitespace.
pub(crate) fn check_non_empty(errors: &mut Vec<String>, key: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{key} must not be empty"));
    }
}
