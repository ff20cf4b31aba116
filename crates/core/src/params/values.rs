/// `Some(value)` unless the value is empty or whitespace only
pub fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Boolean reading of a parameter value: only `"true"` (any case) is set
pub fn is_flag_set(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// Escape a version for use inside a requirement property pattern
///
/// Values containing `%` are parameter references resolved later by the
/// host and are left alone. Otherwise every `.` becomes `\.` so that
/// `2021.3.16` only matches itself.
pub fn escape_version(version: &str) -> String {
    if version.contains('%') {
        version.to_string()
    } else {
        version.replace('.', "\\.")
    }
}
