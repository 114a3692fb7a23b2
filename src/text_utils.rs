use tracing::trace;

/// Tokens the model uses to say "no value".
const NULL_TOKENS: [&str; 4] = ["null", "-", "none", ""];

/// Clean a raw value from a reply line.
///
/// Returns `None` when the value is one of the null tokens (compared
/// case-insensitively after trimming). Otherwise returns the trimmed text.
pub fn clean_value(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if is_null_token(trimmed) {
        trace!(?raw, "Null token");
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn is_null_token(value: &str) -> bool {
    let lowered = value.trim().to_lowercase();
    NULL_TOKENS.contains(&lowered.as_str())
}

/// Remove one pair of matching single or double quotes around `value`.
pub fn strip_quotes(value: &str) -> &str {
    for quote in ['\'', '"'] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Parse a positive count. Zero, negatives and anything non-numeric give `None`.
pub fn parse_quantity(value: &str) -> Option<u32> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Some(n),
        _ => {
            trace!(?value, "Unparseable quantity");
            None
        }
    }
}

/// Case-insensitive `true`/`false`; anything else is unknown.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => {
            trace!(?value, "Unrecognized boolean token");
            None
        }
    }
}
