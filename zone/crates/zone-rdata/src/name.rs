//! Domain name syntax: label/name length limits and origin absolutization.
//!
//! Master-file names carry escapes (`\.`  `\DDD`) that must be counted as
//! their *decoded* length, not their raw text length, when checking the
//! 63-octet label and 255-octet name limits.

/// Splits a presentation-format name into labels, respecting backslash
/// escapes so an escaped dot (`\.`) never splits a label.
fn split_labels(name: &str) -> Vec<&str> {
    let bytes = name.as_bytes();
    let mut labels = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'.' => {
                labels.push(&name[start..i]);
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        labels.push(&name[start..]);
    }
    labels
}

/// Length of a label once backslash escapes are resolved to single octets.
///
/// `\DDD` (three decimal digits) decodes to one octet; any other `\X`
/// decodes to the literal octet `X`.
fn decoded_length(label: &str) -> usize {
    let bytes = label.as_bytes();
    let mut len = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 3 < bytes.len() && bytes[i + 1..i + 4].iter().all(u8::is_ascii_digit) {
            i += 4;
        } else if bytes[i] == b'\\' && i + 1 < bytes.len() {
            i += 2;
        } else {
            i += 1;
        }
        len += 1;
    }
    len
}

/// Checks a presentation-format name against the label (63) and total
/// name (255) octet limits. The root name `.` is always valid.
pub fn is_domain_name(name: &str) -> bool {
    if name == "." {
        return true;
    }
    let labels = split_labels(name.trim_end_matches('.'));
    if labels.is_empty() {
        return false;
    }
    let mut total = 0;
    for label in &labels {
        let len = decoded_length(label);
        if len == 0 || len > 63 {
            return false;
        }
        total += len + 1;
    }
    total += 1;
    total <= 255
}

/// Absolutizes a name against `origin`, appending it and a trailing dot
/// unless the name is already fully qualified.
///
/// `origin == "."` is the root origin; appending it naively would double
/// the trailing dot (`"host" + "." + "."`), so it is special-cased to
/// just terminate the name.
pub fn fqdn(name: &str, origin: &str) -> Result<String, String> {
    let absolute = if name.ends_with('.') {
        name.to_string()
    } else if origin == "." {
        format!("{name}.")
    } else {
        format!("{name}.{origin}")
    };
    if is_domain_name(&absolute) {
        Ok(absolute)
    } else {
        Err(format!("name exceeds length limits: \"{absolute}\""))
    }
}
