/// Appends the root label when `name` is not already fully qualified.
pub fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

/// Strips the leftmost label of `domain`.
///
/// Dots escaped with a backslash (`\.`) belong to the label. The final
/// character is never treated as a boundary, so `"com."` and `"."` both
/// yield the root `"."`.
pub fn parent_of(domain: &str) -> String {
    match next_label(domain) {
        Some(start) => domain[start..].to_string(),
        None => ".".to_string(),
    }
}

fn next_label(name: &str) -> Option<usize> {
    let bytes = name.as_bytes();
    if bytes.len() < 2 {
        return None;
    }

    for i in 0..bytes.len() - 1 {
        if bytes[i] != b'.' {
            continue;
        }
        let backslashes = bytes[..i].iter().rev().take_while(|b| **b == b'\\').count();
        if backslashes % 2 == 1 {
            continue;
        }
        return Some(i + 1);
    }

    None
}
