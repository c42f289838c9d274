//! Identifier conventions for generated code.

/// Derive the proxy type name from a trait name.
///
/// `IUtilitiesInterop` becomes `UtilitiesInterop`. Names without the `I`
/// marker get a `Proxy` suffix so the proxy never shadows the trait.
pub fn proxy_type_name(interface_name: &str) -> String {
    let mut chars = interface_name.chars();
    match (chars.next(), chars.next()) {
        (Some('I'), Some(second)) if second.is_uppercase() => interface_name[1..].to_string(),
        _ => format!("{interface_name}Proxy"),
    }
}

/// Convert PascalCase to snake_case, keeping acronyms together.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::with_capacity(name.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                let prev = chars[i - 1];
                let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
                if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                    result.push('_');
                }
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}
