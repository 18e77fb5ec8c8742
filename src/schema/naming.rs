//! Identifier conversion for payload keys
//!
//! Keys are split into words on any non-alphanumeric character and on case
//! boundaries, then re-joined in the casing the target language expects.

/// Split a payload key into words.
///
/// A new word starts after a separator, at a lower-to-upper transition
/// (`productId`), after a digit (`item2Name`), and at the last capital of an
/// acronym followed by lowercase (`productURLId` -> `product`, `URL`, `Id`).
pub fn split_words(key: &str) -> Vec<String> {
    let chars: Vec<char> = key.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let starts_word = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if starts_word {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// `product_id` -> `productId`
pub fn lower_camel(key: &str) -> String {
    let words = split_words(key);
    let mut result = String::new();

    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            result.push_str(&word.to_lowercase());
        } else {
            result.push_str(&capitalize(word));
        }
    }

    identifier(result)
}

/// `pricing_detail` -> `PricingDetail`
pub fn upper_camel(key: &str) -> String {
    let result: String = split_words(key).iter().map(|w| capitalize(w)).collect();
    identifier(result)
}

/// `productId` -> `product_id`
pub fn snake_case(key: &str) -> String {
    let result = split_words(key)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_");
    identifier(result)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn identifier(name: String) -> String {
    match name.chars().next() {
        None => "value".to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{name}"),
        Some(_) => name,
    }
}
