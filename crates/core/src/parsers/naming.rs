//! Names synthesized for themes that do not declare their own.

/// `ocean-fire.tokens.json` → `ocean-fire`.
pub fn file_stem(file_name: &str) -> &str {
    let stem = strip_suffix_ignore_case(file_name, ".json").unwrap_or(file_name);
    strip_suffix_ignore_case(stem, ".tokens").unwrap_or(stem)
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    (s.is_char_boundary(split) && s[split..].eq_ignore_ascii_case(suffix)).then(|| &s[..split])
}

/// `ocean-fire` → `Ocean Fire`: hyphens become spaces and every word gets an
/// uppercase first character.
pub fn display_name_from_stem(stem: &str) -> String {
    stem.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `Ocean Fire` / `ocean-fire` → `OCEAN_FIRE`.
pub fn identifier_from_name(name: &str) -> String {
    let mut identifier: String = name
        .chars()
        .flat_map(char::to_uppercase)
        .map(|c| {
            if c.is_ascii_uppercase() || c.is_ascii_digit() {
                c
            } else {
                '_'
            }
        })
        .collect();
    if identifier.is_empty() || identifier.starts_with(|c: char| c.is_ascii_digit()) {
        identifier.insert(0, '_');
    }
    identifier
}
