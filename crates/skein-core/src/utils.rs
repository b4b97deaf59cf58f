//! Identifier case conversion for file and declaration names.
//!
//! All converters share one word splitter: words break on `_`, `-`, `.`,
//! spaces, and lowercase→uppercase transitions (`fooBar` → `foo`, `Bar`).

/// Split an identifier into lowercase words.
///
/// ```
/// use skein_core::utils::words;
/// assert_eq!(words("petStore_v2"), vec!["pet", "store", "v2"]);
/// ```
pub fn words(s: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in s.chars() {
        if matches!(c, '_' | '-' | '.' | ' ' | '/') {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_ascii_uppercase() && prev_lower && !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        current.push(c.to_ascii_lowercase());
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// ```
/// use skein_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("pet_store"), "PetStore");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    words(s).iter().map(|w| capitalize(w)).collect()
}

/// ```
/// use skein_core::utils::to_camel_case;
/// assert_eq!(to_camel_case("PetStore"), "petStore");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, word) in words(s).iter().enumerate() {
        if i == 0 {
            out.push_str(word);
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

/// ```
/// use skein_core::utils::to_snake_case;
/// assert_eq!(to_snake_case("PetStore"), "pet_store");
/// ```
pub fn to_snake_case(s: &str) -> String {
    words(s).join("_")
}

/// ```
/// use skein_core::utils::to_kebab_case;
/// assert_eq!(to_kebab_case("PetStore"), "pet-store");
/// ```
pub fn to_kebab_case(s: &str) -> String {
    words(s).join("-")
}
