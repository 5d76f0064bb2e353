// src/utils/text.rs

/// Upper-cases the first character and leaves the rest untouched.
/// "jane doe" -> "Jane doe", not "Jane Doe".
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
