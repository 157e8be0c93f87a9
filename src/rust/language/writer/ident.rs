use once_cell::sync::Lazy;
use regex::Regex;

// Variable names start with an underscore, an ASCII letter, or any codepoint
// from U+0080 up; hyphens and digits are allowed after the first character.
static VARIABLE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_\x{80}-\x{10FFFF}][A-Za-z0-9_\x{80}-\x{10FFFF}-]*$").unwrap()
});

/// Check a top-level key against the SCSS variable-name grammar.
pub fn is_valid_variable_name(name: &str) -> bool {
    VARIABLE_NAME.is_match(name)
}
