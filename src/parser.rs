//! Input line parsing.

/// Split a raw input line into a lower-cased command keyword and its
/// argument tokens.
///
/// Tokens are separated by any whitespace; there is no quoting. Returns
/// `None` for an empty or blank line.
///
/// # Example
///
/// ```
/// use contact_assistant::parser::parse_input;
///
/// let (command, args) = parse_input("  ADD alice 1234567890\n").unwrap();
/// assert_eq!(command, "add");
/// assert_eq!(args, vec!["alice", "1234567890"]);
/// assert!(parse_input("   ").is_none());
/// ```
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}
