//! Yes/no answer parsing for the restore/save/replay prompts.

/// Accepted affirmative tokens (Russian plus English fallbacks).
const YES_TOKENS: [&str; 4] = ["да", "д", "yes", "y"];
/// Accepted negative tokens.
const NO_TOKENS: [&str; 4] = ["нет", "н", "no", "n"];

/// Parse one yes/no answer token.
///
/// Returns `None` for anything ambiguous; the caller re-prompts.
pub fn parse_yes_no(raw: &str) -> Option<bool> {
    let token = raw.trim().to_lowercase();
    if YES_TOKENS.contains(&token.as_str()) {
        Some(true)
    } else if NO_TOKENS.contains(&token.as_str()) {
        Some(false)
    } else {
        None
    }
}
