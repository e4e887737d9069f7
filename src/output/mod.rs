// Output formatting — terminal display of the revealed result grid.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Works on character boundaries rather than bytes, so multi-byte queries
/// (emoji, accented names) in bios never cause a panic.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars).collect();
        format!("{kept}...")
    }
}

/// Compact follower-count formatting: 1_234_567 -> "1.2M", 4_200 -> "4.2K".
pub fn format_count(n: u32) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", f64::from(n) / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", f64::from(n) / 1_000.0)
    } else {
        n.to_string()
    }
}
