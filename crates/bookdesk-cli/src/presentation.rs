//! Table formatting utilities for CLI output.

/// Truncates a string to a maximum number of characters, adding "..."
/// if needed.
///
/// Counts characters, not bytes: titles and author names are routinely
/// non-ASCII, and a byte cut could land inside a codepoint.
///
/// # Examples
///
/// ```rust
/// use bookdesk_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// assert_eq!(truncate_string("Gabriel García Márquez", 10), "Gabriel...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Format an optional value for table display, returning a default if None.
pub fn format_optional<T: std::fmt::Display>(value: &Option<T>, default: &str) -> String {
    match value {
        Some(v) => v.to_string(),
        None => default.to_string(),
    }
}

/// Render the pagination footer: the page-button window with the
/// current page bracketed, e.g. `1 [2] 3`.
pub fn format_page_window(window: &[u32], current: u32) -> String {
    window
        .iter()
        .map(|&page| {
            if page == current {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
