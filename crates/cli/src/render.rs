//! Small ANSI text helpers shared by the screens.

/// Wrap `text` in an ANSI color code.
pub fn paint(code: &str, text: &str) -> String {
    format!("\x1b[{code}m{text}\x1b[0m")
}

pub fn bold(text: &str) -> String {
    paint("1", text)
}

pub fn dim(text: &str) -> String {
    paint("90", text)
}

/// Marker appended to records the server has not acknowledged.
pub fn unconfirmed_marker(server_confirmed: bool) -> &'static str {
    if server_confirmed {
        ""
    } else {
        " *"
    }
}

/// Two-letter channel avatar, like the chat sidebar's fallback.
pub fn initials(name: &str) -> String {
    name.chars().take(2).collect::<String>().to_uppercase()
}

pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

/// Text progress bar, 0-100.
pub fn progress_bar(percent: u8, width: usize) -> String {
    let percent = percent.min(100) as usize;
    let filled = percent * width / 100;
    format!(
        "[{}{}] {percent:>3}%",
        "█".repeat(filled),
        "░".repeat(width - filled)
    )
}

/// Region placeholder printed while a fetch is in flight.
pub fn skeleton(label: &str) -> String {
    dim(&format!("… loading {label}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Team Announcements"), "TE");
        assert_eq!(initials("x"), "X");
    }

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer preview line", 10), "a longer …");
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0, 10), "[░░░░░░░░░░]   0%");
        assert_eq!(progress_bar(100, 10), "[██████████] 100%");
        // Over-range values clamp rather than panic.
        assert_eq!(progress_bar(250, 10), "[██████████] 100%");
    }

    #[test]
    fn test_unconfirmed_marker() {
        assert_eq!(unconfirmed_marker(true), "");
        assert_eq!(unconfirmed_marker(false), " *");
    }
}
