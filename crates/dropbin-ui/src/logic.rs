//! Pure URL and formatting helpers extracted from components for non-wasm
//! testing.

/// Build the relative delete-endpoint path for a filename. The filename is
/// URL-escaped so names with spaces or reserved characters reach the server
/// intact.
#[must_use]
pub fn build_delete_path(filename: &str) -> String {
    format!("/delete/{}", urlencoding::encode(filename))
}

/// Build the absolute short link handed to the clipboard from the page origin
/// and a short id.
#[must_use]
pub fn short_link(origin: &str, short_id: &str) -> String {
    format!("{}/s/{short_id}", origin.trim_end_matches('/'))
}

/// Format a wall-clock timestamp as `HH:MM:SS` for the debug panel.
#[must_use]
pub fn format_clock(hours: u32, minutes: u32, seconds: u32) -> String {
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Human-friendly label for the seconds left before the server expires an
/// upload.
#[must_use]
pub fn expiry_label(seconds_left: u64) -> String {
    if seconds_left == 0 {
        return "expired".to_string();
    }
    let minutes = seconds_left / 60;
    let seconds = seconds_left % 60;
    if minutes == 0 {
        format!("{seconds}s left")
    } else {
        format!("{minutes}m {seconds:02}s left")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_path_escapes_reserved_characters() {
        assert_eq!(build_delete_path("a.txt"), "/delete/a.txt");
        assert_eq!(
            build_delete_path("my report (v2).pdf"),
            "/delete/my%20report%20%28v2%29.pdf"
        );
        assert_eq!(build_delete_path("a/b.txt"), "/delete/a%2Fb.txt");
    }

    #[test]
    fn short_link_joins_origin_and_id() {
        assert_eq!(short_link("http://localhost:5000", "aB3x9Z"), "http://localhost:5000/s/aB3x9Z");
        assert_eq!(short_link("https://drop.example/", "q1w2e3"), "https://drop.example/s/q1w2e3");
    }

    #[test]
    fn clock_is_zero_padded() {
        assert_eq!(format_clock(9, 4, 7), "09:04:07");
        assert_eq!(format_clock(23, 59, 59), "23:59:59");
    }

    #[test]
    fn expiry_label_scales() {
        assert_eq!(expiry_label(0), "expired");
        assert_eq!(expiry_label(45), "45s left");
        assert_eq!(expiry_label(272), "4m 32s left");
    }
}
