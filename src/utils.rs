/*!
 * Utility functions for Monofile
 */

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Shorten a name for progress display, keeping the trailing characters
pub fn truncate_display_name(name: &str, max_len: usize) -> String {
    let count = name.chars().count();
    if count <= max_len {
        return name.to_string();
    }
    let skip = count - max_len.saturating_sub(3);
    let tail: String = name.chars().skip(skip).collect();
    format!("...{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size_units() {
        assert_eq!(format_file_size(512), "512 bytes");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn test_truncate_display_name_keeps_tail() {
        assert_eq!(truncate_display_name("short.txt", 40), "short.txt");
        let long = "a_very_long_file_name_that_wont_fit_on_the_progress_line.rs";
        let shortened = truncate_display_name(long, 40);
        assert_eq!(shortened.chars().count(), 40);
        assert!(shortened.starts_with("..."));
        assert!(shortened.ends_with(".rs"));
    }

    #[test]
    fn test_truncate_display_name_is_char_safe() {
        let name = "ファイル名がとても長い場合でも安全に切り詰める.txt";
        let shortened = truncate_display_name(name, 10);
        assert!(shortened.starts_with("..."));
        assert_eq!(shortened.chars().count(), 10);
    }
}
