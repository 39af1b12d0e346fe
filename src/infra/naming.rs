// ============================================================
// Layer 6 — Output Filename Rendering
// ============================================================
// Renders the template's filename_pattern into a concrete
// filename by substituting three placeholders:
//
//   {book}   → the book/manuscript label from the CLI
//   {author} → the author label from the CLI
//   {date}   → today's date as YYYYMMDD (chrono)
//
// When the template declares no pattern, a fixed default keeps
// output filenames predictable.
//
// Reference: Rust Book §8 (Strings)
//            chrono crate documentation

use chrono::Local;

/// Pattern used when the template has no output section.
pub const DEFAULT_PATTERN: &str = "{book}_{author}_{date}.docx";

/// Substitute {book}, {author} and {date} into `pattern`.
/// Unknown placeholders are left untouched on purpose — a typo
/// in a template shows up verbatim in the filename where it is
/// easy to spot, instead of failing the whole run.
pub fn render_filename(pattern: &str, book: &str, author: &str, date: &str) -> String {
    pattern
        .replace("{book}", book)
        .replace("{author}", author)
        .replace("{date}", date)
}

/// Today's date in the YYYYMMDD form the pattern expects.
pub fn today_stamp() -> String {
    Local::now().format("%Y%m%d").to_string()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_all_placeholders() {
        let name = render_filename(DEFAULT_PATTERN, "三十天", "Abby", "20260828");
        assert_eq!(name, "三十天_Abby_20260828.docx");
    }

    #[test]
    fn test_unknown_placeholder_is_kept() {
        let name = render_filename("{book}_{edition}.docx", "三十天", "Abby", "20260828");
        assert_eq!(name, "三十天_{edition}.docx");
    }

    #[test]
    fn test_repeated_placeholders() {
        let name = render_filename("{date}/{book}_{date}.docx", "b", "a", "20260828");
        assert_eq!(name, "20260828/b_20260828.docx");
    }

    #[test]
    fn test_today_stamp_shape() {
        let stamp = today_stamp();
        assert_eq!(stamp.len(), 8);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }
}
