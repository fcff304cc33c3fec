//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Lay out words in fixed-width columns, one string per output line
#[must_use]
pub fn word_columns(words: &[&str], columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let cell_width = words.iter().map(|w| w.chars().count()).max().unwrap_or(0) + 2;

    words
        .chunks(columns)
        .map(|row| {
            row.iter()
                .map(|w| format!("{w:<cell_width$}"))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Format a count with a singular or plural noun
#[must_use]
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(3.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }

    #[test]
    fn columns_pad_to_longest_word() {
        let lines = word_columns(&["AT", "CAT", "CATS"], 2);

        assert_eq!(lines, ["AT    CAT", "CATS"]);
    }

    #[test]
    fn columns_of_nothing() {
        assert!(word_columns(&[], 4).is_empty());
    }

    #[test]
    fn pluralize_picks_form() {
        assert_eq!(pluralize(1, "word", "words"), "1 word");
        assert_eq!(pluralize(0, "word", "words"), "0 words");
        assert_eq!(pluralize(3, "board", "boards"), "3 boards");
    }
}
