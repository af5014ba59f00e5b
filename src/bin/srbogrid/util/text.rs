/// Greedy word wrap to `width` columns; always returns at least one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Cuts `s` to at most `max_len` characters, ending in `…` when shortened.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len == 0 {
        return String::new();
    }

    let mut out: String = s.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_short_text() {
        assert_eq!(wrap("beta calibration failed", 30), vec!["beta calibration failed"]);
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap("no sign change on the bracket", 14),
            vec!["no sign change", "on the bracket"]
        );
    }

    #[test]
    fn wrap_empty_is_one_blank_line() {
        assert_eq!(wrap("   ", 10), vec![String::new()]);
    }

    #[test]
    fn truncate_leaves_fitting_text() {
        assert_eq!(truncate("Vthrs", 5), "Vthrs");
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("Lithium dimer", 8), "Lithium…");
        assert_eq!(truncate("α β γ δ", 3), "α …");
        assert_eq!(truncate("abc", 0), "");
    }
}
