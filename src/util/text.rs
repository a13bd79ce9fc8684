// src/util/text.rs

/// Extract a one-line excerpt from note content.
///
/// Takes the first non-empty line, trims it and cuts it to at most
/// `max_chars` characters, marking a cut with `…`.
///
/// # Examples
///
/// ```
/// use notehub::util::text::excerpt;
///
/// let content = "\n  Buy milk  \nand eggs";
/// assert_eq!(excerpt(content, 20), "Buy milk");
/// assert_eq!(excerpt("Quarterly planning", 9), "Quarterl…");
/// ```
pub fn excerpt(content: &str, max_chars: usize) -> String {
    let line = content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");

    if line.chars().count() <= max_chars {
        return line.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut cut: String = line.chars().take(max_chars - 1).collect();
    cut.push('…');
    cut
}

/// Pad or cut `text` to exactly `width` characters for column output
pub fn fit(text: &str, width: usize) -> String {
    let cut = excerpt(text, width);
    let pad = width.saturating_sub(cut.chars().count());
    format!("{cut}{}", " ".repeat(pad))
}
