//! Character-aware truncation and wrapping for cards and tables.

/// Shorten `s` to at most `max_len` characters, ending in "..." when cut
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let kept: String = s.chars().take(max_len - 3).collect();
    format!("{kept}...")
}

/// Break `text` into lines of at most `width` characters at word boundaries.
///
/// Words longer than `width` are split. At most `max_lines` lines are
/// returned; when text is left over, the last line ends in "...".
pub fn wrap_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    let chunks = text.split_whitespace().flat_map(|word| {
        let chars: Vec<char> = word.chars().collect();
        chars
            .chunks(width)
            .map(|c| c.iter().collect::<String>())
            .collect::<Vec<_>>()
    });

    for chunk in chunks {
        let len = chunk.chars().count();
        if current_len > 0 && current_len + 1 + len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
            if lines.len() == max_lines {
                let last = lines.pop().unwrap_or_default();
                lines.push(with_ellipsis(&last, width));
                return lines;
            }
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(&chunk);
        current_len += len;
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

fn with_ellipsis(line: &str, width: usize) -> String {
    truncate(&format!("{line}..."), width)
}
