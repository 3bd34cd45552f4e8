use crate::font::Font;
use crate::units::Pt;

/// Breaks text into lines no wider than `max_width`, keeping words intact where
/// possible.
///
/// Explicit newlines always start a new line. Runs of whitespace collapse to a
/// single space. A word that is wider than `max_width` on its own is broken at the
/// character where it would overflow so that no line ever exceeds the box.
///
/// Always returns at least one line; empty input produces a single empty line so
/// that callers can size blank table cells the same way as filled ones.
pub fn wrap_text(text: &str, font: Font, size: Pt, max_width: Pt) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = Pt(0.0);
        let space = font.width_of(" ", size);

        for word in paragraph.split_whitespace() {
            let word_width = font.width_of(word, size);

            if !line.is_empty() && line_width + space + word_width <= max_width {
                line.push(' ');
                line.push_str(word);
                line_width += space + word_width;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }

            if word_width <= max_width {
                line.push_str(word);
                line_width = word_width;
            } else {
                // no break point inside the word, fall back to breaking at characters
                line_width = Pt(0.0);
                for ch in word.chars() {
                    let ch_width = font.width_of(ch.encode_utf8(&mut [0; 4]), size);
                    if !line.is_empty() && line_width + ch_width > max_width {
                        lines.push(std::mem::take(&mut line));
                        line_width = Pt(0.0);
                    }
                    line.push(ch);
                    line_width += ch_width;
                }
            }
        }

        lines.push(line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Pt = Pt(10.0);

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_text("Diamond suspension", Font::Helvetica, SIZE, Pt(500.0));
        assert_eq!(lines, vec!["Diamond suspension".to_string()]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let text = "Rinse the specimen with ethanol and dry it in warm air";
        let max = Pt(100.0);
        let lines = wrap_text(text, Font::Helvetica, SIZE, max);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(Font::Helvetica.width_of(line, SIZE) <= max, "{line} overflows");
            assert!(!line.starts_with(' ') && !line.ends_with(' '));
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn honours_explicit_newlines() {
        let lines = wrap_text("Step one\nStep two", Font::Helvetica, SIZE, Pt(500.0));
        assert_eq!(lines, vec!["Step one".to_string(), "Step two".to_string()]);
    }

    #[test]
    fn breaks_words_longer_than_the_box() {
        let lines = wrap_text("WWWWWWWWWW", Font::Helvetica, SIZE, Pt(30.0));
        // W is 9.44pt wide at 10pt, so three fit per line
        assert_eq!(lines, vec!["WWW", "WWW", "WWW", "W"]);
    }

    #[test]
    fn empty_text_is_one_blank_line() {
        assert_eq!(wrap_text("", Font::Helvetica, SIZE, Pt(50.0)), vec![String::new()]);
    }
}
