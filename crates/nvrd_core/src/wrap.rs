/// Reflow `text` into display lines of at most `width` code points.
///
/// Line endings are normalized first. Lines that are blank after trimming are
/// dropped, short lines are kept verbatim and long lines are cut into
/// fixed-width chunks, the last one possibly shorter.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut lines = Vec::new();
    for line in normalized.split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        if line.chars().count() <= width {
            lines.push(line.to_string());
            continue;
        }
        let chars: Vec<char> = line.chars().collect();
        for chunk in chars.chunks(width) {
            let chunk: String = chunk.iter().collect();
            if !chunk.trim().is_empty() {
                lines.push(chunk);
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::wrap;
    use pretty_assertions::assert_eq;

    #[test]
    fn drops_blank_lines_and_normalizes_endings() {
        let text = "one\r\n\r\n   \rtwo\n\n\tthree";
        assert_eq!(wrap(text, 10), vec!["one", "two", "\tthree"]);
    }

    #[test]
    fn splits_long_lines_by_code_point() {
        let text = "第一章天色已晚风雪满山";
        assert_eq!(wrap(text, 4), vec!["第一章天", "色已晚风", "雪满山"]);
    }

    #[test]
    fn keeps_indentation_of_short_lines() {
        let text = "    indented paragraph";
        assert_eq!(wrap(text, 40), vec!["    indented paragraph"]);
    }

    #[test]
    fn whitespace_only_chunks_are_dropped() {
        let text = format!("abc{}d", " ".repeat(8));
        assert_eq!(wrap(&text, 4), vec!["abc ", "   d"]);
    }

    #[test]
    fn zero_width_behaves_like_one() {
        assert_eq!(wrap("ab", 0), vec!["a", "b"]);
    }

    #[test]
    fn rewrapping_output_is_idempotent() {
        let samples = [
            "",
            "short",
            "    一段很长很长很长的中文段落，需要被切分成若干固定宽度的行。\n\n第二段",
            "mixed\r\nline\rendings\n   \n and a considerably longer trailing line here",
            "x                                        y",
        ];
        for width in [1, 3, 7, 40] {
            for text in samples {
                let first = wrap(text, width);
                assert!(first.iter().all(|l| l.chars().count() <= width));
                assert!(first.iter().all(|l| !l.trim().is_empty()));
                let second = wrap(&first.join("\n"), width);
                assert_eq!(first, second, "width {width}, text {text:?}");
            }
        }
    }
}
