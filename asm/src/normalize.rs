const COMMENT: &str = "//";

/// A significant source line: comment stripped, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    idx: usize,
    raw: String,
    code: String,
}

impl Line {
    /// `idx` is the 0-based position of `raw` in the source.
    /// Returns `None` for blank and comment-only lines.
    pub fn new(idx: usize, raw: &str) -> Option<Self> {
        let code = match raw.split_once(COMMENT) {
            Some((code, _)) => code,
            None => raw,
        }
        .trim();
        if code.is_empty() {
            return None;
        }
        Some(Line {
            idx,
            raw: raw.to_string(),
            code: code.to_string(),
        })
    }

    /// 1-based line number
    pub fn no(&self) -> usize {
        self.idx + 1
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

/// Splits `text` into its significant lines, in source order.
pub fn normalize(text: &str) -> Vec<Line> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, raw)| Line::new(idx, raw))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(text: &str) -> Vec<(usize, String)> {
        normalize(text)
            .iter()
            .map(|line| (line.no(), line.code().to_string()))
            .collect()
    }

    #[test]
    fn drops_blank_and_comment_lines() {
        let text = "// header\n\n@2\n   \n\t// indented comment\nD=A\n";
        assert_eq!(
            codes(text),
            vec![(3, "@2".to_string()), (6, "D=A".to_string())]
        );
    }

    #[test]
    fn strips_trailing_comment() {
        let text = "  @i   // counter\nM=M+1//inc";
        assert_eq!(
            codes(text),
            vec![(1, "@i".to_string()), (2, "M=M+1".to_string())]
        );
    }

    #[test]
    fn keeps_internal_whitespace() {
        assert_eq!(codes(" D = M "), vec![(1, "D = M".to_string())]);
    }

    #[test]
    fn accepts_crlf() {
        let lines = normalize("@0\r\n\r\nD=M\r\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].code(), "D=M");
        assert_eq!(lines[1].no(), 3);
        assert_eq!(lines[1].raw(), "D=M");
    }

    #[test]
    fn raw_text_is_kept() {
        let lines = normalize("\n  (LOOP) // top\n");
        assert_eq!(lines[0].raw(), "  (LOOP) // top");
        assert_eq!(lines[0].code(), "(LOOP)");
    }

    #[test]
    fn empty_source() {
        assert!(normalize("").is_empty());
        assert!(normalize("\n\n// only comments\n").is_empty());
    }
}
