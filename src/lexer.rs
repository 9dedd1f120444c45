/// One instruction line of drum tab source, trimmed, with its position in
/// the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based physical line number
    pub number: usize,
    pub text: &'a str,
}

impl<'a> Line<'a> {
    pub fn new(number: usize, text: &'a str) -> Self {
        Self { number, text }
    }
}

/// Characters that end a line. `\r\n` counts as a single break.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Physical lines of `source`, without their terminators
fn physical_lines(source: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(source);
    std::iter::from_fn(move || {
        let text = rest?;
        match text.find(LINE_BREAKS) {
            Some(at) => {
                let mut next = at + text[at..].chars().next()?.len_utf8();
                if text[at..].starts_with("\r\n") {
                    next += 1;
                }
                rest = Some(&text[next..]);
                Some(&text[..at])
            }
            None => {
                rest = None;
                Some(text)
            }
        }
    })
}

/// Split source into trimmed, non-empty lines, in source order.
///
/// Never fails: every line, directive or not, is validated by the parser.
pub fn lex(source: &str) -> Vec<Line<'_>> {
    physical_lines(source)
        .enumerate()
        .filter_map(|(i, raw)| {
            let text = raw.trim();
            if text.is_empty() {
                None
            } else {
                Some(Line::new(i + 1, text))
            }
        })
        .collect()
}
