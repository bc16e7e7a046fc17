//! Leading comment header
//!
//! A header is the contiguous run of `# ` lines at the top of a file, with
//! blank lines allowed once the run has begun. It is extracted from raw text
//! on load and rendered back into comment lines on save.

/// Prefix marking a header line.
pub const COMMENT_PREFIX: &str = "# ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderState {
    NotStarted,
    Started,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    /// Comment line, prefix stripped
    Comment(&'a str),
    Blank,
    Other,
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        if let Some(text) = line.strip_prefix(COMMENT_PREFIX) {
            Line::Comment(text)
        } else if line.is_empty() {
            Line::Blank
        } else {
            Line::Other
        }
    }
}

/// Split on `\n`, dropping a `\r` before it. Trailing empty lines are kept.
fn split_lines(text: &str) -> impl DoubleEndedIterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Extract the header from raw document text.
///
/// Returns an empty string when the text does not start with a header.
pub fn parse_header(input: &str) -> String {
    let mut header = String::new();
    let mut state = HeaderState::NotStarted;

    for line in split_lines(input) {
        match (state, Line::classify(line)) {
            (_, Line::Comment(text)) => {
                if !header.is_empty() {
                    header.push('\n');
                }
                header.push_str(text);
                state = HeaderState::Started;
            }
            (HeaderState::Started, Line::Blank) => header.push('\n'),
            (HeaderState::NotStarted, Line::Blank) => {}
            (_, Line::Other) => break,
        }
    }

    header
}

/// Render header text as comment lines.
///
/// Lines are walked from the last one back. Blank lines seen before any
/// content are not prefixed, but every line still ends with a line break, so
/// a header ending in `\n` leaves one empty line before the body.
pub fn render_header(header: &str) -> String {
    let mut rendered: Vec<Option<&str>> = Vec::new();
    let mut state = HeaderState::NotStarted;

    for line in split_lines(header).rev() {
        state = match (state, line.is_empty()) {
            (HeaderState::NotStarted, true) => {
                rendered.push(None);
                HeaderState::NotStarted
            }
            (_, _) => {
                rendered.push(Some(line));
                HeaderState::Started
            }
        };
    }

    let mut out = String::new();
    for line in rendered.into_iter().rev() {
        if let Some(text) = line {
            out.push_str(COMMENT_PREFIX);
            out.push_str(text);
        }
        out.push('\n');
    }
    out
}
