use std::borrow::Cow;

use crate::extract::summary::FileSummary;
use crate::extract::tokens::parse_line;

pub fn lines(content: &[u8]) -> impl Iterator<Item = Cow<'_, str>> {
    let mut start = 0;
    let mut breaks = memchr::memchr_iter(b'\n', content);

    std::iter::from_fn(move || {
        let end = match breaks.next() {
            Some(end) => end,
            None if start < content.len() => content.len(),
            None => return None,
        };

        let line = String::from_utf8_lossy(&content[start..end]);
        start = end + 1;
        Some(line)
    })
}

pub fn summarize(content: &[u8]) -> FileSummary {
    let mut summary = FileSummary::default();

    for line in lines(content) {
        if let Some(marker_line) = parse_line(&line) {
            summary.absorb(&marker_line);
        }
    }

    summary
}
