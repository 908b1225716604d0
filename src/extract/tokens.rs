pub const MARKER: &str = "$$";
pub const LOOP_TOKEN: &str = "[#";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerLine<'a> {
    pub function: Option<&'a str>,
    pub callees: Vec<&'a str>,
    pub has_loop: bool,
}

pub fn split_marker(line: &str) -> Option<(&str, &str)> {
    line.split_once(MARKER)
}

pub fn split_declaration(left: &str) -> Option<(&str, &str)> {
    left.split_once(':')
}

/// Callee list of a declaration tail.
///
/// A tail without any comma yields nothing, even when it holds a single name:
/// `foo:bar$$` declares `foo` with no recorded callee.
pub fn split_callees(tail: &str) -> Vec<&str> {
    if !tail.contains(',') {
        return Vec::new();
    }

    tail.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

pub fn has_loop_token(right: &str) -> bool {
    right.contains(LOOP_TOKEN)
}

pub fn parse_line(raw: &str) -> Option<MarkerLine<'_>> {
    let (left, right) = split_marker(raw.trim())?;

    let (function, callees) = match split_declaration(left) {
        Some((head, tail)) => (Some(head), split_callees(tail)),
        None => (None, Vec::new()),
    };

    Some(MarkerLine {
        function,
        callees,
        has_loop: has_loop_token(right),
    })
}
