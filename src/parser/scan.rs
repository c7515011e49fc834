//! Locating top-level operators in chain text.
//!
//! All operators are ASCII, so byte offsets returned here are always valid
//! `str` split points.

/// Byte offset and width of an operator found at nesting depth zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    pub at: usize,
    pub len: usize,
}

impl Split {
    pub fn left<'a>(&self, text: &'a str) -> &'a str {
        &text[..self.at]
    }

    pub fn right<'a>(&self, text: &'a str) -> &'a str {
        &text[self.at + self.len..]
    }
}

/// Scans left to right and returns the first depth-zero position where
/// `matcher` recognises an operator (it returns the operator width).
pub fn first_top_level<F>(text: &str, mut matcher: F) -> Option<Split>
where
    F: FnMut(&[u8], usize) -> Option<usize>,
{
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => {
                if let Some(len) = matcher(bytes, i) {
                    return Some(Split { at: i, len });
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Right-to-left counterpart of [`first_top_level`]. `matcher` receives the
/// index of the operator's last byte and returns `(start, len)`, or `None`
/// to keep scanning; `skip` lets it consume bytes that belong to a longer
/// operator which must not be split here.
pub fn last_top_level<F>(text: &str, mut matcher: F) -> Option<Split>
where
    F: FnMut(&[u8], usize) -> Scan,
{
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut i = bytes.len();
    while i > 0 {
        i -= 1;
        match bytes[i] {
            b')' => depth += 1,
            b'(' => depth = depth.saturating_sub(1),
            _ if depth == 0 => match matcher(bytes, i) {
                Scan::Found(split) => return Some(split),
                Scan::Skip(n) => i = i.saturating_sub(n),
                Scan::Continue => {}
            },
            _ => {}
        }
    }
    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    Found(Split),
    Skip(usize),
    Continue,
}

/// Index of the `)` closing the `(` at offset 0, if any.
pub fn matching_paren(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.first() != Some(&b'(') {
        return None;
    }
    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
