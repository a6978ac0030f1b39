//! Helper functions for parsing flamegraph label values (nav tuples, percentages).

use crate::model::NavLinks;

/// Parse a `nav` attribute: a comma-separated 4-tuple of neighbor ids in
/// `[up, left, down, right]` order, with `"0"` as the no-neighbor sentinel.
///
/// Malformed input degrades gracefully: missing, extra, or empty entries
/// simply leave the affected directions without a neighbor.
pub fn parse_nav(s: &str) -> NavLinks {
    let mut links: [Option<String>; 4] = Default::default();
    for (slot, part) in links.iter_mut().zip(s.split(',')) {
        let part = part.trim();
        if !part.is_empty() && part != "0" {
            *slot = Some(part.to_string());
        }
    }
    NavLinks(links)
}

/// Extract the percentage readout from a title's info part, e.g.
/// `"/system/lib64/libhwbinder.so (4 samples: 0.28%)"` → `"0.28%"`.
///
/// Returns `None` when the info does not end in the `…P%)` pattern; callers
/// leave the previous readout in place in that case.
pub fn percentage_of(info: &str) -> Option<String> {
    let inner = info.trim_end().strip_suffix("%)")?;
    let mut start = inner.len();
    for (i, c) in inner.char_indices().rev() {
        if c.is_ascii_digit() || c == '.' {
            start = i;
        } else {
            break;
        }
    }
    let digits = &inner[start..];
    if !digits.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(format!("{digits}%"))
}
