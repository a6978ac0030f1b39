//! Best-effort label fitting without text measurement.

use crate::model::split_title;

/// Assumed average glyph width in pixels. An approximation tuned for the
/// generator's 12px monospace font; adjust when targeting another surface.
pub const AVG_CHAR_WIDTH: f32 = 7.5;
/// Boxes narrower than this show no label at all.
pub const MIN_LABEL_WIDTH: f32 = 25.0;
/// Never fit fewer characters than this.
pub const MIN_CHARS: usize = 4;

/// Choose the longest prefix of a title's method name that plausibly fits
/// in `width` pixels.
///
/// Uses the fixed per-character estimate instead of real text measurement,
/// which would force a reflow per node on every zoom step. Truncated names
/// end in `".."`, with the two ellipsis characters counted against the
/// fitted width.
pub fn fit_label(title: &str, width: f32) -> String {
    if width < MIN_LABEL_WIDTH {
        return String::new();
    }
    let name = split_title(title).0;
    let total = name.chars().count();
    let mut keep = total;
    while keep > MIN_CHARS && keep as f32 * AVG_CHAR_WIDTH > width {
        keep -= 1;
    }
    if keep == total {
        return name.to_string();
    }
    let mut out: String = name.chars().take(keep - 2).collect();
    out.push_str("..");
    out
}
