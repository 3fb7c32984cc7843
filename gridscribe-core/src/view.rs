//! Map-view cropping: bounding rows plus common-indent removal.
//!
//! The simulator renders the map into a fixed-width canvas that is mostly
//! blank padding. Cropping to the content bounding box and dedenting keeps
//! the textual view compact and stable across turns without losing relative
//! layout. Trailing spaces on each line are preserved.

use crate::decode::decode_row;
use crate::grid::CharGrid;

/// Render a character grid as its minimal non-blank block.
///
/// Two separate passes: first crop rows to the closed interval spanning all
/// non-blank content, then strip the minimum leading-space count computed
/// over only the non-blank rows from every remaining row. An all-blank grid
/// renders to the empty string.
pub fn crop_grid(grid: &CharGrid) -> String {
    let lines: Vec<String> = grid.iter_rows().map(decode_row).collect();

    // Pass 1: row bounding box.
    let first = lines.iter().position(|ln| !ln.trim().is_empty());
    let lines: Vec<String> = match first {
        Some(first) => {
            let last = lines.iter().rposition(|ln| !ln.trim().is_empty()).unwrap();
            lines[first..=last].to_vec()
        }
        None => Vec::new(),
    };

    // Pass 2: common indent over non-blank rows only, stripped from all rows.
    let indent = lines
        .iter()
        .filter(|ln| !ln.trim().is_empty())
        .map(|ln| ln.chars().take_while(|&c| c == ' ').count())
        .min();

    let lines: Vec<String> = match indent {
        Some(k) if k > 0 => lines
            .iter()
            .map(|ln| ln.chars().skip(k).collect())
            .collect(),
        _ => lines,
    };

    lines.join("\n")
}
