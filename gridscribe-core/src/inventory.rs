//! Inventory rendering from parallel letter/description arrays.
//!
//! Slot `i` pairs `letters[i]` with description row `i`. The first
//! description row that is entirely zero bytes is the end-of-list sentinel;
//! traversal stops there outright, so later non-zero rows (if the simulator
//! ever produced any) are never reached.

use crate::decode::decode_padded;
use crate::grid::CharGrid;

/// Substituted for the whole section when the inventory fields are absent.
pub const INVENTORY_FALLBACK: &str = "No inventory data available.";

/// Render occupied slots as `"{letter}: {description}"` lines.
///
/// An empty inventory (sentinel at slot 0, or no slots at all) renders to
/// the empty string. Traversal covers `min(letters, rows)` slots.
pub fn render_inventory(letters: &[u8], descriptions: &CharGrid) -> String {
    let mut lines = Vec::new();
    for (slot, row) in letters.iter().zip(descriptions.iter_rows()) {
        if row.iter().all(|&b| b == 0) {
            break;
        }
        let letter = decode_padded(std::slice::from_ref(slot));
        let description = decode_padded(row);
        lines.push(format!("{}: {}", letter, description));
    }
    lines.join("\n")
}
