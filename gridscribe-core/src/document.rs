//! Assembly of the four-section tagged document.
//!
//! Output shape is fixed: `<message>`, `<inventory>`, `<view>`, `<stats>`
//! blocks in that order, each tag on its own line, sections separated by a
//! single newline and no trailing newline. The two tolerated soft failures
//! (missing inventory fields, odd tty buffer shape) surface as in-band
//! fallback text; any other lookup failure aborts the whole document.

use tracing::{debug, trace};

use crate::decode::decode_padded;
use crate::errors::{ScribeError, ScribeResult};
use crate::inventory::{render_inventory, INVENTORY_FALLBACK};
use crate::observation::Observation;
use crate::status::{status_lines, STATUS_SHAPE_FALLBACK};
use crate::view::crop_grid;

/// Render one observation as the tagged text document.
///
/// `message`, `chars`, and `tty_chars` must be present (their absence is a
/// contract violation and propagates as an error); `inv_strs`/`inv_letters`
/// are optional and fall back to [`INVENTORY_FALLBACK`].
pub fn render_document(obs: &Observation) -> ScribeResult<String> {
    let message = decode_padded(obs.bytes_field("message")?);
    let inventory = inventory_section(obs)?;
    let view = crop_grid(obs.grid_field("chars")?);
    let stats = stats_section(obs)?;

    let doc = [
        section("message", &message),
        section("inventory", &inventory),
        section("view", &view),
        section("stats", &stats),
    ]
    .join("\n");
    debug!(bytes = doc.len(), "rendered observation document");
    Ok(doc)
}

fn section(tag: &str, body: &str) -> String {
    format!("<{tag}>\n{body}\n</{tag}>")
}

/// Inventory is the one path where a missing field is recoverable.
fn inventory_section(obs: &Observation) -> ScribeResult<String> {
    let strs = match obs.grid_field("inv_strs") {
        Ok(g) => g,
        Err(ScribeError::FieldNotFound { .. }) => {
            trace!("inventory fields absent, using fallback text");
            return Ok(INVENTORY_FALLBACK.to_string());
        }
        Err(e) => return Err(e),
    };
    let letters = match obs.bytes_field("inv_letters") {
        Ok(b) => b,
        Err(ScribeError::FieldNotFound { .. }) => {
            trace!("inventory fields absent, using fallback text");
            return Ok(INVENTORY_FALLBACK.to_string());
        }
        Err(e) => return Err(e),
    };
    Ok(render_inventory(letters, strs))
}

/// A present tty buffer with the wrong dimensionality degrades to the
/// diagnostic string; only absence is a hard error.
fn stats_section(obs: &Observation) -> ScribeResult<String> {
    match obs.grid_field("tty_chars") {
        Ok(g) => Ok(status_lines(g)),
        Err(ScribeError::MalformedGrid { .. }) => Ok(STATUS_SHAPE_FALLBACK.to_string()),
        Err(e) => Err(e),
    }
}
