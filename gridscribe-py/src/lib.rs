//! Python bindings for the gridscribe observation-to-text pipeline.

use pyo3::prelude::*;

mod render;

#[pymodule]
fn _gridscribe(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(render::generate_structured_text, m)?)?;
    Ok(())
}
