//! Numpy-to-core marshalling for the structured-text entry point.
//!
//! Accepts the environment's positional observation (a list of numpy
//! arrays) plus its key list, converts the `uint8` arrays of rank 1 and 2
//! into core field types, and renders the tagged document. Arrays of other
//! dtypes or ranks (e.g. `blstats`, `glyphs`) are carried as opaque fields
//! so positions stay aligned with the key list.

use numpy::{PyReadonlyArrayDyn, PyUntypedArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use gridscribe_core::{render_document, CharGrid, FieldArray, Observation, ScribeError};

fn to_py_err(err: ScribeError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn to_field(array: &Bound<'_, PyAny>) -> PyResult<FieldArray> {
    let Ok(array) = array.extract::<PyReadonlyArrayDyn<'_, u8>>() else {
        return Ok(FieldArray::Opaque);
    };
    match *array.shape() {
        [_] => Ok(FieldArray::Bytes(array.as_array().iter().copied().collect())),
        [rows, cols] => {
            let data: Vec<u8> = array.as_array().iter().copied().collect();
            let grid = CharGrid::from_flat(rows, cols, data).map_err(to_py_err)?;
            Ok(FieldArray::Grid(grid))
        }
        _ => Ok(FieldArray::Opaque),
    }
}

/// Render one observation as the `<message>/<inventory>/<view>/<stats>`
/// tagged text block.
#[pyfunction]
pub fn generate_structured_text(
    obs: Vec<Bound<'_, PyAny>>,
    observation_keys: Vec<String>,
) -> PyResult<String> {
    let arrays = obs
        .iter()
        .map(to_field)
        .collect::<PyResult<Vec<FieldArray>>>()?;
    let observation = Observation::new(observation_keys, arrays).map_err(to_py_err)?;
    render_document(&observation).map_err(to_py_err)
}
