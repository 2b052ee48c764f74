use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList, PyTuple};

use crate::membrane::{GroMembrane, Membrane};
use crate::ranges;
use crate::structure::Selector;

/// Python binding for find_center function
#[pyfunction]
#[pyo3(signature = (structure_file, res_name, atom_name))]
fn find_center(structure_file: &str, res_name: &str, atom_name: &str) -> PyResult<f64> {
    let membrane = GroMembrane::new(structure_file);
    membrane
        .find_center(&Selector::new(res_name, atom_name))
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
}

/// Python binding for divide_leaflets function
///
/// Returns a dict with the `upper` and `lower` residue number lists and the `center` used.
#[pyfunction]
#[pyo3(signature = (structure_file, res_name, atom_name, center=None))]
fn divide_leaflets(
    py: Python<'_>,
    structure_file: &str,
    res_name: &str,
    atom_name: &str,
    center: Option<f64>,
) -> PyResult<PyObject> {
    let membrane = GroMembrane::new(structure_file);
    let selector = Selector::new(res_name, atom_name);
    let to_py_err = |e: crate::error::LeafletError| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string());

    let center = match center {
        Some(c) => c,
        None => membrane.find_center(&selector).map_err(to_py_err)?,
    };
    let sets = membrane.divide_leaflets(&selector, center).map_err(to_py_err)?;

    let py_dict = PyDict::new_bound(py);
    py_dict.set_item("upper", PyList::new_bound(py, &sets.upper))?;
    py_dict.set_item("lower", PyList::new_bound(py, &sets.lower))?;
    py_dict.set_item("center", center)?;

    Ok(py_dict.into())
}

/// Python binding for compress_ranges function
#[pyfunction]
fn compress_ranges(py: Python<'_>, residues: Vec<i32>) -> PyResult<PyObject> {
    let py_ranges = PyList::empty_bound(py);
    for range in ranges::compress_ranges(&residues) {
        let py_tuple = PyTuple::new_bound(py, &[range.low.into_py(py), range.high.into_py(py)]);
        py_ranges.append(py_tuple)?;
    }
    Ok(py_ranges.into())
}

/// Python module definition
#[pymodule]
fn leaflet_divider(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(find_center, m)?)?;
    m.add_function(wrap_pyfunction!(divide_leaflets, m)?)?;
    m.add_function(wrap_pyfunction!(compress_ranges, m)?)?;
    m.add("__doc__", "Membrane leaflet divider with Python bindings")?;
    Ok(())
}
