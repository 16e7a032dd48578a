//! Python bindings for treeheads
//!
//! Exposes a `HeadFinder` class that annotates bracketed trees.

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use std::sync::Arc;

use crate::annotate::annotate;
use crate::engine::{HeadError, HeadFinder as RustHeadFinder};
use crate::penn::parse_tree;
use crate::treebank::{Treebank, TreebankError};
use crate::variant::Variant;

/// Convert TreebankError to Python exception
impl From<TreebankError> for PyErr {
    fn from(err: TreebankError) -> PyErr {
        match err {
            TreebankError::Io(e) => PyIOError::new_err(e.to_string()),
            TreebankError::Parse(e) => PyValueError::new_err(format!("Parse error: {}", e)),
            TreebankError::FileOpen { path, source } => PyIOError::new_err(format!(
                "Failed to open file {}: {}",
                path.display(),
                source
            )),
            TreebankError::Head(e) => e.into(),
        }
    }
}

impl From<HeadError> for PyErr {
    fn from(err: HeadError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Rule-based head finder for constituency trees.
///
/// Args:
///     variant: one of "collins", "modcollins", "sem", "ancora", "ancora-sem"
///
/// Example:
///     >>> hf = HeadFinder("sem")
///     >>> hf.annotate("(VP (VBZ is) (ADJP (JJ big)))")
///     '(VP (VBZ is) (ADJP=H (JJ=H big)))'
#[pyclass(name = "HeadFinder")]
#[derive(Clone)]
pub struct PyHeadFinder {
    inner: Arc<RustHeadFinder>,
    variant: Variant,
}

#[pymethods]
impl PyHeadFinder {
    #[new]
    #[pyo3(signature = (variant="modcollins"))]
    fn new(variant: &str) -> PyResult<Self> {
        let variant: Variant = variant
            .parse()
            .map_err(|e: crate::variant::UnknownVariant| PyValueError::new_err(e.to_string()))?;
        let finder = RustHeadFinder::for_variant(variant)
            .map_err(|e| PyValueError::new_err(format!("Rule table error: {}", e)))?;
        Ok(PyHeadFinder {
            inner: Arc::new(finder),
            variant,
        })
    }

    /// Annotate one bracketed tree, returning it with `=H` head marks.
    fn annotate(&self, tree: &str) -> PyResult<String> {
        let mut tree = parse_tree(tree).map_err(|e| PyValueError::new_err(format!("Parse error: {}", e)))?;
        annotate(&mut tree, &self.inner)?;
        Ok(tree.to_bracketed())
    }

    /// Annotate every tree in a file (plain or .gz).
    ///
    /// Returns:
    ///     list of annotated trees, one bracketed string each
    fn annotate_file(&self, py: Python<'_>, path: &str) -> PyResult<Vec<String>> {
        let treebank = Treebank::from_file(path);
        let finder = Arc::clone(&self.inner);
        py.detach(move || {
            treebank
                .annotated(finder)
                .map(|result| result.map(|tree| tree.to_bracketed()))
                .collect::<Result<Vec<_>, TreebankError>>()
        })
        .map_err(PyErr::from)
    }

    #[getter]
    fn variant(&self) -> &'static str {
        self.variant.as_str()
    }

    fn __repr__(&self) -> String {
        format!("<HeadFinder variant='{}'>", self.variant)
    }
}

#[pyfunction]
fn __version__() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[pymodule]
fn treeheads(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyHeadFinder>()?;
    m.add_function(wrap_pyfunction!(__version__, m)?)?;
    Ok(())
}
