//! Python bindings for the solitaire engine.
//!
//! Exposes a headless table for scripted play and agents.
//!
//! # Quick Start
//!
//! ```python
//! import shenzhen_core as sz
//!
//! game = sz.Solitaire()
//! game.deal(seed=42)
//!
//! game.press("up")
//! game.press("primary")      # pick up
//! game.press("right")
//! game.press("primary")      # place
//!
//! board = game.board()       # 16 x 16 raw card bytes, 0xFF terminated
//! ```

use pyo3::prelude::*;

mod py_solitaire;

pub use py_solitaire::*;

/// shenzhen_core: the solitaire rules engine.
#[pymodule]
fn shenzhen_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySolitaire>()?;
    Ok(())
}
