//! Interfaces to the presentation layer.
//!
//! Rendering, animation and input polling live outside the engine. This
//! module defines what the engine needs from them, plus headless
//! implementations for tests, batch play and the Python bindings.

pub mod headless;
pub mod traits;

pub use headless::{Headless, RecordedSlide, Recorder, ScriptedInput};
pub use traits::{Anchor, Animator, Frontend, Input, InputSource, Intent, Renderer, Slide};
