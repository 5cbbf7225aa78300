//! Library exports for the paintinput gesture engine.
//!
//! Exposes the gesture disambiguation pipeline alongside the supporting
//! modules it relies on so that host applications (and the bundled trace
//! replay binary) can share the engine, configuration and trace code.

pub mod config;
pub mod gesture;
pub mod scene;
pub mod trace;
pub mod util;

pub use config::Config;
pub use gesture::{GestureSink, PaintEvent, PaintInput, RawEvent};
