//! Utility helpers shared across the editor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser concerns (console logging, `localStorage`) are isolated here so
//! state and component code compiles and tests the same natively.

pub mod logging;
pub mod preferences;
