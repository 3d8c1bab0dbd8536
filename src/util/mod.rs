//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Field rules live here as pure functions so the form state and the page can
//! share them without touching the DOM.

pub mod validation;
