//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State types are plain structs; pages wrap them in `RwSignal` so the logic
//! stays testable without a reactive runtime.

pub mod login_form;
