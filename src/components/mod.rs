//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the sign-in page chrome. Only `form_field` reads or
//! writes form state; the rest are static presentation.

pub mod brand_logo;
pub mod form_field;
pub mod showcase_panel;
