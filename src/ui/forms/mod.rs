//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field and inline error rendering
//! - `contact_form`: The contact form view

mod contact_form;
mod field_renderer;

pub use contact_form::draw_contact_form;
