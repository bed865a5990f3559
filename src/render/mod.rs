//! HTML rendering
//!
//! Server-side page for the form and the decision view. Charts are inline
//! SVG; no client-side scripting.

pub mod charts;
pub mod format;
pub mod page;

pub use page::{render_page, Outcome};
