//! The interactive session.
//!
//! [`App`] owns every panel, the focus, the interaction [`Mode`] and the
//! transient input buffers. Supporting modules split the implementation:
//! key handling and transitions, the create/rename form, and rendering.

mod actions;
mod form;
mod render;
mod state;

pub use form::FormStep;
pub use state::{App, Flash, Mode};

#[cfg(test)]
mod tests;
