//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the catalog, the focused
//! pane, both list selections and the status line.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
