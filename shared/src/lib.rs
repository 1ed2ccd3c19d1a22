//! Platform-independent model for the MailGate settings form.
//!
//! The `frontend` crate renders these types; nothing here touches the DOM,
//! so the list growth rules are testable on the native target.

pub mod list;
pub mod settings;

pub use list::{ListModel, RowSpec, capitalize, should_grow};
pub use settings::{ListField, Settings};
