//! Domain core of the TAI assistant client.
//!
//! Everything here is transport-agnostic: the session store, the context
//! classifier, message rendering, tool forms and the portfolio model. The
//! HTTP implementations of [`chat::ChatBackend`] and [`tool::ToolBackend`]
//! live in `tai-interaction`.

pub mod chat;
pub mod config;
pub mod context;
pub mod error;
pub mod locale;
pub mod portfolio;
pub mod render;
pub mod session;
pub mod templates;
pub mod tool;

pub use error::TaiError;
