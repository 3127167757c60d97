//! Application layer for TAI.
//!
//! Use cases that drive the domain types in `tai-core` through the backend
//! traits, independent of any particular transport or front end.

pub mod chat_usecase;
pub mod export;
pub mod tool_usecase;

pub use chat_usecase::{ChatUseCase, SendOutcome};
pub use export::{export_chat, export_portfolio, transcript_file_name};
pub use tool_usecase::{ToolOutcome, ToolUseCase};
