pub mod ask;
pub mod portfolio;
pub mod templates;
pub mod tools;
