pub mod choose;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod history;
pub mod index;
pub mod model;
pub mod navigate;
pub mod parse;
pub mod query;
