//! # vitrina-core
//!
//! Core types shared by every Vitrina crate:
//! - Request/response shapes for the chat pipeline
//! - The fixed `productos` schema contract baked into prompts
//! - Modeled outcome kinds and their user-facing reply texts
//! - Cross-cutting error types

pub mod errors;
pub mod outcome;
pub mod responses;
pub mod schema;

pub use errors::CoreError;
pub use outcome::Outcome;
pub use responses::{ChatRequest, ChatResponse, GeneratedQuery, QueryResult, Record};
