//! DTOs for the Taiga API.
//!
//! # Design
//! Response types mirror the service's JSON and are never validated by the
//! client. Most derive `Default` with a container-level `#[serde(default)]`:
//! the service drops fields depending on the caller's permissions, and a
//! missing field should not turn a successful response into a failure.
//!
//! Parameter types serialize optional fields with
//! `skip_serializing_if = "Option::is_none"` so partial updates only send
//! what the caller set.

pub mod application;
pub mod auth;
pub mod common;
pub mod custom_attribute;
pub mod history;
pub mod project;
pub mod project_template;
pub mod resolver;
pub mod search;
pub mod task;
pub mod user;
pub mod webhook;
pub mod wiki;

pub use application::*;
pub use auth::*;
pub use common::*;
pub use custom_attribute::*;
pub use history::*;
pub use project::*;
pub use project_template::*;
pub use resolver::*;
pub use search::*;
pub use task::*;
pub use user::*;
pub use webhook::*;
pub use wiki::*;
