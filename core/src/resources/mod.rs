//! The operation catalogue.
//!
//! Each module pairs pure request builders (`projects::get(42)`) with the
//! `TaigaClient` methods that dispatch them (`client.get_project(42)`). The
//! builders carry all endpoint knowledge: method, path, query, body, and
//! whether a login is required. The methods only pick the result shape.

pub mod applications;
pub mod auth;
pub mod history;
pub mod project_templates;
pub mod projects;
pub mod resolver;
pub mod search;
pub mod task_custom_attributes;
pub mod tasks;
pub mod users;
pub mod webhooks;
pub mod wiki;
