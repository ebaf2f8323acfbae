//! blorp-deploy-lib: deployment artifact synthesis for Blorp
//!
//! This crate turns a handful of user settings into ready-to-run deployment
//! text:
//! - `settings`: the validated `Settings` model, its flat record and storage
//! - `endpoints`: parsing and validation of the endpoint field
//! - `render`: `docker run`, Dockerfile, compose and Kubernetes renderers
//! - `share`: query-string encoding for demo links

pub mod consts;
pub mod endpoints;
pub mod paths;
pub mod render;
pub mod settings;
pub mod share;
