//! Core configuration and error types for xmlmarshal.
//!
//! This crate provides the building blocks shared by the model, the XML
//! marshaler and the command-line front end: the [`MarshalConfig`] loaded
//! from the environment and the [`MarshalError`] taxonomy every operation
//! reports failures with.

mod config;
mod error;

pub use config::MarshalConfig;
pub use error::{MarshalError, MarshalResult};
