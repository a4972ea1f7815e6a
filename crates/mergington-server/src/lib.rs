//! HTTP/JSON API server for the Mergington High School activities catalog.
//!
//! Exposes the [`mergington_core::Catalog`] over a small REST surface: list
//! activities, sign up, and unregister. This crate contains the server
//! configuration, API schema types, error mapping, and route definitions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
