//! HTTP handler modules for the activities API.
//!
//! Handlers parse the request, delegate to [`mergington_core::Catalog`], and
//! return JSON responses. No business logic lives in handlers.

pub mod activities;
pub mod root;
