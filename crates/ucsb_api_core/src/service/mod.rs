//! Use-case services.
//!
//! # Responsibility
//! - Turn repository calls into the five record operations exposed over HTTP.
//! - Keep transport layers decoupled from storage details.

pub mod crud_service;
