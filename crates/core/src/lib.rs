//! Sundrift Core - Shared types library.
//!
//! This crate provides common types used across all Sundrift components:
//! - `storefront` - Client-side storefront state core and API client
//! - `integration-tests` - Cross-crate test flows
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, plus the
//!   structural [`types::Product`] record the rest of the system consumes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
