//! CAPRA Core - Shared types library.
//!
//! This crate provides common types used across all CAPRA components:
//! - `store` - In-memory domain store for pets, users and adoption requests
//! - `cli` - Console front-end for the tab screens and the admin panel
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no presentation, no clock
//! access beyond id generation. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, statuses, species,
//!   emails and BRL amounts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
