//! # Kadmin Store
//!
//! REST synchronization client for Kanban Admin.
//!
//! One generic `ApiClient` covers all six entity types through the
//! `Resource` trait: `GET/POST/PUT /api/<resource>` and
//! `DELETE /api/<resource>/<id>`, JSON bodies, no optimistic updates (the
//! caller re-fetches the full list after every successful mutation).

pub mod client;
pub mod error;

pub use client::{ApiClient, complete_mutation};
pub use error::{StoreError, StoreResult};
