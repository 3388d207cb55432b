//! Core types and traits for the Linklet short-URL manager.
//!
//! This crate defines the contracts shared by the manager implementation
//! and any front end: the URL record model, the closed result-code set,
//! and the `UrlStore` / `UrlManager` trait seams.

pub mod error;
pub mod manager;
pub mod record;
pub mod result_code;
pub mod store;

pub use error::{ManagerError, StoreError};
pub use manager::UrlManager;
pub use record::{UrlMetrics, UrlRecord};
pub use result_code::ResultCode;
pub use store::UrlStore;
