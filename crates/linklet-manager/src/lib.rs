//! Short-URL manager implementation.
//!
//! This crate provides the [`ShortUrlManager`] that implements the
//! `UrlManager` contract from `linklet_core`, together with its
//! configuration, the identifier generator seam, and the in-memory store.

pub mod config;
pub mod generator;
pub mod manager;
pub mod store;

pub use config::{ConfigError, ManagerConfig};
pub use generator::{random::RandomGenerator, Generator};
pub use manager::ShortUrlManager;
pub use store::memory::MemoryUrlStore;
