//! Core types and traits for the Vinyl album catalog service.
//!
//! This crate provides the domain record, the repository contract the
//! storage backends implement, and the in-process mirror the gateway
//! serves reads from.

pub mod album;
pub mod error;
pub mod mirror;
pub mod repository;

pub use album::Album;
pub use error::{Result, StorageError};
pub use mirror::AlbumMirror;
pub use repository::AlbumRepository;
