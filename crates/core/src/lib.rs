//! Core types and shared functionality for svgl-search.
//!
//! This crate provides:
//! - Result item model and host contract traits
//! - On-disk SVG cache
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod error;
pub mod host;
pub mod item;

pub use cache::SvgCache;
pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use host::{KeywordQueryListener, QueryEvent};
pub use item::{Action, RenderResultList, ResultItem};
