//! Client code for svgl-search.
//!
//! This crate provides the SVGL search client, the asset fetcher, and the
//! keyword query pipeline shared by the extension server and the CLI.

pub mod fetch;
pub mod headers;
pub mod pipeline;
pub mod svgl;

pub use fetch::{AssetFetcher, AssetResponse, FetchConfig, FetchError, has_http_scheme};
pub use pipeline::{PipelineError, SearchPipeline};
pub use svgl::{ApiEntry, Category, Route, SearchRequest, SvglClient, SvglConfig, SvglError};
