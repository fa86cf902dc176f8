//! swagger-scout - swagger path classification for specification repositories
//!
//! Classifies paths following the `specification/<service>/<type>/<rp>/...`
//! convention into structured metadata and checks whether a changeset stays
//! within one resource provider and version.

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod models;
pub mod output;
pub mod swagger;

pub use models::{ReleaseState, RpVersion, ServiceType, SwaggerDescriptor};
pub use swagger::{classify, evaluate, normalize, Verdict};
