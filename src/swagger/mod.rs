//! Swagger path classification and changeset checks.
//!
//! Paths in a specification repository follow the convention
//! `specification/<service>/<type>/<resourceProvider>/[extra/](stable|preview)/<version>/...`.
//! This module recognizes that shape, extracts structured metadata from it,
//! and decides whether a changeset stays within a single API version.
//!
//! - [`catalog`]: the ordered rules that recognize each directory layout
//! - [`classifier`]: path → [`SwaggerDescriptor`](crate::models::SwaggerDescriptor)
//! - [`normalizer`]: paths → distinct swagger base directories
//! - [`guard`]: changeset → [`Verdict`]
//!
//! Everything here is pure and synchronous; every call is computed fresh from its
//! input and the immutable catalog.

pub mod catalog;
pub mod classifier;
pub mod guard;
pub mod normalizer;

pub use catalog::{catalog, match_rule, PatternRule, RuleKind, RuleName};
pub use classifier::{classify, classify_with_rule, is_swagger_path, Classification};
pub use guard::{evaluate, ChangesetReport, ClassifiedPath, InvalidReason, Verdict};
pub use normalizer::normalize;
