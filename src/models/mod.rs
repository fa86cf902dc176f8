//! Domain models for classified swagger paths.

mod release_state;
mod service_type;
mod swagger;

pub use release_state::ReleaseState;
pub use service_type::ServiceType;
pub use swagger::{RpVersion, SwaggerDescriptor};
