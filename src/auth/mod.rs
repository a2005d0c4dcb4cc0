//! Authentication module
//!
//! Supports: Bearer, Basic, API Key header, Custom Headers
//!
//! Authentication is resolved into request headers once, when the request
//! template for a fetch chain is built. The resulting header set is reused
//! unchanged for every page of the chain.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub(crate) use authenticator::header_name_from;
pub use types::AuthConfig;
