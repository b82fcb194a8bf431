//! Infrastructure Layer
//!
//! HTTP clients for the identity provider and the image API, and cookie
//! sign-out for the local schemes.

pub mod api;
pub mod cookie_sign_out;
pub mod discovery;
pub mod revocation;
pub mod userinfo;

// Re-exports
pub use api::HttpImageApi;
pub use cookie_sign_out::CookieSignOut;
pub use discovery::HttpDiscoveryResolver;
pub use revocation::HttpTokenRevocationClient;
pub use userinfo::HttpUserInfoClient;
