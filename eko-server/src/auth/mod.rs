//! Authentication module - admin JWT issuance and verification
//!
//! Guards never authenticate; their only credential is a site PIN.
//! Admin routes require a bearer token issued by [`JwtService`].

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, JwtConfig, JwtService};
pub use middleware::require_admin;
