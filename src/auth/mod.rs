//! Authentication module
//!
//! Bearer-token gate for the `/private` routes.
//!
//! The [`TokenIssuer`] signs short-lived HS256 JWTs on login and verifies
//! them on every protected request. There is no session store: a token is
//! valid exactly while its signature checks out and its expiry lies in the
//! future, and any failure is reported as the same `Unauthorized` error.

mod issuer;
mod middleware;
mod types;

pub use issuer::{strip_bearer, TokenIssuer};
pub use middleware::require_bearer;
pub use types::{Claims, Credentials, IssuedToken, LoginRequest, LoginResponse};

#[cfg(test)]
mod tests;
