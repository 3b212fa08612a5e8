//! JWT claims, key loading and compact serialization.

pub mod claims;
pub mod serializer;
pub mod signer;

pub use claims::AppClaims;
pub use serializer::{verify_token, JwtSerializer};
pub use signer::KeySigner;
