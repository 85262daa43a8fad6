//! Auth-domain identifiers, scopes, credentials, and the per-call token signer.

pub mod claims;
pub mod id;
pub mod scope;
pub mod secret;
pub mod signer;

pub use claims::*;
pub use id::*;
pub use scope::*;
pub use secret::*;
pub use signer::*;
