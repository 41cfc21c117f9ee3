//! OAuth 1.0a signing as used by the Twitter v1.1 API.
//!
//! ```
//! use tweetsign::{Credentials, ParameterSet, Signer};
//!
//! let credentials = Credentials::new("consumer-key", "consumer-secret", "token", "token-secret")?;
//! let params = ParameterSet::new().with("q", "#Nasa").with("count", "5");
//! let header = Signer::new(credentials).authorization_header(
//!     "GET",
//!     "https://api.twitter.com/1.1/search/tweets.json",
//!     &params,
//! )?;
//! assert!(header.starts_with("OAuth "));
//! # Ok::<(), tweetsign::Error>(())
//! ```

#[cfg(feature = "reqwest")]
pub mod client;
pub mod signer;
pub mod values;

pub use signer::{sign_hmac_sha1, signature_base, Credentials, SignedContent, Signer};
pub use values::SignatureMethod;
