pub mod builder;
pub mod encoder_oauth1;
pub mod error;
pub mod nonce;
pub mod parameters;
pub mod v1;

mod util;

pub use builder::ProtocolParams;
pub use error::{Error, Result};
pub use parameters::ParameterSet;
pub use util::{build_path, query_to_parameters, split_url};
#[cfg(feature = "reqwest")]
pub use v1::client::{ClientConfig, TwitterClient};
pub use v1::{Credentials, SignedContent, Signer};
