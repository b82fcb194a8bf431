//! Client Secret (Zeroized on drop)
//!
//! The confidential client's shared secret, used for HTTP Basic
//! authentication against the identity provider.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Client secret with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Debug output is redacted
///
/// ## Examples
/// ```rust
/// use platform::secret::ClientSecret;
///
/// let secret = ClientSecret::new("ItsMySecret");
/// assert_eq!(secret.expose(), "ItsMySecret");
/// assert_eq!(format!("{secret:?}"), "ClientSecret([REDACTED])");
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ClientSecret(String);

impl ClientSecret {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the secret for the duration of a request
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret([REDACTED])")
    }
}
