//! Device identity
//!
//! Physically identical boards are told apart by a short token, shown on
//! the display during the handshake, and by the suffix appended to every
//! event message they send.

use bitlink_protocol::{EventMessage, InputEvent, MAX_SUFFIX_LEN};

/// Maximum token length in bytes
pub const MAX_TOKEN_LEN: usize = 8;

/// Errors that can occur when validating an identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IdentityError {
    /// Token is empty
    EmptyToken,
    /// Token exceeds [`MAX_TOKEN_LEN`]
    TokenTooLong,
    /// Suffix exceeds [`MAX_SUFFIX_LEN`]
    SuffixTooLong,
    /// Token contains a byte that is not printable ASCII
    InvalidTokenChar(u8),
    /// Suffix contains a byte that is not printable ASCII
    InvalidSuffixChar(u8),
}

/// Immutable per-build identity of a device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceIdentity {
    token: &'static str,
    event_suffix: &'static str,
}

/// Reference device 1: token "1", unsuffixed event messages
pub const PRIMARY: DeviceIdentity = DeviceIdentity::checked("1", "");

/// Reference device 2: token "2", event messages suffixed with "2"
pub const SECONDARY: DeviceIdentity = DeviceIdentity::checked("2", "2");

impl DeviceIdentity {
    /// Create a validated identity
    pub const fn new(
        token: &'static str,
        event_suffix: &'static str,
    ) -> Result<Self, IdentityError> {
        match Self::validate(token, event_suffix) {
            Ok(()) => Ok(Self {
                token,
                event_suffix,
            }),
            Err(e) => Err(e),
        }
    }

    /// Create an identity in a `const` item
    ///
    /// An invalid identity fails compilation when used in a constant.
    /// Outside const evaluation it panics, so runtime code uses [`Self::new`].
    pub const fn checked(token: &'static str, event_suffix: &'static str) -> Self {
        match Self::new(token, event_suffix) {
            Ok(identity) => identity,
            Err(_) => panic!("invalid device identity"),
        }
    }

    /// Check a token and suffix without building an identity
    ///
    /// Tokens are 1..=8 printable ASCII bytes, suffixes 0..=8. Whitespace
    /// is rejected in both: the token must render on the display and the
    /// suffix must not break line framing on the host.
    pub const fn validate(token: &str, event_suffix: &str) -> Result<(), IdentityError> {
        let token = token.as_bytes();
        let suffix = event_suffix.as_bytes();

        if token.is_empty() {
            return Err(IdentityError::EmptyToken);
        }
        if token.len() > MAX_TOKEN_LEN {
            return Err(IdentityError::TokenTooLong);
        }
        if suffix.len() > MAX_SUFFIX_LEN {
            return Err(IdentityError::SuffixTooLong);
        }

        let mut i = 0;
        while i < token.len() {
            if !token[i].is_ascii_graphic() {
                return Err(IdentityError::InvalidTokenChar(token[i]));
            }
            i += 1;
        }

        let mut i = 0;
        while i < suffix.len() {
            if !suffix[i].is_ascii_graphic() {
                return Err(IdentityError::InvalidSuffixChar(suffix[i]));
            }
            i += 1;
        }

        Ok(())
    }

    /// Token shown on the display after a handshake
    pub const fn token(&self) -> &'static str {
        self.token
    }

    /// Suffix appended to every event message
    pub const fn event_suffix(&self) -> &'static str {
        self.event_suffix
    }

    /// The message this device sends for `event`
    ///
    /// Construction already limits the suffix to [`MAX_SUFFIX_LEN`], so the
    /// protocol builder cannot reject it.
    pub fn event_message(&self, event: InputEvent) -> EventMessage {
        bitlink_protocol::event_message(event, self.event_suffix).unwrap_or_default()
    }
}
