//! Unified error type for ledbutton-ble.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! `defmt::Format` derives are feature-gated for on-target logging.

/// Convenience alias used across the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Top-level error type surfaced by init and configuration paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Controller
    /// The controller rejected a request primitive.
    Command(CommandError),

    // Policy
    /// Encryption key size bounds are inverted or outside the legal range.
    KeySizeRange { min: u8, max: u8 },

    // Bring-up
    /// Transport-layer init or enable failed.
    Transport,

    /// Service-layer init or application registration failed.
    Service,
}

/// Immediate accept/reject status of a controller request.
///
/// Requests are fire-and-request: `Ok` means accepted, the asynchronous
/// completion arrives later as an HCI event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// The controller cannot take the request right now.
    Busy,
    /// Raw non-success status code returned by the controller.
    Rejected(u8),
}

// Convenience conversions

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self {
        Error::Command(e)
    }
}
