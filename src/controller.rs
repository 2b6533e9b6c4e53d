//! Controller request surface.
//!
//! The radio firmware is opaque to this crate; everything it is asked to
//! do goes through the [`Controller`] trait. Each call returns the
//! immediate accept/reject status only - asynchronous completions arrive
//! later as HCI events and are handled by [`crate::hci::dispatch`].

use crate::error::CommandError;
use crate::gap::advertising::AdvertisingParams;
use crate::gap::security::{BondingMode, IoCapability};

/// Parameter block for the authentication-requirement call.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AuthRequirements {
    pub mitm_required: bool,
    pub oob_present: bool,
    /// Out-of-band pairing data, meaningful only when `oob_present`.
    pub oob_data: [u8; 16],
    /// Encryption key size bounds offered during pairing (bytes).
    pub encryption_key_size_min: u8,
    pub encryption_key_size_max: u8,
    /// `true`: pair with `fixed_pin`; `false`: ask the host for a passkey.
    pub use_fixed_pin: bool,
    pub fixed_pin: u32,
    pub bonding_mode: BondingMode,
}

/// Advertising PDU type (assigned values from the GAP command set).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AdvertisingType {
    /// Connectable undirected (ADV_IND).
    ConnectableUndirected = 0x00,
    ConnectableDirected = 0x01,
    ScannableUndirected = 0x02,
    NonConnectableUndirected = 0x03,
}

/// Address type the device advertises with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OwnAddressType {
    Public = 0x00,
    Random = 0x01,
}

/// Controller-side filtering of scan and connect requests while
/// advertising.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AdvertisingFilterPolicy {
    /// Accept scan and connect requests from any device.
    AllowAll = 0x00,
    FilterScanRequests = 0x01,
    FilterConnectRequests = 0x02,
    FilterAll = 0x03,
}

/// Request primitives of the BLE controller.
pub trait Controller {
    /// Declare the device IO capability used during pairing.
    fn set_io_capability(&mut self, io: IoCapability) -> Result<(), CommandError>;

    /// Establish the authentication requirements for the pairing process.
    fn set_auth_requirements(&mut self, req: &AuthRequirements) -> Result<(), CommandError>;

    /// Rebuild the controller whitelist from the bonded-device table.
    fn configure_whitelist(&mut self) -> Result<(), CommandError>;

    /// Enter discoverable mode with the given advertising shape.
    fn set_discoverable(&mut self, params: &AdvertisingParams) -> Result<(), CommandError>;

    /// Select the radio transmit power: power-table selector plus level
    /// index within that table.
    fn set_tx_power(&mut self, high_power: bool, level: u8) -> Result<(), CommandError>;
}

#[cfg(test)]
pub(crate) mod mock {
    //! Recording controller shared by the unit tests.

    use super::*;

    /// Calls the controller has accepted, in order.
    #[derive(Clone, Debug, PartialEq)]
    pub(crate) enum Call {
        IoCapability(IoCapability),
        AuthRequirements(AuthRequirements),
        ConfigureWhitelist,
        SetDiscoverable(AdvertisingParams),
        TxPower { high_power: bool, level: u8 },
    }

    /// Which primitive to reject, for failure-path tests.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub(crate) enum FailPoint {
        IoCapability,
        AuthRequirements,
        ConfigureWhitelist,
        SetDiscoverable,
        TxPower,
    }

    #[derive(Default)]
    pub(crate) struct RecordingController {
        pub(crate) calls: Vec<Call>,
        pub(crate) fail_on: Option<FailPoint>,
    }

    impl RecordingController {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn rejecting(point: FailPoint) -> Self {
            Self {
                calls: Vec::new(),
                fail_on: Some(point),
            }
        }

        // 0x0C = Command Disallowed
        fn accept(&mut self, point: FailPoint, call: Call) -> Result<(), CommandError> {
            if self.fail_on == Some(point) {
                return Err(CommandError::Rejected(0x0C));
            }
            self.calls.push(call);
            Ok(())
        }
    }

    impl Controller for RecordingController {
        fn set_io_capability(&mut self, io: IoCapability) -> Result<(), CommandError> {
            self.accept(FailPoint::IoCapability, Call::IoCapability(io))
        }

        fn set_auth_requirements(&mut self, req: &AuthRequirements) -> Result<(), CommandError> {
            self.accept(FailPoint::AuthRequirements, Call::AuthRequirements(req.clone()))
        }

        fn configure_whitelist(&mut self) -> Result<(), CommandError> {
            self.accept(FailPoint::ConfigureWhitelist, Call::ConfigureWhitelist)
        }

        fn set_discoverable(&mut self, params: &AdvertisingParams) -> Result<(), CommandError> {
            self.accept(FailPoint::SetDiscoverable, Call::SetDiscoverable(params.clone()))
        }

        fn set_tx_power(&mut self, high_power: bool, level: u8) -> Result<(), CommandError> {
            self.accept(FailPoint::TxPower, Call::TxPower { high_power, level })
        }
    }
}
