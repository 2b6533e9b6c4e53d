//! Pairing and bonding policy.
//!
//! The policy is built once during bring-up and pushed to the controller
//! as a fixed call sequence; the controller consults it afterwards during
//! pairing. Nothing here is renegotiated at runtime.

use log::info;

use crate::config;
use crate::controller::{AuthRequirements, Controller};
use crate::error::{Error, Result};

/// Encryption key sizes the Security Manager allows (bytes).
const KEY_SIZE_FLOOR: u8 = 7;
const KEY_SIZE_CEIL: u8 = 16;

/// Device IO classes relevant to pairing (SM assigned values).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum IoCapability {
    DisplayOnly = 0x00,
    DisplayYesNo = 0x01,
    KeyboardOnly = 0x02,
    NoInputNoOutput = 0x03,
    KeyboardDisplay = 0x04,
}

/// Bonding behaviour requested from the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BondingMode {
    /// Pairing only, no keys stored.
    None = 0x00,
    /// Store keys for reconnection.
    Bonding = 0x01,
    /// Store keys and admit bonded devices through the whitelist.
    BondingWithWhitelist = 0x02,
}

/// Which side drives security establishment after a connect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SecurityInitiation {
    /// No security requirement.
    None = 0x00,
    /// The host sends the peripheral security request itself.
    HostInitiates = 0x01,
    /// The host waits for the central to start pairing.
    HostWaits = 0x02,
}

/// Static pairing/bonding configuration of the device.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SecurityPolicy {
    pub io_capability: IoCapability,
    /// Require man-in-the-middle protection during pairing.
    pub mitm_required: bool,
    pub oob_present: bool,
    /// Out-of-band pairing data, meaningful only when `oob_present`.
    pub oob_data: [u8; 16],
    /// `true`: pair with `fixed_pin`; `false`: ask the host for a passkey.
    pub use_fixed_pin: bool,
    pub fixed_pin: u32,
    /// Encryption key size bounds offered during pairing (bytes).
    pub encryption_key_size_min: u8,
    pub encryption_key_size_max: u8,
    pub bonding_mode: BondingMode,
    /// Not part of the controller setup sequence; consulted by the pairing
    /// flow once a client connects.
    pub initiate_security: SecurityInitiation,
}

impl Default for SecurityPolicy {
    /// Deployment defaults: display-only device, MITM protection, no OOB,
    /// fixed pin, bonding with whitelist, host-initiated security.
    fn default() -> Self {
        // Placeholder pattern; real OOB data is provisioned when
        // `oob_present` is set.
        let mut oob_data = [0u8; 16];
        for (i, byte) in oob_data.iter_mut().enumerate() {
            *byte = i as u8;
        }

        Self {
            io_capability: IoCapability::DisplayOnly,
            mitm_required: true,
            oob_present: false,
            oob_data,
            use_fixed_pin: true,
            fixed_pin: config::FIXED_PIN,
            encryption_key_size_min: config::ENCRYPTION_KEY_SIZE_MIN,
            encryption_key_size_max: config::ENCRYPTION_KEY_SIZE_MAX,
            bonding_mode: BondingMode::BondingWithWhitelist,
            initiate_security: SecurityInitiation::HostInitiates,
        }
    }
}

impl SecurityPolicy {
    /// The auth-requirement parameter block sent to the controller.
    pub fn auth_requirements(&self) -> AuthRequirements {
        AuthRequirements {
            mitm_required: self.mitm_required,
            oob_present: self.oob_present,
            oob_data: self.oob_data,
            encryption_key_size_min: self.encryption_key_size_min,
            encryption_key_size_max: self.encryption_key_size_max,
            use_fixed_pin: self.use_fixed_pin,
            fixed_pin: self.fixed_pin,
            bonding_mode: self.bonding_mode,
        }
    }

    /// Push the policy into the controller: IO capability, authentication
    /// requirements, then the whitelist when the bonding mode uses one.
    ///
    /// Key size bounds are checked before anything is issued; the first
    /// rejected call aborts the sequence. Applying the same policy again
    /// repeats the identical sequence.
    pub fn apply<C: Controller>(&self, controller: &mut C) -> Result<()> {
        if self.encryption_key_size_min > self.encryption_key_size_max
            || self.encryption_key_size_min < KEY_SIZE_FLOOR
            || self.encryption_key_size_max > KEY_SIZE_CEIL
        {
            return Err(Error::KeySizeRange {
                min: self.encryption_key_size_min,
                max: self.encryption_key_size_max,
            });
        }

        controller.set_io_capability(self.io_capability)?;
        controller.set_auth_requirements(&self.auth_requirements())?;
        if self.bonding_mode == BondingMode::BondingWithWhitelist {
            controller.configure_whitelist()?;
        }

        info!("security policy applied ({:?})", self.bonding_mode);
        Ok(())
    }
}
