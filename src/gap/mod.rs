//! GAP layer of the peripheral.
//!
//! This module drives the device in **Peripheral** role:
//!
//! 1. **Security** - the pairing/bonding policy applied to the controller
//!    once during bring-up.
//! 2. **Registry** - the single connection slot, `Idle` or `Connected`,
//!    mutated only by the HCI event dispatcher.
//! 3. **Advertising** - the discoverable request issued whenever no client
//!    is connected.
//!
//! Follow-up work (restarting advertising after a disconnect) travels to
//! the external scheduler via the Embassy channel in [`crate::notify`].

pub mod advertising;
pub mod registry;
pub mod security;

/// 16-bit connection handle assigned by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConnHandle(u16);

impl ConnHandle {
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }
}
