//! Single-slot connection registry.
//!
//! The registry is the sole record of the link with the remote client.
//! Only the HCI event dispatcher writes it; everything else reads.
//! Exclusive access is expressed through `&mut` borrows, so the
//! run-to-completion deployment needs no lock. An embedding that
//! dispatches events from more than one execution context must wrap the
//! registry in a blocking mutex.

use crate::gap::ConnHandle;

/// State of the single GAP link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    /// No client connected; the device may advertise.
    Idle,
    /// A client is connected under the given handle.
    Connected(ConnHandle),
}

/// Owner of the connection slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectionRegistry {
    link: LinkState,
}

impl ConnectionRegistry {
    /// Fresh registry in the `Idle` state.
    pub const fn new() -> Self {
        Self {
            link: LinkState::Idle,
        }
    }

    /// Current link state.
    pub fn link(&self) -> LinkState {
        self.link
    }

    /// Handle of the active connection, if any.
    pub fn active_handle(&self) -> Option<ConnHandle> {
        match self.link {
            LinkState::Connected(handle) => Some(handle),
            LinkState::Idle => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.link, LinkState::Connected(_))
    }

    /// Record a completed connection. Dispatcher-only.
    pub(crate) fn set_connected(&mut self, handle: ConnHandle) {
        self.link = LinkState::Connected(handle);
    }

    /// Drop the slot back to `Idle`. Dispatcher-only.
    pub(crate) fn set_idle(&mut self) {
        self.link = LinkState::Idle;
    }
}
