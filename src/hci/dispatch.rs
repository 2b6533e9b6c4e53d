//! Connection-lifecycle state machine.
//!
//! One call per controller event packet. The registry is the only state
//! touched, at most once per call, and zero or one notification leaves
//! through the fan-out. The run-to-completion model of the embedding
//! guarantees calls never nest; see [`crate::gap::registry`] for the
//! multi-context rule.

use log::{debug, info, warn};

use crate::gap::registry::ConnectionRegistry;
use crate::gap::ConnHandle;
use crate::hci::event::{EventPacket, HciEvent};
use crate::notify::{GapNotification, NotificationOpcode, Notifier};

/// What a dispatch call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchOutcome {
    /// Registry now holds this connection.
    Connected(ConnHandle),
    /// Registry dropped back to idle.
    Disconnected(ConnHandle),
    /// Packet was irrelevant, malformed or stale; nothing changed.
    Ignored,
}

/// Decode one raw event packet and drive the registry.
///
/// Malformed packets are dropped without touching any state. A
/// disconnection naming any handle other than the active one is a stale
/// controller event and is ignored the same way.
pub fn dispatch(
    registry: &mut ConnectionRegistry,
    raw: &[u8],
    notifier: &mut Notifier<'_>,
) -> DispatchOutcome {
    let event = match EventPacket::parse(raw).and_then(|packet| packet.decode()) {
        Ok(event) => event,
        Err(e) => {
            warn!("dropping malformed event packet: {:?}", e);
            return DispatchOutcome::Ignored;
        }
    };

    match event {
        HciEvent::ConnectionComplete { handle } => {
            // at most one connection attempt completes at a time, so a
            // second completion overwrites the slot
            registry.set_connected(handle);
            info!("client connected, handle {:#06x}", handle.raw());

            notifier.notify(&GapNotification {
                opcode: NotificationOpcode::ClientConnected,
                conn_handle: handle,
            });
            DispatchOutcome::Connected(handle)
        }
        HciEvent::DisconnectionComplete { handle, reason } => {
            if registry.active_handle() != Some(handle) {
                debug!("stale disconnection for handle {:#06x}, ignored", handle.raw());
                return DispatchOutcome::Ignored;
            }

            registry.set_idle();
            info!(
                "client disconnected, handle {:#06x}, reason {:#04x}",
                handle.raw(),
                reason
            );

            notifier.notify(&GapNotification {
                opcode: NotificationOpcode::ClientDisconnected,
                conn_handle: handle,
            });
            DispatchOutcome::Disconnected(handle)
        }
        HciEvent::Other => DispatchOutcome::Ignored,
    }
}
