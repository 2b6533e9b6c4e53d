//! Connection-state core for a BLE LED-button peripheral.
//!
//! The device advertises as `LED_SERVER`, accepts a single central,
//! tracks the link in a one-slot registry and tells the application
//! service about lifecycle changes:
//!
//! 1. **`gap`** - connection registry, security/bonding policy and the
//!    advertising controller.
//! 2. **`hci`** - bounds-checked event decoding plus the dispatch state
//!    machine that is the only writer of the registry.
//! 3. **`notify`** - synchronous notification fan-out and the
//!    deferred-task channel drained by the embedding's scheduler.
//! 4. **`init`** - the one-shot bring-up sequencer.
//!
//! Radio access, transport framing, the scheduler and the concrete GATT
//! service stay outside, reached through the traits in [`controller`],
//! [`init`] and [`notify`]. The crate holds no globals: init hands the
//! registry to the caller, who lends it to the dispatcher per event.
//!
//! Unit and integration tests build with `std` on the host:
//! `cargo test`.

#![cfg_attr(not(test), no_std)]

// ═══════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════

pub mod config;
pub mod controller;
pub mod error;
pub mod gap;
pub mod hci;
pub mod init;
pub mod notify;

// ═══════════════════════════════════════════════════════════════════════════
// Public surface
// ═══════════════════════════════════════════════════════════════════════════

pub use controller::{
    AdvertisingFilterPolicy, AdvertisingType, AuthRequirements, Controller, OwnAddressType,
};
pub use error::{CommandError, Error, Result};
pub use gap::advertising::{
    complete_local_name, request_advertise, AdvertiseOutcome, AdvertisingParams,
};
pub use gap::registry::{ConnectionRegistry, LinkState};
pub use gap::security::{BondingMode, IoCapability, SecurityInitiation, SecurityPolicy};
pub use gap::ConnHandle;
pub use hci::dispatch::{dispatch, DispatchOutcome};
pub use hci::event::{DecodeError, EventPacket, HciEvent};
pub use notify::{
    key_button_action, schedule_task, GapNotification, NotificationHandler, NotificationOpcode,
    Notifier, Task, TaskChannel, TaskReceiver, TaskSender,
};
