//! Advertising control.
//!
//! The device advertises only while no client is connected. One request
//! per invocation, no retry here: the scheduler re-invokes through the
//! deferred-task queue when a fresh round is needed.

use heapless::Vec;
use log::{info, warn};

use crate::config::{self, LOCAL_NAME_MAX};
use crate::controller::{AdvertisingFilterPolicy, AdvertisingType, Controller, OwnAddressType};
use crate::error::CommandError;
use crate::gap::registry::ConnectionRegistry;

/// AD structure type byte for a complete local name.
const AD_TYPE_COMPLETE_LOCAL_NAME: u8 = 0x09;

/// Shape of the discoverable request.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdvertisingParams {
    pub adv_type: AdvertisingType,
    /// Interval bounds in 0.625 ms units.
    pub interval_min: u16,
    pub interval_max: u16,
    pub own_address: OwnAddressType,
    pub filter: AdvertisingFilterPolicy,
    /// Encoded local-name AD field (type byte + name bytes).
    pub local_name: Vec<u8, LOCAL_NAME_MAX>,
}

impl Default for AdvertisingParams {
    /// Connectable undirected advertising with the configured interval
    /// range, public address, no whitelist filtering and the device name.
    fn default() -> Self {
        Self {
            adv_type: AdvertisingType::ConnectableUndirected,
            interval_min: config::ADV_INTERVAL_MIN,
            interval_max: config::ADV_INTERVAL_MAX,
            own_address: OwnAddressType::Public,
            filter: AdvertisingFilterPolicy::AllowAll,
            local_name: complete_local_name(config::DEVICE_LOCAL_NAME),
        }
    }
}

/// Encode `name` as a complete-local-name AD field. Bytes beyond the
/// buffer capacity are dropped.
pub fn complete_local_name(name: &str) -> Vec<u8, LOCAL_NAME_MAX> {
    let mut field = Vec::new();
    let _ = field.push(AD_TYPE_COMPLETE_LOCAL_NAME);
    for &byte in name.as_bytes() {
        if field.push(byte).is_err() {
            break;
        }
    }
    field
}

/// What [`request_advertise`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdvertiseOutcome {
    /// The controller accepted the discoverable request.
    Started,
    /// A client is connected; nothing was sent.
    SkippedConnected,
}

/// Ask the controller to start advertising unless a client is connected.
pub fn request_advertise<C: Controller>(
    registry: &ConnectionRegistry,
    controller: &mut C,
    params: &AdvertisingParams,
) -> Result<AdvertiseOutcome, CommandError> {
    if registry.is_connected() {
        return Ok(AdvertiseOutcome::SkippedConnected);
    }

    match controller.set_discoverable(params) {
        Ok(()) => {
            info!("advertising started");
            Ok(AdvertiseOutcome::Started)
        }
        Err(e) => {
            warn!("advertising request rejected: {:?}", e);
            Err(e)
        }
    }
}
