//! One-shot startup sequencing.
//!
//! Bring-up is strictly ordered and fails fast: the first rejected step
//! surfaces its error and the device must not go on to advertise. On
//! success the caller owns the fresh registry and the first advertising
//! round is already queued for the scheduler.

use log::info;

use crate::config;
use crate::controller::Controller;
use crate::error::Result;
use crate::gap::registry::ConnectionRegistry;
use crate::gap::security::SecurityPolicy;
use crate::notify::{schedule_task, Task, TaskSender};

/// Transport/framing layer bring-up surface, implemented by the
/// embedding.
pub trait Transport {
    /// Allocate buffers and set up the event delivery path.
    fn init(&mut self) -> Result<()>;

    /// Open the event flow from the controller.
    fn enable(&mut self) -> Result<()>;
}

/// Service layer bring-up surface, implemented by the embedding.
pub trait ServiceHost {
    /// Initialize the service controller layer.
    fn init_services(&mut self) -> Result<()>;

    /// Register the LED-button application service.
    fn register_application(&mut self) -> Result<()>;
}

/// Run the full startup sequence.
///
/// Order: transport init, event flow enable, service-layer init, fresh
/// connection state, radio TX power, security policy (IO capability,
/// auth requirements, whitelist), application registration, then the
/// first `StartAdvertising` task.
pub fn run<T, C, S>(
    transport: &mut T,
    controller: &mut C,
    services: &mut S,
    policy: &SecurityPolicy,
    tasks: &TaskSender<'_>,
) -> Result<ConnectionRegistry>
where
    T: Transport,
    C: Controller,
    S: ServiceHost,
{
    transport.init()?;
    transport.enable()?;
    services.init_services()?;

    let registry = ConnectionRegistry::new();

    controller.set_tx_power(config::TX_POWER_HIGH, config::TX_POWER_LEVEL)?;
    policy.apply(controller)?;
    services.register_application()?;

    schedule_task(tasks, Task::StartAdvertising);
    info!("init complete, first advertising round queued");

    Ok(registry)
}
