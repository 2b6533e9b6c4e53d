//! Notification fan-out toward the application and the task scheduler.
//!
//! The dispatcher produces one [`GapNotification`] per accepted lifecycle
//! event. Delivery is synchronous to the single registered handler;
//! deferred work (restart advertising, react to the push button) goes
//! through an Embassy channel the external scheduler drains at its own
//! pace.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use log::warn;

use crate::config::TASK_QUEUE_DEPTH;
use crate::gap::ConnHandle;

/// What happened on the link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NotificationOpcode {
    ClientConnected,
    ClientDisconnected,
}

/// Connection-lifecycle record handed to the application.
///
/// Created inside the dispatch call and consumed synchronously; the core
/// never retains it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GapNotification {
    pub opcode: NotificationOpcode,
    pub conn_handle: ConnHandle,
}

/// Deferred work items handed to the external scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Task {
    /// Re-issue the discoverable request.
    StartAdvertising,
    /// Run the application's push-button action.
    ButtonAction,
}

/// Channel carrying [`Task`] items to the scheduler.
pub type TaskChannel = Channel<CriticalSectionRawMutex, Task, TASK_QUEUE_DEPTH>;
/// Producer side used by this crate.
pub type TaskSender<'a> = Sender<'a, CriticalSectionRawMutex, Task, TASK_QUEUE_DEPTH>;
/// Consumer side for the embedding's scheduler loop.
pub type TaskReceiver<'a> = Receiver<'a, CriticalSectionRawMutex, Task, TASK_QUEUE_DEPTH>;

/// Receiver of connection-lifecycle notifications, implemented by the
/// application service.
pub trait NotificationHandler {
    /// Called synchronously from the dispatch context; must not block.
    fn on_notification(&mut self, notification: &GapNotification);
}

/// Fire-and-forget task enqueue. A full queue drops the task with a
/// warning; the scheduler owns draining and execution order.
pub fn schedule_task(tasks: &TaskSender<'_>, task: Task) {
    if tasks.try_send(task).is_err() {
        warn!("task queue full, dropping {:?}", task);
    }
}

/// Push-button hook for the embedding's input path: defers the button
/// action to the scheduler.
pub fn key_button_action(tasks: &TaskSender<'_>) {
    schedule_task(tasks, Task::ButtonAction);
}

/// Couples the registered application handler with the task queue.
pub struct Notifier<'a> {
    handler: &'a mut dyn NotificationHandler,
    tasks: TaskSender<'a>,
}

impl<'a> Notifier<'a> {
    pub fn new(handler: &'a mut dyn NotificationHandler, tasks: TaskSender<'a>) -> Self {
        Self { handler, tasks }
    }

    /// Deliver `notification` to the handler, then queue follow-up work:
    /// a disconnect schedules a fresh advertising round.
    pub fn notify(&mut self, notification: &GapNotification) {
        self.handler.on_notification(notification);
        if notification.opcode == NotificationOpcode::ClientDisconnected {
            schedule_task(&self.tasks, Task::StartAdvertising);
        }
    }
}

#[cfg(test)]
pub(crate) struct RecordingHandler {
    pub(crate) events: Vec<GapNotification>,
}

#[cfg(test)]
impl RecordingHandler {
    pub(crate) fn new() -> Self {
        Self { events: Vec::new() }
    }
}

#[cfg(test)]
impl NotificationHandler for RecordingHandler {
    fn on_notification(&mut self, notification: &GapNotification) {
        self.events.push(*notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected(handle: u16) -> GapNotification {
        GapNotification {
            opcode: NotificationOpcode::ClientConnected,
            conn_handle: ConnHandle::new(handle),
        }
    }

    fn disconnected(handle: u16) -> GapNotification {
        GapNotification {
            opcode: NotificationOpcode::ClientDisconnected,
            conn_handle: ConnHandle::new(handle),
        }
    }

    #[test]
    fn handler_sees_each_notification() {
        let channel = TaskChannel::new();
        let mut handler = RecordingHandler::new();
        let mut notifier = Notifier::new(&mut handler, channel.sender());

        notifier.notify(&connected(0x0040));

        assert_eq!(handler.events, [connected(0x0040)]);
        // a connect queues no follow-up work
        assert!(channel.try_receive().is_err());
    }

    #[test]
    fn disconnect_schedules_advertising_restart() {
        let channel = TaskChannel::new();
        let mut handler = RecordingHandler::new();
        let mut notifier = Notifier::new(&mut handler, channel.sender());

        notifier.notify(&disconnected(0x0040));

        assert_eq!(handler.events, [disconnected(0x0040)]);
        assert_eq!(channel.try_receive().ok(), Some(Task::StartAdvertising));
        assert!(channel.try_receive().is_err());
    }

    #[test]
    fn full_queue_drops_the_task_not_the_notification() {
        let channel = TaskChannel::new();
        while channel.try_send(Task::ButtonAction).is_ok() {}

        let mut handler = RecordingHandler::new();
        let mut notifier = Notifier::new(&mut handler, channel.sender());
        notifier.notify(&disconnected(0x0040));

        assert_eq!(handler.events.len(), 1);
        for _ in 0..crate::config::TASK_QUEUE_DEPTH {
            assert_eq!(channel.try_receive().ok(), Some(Task::ButtonAction));
        }
        assert!(channel.try_receive().is_err());
    }

    #[test]
    fn button_hook_enqueues_button_task() {
        let channel = TaskChannel::new();

        key_button_action(&channel.sender());

        assert_eq!(channel.try_receive().ok(), Some(Task::ButtonAction));
    }
}
