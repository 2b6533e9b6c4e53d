//! Controller event plumbing.
//!
//! 1. **Event** - framing and bounds-checked decoding of raw HCI event
//!    packets into the small typed set this core reacts to.
//! 2. **Dispatch** - the connection-lifecycle state machine driven by one
//!    decoded event at a time.

pub mod dispatch;
pub mod event;
