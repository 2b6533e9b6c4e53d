//! Deployment constants and compile-time configuration.
//!
//! All protocol constants and tuning parameters live here so they can be
//! adjusted in one place.

// Identity

/// Device name carried in the complete-local-name AD field.
pub const DEVICE_LOCAL_NAME: &str = "LED_SERVER";

/// Maximum encoded length of the local-name AD field (type byte + name).
/// Longer names are truncated.
pub const LOCAL_NAME_MAX: usize = 32;

// Advertising

/// Advertising interval range (in 0.625 ms units).
/// 0x0080 = 80 ms, 0x00A0 = 100 ms.
pub const ADV_INTERVAL_MIN: u16 = 0x0080;
pub const ADV_INTERVAL_MAX: u16 = 0x00A0;

// Security

/// Encryption key size range negotiated during pairing (bytes).
pub const ENCRYPTION_KEY_SIZE_MIN: u8 = 8;
pub const ENCRYPTION_KEY_SIZE_MAX: u8 = 16;

/// Passkey used while the fixed-pin pairing mode is enabled.
pub const FIXED_PIN: u32 = 1234;

// Radio

/// TX power applied during init: high-power table, level index 0x18
/// (-2 dBm). Kept below maximum to avoid link instability when the
/// 32 kHz clock runs from the internal RC oscillator.
pub const TX_POWER_HIGH: bool = true;
pub const TX_POWER_LEVEL: u8 = 0x18;

// Scheduling

/// Depth of the deferred-task queue drained by the external scheduler.
pub const TASK_QUEUE_DEPTH: usize = 4;
