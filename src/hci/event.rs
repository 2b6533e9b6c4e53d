//! HCI event packet decoding.
//!
//! The transport hands over each controller event as a raw byte packet:
//! event code, parameter length, then the parameter block. Only the two
//! connection-lifecycle events get a typed decode; everything else is
//! classified as [`HciEvent::Other`] and ignored upstream. All field
//! extraction is bounds-checked - a packet shorter than its event layout
//! is a decode error, never a partial read.

use crate::gap::ConnHandle;

/// Disconnection Complete event code.
pub const DISCONNECTION_COMPLETE: u8 = 0x05;
/// LE Meta event code; the first parameter byte selects the sub-event.
pub const LE_META_EVENT: u8 = 0x3E;
/// LE Connection Complete sub-event code.
pub const LE_CONNECTION_COMPLETE: u8 = 0x01;

/// Packet header: event code + parameter length.
const HEADER_LEN: usize = 2;
/// Disconnection Complete parameters: status, handle, reason.
const DISCONNECTION_PARAMS_LEN: usize = 4;
/// LE Connection Complete parameters including the sub-event code.
const LE_CONNECTION_PARAMS_LEN: usize = 19;

/// Decode failure. The dispatcher drops the packet on any of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Buffer shorter than the event layout requires.
    BadLength { expected: usize, actual: usize },
}

/// A framed HCI event packet borrowed from the transport buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventPacket<'a> {
    pub event_code: u8,
    pub payload: &'a [u8],
}

impl<'a> EventPacket<'a> {
    /// Split `raw` into event code and parameter block.
    ///
    /// The embedded parameter length must fit the buffer: a length
    /// claiming more bytes than present is a [`DecodeError::BadLength`].
    /// Trailing bytes beyond it are ignored.
    pub fn parse(raw: &'a [u8]) -> Result<Self, DecodeError> {
        if raw.len() < HEADER_LEN {
            return Err(DecodeError::BadLength {
                expected: HEADER_LEN,
                actual: raw.len(),
            });
        }

        let param_len = raw[1] as usize;
        if raw.len() < HEADER_LEN + param_len {
            return Err(DecodeError::BadLength {
                expected: HEADER_LEN + param_len,
                actual: raw.len(),
            });
        }

        Ok(Self {
            event_code: raw[0],
            payload: &raw[HEADER_LEN..HEADER_LEN + param_len],
        })
    }

    /// Classify the packet into the connection-lifecycle event set.
    pub fn decode(&self) -> Result<HciEvent, DecodeError> {
        match self.event_code {
            DISCONNECTION_COMPLETE => {
                let p = self.payload;
                if p.len() < DISCONNECTION_PARAMS_LEN {
                    return Err(DecodeError::BadLength {
                        expected: DISCONNECTION_PARAMS_LEN,
                        actual: p.len(),
                    });
                }

                // status byte at offset 0 is not consulted here
                Ok(HciEvent::DisconnectionComplete {
                    handle: ConnHandle::new(u16::from_le_bytes([p[1], p[2]])),
                    reason: p[3],
                })
            }
            LE_META_EVENT => {
                let p = self.payload;
                let Some(&subevent) = p.first() else {
                    return Err(DecodeError::BadLength {
                        expected: 1,
                        actual: 0,
                    });
                };

                match subevent {
                    LE_CONNECTION_COMPLETE => {
                        if p.len() < LE_CONNECTION_PARAMS_LEN {
                            return Err(DecodeError::BadLength {
                                expected: LE_CONNECTION_PARAMS_LEN,
                                actual: p.len(),
                            });
                        }

                        // status at 1, handle at 2..4; the remaining link
                        // parameters are not used by the dispatcher
                        Ok(HciEvent::ConnectionComplete {
                            handle: ConnHandle::new(u16::from_le_bytes([p[2], p[3]])),
                        })
                    }
                    _ => Ok(HciEvent::Other),
                }
            }
            _ => Ok(HciEvent::Other),
        }
    }
}

/// Decoded connection-lifecycle event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HciEvent {
    /// LE connection established; carries the new handle.
    ConnectionComplete { handle: ConnHandle },
    /// Link closed; carries the handle and the HCI reason code.
    DisconnectionComplete { handle: ConnHandle, reason: u8 },
    /// Anything this core does not react to.
    Other,
}

#[cfg(test)]
pub(crate) mod packets {
    //! Synthetic controller packets shared by the unit tests.

    use super::*;

    /// LE Connection Complete for `handle`: peripheral role, public peer
    /// address, 50 ms interval, no latency, 4 s supervision timeout.
    pub(crate) fn connection_complete(handle: u16) -> [u8; 21] {
        let [lo, hi] = handle.to_le_bytes();
        [
            LE_META_EVENT,
            19,
            LE_CONNECTION_COMPLETE,
            0x00, // status: success
            lo,
            hi,
            0x01, // role: peripheral
            0x00, // peer address type: public
            0x01,
            0x02,
            0x03,
            0x04,
            0x05,
            0x06,
            0x28, // interval: 0x0028 = 50 ms
            0x00,
            0x00, // latency: 0
            0x00,
            0x90, // timeout: 0x0190 = 4 s
            0x01,
            0x05, // master clock accuracy
        ]
    }

    /// Disconnection Complete for `handle` with the given reason code.
    pub(crate) fn disconnection_complete(handle: u16, reason: u8) -> [u8; 6] {
        let [lo, hi] = handle.to_le_bytes();
        [DISCONNECTION_COMPLETE, 4, 0x00, lo, hi, reason]
    }
}
