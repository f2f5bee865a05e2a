//! Errors raised at the packet boundary.

use crate::packet::MAX_PAYLOAD_LEN;

/// Errors produced when building or verifying a [`Packet`](crate::packet::Packet).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PacketError {
    /// More payload bytes than a packet can hold.
    #[error("payload of {len} bytes exceeds the {max}-byte packet capacity")]
    PayloadTooLong {
        /// Number of bytes offered.
        len: usize,
        /// Packet capacity, always [`MAX_PAYLOAD_LEN`].
        max: usize,
    },

    /// The stored checksum does not match the one recomputed from the payload.
    #[error("checksum mismatch: stored {stored:#06X}, computed {computed:#06X}")]
    ChecksumMismatch {
        /// Checksum carried by the packet.
        stored: u16,
        /// Checksum recomputed over the payload.
        computed: u16,
    },
}

impl PacketError {
    pub(crate) fn too_long(len: usize) -> Self {
        Self::PayloadTooLong {
            len,
            max: MAX_PAYLOAD_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_show_both_checksums_in_hex() {
        let err = PacketError::ChecksumMismatch {
            stored: 63648,
            computed: 40784,
        };
        assert_eq!(
            err.to_string(),
            "checksum mismatch: stored 0xF8A0, computed 0x9F50"
        );
    }

    #[test]
    fn too_long_carries_capacity() {
        assert_eq!(
            PacketError::too_long(51),
            PacketError::PayloadTooLong { len: 51, max: 50 }
        );
    }
}
