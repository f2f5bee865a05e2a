//! Corruption detection for received packets.
//!
//! The detector recomputes the checksum over a packet's payload and compares
//! it with the stored one. It only detects damage; it cannot repair it.

use crate::crc::crc16_ccitt;
use crate::error::PacketError;
use crate::packet::Packet;

/// Stored and recomputed checksums of a single packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrcReport {
    pub stored: u16,
    pub computed: u16,
}

impl CrcReport {
    pub fn is_corrupted(&self) -> bool {
        self.stored != self.computed
    }
}

/// Recompute the checksum of `packet` and report both values.
pub fn inspect(packet: &Packet) -> CrcReport {
    let report = CrcReport {
        stored: packet.crc(),
        computed: crc16_ccitt(packet.payload()),
    };

    if report.is_corrupted() {
        tracing::warn!(
            id = packet.id(),
            len = packet.len(),
            stored = report.stored,
            computed = report.computed,
            "packet checksum mismatch"
        );
    } else {
        tracing::debug!(
            id = packet.id(),
            len = packet.len(),
            stored = report.stored,
            computed = report.computed,
            "packet checksum ok"
        );
    }

    report
}

/// Returns `true` when the payload no longer matches the stored checksum.
pub fn is_corrupted(packet: &Packet) -> bool {
    inspect(packet).is_corrupted()
}

/// Like [`is_corrupted`], as a `Result` for callers that propagate with `?`.
pub fn verify(packet: &Packet) -> Result<(), PacketError> {
    let CrcReport { stored, computed } = inspect(packet);

    if stored == computed {
        Ok(())
    } else {
        Err(PacketError::ChecksumMismatch { stored, computed })
    }
}
