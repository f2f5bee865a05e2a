use crate::crc::crc16_ccitt;
use crate::error::PacketError;

/// Capacity of a packet's payload buffer.
pub const MAX_PAYLOAD_LEN: usize = 50;

/// A data packet with a fixed-capacity payload and its stored checksum.
///
/// Only the first `len` bytes of `data` are payload. Bytes past `len` are
/// kept zeroed by the constructors and never enter a checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Packet {
    id: u8,
    len: u8,
    data: [u8; MAX_PAYLOAD_LEN],
    crc: u16,
}

impl Packet {
    /// Build a packet on the sending side, storing the checksum of `payload`.
    pub fn new(id: u8, payload: &[u8]) -> Result<Self, PacketError> {
        let crc = crc16_ccitt(payload);
        Self::with_crc(id, payload, crc)
    }

    /// Rebuild a received packet from its payload and the checksum that
    /// travelled with it. Nothing is verified here; see
    /// [`is_corrupted`](crate::detector::is_corrupted).
    pub fn with_crc(id: u8, payload: &[u8], crc: u16) -> Result<Self, PacketError> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(PacketError::too_long(payload.len()));
        }

        let mut data = [0u8; MAX_PAYLOAD_LEN];
        data[..payload.len()].copy_from_slice(payload);

        Ok(Self {
            id,
            // Bounded by MAX_PAYLOAD_LEN above.
            len: payload.len() as u8,
            data,
            crc,
        })
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    /// Number of meaningful payload bytes.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The meaningful payload, `data[..len]`.
    pub fn payload(&self) -> &[u8] {
        &self.data[..self.len()]
    }

    /// Mutable view of the payload. The stored checksum is left as is, so
    /// any change here shows up as corruption.
    pub fn payload_mut(&mut self) -> &mut [u8] {
        let len = self.len();
        &mut self.data[..len]
    }

    /// Checksum stored when the packet was built.
    pub fn crc(&self) -> u16 {
        self.crc
    }
}
