//! CRC-16/CCITT checksums for small fixed-capacity data packets.
//! Provides the bit-by-bit checksum, the packet record it protects and a
//! detector that tells whether a received packet was altered.

pub mod crc;
pub mod detector;
pub mod error;
pub mod packet;
pub mod trace;

pub use crc::crc16_ccitt;
pub use detector::{CrcReport, inspect, is_corrupted, verify};
pub use error::PacketError;
pub use packet::{MAX_PAYLOAD_LEN, Packet};
