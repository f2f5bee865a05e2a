/// Generator polynomial (CRC-16/CCITT).
pub const CRC16_POLY: u16 = 0x1021;

/// Register value before the first byte is shifted in.
pub const CRC16_INIT: u16 = 0xFFFF;

/// CRC-16/CCITT (poly 0x1021, init 0xFFFF), bit-by-bit, MSB first.
///
/// The whole slice is consumed; callers holding a fixed buffer with a
/// separate length pass `&buf[..len]`.
pub fn crc16_ccitt(data: &[u8]) -> u16 {
    let mut crc = CRC16_INIT;

    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ CRC16_POLY;
            } else {
                crc <<= 1;
            }
        }
    }

    crc
}
