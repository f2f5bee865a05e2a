use clap::{Parser, Subcommand};

use packet_crc::{MAX_PAYLOAD_LEN, Packet, PacketError, crc16_ccitt, inspect, trace};

#[derive(Parser, Debug)]
#[command(name = "packet-crc", about = "CRC-16/CCITT packet corruption checker")]
struct Args {
    /// Log every checksum comparison.
    #[arg(short, long, global = true, env = "PACKET_CRC_VERBOSE")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the good-packet and damaged-packet scenarios.
    Demo,

    /// Print the checksum of a payload.
    Compute {
        /// Payload bytes as hex, e.g. "12 34 56 78 9a"
        #[arg(value_name = "PAYLOAD", value_parser = parse_payload)]
        payload: Payload,
    },

    /// Check a payload against the checksum it arrived with.
    /// Exits with status 1 if the packet is corrupted.
    Check {
        /// Payload bytes as hex, e.g. "12 34 56 78 9a"
        #[arg(value_name = "PAYLOAD", value_parser = parse_payload)]
        payload: Payload,

        /// Stored checksum, decimal or 0x-prefixed hex
        #[arg(long, value_name = "CRC", env = "PACKET_CRC_CRC", value_parser = parse_crc)]
        crc: u16,

        /// Packet id
        #[arg(long, value_name = "ID", env = "PACKET_CRC_ID", default_value_t = 0)]
        id: u8,
    },
}

/// Payload bytes parsed from hex, at most one packet's worth.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Payload(Vec<u8>);

const SEPARATOR: &str = "***************************";

fn main() {
    let args = Args::parse();
    trace::init(args.verbose);

    match args.command {
        Command::Demo => run_demo(),
        Command::Compute { payload } => {
            let crc = crc16_ccitt(&payload.0);
            println!("CRC: {} (0x{:04X})", crc, crc);
        }
        Command::Check { payload, crc, id } => {
            // parse_payload already bounds the length.
            let packet = match Packet::with_crc(id, &payload.0, crc) {
                Ok(packet) => packet,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(2);
                }
            };

            if report(&packet) {
                std::process::exit(1);
            }
        }
    }
}

/// Print both checksums and the verdict. Returns `true` if corrupted.
fn report(packet: &Packet) -> bool {
    let crc = inspect(packet);

    println!("packet's CRC :{}", crc.stored);
    println!("Calculated CRC :{}", crc.computed);

    if crc.is_corrupted() {
        println!("Packet is corrupted.");
    } else {
        println!("Packet is not corrupted.");
    }

    crc.is_corrupted()
}

fn run_demo() {
    const PAYLOAD: [u8; 5] = [0x12, 0x34, 0x56, 0x78, 0x9A];

    println!("Accurate data reception:");
    let good = Packet::new(1, &PAYLOAD).expect("demo payload fits a packet");
    report(&good);
    println!("{SEPARATOR}");

    println!("Corrupted data reception:");
    let mut damaged = Packet::new(2, &PAYLOAD).expect("demo payload fits a packet");
    // Damage one byte after the checksum was stored.
    damaged.payload_mut()[2] = 0xBC;
    report(&damaged);
    println!("{SEPARATOR}");
}

fn parse_payload(s: &str) -> Result<Payload, String> {
    let digits: String = s
        .trim()
        .trim_start_matches("0x")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != ':')
        .collect();

    let bytes = hex::decode(&digits).map_err(|e| format!("invalid hex payload: {e}"))?;

    if bytes.len() > MAX_PAYLOAD_LEN {
        return Err(PacketError::PayloadTooLong {
            len: bytes.len(),
            max: MAX_PAYLOAD_LEN,
        }
        .to_string());
    }

    Ok(Payload(bytes))
}

fn parse_crc(s: &str) -> Result<u16, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => u16::from_str_radix(digits, 16),
        None => s.parse::<u16>(),
    };

    parsed.map_err(|e| format!("invalid checksum {s:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("12 34 56 78 9a"; "spaced")]
    #[test_case("123456789A"; "packed")]
    #[test_case("0x123456789a"; "prefixed")]
    #[test_case("12,34,56,78,9A"; "commas")]
    #[test_case("12:34:56:78:9a"; "colons")]
    fn payload_forms(input: &str) {
        assert_eq!(
            parse_payload(input).unwrap().0,
            vec![0x12, 0x34, 0x56, 0x78, 0x9A]
        );
    }

    #[test]
    fn payload_rejects_bad_hex() {
        assert!(parse_payload("12 3").is_err());
        assert!(parse_payload("zz").is_err());
    }

    #[test]
    fn payload_rejects_over_capacity() {
        let input = "00".repeat(MAX_PAYLOAD_LEN + 1);
        assert!(parse_payload(&input).is_err());
        assert_eq!(parse_payload(&"00".repeat(MAX_PAYLOAD_LEN)).unwrap().0.len(), 50);
    }

    #[test]
    fn empty_payload_is_allowed() {
        assert_eq!(parse_payload("").unwrap(), Payload(Vec::new()));
    }

    #[test_case("63648", 63648; "decimal")]
    #[test_case("0xF8A0", 0xF8A0; "hex")]
    #[test_case("0Xf8a0", 0xF8A0; "upper_prefix")]
    fn crc_forms(input: &str, expect: u16) {
        assert_eq!(parse_crc(input).unwrap(), expect);
    }

    #[test]
    fn crc_rejects_out_of_range() {
        assert!(parse_crc("65536").is_err());
        assert!(parse_crc("0x1FFFF").is_err());
        assert!(parse_crc("abc").is_err());
    }

    #[test]
    fn report_verdicts() {
        let good = Packet::new(1, &[0x12, 0x34]).unwrap();
        assert!(!report(&good));

        let bad = Packet::with_crc(1, &[0x12, 0x34], 0).unwrap();
        assert!(report(&bad));
    }

    #[test]
    fn cli_parses_check() {
        let args = Args::try_parse_from(["packet-crc", "check", "12 34", "--crc", "0x1234"])
            .unwrap();
        match args.command {
            Command::Check { payload, crc, id } => {
                assert_eq!(payload, Payload(vec![0x12, 0x34]));
                assert_eq!(crc, 0x1234);
                assert_eq!(id, 0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
