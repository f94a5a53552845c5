use std::time::Duration;

/**
 * Implements encoding of payloads sent to a broadlink IR device
 * Payload format from: https://github.com/mjg59/python-broadlink/blob/master/protocol.md
 */
use bytes::{BufMut, Bytes, BytesMut};

trait BroadlinkDuration {
    fn to_broadlink(self) -> u16;
}

impl BroadlinkDuration for std::time::Duration {
    fn to_broadlink(self) -> u16 {
        // Round through float to avoid rounding errors in conversion
        (self.as_micros() as f64 * 269.0 / 8192.0).round() as u16
    }
}

const TRANSPORT_IR: u8 = 0x26;

/*
Offset	Contents
0x00	0x26 = IR
0x01	repeat count, (0 = no repeat, 1 send twice, .....)
0x02-0x03	Length of the following data in little endian
0x04 ....	Pulse lengths in 2^-15 s units (µs * 269 / 8192 works very well)
....	For IR codes, the pulse lengths should be paired as ON, OFF
 */
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recording {
    pub repeat_count: u8,
    // On-off pulse durations
    pub pulses: Vec<Duration>,
}

impl Recording {
    pub fn new_ir(pulses: Vec<Duration>) -> Self {
        Self {
            repeat_count: 0,
            pulses,
        }
    }

    pub fn to_raw_format(&self) -> String {
        use std::fmt::Write;

        let mut sign = false;
        let mut out = String::new();
        self.pulses.iter().for_each(|p| {
            sign = !sign;
            // Writing to a String can't fail
            let _ = write!(out, "{}{} ", if sign { '+' } else { '-' }, p.as_micros());
        });
        out.truncate(out.trim_end().len());
        out
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut b = BytesMut::new();
        b.put_u8(TRANSPORT_IR);
        b.put_u8(self.repeat_count);

        let mut pulses_buf = BytesMut::new();
        for pulse in &self.pulses {
            let pulse = pulse.to_broadlink();
            if pulse < 256 {
                pulses_buf.put_u8(pulse as _);
            } else {
                pulses_buf.put_u8(0);
                pulses_buf.put_u16(pulse);
            }
        }

        b.put_u16_le(pulses_buf.len() as _);
        b.put(pulses_buf);
        b.freeze()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn recording() -> Recording {
        Recording::new_ir(
            [3200, 1600, 400, 100_000]
                .map(Duration::from_micros)
                .to_vec(),
        )
    }

    #[test]
    fn test_to_bytes() {
        let encoded = recording().to_bytes();
        assert_eq!(
            encoded.as_ref(),
            &hex_literal::hex!("26 00 0600 69 35 0d 000cd4")
        );
    }

    #[test]
    fn test_repeat_count() {
        let mut recording = recording();
        recording.repeat_count = 2;
        assert_eq!(recording.to_bytes()[1], 2);
    }

    #[test]
    fn test_raw_format() {
        assert_eq!(recording().to_raw_format(), "+3200 -1600 +400 -100000");
    }
}
