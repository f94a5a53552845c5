use std::fmt;

use tracing::{debug, warn};

use super::{Command, Fan, Field, HSwing, Mode, Power, Revision, VSwing};

pub const FRAME_LEN: usize = 19;

/// Protocol codes for one command, after revision-specific fan resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codes {
    pub power: u8,
    pub mode: u8,
    pub fan: u8,
    pub vswing: u8,
    pub hswing: u8,
    // Byte 15
    pub aux: u8,
}

impl Codes {
    const AUX_NONE: u8 = 0x00;
    const AUX_QUIET: u8 = 0x01;
    const AUX_STRONG: u8 = 0x02;
    const AUX_LIGHT: u8 = 0x01;

    pub fn resolve(command: &Command, revision: Revision) -> Self {
        let (fan, aux) = match (revision, command.fan) {
            (Revision::QuietStrong, Fan::Quiet) => (Fan::Low, Codes::AUX_QUIET),
            (Revision::QuietStrong, Fan::Strong) => (Fan::High, Codes::AUX_STRONG),
            (Revision::QuietStrong, fan) => (fan, Codes::AUX_NONE),
            (Revision::Light, fan) => {
                let base = match fan {
                    Fan::Quiet => Fan::Low,
                    Fan::Strong => Fan::High,
                    fan => fan,
                };
                if base != fan {
                    warn!("{:?} fan is not supported by this unit, sending {:?}", fan, base);
                }
                let aux = if command.light {
                    Codes::AUX_LIGHT
                } else {
                    Codes::AUX_NONE
                };
                (base, aux)
            }
        };

        Self {
            power: command.power.code(),
            mode: command.mode.code(),
            fan: fan.code(),
            vswing: command.vswing.code(),
            hswing: command.hswing.code(),
            aux,
        }
    }
}

/// One complete command as transmitted.
///
/// | byte | contents |
/// |------|----------|
/// | 0-4  | header |
/// | 5    | sub-header |
/// | 6    | temperature offset in the high nibble |
/// | 7    | mode (bits 7-5), fan (bits 4-0) |
/// | 8    | vertical swing (bits 7-5) |
/// | 9    | horizontal swing (bits 7-5) |
/// | 10   | power (bit 5) |
/// | 11   | sum of bytes 5-7 |
/// | 12   | sum of bytes 8-9 |
/// | 15   | revision flag |
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame([u8; FRAME_LEN]);

impl Frame {
    const HEADER: [u8; 5] = [0x52, 0xAE, 0xC3, 0x26, 0xD9];
    const SUB_HEADER: u8 = 0x11;

    pub const MIN_TEMPERATURE: i32 = 17;
    pub const MAX_TEMPERATURE: i32 = 31;
    pub const DEFAULT_TEMPERATURE: i32 = 22;

    const FIELD_SHIFT: u32 = 5;

    pub fn build(codes: &Codes, temperature: i32) -> Self {
        let temperature = temperature.clamp(Frame::MIN_TEMPERATURE, Frame::MAX_TEMPERATURE);

        let mut data = [0u8; FRAME_LEN];
        data[..5].copy_from_slice(&Frame::HEADER);
        data[5] = Frame::SUB_HEADER;
        data[6] = (((temperature - Frame::MIN_TEMPERATURE) as u8) & 0x0F) << 4;
        data[7] = pack(codes.mode) | codes.fan;
        data[8] = pack(codes.vswing);
        data[9] = pack(codes.hswing);
        data[10] = pack(codes.power);
        data[11] = data[5].wrapping_add(data[6]).wrapping_add(data[7]);
        data[12] = data[8].wrapping_add(data[9]);
        data[15] = codes.aux;

        let frame = Frame(data);
        debug!(frame = %frame, "built frame");
        frame
    }

    /// The power-off frame. It is the same for every revision and doesn't
    /// depend on any previously sent state.
    pub fn off() -> Self {
        let codes = Codes {
            power: Power::Off.code(),
            mode: Mode::Cool.code(),
            fan: Fan::Auto.code(),
            vswing: VSwing::Stopped.code(),
            hswing: HSwing::Stopped.code(),
            aux: Codes::AUX_NONE,
        };
        Frame::build(&codes, Frame::DEFAULT_TEMPERATURE)
    }

    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    pub fn checksums_valid(&self) -> bool {
        let d = &self.0;
        d[11] == d[5].wrapping_add(d[6]).wrapping_add(d[7]) && d[12] == d[8].wrapping_add(d[9])
    }

    /// Lowercase hex, two digits per byte, as expected by the transmitter.
    pub fn to_hex(&self) -> String {
        let out = hex::encode(self.0);
        debug_assert_eq!(out.len(), FRAME_LEN * 2);
        out
    }
}

// Fields occupy the top 3 bits of their byte, anything above is shifted out
fn pack(code: u8) -> u8 {
    code << Frame::FIELD_SHIFT
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.to_hex())
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zs::{encode, Command, Mode, Revision};
    use strum::IntoEnumIterator;

    fn codes(mode: Mode, fan: Fan) -> Codes {
        Codes::resolve(
            &Command {
                fan,
                ..Command::on(mode, 22)
            },
            Revision::QuietStrong,
        )
    }

    #[test]
    fn test_checksums() {
        for revision in Revision::iter() {
            for mode in Mode::iter() {
                for fan in Fan::iter() {
                    for vswing in VSwing::iter() {
                        for hswing in HSwing::iter() {
                            for temperature in 10..=40 {
                                let command = Command {
                                    fan,
                                    vswing,
                                    hswing,
                                    ..Command::on(mode, temperature)
                                };
                                let frame = encode(&command, revision);
                                let d = frame.as_bytes();
                                assert!(frame.checksums_valid());
                                assert_eq!(
                                    d[11] as u32,
                                    (d[5] as u32 + d[6] as u32 + d[7] as u32) % 256
                                );
                                assert_eq!(d[12] as u32, (d[8] as u32 + d[9] as u32) % 256);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_temperature_clamp() {
        let codes = codes(Mode::Heat, Fan::Auto);
        for temperature in -40..80 {
            let clamped = temperature.clamp(17, 31);
            assert_eq!(
                Frame::build(&codes, temperature),
                Frame::build(&codes, clamped)
            );
        }
        assert_eq!(Frame::build(&codes, 17).as_bytes()[6] >> 4, 0x0);
        assert_eq!(Frame::build(&codes, i32::MIN).as_bytes()[6] >> 4, 0x0);
        assert_eq!(Frame::build(&codes, 31).as_bytes()[6] >> 4, 0xE);
        assert_eq!(Frame::build(&codes, i32::MAX).as_bytes()[6] >> 4, 0xE);
        assert_eq!(Frame::build(&codes, 22).as_bytes()[6], 0x50);
    }

    #[test]
    fn test_layout() {
        let frame = Frame::build(&codes(Mode::Heat, Fan::High), 25);
        let d = frame.as_bytes();
        assert_eq!(&d[..6], &[0x52, 0xAE, 0xC3, 0x26, 0xD9, 0x11]);
        assert_eq!(d[7], 0x24);
        assert_eq!(d[10], 0x20);
        for i in [13, 14, 15, 16, 17, 18] {
            assert_eq!(d[i], 0, "byte {} should be zero", i);
        }
    }

    #[test]
    fn test_fan_sub_modes() {
        let quiet = codes(Mode::Cool, Fan::Quiet);
        assert_eq!((quiet.fan, quiet.aux), (1, 0x01));
        let strong = codes(Mode::Cool, Fan::Strong);
        assert_eq!((strong.fan, strong.aux), (4, 0x02));
        let high = codes(Mode::Cool, Fan::High);
        assert_eq!((high.fan, high.aux), (4, 0x00));

        let light = Command {
            fan: Fan::Strong,
            light: true,
            ..Command::on(Mode::Cool, 22)
        };
        let resolved = Codes::resolve(&light, Revision::Light);
        assert_eq!((resolved.fan, resolved.aux), (4, 0x01));

        // The light flag means nothing to the other revision
        let resolved = Codes::resolve(
            &Command {
                fan: Fan::Auto,
                ..light
            },
            Revision::QuietStrong,
        );
        assert_eq!(resolved.aux, 0x00);
    }

    #[test]
    fn test_hex() {
        let hex = Frame::off().to_hex();
        assert_eq!(hex.len(), 38);
        assert!(hex.starts_with("52aec326d9"));
        assert!(hex
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        assert_eq!(format!("{}", Frame::off()), hex);
    }

    #[test]
    fn test_pack() {
        assert_eq!(pack(1), 0x20);
        assert_eq!(pack(7), 0xE0);
        assert_eq!(pack(8), 0x00);
    }
}
