//! Mitsubishi Heavy Industries SRK-ZS infrared protocol.
//!
//! A [`Command`] is resolved field by field into protocol codes, packed into a
//! 19 byte [`Frame`] and handed to a transmitter as a hex string.

pub mod frame;
pub mod phy;

pub use frame::{Codes, Frame};
pub use phy::Phy;

use std::str::FromStr;

use strum::{AsRefStr, EnumIter, EnumString};
use tracing::warn;

/// The complete state sent to the air conditioner. There is no partial update:
/// callers merge changes into their last known state before encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub power: Power,

    // Ignored when power is off
    pub mode: Mode,

    // Celsius, clamped to 17..=31 when encoded
    pub temperature: i32,

    pub fan: Fan,

    pub vswing: VSwing,

    pub hswing: HSwing,

    // Front panel display, only transmitted by `Revision::Light` units
    pub light: bool,
}

impl Default for Command {
    fn default() -> Self {
        Self {
            power: Power::Off,
            mode: Mode::Cool,
            temperature: Frame::DEFAULT_TEMPERATURE,
            fan: Fan::Auto,
            vswing: VSwing::Stopped,
            hswing: HSwing::Stopped,
            light: false,
        }
    }
}

impl Command {
    /// A powered-on command in `mode` with every other field at its default.
    pub fn on(mode: Mode, temperature: i32) -> Self {
        Self {
            power: Power::On,
            mode,
            temperature,
            ..Default::default()
        }
    }

    /// The command for `operation`, powered off for [`Operation::Off`].
    pub fn new(operation: Operation, temperature: i32) -> Self {
        match operation.mode() {
            Some(mode) => Command::on(mode, temperature),
            None => Self {
                temperature,
                ..Default::default()
            },
        }
    }

    pub fn operation(&self) -> Operation {
        match (self.power, self.mode) {
            (Power::Off, _) => Operation::Off,
            (Power::On, Mode::Heat) => Operation::Heat,
            (Power::On, Mode::Cool) => Operation::Cool,
            (Power::On, Mode::Dry) => Operation::Dry,
            (Power::On, Mode::Fan) => Operation::Fan,
            (Power::On, Mode::Auto) => Operation::Auto,
        }
    }
}

/// Which meaning byte 15 of the frame carries. Each physical sub-model family
/// understands exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Revision {
    /// Quiet/strong fan sub-mode flag
    #[default]
    QuietStrong,
    /// Display light on/off flag
    Light,
}

/// Logical operating mode, including off. Selects how a command is framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum Operation {
    Heat,
    Cool,
    Dry,
    Fan,
    Auto,
    Off,
}

impl Operation {
    pub fn mode(self) -> Option<Mode> {
        match self {
            Operation::Heat => Some(Mode::Heat),
            Operation::Cool => Some(Mode::Cool),
            Operation::Dry => Some(Mode::Dry),
            Operation::Fan => Some(Mode::Fan),
            Operation::Auto => Some(Mode::Auto),
            Operation::Off => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
#[repr(u8)]
pub enum Power {
    Off = 0,
    On = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
#[repr(u8)]
pub enum Mode {
    Heat = 1,
    Cool = 3,
    Dry = 5,
    Fan = 7,
    // Does not fit the 3 bit mode field, the carry is dropped when packed
    Auto = 8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
#[repr(u8)]
pub enum Fan {
    Auto = 0,
    Low = 1,
    Medium = 2,
    MediumHigh = 3,
    High = 4,
    // Sub-modes, sent as a base speed plus a flag in byte 15
    Quiet = 5,
    Strong = 6,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
#[repr(u8)]
pub enum VSwing {
    Stopped = 0,
    FixedTop = 1,
    FixedMiddleTop = 2,
    FixedMiddle = 3,
    FixedMiddleBottom = 4,
    FixedBottom = 5,
    RangeFull = 6,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
#[repr(u8)]
pub enum HSwing {
    Stopped = 0,
    FixedLeft = 1,
    FixedCenterLeft = 2,
    FixedCenter = 3,
    FixedCenterRight = 4,
    FixedRight = 5,
    FixedLeftRight = 6,
    RangeCenter = 7,
    RangeFull = 8,
}

/// A protocol field with a fixed wire code and a fallback for unknown legacy keys.
pub trait Field: Copy + FromStr + AsRef<str> + std::fmt::Debug {
    /// Used when a legacy key doesn't name any variant
    const DEFAULT: Self;

    /// Human readable field name for diagnostics
    const NAME: &'static str;

    fn code(self) -> u8;

    /// Parses a legacy string key such as `fixedMiddleTop`, resolving unknown
    /// keys to [`Field::DEFAULT`].
    fn from_legacy(key: &str) -> Self {
        match Self::from_str(key) {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    key,
                    "unrecognized {}, using {:?}",
                    Self::NAME,
                    Self::DEFAULT
                );
                Self::DEFAULT
            }
        }
    }
}

macro_rules! field {
    ($ty:ty, $name:literal, $default:expr) => {
        impl Field for $ty {
            const DEFAULT: Self = $default;
            const NAME: &'static str = $name;

            fn code(self) -> u8 {
                self as u8
            }
        }
    };
}

field!(Power, "power state", Power::Off);
field!(Mode, "mode", Mode::Cool);
field!(Fan, "fan speed", Fan::Auto);
field!(VSwing, "vertical swing", VSwing::Stopped);
field!(HSwing, "horizontal swing", HSwing::Stopped);

impl Fan {
    /// Fan speeds a unit of the given revision can be asked for.
    pub fn supported(revision: Revision) -> &'static [Fan] {
        match revision {
            Revision::QuietStrong => &[
                Fan::Auto,
                Fan::Low,
                Fan::Medium,
                Fan::MediumHigh,
                Fan::High,
                Fan::Quiet,
                Fan::Strong,
            ],
            Revision::Light => &[Fan::Auto, Fan::Low, Fan::Medium, Fan::MediumHigh, Fan::High],
        }
    }
}

/// Builds the frame for `command`.
///
/// Off is a fixed frame that ignores every other field, and fan-only mode
/// doesn't transmit a meaningful temperature.
pub fn encode(command: &Command, revision: Revision) -> Frame {
    match command.operation() {
        Operation::Off => Frame::off(),
        Operation::Fan => Frame::build(
            &Codes::resolve(command, revision),
            Frame::DEFAULT_TEMPERATURE,
        ),
        Operation::Heat | Operation::Cool | Operation::Dry | Operation::Auto => {
            Frame::build(&Codes::resolve(command, revision), command.temperature)
        }
    }
}
