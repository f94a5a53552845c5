//! Infrared command encoder for Mitsubishi Heavy Industries SRK-ZS air conditioners.
//!
//! ```
//! use mhi_heatpump::zs::{encode, Command, Mode, Revision};
//!
//! let frame = encode(&Command::on(Mode::Cool, 22), Revision::QuietStrong);
//! assert_eq!(frame.to_hex(), "52aec326d9115060000020c100000000000000");
//! ```

pub mod broadlink;
pub mod modem;
pub mod pwm;
pub mod remote;
pub mod smartir;
pub mod zs;
