use crate::pwm::{Codec, CodecError};

use std::time::Duration;
use thiserror::Error;

use super::Frame;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PulseType {
    HeaderMark,
    HeaderSpace,
    BitMark,
    ZeroSpace,
    OneSpace,
    // Silence after the last bit, recordings need an even number of pulses
    Gap,
}

#[derive(Error, Debug, Copy, Clone)]
pub enum PhyError {
    #[error("PWM error: {0}")]
    PWMError(#[from] CodecError<PulseType>),
}

const HEADER: (PulseType, PulseType) = (PulseType::HeaderMark, PulseType::HeaderSpace);

pub struct Phy {
    codec: Codec<PulseType>,
}

impl Default for Phy {
    fn default() -> Self {
        Self::new()
    }
}

impl Phy {
    pub fn new() -> Self {
        let codec = Codec::new(
            [
                (PulseType::HeaderMark, Duration::from_micros(3200)),
                (PulseType::HeaderSpace, Duration::from_micros(1600)),
                (PulseType::BitMark, Duration::from_micros(400)),
                (PulseType::ZeroSpace, Duration::from_micros(400)),
                (PulseType::OneSpace, Duration::from_micros(1200)),
                (PulseType::Gap, Duration::from_millis(100)),
            ]
            .into_iter(),
        );

        Self { codec }
    }

    pub fn encode(&self, frame: &Frame) -> Result<Vec<Duration>, PhyError> {
        let pulses = self.encode_pulses(frame);
        Ok(self.codec.encode(pulses.into_iter())?)
    }

    pub fn encode_pulses(&self, frame: &Frame) -> Vec<PulseType> {
        let bytes = frame.as_bytes();
        let mut pulses = Vec::with_capacity(2 * (bytes.len() * 8 + 2));

        pulses.push(HEADER.0);
        pulses.push(HEADER.1);

        for &byte in bytes.iter() {
            Phy::append_byte(byte, &mut pulses);
        }

        pulses.push(PulseType::BitMark);
        pulses.push(PulseType::Gap);

        pulses
    }

    /// Encode a byte into a sequence of pulses, least significant bit first.
    fn append_byte(byte: u8, pulses: &mut Vec<PulseType>) {
        for bit in 0..8 {
            pulses.push(PulseType::BitMark);
            pulses.push(if byte & (1 << bit) != 0 {
                PulseType::OneSpace
            } else {
                PulseType::ZeroSpace
            });
        }
    }
}
