/** An IR PWM encoder mapping symbolic pulses to their durations */
use std::{collections::HashMap, hash::Hash, time::Duration};

use thiserror::Error;

#[derive(Error, Debug, Copy, Clone)]
pub enum CodecError<T: Copy + std::fmt::Debug> {
    #[error("a pulse was missing from the rule set: {0:?}")]
    InvalidPulse(T),
}

pub struct Codec<TPulse> {
    rules: HashMap<TPulse, Duration>,
}

impl<T: Copy + Eq + Hash + std::fmt::Debug> Codec<T> {
    pub fn new(rules: impl Iterator<Item = (T, Duration)>) -> Self {
        Self {
            rules: rules.collect(),
        }
    }

    pub fn encode(
        &self,
        pulses: impl Iterator<Item = T>,
    ) -> Result<Vec<Duration>, CodecError<T>> {
        let mut ret = Vec::new();

        for p in pulses {
            ret.push(self.encode_pulse(p).ok_or(CodecError::InvalidPulse(p))?);
        }

        Ok(ret)
    }

    pub fn encode_pulse(&self, pulse: T) -> Option<Duration> {
        self.rules.get(&pulse).copied()
    }
}
