use std::{io::Write, str::FromStr};

use anyhow::anyhow;
use thiserror::Error;
use tracing::debug;

use crate::zs::Frame;

use super::codecs::{create_codec, Codec, CodecError, CodecType};

/// Something that can put a frame on the air. A send is a single blocking
/// operation; callers hold the device mutably for its duration.
pub trait Device {
    type Error;

    fn send(&mut self, frame: &Frame) -> Result<(), Self::Error>;
}

impl<D: Device + ?Sized> Device for Box<D> {
    type Error = D::Error;

    fn send(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        (**self).send(frame)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceType {
    /// Write one encoded payload per line to stdout, for a bridge process to pick up
    Lines { codec_type: CodecType },
}

impl FromStr for DeviceType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let device_type = parts.next().unwrap_or_default();

        Ok(match device_type {
            "lines" => {
                let codec_type = match parts.next() {
                    Some(codec_type) => CodecType::from_str(codec_type)?,
                    None => CodecType::default(),
                };
                DeviceType::Lines { codec_type }
            }
            _ => return Err(anyhow!("unknown device type: {}", device_type)),
        })
    }
}

pub fn create_device(ty: DeviceType) -> Box<dyn Device<Error = DeviceError>> {
    match ty {
        DeviceType::Lines { codec_type } => {
            Box::new(Lines::new(codec_type, Box::new(std::io::stdout())))
        }
    }
}

#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("codec error: {0}")]
    CodecError(#[from] CodecError),

    #[error("io error: {0}")]
    IOError(#[from] std::io::Error),
}

pub struct Lines {
    codec: Box<dyn Codec<Error = CodecError>>,
    writer: Box<dyn Write>,
}

impl Lines {
    pub fn new(codec_type: CodecType, writer: Box<dyn Write>) -> Self {
        Self {
            codec: create_codec(codec_type),
            writer,
        }
    }
}

impl Device for Lines {
    type Error = DeviceError;

    fn send(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        let encoded = self.codec.encode(frame)?;
        writeln!(self.writer, "{}", encoded)?;
        self.writer.flush()?;
        debug!(len = encoded.len(), "sent payload");
        Ok(())
    }
}
