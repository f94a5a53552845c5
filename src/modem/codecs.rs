use thiserror::Error;

use crate::broadlink::Recording;
use crate::zs::{phy::PhyError, Frame, Phy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::EnumString, strum::AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum CodecType {
    #[default]
    Hex,
    BroadlinkHex,
    BroadlinkBase64,
    Raw,
}

pub trait Codec {
    type Error;

    fn encode(&self, frame: &Frame) -> Result<String, Self::Error>;

    /// Name of the encoding as used by SmartIR code files
    fn commands_encoding(&self) -> &'static str;
}

pub fn create_codec(ty: CodecType) -> Box<dyn Codec<Error = CodecError>> {
    match ty {
        CodecType::Hex => Box::new(FrameHex),
        CodecType::BroadlinkHex => Box::new(BroadlinkHex),
        CodecType::BroadlinkBase64 => Box::new(BroadlinkBase64),
        CodecType::Raw => Box::new(Raw),
    }
}

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("failed to modulate frame: {0}")]
    PhyError(#[from] PhyError),
}

fn modulate(frame: &Frame) -> Result<Recording, CodecError> {
    Ok(Recording::new_ir(Phy::new().encode(frame)?))
}

/// The bare frame, for transports that take the payload as a hex string
pub struct FrameHex;
impl Codec for FrameHex {
    type Error = CodecError;

    fn encode(&self, frame: &Frame) -> Result<String, Self::Error> {
        Ok(frame.to_hex())
    }

    fn commands_encoding(&self) -> &'static str {
        "Hex"
    }
}

pub struct BroadlinkHex;
impl Codec for BroadlinkHex {
    type Error = CodecError;

    fn encode(&self, frame: &Frame) -> Result<String, Self::Error> {
        let encoded = modulate(frame)?.to_bytes();
        Ok(hex::encode(&encoded))
    }

    fn commands_encoding(&self) -> &'static str {
        "Hex"
    }
}

pub struct BroadlinkBase64;
impl Codec for BroadlinkBase64 {
    type Error = CodecError;

    fn encode(&self, frame: &Frame) -> Result<String, Self::Error> {
        let encoded = modulate(frame)?.to_bytes();
        Ok(base64::encode(&encoded))
    }

    fn commands_encoding(&self) -> &'static str {
        "Base64"
    }
}

pub struct Raw;
impl Codec for Raw {
    type Error = CodecError;

    fn encode(&self, frame: &Frame) -> Result<String, Self::Error> {
        Ok(modulate(frame)?.to_raw_format())
    }

    fn commands_encoding(&self) -> &'static str {
        "Raw"
    }
}
