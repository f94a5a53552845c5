/*

Transmitter plumbing
--------------------

Frame -> Codec -> payload line -> Device

Codecs:
  hex               the 19 byte frame as 38 lowercase hex characters
  broadlink-hex     broadlink IR packet, hex encoded
  broadlink-base64  broadlink IR packet, base64 encoded
  raw               +mark -space durations in microseconds

Devices are selected with `<device>:<codec>`, e.g. `lines:broadlink-base64`.

*/

pub mod codecs;
pub use codecs::{create_codec, Codec, CodecError, CodecType};

pub mod devices;
pub use devices::{create_device, Device, DeviceError, DeviceType};
