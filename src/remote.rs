use std::fmt::Display;

use tracing::{debug, info, warn};

use crate::modem::Device;
use crate::zs::{self, Command, Frame, Revision};

/// An air conditioner reachable through a transmitter.
///
/// The unit never acknowledges anything, so availability only reflects
/// whether the last send made it out of the transmitter.
pub struct Remote<D> {
    device: D,
    revision: Revision,
    available: bool,
}

impl<D> Remote<D>
where
    D: Device,
    D::Error: Display,
{
    pub fn new(device: D, revision: Revision) -> Self {
        Self {
            device,
            revision,
            available: true,
        }
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Encodes and transmits `command`, returning the frame that was sent.
    ///
    /// A failed send marks the remote unavailable until the next successful one.
    pub fn send(&mut self, command: &Command) -> Result<Frame, D::Error> {
        let frame = zs::encode(command, self.revision);
        debug!(operation = ?command.operation(), %frame, "sending");

        match self.device.send(&frame) {
            Ok(()) => {
                if !self.available {
                    info!("transmitter is available again");
                }
                self.available = true;
                Ok(frame)
            }
            Err(e) => {
                warn!("failed to transmit, marking unavailable: {}", e);
                self.available = false;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modem::devices::{test::Capture, Lines};
    use crate::modem::CodecType;
    use crate::zs::{Fan, Mode, Power};

    fn remote(capture: &Capture) -> Remote<Lines> {
        let device = Lines::new(CodecType::Hex, Box::new(capture.clone()));
        Remote::new(device, Revision::QuietStrong)
    }

    #[test]
    fn test_send() {
        let capture = Capture::default();
        let mut remote = remote(&capture);

        let frame = remote.send(&Command::on(Mode::Cool, 22)).unwrap();
        assert_eq!(frame.to_hex(), "52aec326d9115060000020c100000000000000");
        assert_eq!(capture.lines(), vec![frame.to_hex()]);
        assert!(remote.is_available());
    }

    #[test]
    fn test_send_merged_state() {
        let capture = Capture::default();
        let mut remote = remote(&capture);

        // The caller owns the state and sends it whole every time
        let mut state = Command::on(Mode::Heat, 21);
        remote.send(&state).unwrap();
        state.fan = Fan::High;
        remote.send(&state).unwrap();
        state.power = Power::Off;
        remote.send(&state).unwrap();

        let lines = capture.lines();
        assert_eq!(lines.len(), 3);
        assert_ne!(lines[0], lines[1]);
        assert_eq!(lines[2], Frame::off().to_hex());
    }

    #[test]
    fn test_availability() {
        let capture = Capture::default();
        let mut remote = remote(&capture);
        let command = Command::on(Mode::Dry, 24);

        *capture.broken.borrow_mut() = true;
        assert!(remote.send(&command).is_err());
        assert!(!remote.is_available());

        *capture.broken.borrow_mut() = false;
        remote.send(&command).unwrap();
        assert!(remote.is_available());
        assert_eq!(capture.lines().len(), 1);
    }
}
