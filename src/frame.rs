pub const START_BYTE: u8 = 240;
pub const STOP_BYTE: u8 = 44;
pub const FRAME_LEN: usize = 4;

/// One transmitted torque sample: start marker, torque x 100 as a signed
/// big-endian 16-bit value, stop marker. There is no checksum; the link
/// relies on the fixed markers, the fixed length and the fixed cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    value: i16,
}

#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    Truncated { len: usize },
    BadStartMarker(u8),
    BadStopMarker(u8),
}

impl Frame {
    pub fn new(value: i16) -> Self {
        Frame { value }
    }

    pub fn value(&self) -> i16 {
        self.value
    }

    /// High byte first.
    pub fn encode(&self) -> [u8; FRAME_LEN] {
        [START_BYTE, (self.value >> 8) as u8, self.value as u8, STOP_BYTE]
    }

    pub fn parse(bytes: &[u8]) -> Result<Frame, FrameError> {
        if bytes.len() < FRAME_LEN {
            return Err(FrameError::Truncated { len: bytes.len() });
        }
        if bytes[0] != START_BYTE {
            return Err(FrameError::BadStartMarker(bytes[0]));
        }
        if bytes[3] != STOP_BYTE {
            return Err(FrameError::BadStopMarker(bytes[3]));
        }
        Ok(Frame {
            value: i16::from_be_bytes([bytes[1], bytes[2]]),
        })
    }
}
