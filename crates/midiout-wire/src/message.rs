//! Typed channel-voice messages.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::frame::{DataPolicy, ShortMessage};
use crate::pitch_bend::join_pitch_bend;
use crate::status::{is_status, MessageClass, SYSTEM};

/// A MIDI 1.0 channel-voice message. Channels are 1-based (1-16).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelVoice {
    NoteOff { channel: u8, pitch: u8, velocity: u8 },
    /// Velocity 0 is a note off by MIDI convention; it is sent as-is.
    NoteOn { channel: u8, pitch: u8, velocity: u8 },
    PolyAftertouch { channel: u8, pitch: u8, value: u8 },
    ControlChange { channel: u8, controller: u8, value: u8 },
    ProgramChange { channel: u8, program: u8 },
    ChannelAftertouch { channel: u8, value: u8 },
    /// `value` is the unsigned 14-bit bend (8192 = center).
    PitchBend { channel: u8, value: u16 },
}

impl ChannelVoice {
    pub const fn class(&self) -> MessageClass {
        match self {
            ChannelVoice::NoteOff { .. } => MessageClass::NoteOff,
            ChannelVoice::NoteOn { .. } => MessageClass::NoteOn,
            ChannelVoice::PolyAftertouch { .. } => MessageClass::PolyAftertouch,
            ChannelVoice::ControlChange { .. } => MessageClass::ControlChange,
            ChannelVoice::ProgramChange { .. } => MessageClass::ProgramChange,
            ChannelVoice::ChannelAftertouch { .. } => MessageClass::ChannelAftertouch,
            ChannelVoice::PitchBend { .. } => MessageClass::PitchBend,
        }
    }

    pub const fn channel(&self) -> u8 {
        match *self {
            ChannelVoice::NoteOff { channel, .. }
            | ChannelVoice::NoteOn { channel, .. }
            | ChannelVoice::PolyAftertouch { channel, .. }
            | ChannelVoice::ControlChange { channel, .. }
            | ChannelVoice::ProgramChange { channel, .. }
            | ChannelVoice::ChannelAftertouch { channel, .. }
            | ChannelVoice::PitchBend { channel, .. } => channel,
        }
    }

    pub const fn encode(&self, policy: DataPolicy) -> ShortMessage {
        match *self {
            ChannelVoice::NoteOff {
                channel,
                pitch,
                velocity,
            } => ShortMessage::note_off(channel, pitch, velocity, policy),
            ChannelVoice::NoteOn {
                channel,
                pitch,
                velocity,
            } => ShortMessage::note_on(channel, pitch, velocity, policy),
            ChannelVoice::PolyAftertouch {
                channel,
                pitch,
                value,
            } => ShortMessage::poly_aftertouch(channel, pitch, value, policy),
            ChannelVoice::ControlChange {
                channel,
                controller,
                value,
            } => ShortMessage::control_change(channel, controller, value, policy),
            ChannelVoice::ProgramChange { channel, program } => {
                ShortMessage::program_change(channel, program, policy)
            }
            ChannelVoice::ChannelAftertouch { channel, value } => {
                ShortMessage::channel_aftertouch(channel, value, policy)
            }
            ChannelVoice::PitchBend { channel, value } => ShortMessage::pitch_bend(channel, value),
        }
    }

    /// Decode one channel-voice frame. Extra trailing bytes are ignored;
    /// data bytes inside the frame must be 7-bit.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let status = *bytes.first().ok_or(Error::Empty)?;
        if !is_status(status) {
            return Err(Error::MissingStatus(status));
        }
        if status >= SYSTEM {
            return Err(Error::NotChannelVoice(status));
        }
        let class = MessageClass::from_status(status).ok_or(Error::NotChannelVoice(status))?;
        let expected = class.frame_len();
        if bytes.len() < expected {
            return Err(Error::Truncated {
                status,
                expected,
                got: bytes.len(),
            });
        }

        let data = &bytes[1..expected];
        if let Some(&byte) = data.iter().find(|&&b| is_status(b)) {
            return Err(Error::DataByte { status, byte });
        }

        let channel = (status & 0x0F) + 1;
        let data1 = data[0];
        let data2 = data.get(1).copied().unwrap_or(0);

        Ok(match class {
            MessageClass::NoteOff => ChannelVoice::NoteOff {
                channel,
                pitch: data1,
                velocity: data2,
            },
            MessageClass::NoteOn => ChannelVoice::NoteOn {
                channel,
                pitch: data1,
                velocity: data2,
            },
            MessageClass::PolyAftertouch => ChannelVoice::PolyAftertouch {
                channel,
                pitch: data1,
                value: data2,
            },
            MessageClass::ControlChange => ChannelVoice::ControlChange {
                channel,
                controller: data1,
                value: data2,
            },
            MessageClass::ProgramChange => ChannelVoice::ProgramChange {
                channel,
                program: data1,
            },
            MessageClass::ChannelAftertouch => ChannelVoice::ChannelAftertouch {
                channel,
                value: data1,
            },
            MessageClass::PitchBend => ChannelVoice::PitchBend {
                channel,
                value: join_pitch_bend(data1, data2),
            },
        })
    }
}

impl TryFrom<&[u8]> for ChannelVoice {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::decode(bytes)
    }
}

impl From<ChannelVoice> for ShortMessage {
    fn from(msg: ChannelVoice) -> Self {
        msg.encode(DataPolicy::Mask)
    }
}
