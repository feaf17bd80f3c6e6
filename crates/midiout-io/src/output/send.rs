//! Channel-voice sending.
//!
//! Number ranges:
//!
//! | Argument | Range |
//! |---|---|
//! | channel | 1 - 16 |
//! | pitch, velocity, controller, value, program | 0 - 127 |
//! | pitch bend (14-bit) | 0 - 16383 |
//!
//! Data bytes are masked to 7 bits under
//! [`DataPolicy::Mask`](midiout_wire::DataPolicy::Mask) (the default) and
//! written unchanged under `DataPolicy::PassThrough`. Sending with no
//! port open is left to the transport, which normally returns
//! [`Error::NotOpen`](crate::Error::NotOpen).

use midiout_wire::{
    is_valid_channel, is_valid_pitch_bend, pitch_bend_from_signed, ChannelVoice, ShortMessage,
};
use tracing::{debug, error, warn};

use super::Output;
use crate::error::{Error, Result};

impl Output {
    /// Send `bytes` unchanged as one MIDI event (SysEx, system real-time, ...).
    pub fn send_raw(&mut self, bytes: &[u8]) -> Result<()> {
        debug!("MIDI out {:02X?}", bytes);
        self.transport.send_message(bytes)
    }

    /// Note On. Velocity 0 is sent as-is; receivers treat it as note off.
    pub fn send_note_on(&mut self, channel: u8, pitch: u8, velocity: u8) -> Result<()> {
        self.check_channel(channel);
        let msg = ShortMessage::note_on(channel, pitch, velocity, self.data_policy);
        self.send_short(msg)
    }

    pub fn send_note_off(&mut self, channel: u8, pitch: u8, velocity: u8) -> Result<()> {
        self.check_channel(channel);
        let msg = ShortMessage::note_off(channel, pitch, velocity, self.data_policy);
        self.send_short(msg)
    }

    pub fn send_control_change(&mut self, channel: u8, controller: u8, value: u8) -> Result<()> {
        self.check_channel(channel);
        let msg = ShortMessage::control_change(channel, controller, value, self.data_policy);
        self.send_short(msg)
    }

    /// 2-byte frame.
    pub fn send_program_change(&mut self, channel: u8, program: u8) -> Result<()> {
        self.check_channel(channel);
        let msg = ShortMessage::program_change(channel, program, self.data_policy);
        self.send_short(msg)
    }

    /// Channel aftertouch (channel pressure). 2-byte frame.
    pub fn send_aftertouch(&mut self, channel: u8, value: u8) -> Result<()> {
        self.check_channel(channel);
        let msg = ShortMessage::channel_aftertouch(channel, value, self.data_policy);
        self.send_short(msg)
    }

    pub fn send_poly_aftertouch(&mut self, channel: u8, pitch: u8, value: u8) -> Result<()> {
        self.check_channel(channel);
        let msg = ShortMessage::poly_aftertouch(channel, pitch, value, self.data_policy);
        self.send_short(msg)
    }

    /// Pitch bend from an unsigned 14-bit value (8192 = center).
    ///
    /// Values with bits set above bit 13 are logged and sent truncated.
    pub fn send_pitch_bend(&mut self, channel: u8, value: u16) -> Result<()> {
        self.check_channel(channel);
        if !is_valid_pitch_bend(value) {
            error!(
                "[midiout::Output::send_pitch_bend] {}",
                Error::InvalidPitchBendRange(value)
            );
        }
        self.send_short(ShortMessage::pitch_bend(channel, value))
    }

    /// Pitch bend from 7-bit halves. The caller is responsible for splitting.
    pub fn send_pitch_bend_raw(&mut self, channel: u8, lsb: u8, msb: u8) -> Result<()> {
        self.check_channel(channel);
        let msg = ShortMessage::pitch_bend_raw(channel, lsb, msb, self.data_policy);
        self.send_short(msg)
    }

    /// Pitch bend from a signed offset (-8192 to 8191, 0 = center). Clamped.
    pub fn send_pitch_bend_signed(&mut self, channel: u8, bend: i16) -> Result<()> {
        self.send_pitch_bend(channel, pitch_bend_from_signed(bend))
    }

    /// Send a typed channel-voice message.
    ///
    /// Pitch bend takes the [`Output::send_pitch_bend`] path, including its
    /// out-of-range diagnostic.
    pub fn send(&mut self, msg: &ChannelVoice) -> Result<()> {
        if let ChannelVoice::PitchBend { channel, value } = *msg {
            return self.send_pitch_bend(channel, value);
        }
        self.check_channel(msg.channel());
        let frame = msg.encode(self.data_policy);
        self.send_short(frame)
    }

    fn send_short(&mut self, msg: ShortMessage) -> Result<()> {
        self.send_raw(msg.as_bytes())
    }

    fn check_channel(&self, channel: u8) {
        if !is_valid_channel(channel) {
            warn!(
                "MIDI channel {} outside 1-16, sending on wire channel {}",
                channel,
                midiout_wire::channel_nibble(channel)
            );
        }
    }
}
