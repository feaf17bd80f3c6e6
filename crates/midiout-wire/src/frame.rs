//! Fixed-size channel-voice frames.
//!
//! A [`ShortMessage`] is a stack-allocated 2- or 3-byte MIDI frame. It never
//! allocates, so one can be built per send without a shared scratch buffer.

use serde::{Deserialize, Serialize};

use crate::pitch_bend::split_pitch_bend;
use crate::status::{status_byte, MessageClass};

/// How data bytes are written into a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DataPolicy {
    /// Clear the top bit of every data byte so it can never be read as a status byte.
    #[default]
    Mask,
    /// Write data bytes unchanged. Values >= 128 will corrupt the stream.
    PassThrough,
}

impl DataPolicy {
    #[inline]
    pub const fn apply(self, byte: u8) -> u8 {
        match self {
            DataPolicy::Mask => byte & 0x7F,
            DataPolicy::PassThrough => byte,
        }
    }
}

/// Status byte plus one or two data bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShortMessage {
    bytes: [u8; 3],
    len: u8,
}

impl ShortMessage {
    /// 3-byte frame.
    #[inline]
    pub const fn three(status: u8, data1: u8, data2: u8) -> Self {
        Self {
            bytes: [status, data1, data2],
            len: 3,
        }
    }

    /// 2-byte frame.
    #[inline]
    pub const fn two(status: u8, data1: u8) -> Self {
        Self {
            bytes: [status, data1, 0],
            len: 2,
        }
    }

    /// Build a frame for `class` on a 1-based `channel`.
    ///
    /// `data2` is ignored for classes with a single data byte.
    pub const fn channel_voice(
        class: MessageClass,
        channel: u8,
        data1: u8,
        data2: u8,
        policy: DataPolicy,
    ) -> Self {
        let status = status_byte(class, channel);
        match class.data_len() {
            1 => Self::two(status, policy.apply(data1)),
            _ => Self::three(status, policy.apply(data1), policy.apply(data2)),
        }
    }

    pub const fn note_on(channel: u8, pitch: u8, velocity: u8, policy: DataPolicy) -> Self {
        Self::channel_voice(MessageClass::NoteOn, channel, pitch, velocity, policy)
    }

    pub const fn note_off(channel: u8, pitch: u8, velocity: u8, policy: DataPolicy) -> Self {
        Self::channel_voice(MessageClass::NoteOff, channel, pitch, velocity, policy)
    }

    pub const fn control_change(channel: u8, controller: u8, value: u8, policy: DataPolicy) -> Self {
        Self::channel_voice(MessageClass::ControlChange, channel, controller, value, policy)
    }

    pub const fn program_change(channel: u8, program: u8, policy: DataPolicy) -> Self {
        Self::channel_voice(MessageClass::ProgramChange, channel, program, 0, policy)
    }

    pub const fn channel_aftertouch(channel: u8, value: u8, policy: DataPolicy) -> Self {
        Self::channel_voice(MessageClass::ChannelAftertouch, channel, value, 0, policy)
    }

    pub const fn poly_aftertouch(channel: u8, pitch: u8, value: u8, policy: DataPolicy) -> Self {
        Self::channel_voice(MessageClass::PolyAftertouch, channel, pitch, value, policy)
    }

    /// Pitch bend from a 14-bit value. Bits above bit 13 are dropped.
    pub const fn pitch_bend(channel: u8, value: u16) -> Self {
        let (lsb, msb) = split_pitch_bend(value);
        Self::three(status_byte(MessageClass::PitchBend, channel), lsb, msb)
    }

    /// Pitch bend from pre-split data bytes.
    pub const fn pitch_bend_raw(channel: u8, lsb: u8, msb: u8, policy: DataPolicy) -> Self {
        Self::channel_voice(MessageClass::PitchBend, channel, lsb, msb, policy)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn status(&self) -> u8 {
        self.bytes[0]
    }

    #[inline]
    pub const fn class(&self) -> Option<MessageClass> {
        MessageClass::from_status(self.bytes[0])
    }

    /// 1-based channel from the status low nibble.
    #[inline]
    pub const fn channel(&self) -> u8 {
        (self.bytes[0] & 0x0F) + 1
    }

    /// Data bytes following the status byte.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.bytes[1..self.len as usize]
    }
}

impl AsRef<[u8]> for ShortMessage {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<ShortMessage> for Vec<u8> {
    fn from(msg: ShortMessage) -> Self {
        msg.as_bytes().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_on_frame() {
        let msg = ShortMessage::note_on(1, 60, 127, DataPolicy::Mask);
        assert_eq!(msg.as_bytes(), &[0x90, 0x3C, 0x7F]);
        assert_eq!(msg.channel(), 1);
        assert_eq!(msg.class(), Some(MessageClass::NoteOn));
    }

    #[test]
    fn test_note_off_channel_16() {
        let msg = ShortMessage::note_off(16, 60, 0, DataPolicy::Mask);
        assert_eq!(msg.as_bytes(), &[0x8F, 0x3C, 0x00]);
        assert_eq!(msg.channel(), 16);
    }

    #[test]
    fn test_control_change_frame() {
        let msg = ShortMessage::control_change(10, 7, 100, DataPolicy::Mask);
        assert_eq!(msg.as_bytes(), &[0xB9, 0x07, 0x64]);
    }

    #[test]
    fn test_two_byte_frames() {
        let msg = ShortMessage::program_change(2, 5, DataPolicy::Mask);
        assert_eq!(msg.as_bytes(), &[0xC1, 0x05]);
        assert_eq!(msg.len(), 2);
        assert_eq!(msg.data(), &[0x05]);

        let msg = ShortMessage::channel_aftertouch(4, 90, DataPolicy::Mask);
        assert_eq!(msg.as_bytes(), &[0xD3, 90]);
        assert_eq!(msg.len(), 2);
    }

    #[test]
    fn test_poly_aftertouch_frame() {
        let msg = ShortMessage::poly_aftertouch(1, 64, 33, DataPolicy::Mask);
        assert_eq!(msg.as_bytes(), &[0xA0, 64, 33]);
    }

    #[test]
    fn test_pitch_bend_frames() {
        let msg = ShortMessage::pitch_bend(1, 8192);
        assert_eq!(msg.as_bytes(), &[0xE0, 0x00, 0x40]);

        let msg = ShortMessage::pitch_bend(3, 16383);
        assert_eq!(msg.as_bytes(), &[0xE2, 0x7F, 0x7F]);

        // Raw path applies the channel too
        let msg = ShortMessage::pitch_bend_raw(3, 0x7F, 0x7F, DataPolicy::Mask);
        assert_eq!(msg.as_bytes(), &[0xE2, 0x7F, 0x7F]);
    }

    #[test]
    fn test_data_policy_mask() {
        let msg = ShortMessage::note_on(1, 0xFF, 0x80, DataPolicy::Mask);
        assert_eq!(msg.as_bytes(), &[0x90, 0x7F, 0x00]);

        let msg = ShortMessage::program_change(1, 0xC8, DataPolicy::Mask);
        assert_eq!(msg.as_bytes(), &[0xC0, 0x48]);
    }

    #[test]
    fn test_data_policy_pass_through() {
        let msg = ShortMessage::note_on(1, 0xFF, 0x80, DataPolicy::PassThrough);
        assert_eq!(msg.as_bytes(), &[0x90, 0xFF, 0x80]);
    }

    #[test]
    fn test_into_vec() {
        let bytes: Vec<u8> = ShortMessage::program_change(1, 1, DataPolicy::Mask).into();
        assert_eq!(bytes, vec![0xC0, 0x01]);
    }
}
