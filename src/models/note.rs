//! Note, pitch and default-setting types
//!
//! A `Note` always carries a resolved duration and octave: the parser fills
//! them from the ringtone defaults when a note omits them.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::RtttlError;

/// Duration used when the defaults part does not set `d`
pub const DEFAULT_DURATION: u32 = 4;
/// Octave used when the defaults part does not set `o`
pub const DEFAULT_OCTAVE: u32 = 6;
/// Tempo used when the defaults part does not set `b`
pub const DEFAULT_BPM: u32 = 63;

/// Note pitch, including the pause.
///
/// RTTTL allows a sharp on any pitch letter, so `E#`, `B#` and `P#` are
/// kept as written rather than respelled.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pitch {
    C,
    #[serde(rename = "C#")]
    CSharp,
    D,
    #[serde(rename = "D#")]
    DSharp,
    E,
    #[serde(rename = "E#")]
    ESharp,
    F,
    #[serde(rename = "F#")]
    FSharp,
    G,
    #[serde(rename = "G#")]
    GSharp,
    A,
    #[serde(rename = "A#")]
    ASharp,
    B,
    #[serde(rename = "B#")]
    BSharp,
    /// Pause (rest)
    P,
    #[serde(rename = "P#")]
    PSharp,
}

impl Pitch {
    pub fn is_pause(self) -> bool {
        matches!(self, Pitch::P | Pitch::PSharp)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Pitch::C => "C",
            Pitch::CSharp => "C#",
            Pitch::D => "D",
            Pitch::DSharp => "D#",
            Pitch::E => "E",
            Pitch::ESharp => "E#",
            Pitch::F => "F",
            Pitch::FSharp => "F#",
            Pitch::G => "G",
            Pitch::GSharp => "G#",
            Pitch::A => "A",
            Pitch::ASharp => "A#",
            Pitch::B => "B",
            Pitch::BSharp => "B#",
            Pitch::P => "P",
            Pitch::PSharp => "P#",
        }
    }
}

impl FromStr for Pitch {
    type Err = RtttlError;

    /// Case-insensitive. `H` is the German spelling of `B` and `;` is a
    /// legacy pause, so both normalize.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        let pitch = match upper.as_str() {
            "C" => Pitch::C,
            "C#" => Pitch::CSharp,
            "D" => Pitch::D,
            "D#" => Pitch::DSharp,
            "E" => Pitch::E,
            "E#" => Pitch::ESharp,
            "F" => Pitch::F,
            "F#" => Pitch::FSharp,
            "G" => Pitch::G,
            "G#" => Pitch::GSharp,
            "A" => Pitch::A,
            "A#" => Pitch::ASharp,
            "B" | "H" => Pitch::B,
            "B#" | "H#" => Pitch::BSharp,
            "P" | ";" => Pitch::P,
            "P#" | ";#" => Pitch::PSharp,
            _ => return Err(RtttlError::UnknownPitch(upper)),
        };
        Ok(pitch)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single resolved note command
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Note {
    /// One of 1, 2, 4, 8, 16, 32
    pub duration: u32,
    pub pitch: Pitch,
    /// One of 5, 6, 7, 8
    pub octave: u32,
    /// 0 to 2
    pub dots: u32,
}

impl Note {
    pub fn new(duration: u32, pitch: Pitch, octave: u32, dots: u32) -> Self {
        Self {
            duration,
            pitch,
            octave,
            dots,
        }
    }
}

impl fmt::Display for Note {
    /// Fully explicit note token, e.g. `8c#.6` or `4p6`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.duration,
            self.pitch.as_str().to_ascii_lowercase(),
            ".".repeat(self.dots as usize),
            self.octave
        )
    }
}

/// Effective playback defaults of a ringtone
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Defaults {
    pub duration: u32,
    pub octave: u32,
    pub bpm: u32,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            octave: DEFAULT_OCTAVE,
            bpm: DEFAULT_BPM,
        }
    }
}

impl fmt::Display for Defaults {
    /// Defaults-part form, `d=4,o=6,b=63`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d={},o={},b={}", self.duration, self.octave, self.bpm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_from_str_normalizes_aliases() {
        assert_eq!("h".parse::<Pitch>().unwrap(), Pitch::B);
        assert_eq!(";".parse::<Pitch>().unwrap(), Pitch::P);
        assert_eq!("g#".parse::<Pitch>().unwrap(), Pitch::GSharp);
        assert_eq!("A#".parse::<Pitch>().unwrap(), Pitch::ASharp);
        assert!(";".parse::<Pitch>().unwrap().is_pause());
        assert!(!Pitch::C.is_pause());
    }

    #[test]
    fn test_pitch_from_str_keeps_written_sharps() {
        assert_eq!("e#".parse::<Pitch>().unwrap(), Pitch::ESharp);
        assert_eq!("h#".parse::<Pitch>().unwrap(), Pitch::BSharp);
        assert_eq!(";#".parse::<Pitch>().unwrap(), Pitch::PSharp);
        assert!(Pitch::PSharp.is_pause());
        assert_eq!(Pitch::ESharp.to_string(), "E#");
    }

    #[test]
    fn test_pitch_from_str_rejects_unknown() {
        assert_eq!(
            "x".parse::<Pitch>(),
            Err(RtttlError::UnknownPitch("X".to_string()))
        );
        assert!("c##".parse::<Pitch>().is_err());
    }

    #[test]
    fn test_note_display() {
        assert_eq!(Note::new(8, Pitch::CSharp, 6, 1).to_string(), "8c#.6");
        assert_eq!(Note::new(4, Pitch::P, 5, 0).to_string(), "4p5");
    }

    #[test]
    fn test_defaults() {
        let defaults = Defaults::default();
        assert_eq!(defaults, Defaults { duration: 4, octave: 6, bpm: 63 });
        assert_eq!(defaults.to_string(), "d=4,o=6,b=63");
    }
}
