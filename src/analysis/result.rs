//! Pitch class and key types

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the 12 pitch classes, octave-agnostic
///
/// The ordinal of each variant is its semitone distance from C, so
/// `PitchClass::E.index() == 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    /// C
    C,
    /// C# / Db
    Cs,
    /// D
    D,
    /// D# / Eb
    Ds,
    /// E
    E,
    /// F
    F,
    /// F# / Gb
    Fs,
    /// G
    G,
    /// G# / Ab
    Gs,
    /// A
    A,
    /// A# / Bb
    As,
    /// B
    B,
}

impl PitchClass {
    /// All 12 pitch classes in ordinal order (C first)
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Pitch class from a semitone index; indices wrap modulo 12
    ///
    /// # Example
    ///
    /// ```
    /// use tonal_dsp::PitchClass;
    ///
    /// assert_eq!(PitchClass::from_index(7), PitchClass::G);
    /// assert_eq!(PitchClass::from_index(12), PitchClass::C);
    /// ```
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// Semitone distance from C (0-11)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Note name in sharp notation (e.g. "C", "F#")
    pub fn name(self) -> &'static str {
        const NAMES: [&str; 12] = [
            "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
        ];
        NAMES[self.index()]
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Musical key: a tonic pitch class plus a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Major key with the given tonic
    Major(PitchClass),
    /// Minor key with the given tonic
    Minor(PitchClass),
}

impl Key {
    /// Tonic pitch class of the key
    pub fn tonic(self) -> PitchClass {
        match self {
            Key::Major(pc) | Key::Minor(pc) => pc,
        }
    }

    /// True for major keys
    pub fn is_major(self) -> bool {
        matches!(self, Key::Major(_))
    }

    /// Key name in the engine's label form (e.g. "C major", "F# minor")
    ///
    /// # Example
    ///
    /// ```
    /// use tonal_dsp::{Key, PitchClass};
    ///
    /// assert_eq!(Key::Major(PitchClass::C).name(), "C major");
    /// assert_eq!(Key::Minor(PitchClass::Fs).name(), "F# minor");
    /// ```
    pub fn name(&self) -> String {
        match self {
            Key::Major(pc) => format!("{} major", pc),
            Key::Minor(pc) => format!("{} minor", pc),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Major(pc) => write!(f, "{} major", pc),
            Key::Minor(pc) => write!(f, "{} minor", pc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_class_ordinals() {
        assert_eq!(PitchClass::C.index(), 0);
        assert_eq!(PitchClass::Fs.index(), 6);
        assert_eq!(PitchClass::B.index(), 11);
        for (i, pc) in PitchClass::ALL.iter().enumerate() {
            assert_eq!(pc.index(), i);
            assert_eq!(PitchClass::from_index(i), *pc);
        }
    }

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(PitchClass::from_index(12), PitchClass::C);
        assert_eq!(PitchClass::from_index(23), PitchClass::B);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::Major(PitchClass::C).name(), "C major");
        assert_eq!(Key::Minor(PitchClass::Fs).name(), "F# minor");
        assert_eq!(Key::Major(PitchClass::As).to_string(), "A# major");
    }

    #[test]
    fn test_key_accessors() {
        let key = Key::Minor(PitchClass::A);
        assert_eq!(key.tonic(), PitchClass::A);
        assert!(!key.is_major());
        assert!(Key::Major(PitchClass::G).is_major());
    }

    #[test]
    fn test_key_serde_round_trip() {
        let key = Key::Minor(PitchClass::Fs);
        let json = serde_json::to_string(&key).unwrap();
        let back: Key = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
