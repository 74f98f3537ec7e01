//! Rule codes and the named rule catalog.
//!
//! A rule code is a fixed 3-character string `[kind][waveform][axis]`:
//! - kind: `n` none, `R` rotation, `S` scale, `T` translation
//! - waveform: `n` none, `s` sinusoidal, `l` linear
//! - axis: `n` none, `x`, `y`, `z`
//!
//! Any 3-character string is a valid `RuleCode`; characters outside the
//! alphabets above degrade to the `None` variant of their component, which
//! the evaluator treats as identity. The named catalog is the closed set of
//! 16 rules a host UI offers, each with a canonical code and a display label.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::PoseWarpError;

/// Transform kind selected by the first code character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleKind {
    None,
    Rotation,
    Scale,
    Translation,
}

/// Time waveform selected by the second code character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Waveform {
    None,
    Sinusoidal,
    Linear,
}

/// Target axis selected by the third code character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    None,
    X,
    Y,
    Z,
}

/// A 3-character rule code. `Copy`, order-preserving, compared exactly
/// (so `nsx` is distinct from the canonical none code `nnn` even though
/// both evaluate to identity).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RuleCode([char; 3]);

impl RuleCode {
    /// The default "no transformation" code.
    pub const NONE: RuleCode = RuleCode(['n', 'n', 'n']);

    pub const fn from_chars(kind: char, waveform: char, axis: char) -> Self {
        RuleCode([kind, waveform, axis])
    }

    /// Strict parse: exactly 3 characters, no alphabet validation.
    pub fn parse(s: &str) -> Result<Self, PoseWarpError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), Some(c), None) => Ok(RuleCode([a, b, c])),
            _ => Err(PoseWarpError::InvalidRuleCode {
                code: s.to_string(),
            }),
        }
    }

    /// Kind component; unrecognized characters degrade to `None`.
    pub fn kind(self) -> RuleKind {
        match self.0[0] {
            'R' => RuleKind::Rotation,
            'S' => RuleKind::Scale,
            'T' => RuleKind::Translation,
            _ => RuleKind::None,
        }
    }

    /// Waveform component; unrecognized characters degrade to `None`.
    pub fn waveform(self) -> Waveform {
        match self.0[1] {
            's' => Waveform::Sinusoidal,
            'l' => Waveform::Linear,
            _ => Waveform::None,
        }
    }

    /// Axis component; unrecognized characters degrade to `None`.
    pub fn axis(self) -> Axis {
        match self.0[2] {
            'x' => Axis::X,
            'y' => Axis::Y,
            'z' => Axis::Z,
            _ => Axis::None,
        }
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

impl FromStr for RuleCode {
    type Err = PoseWarpError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleCode::parse(s)
    }
}

impl Serialize for RuleCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RuleCode {
    fn deserialize<D>(deserializer: D) -> Result<RuleCode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RuleCode::parse(&s).map_err(de::Error::custom)
    }
}

/// The closed catalog of named rules. Canonical codes and display labels are
/// associated tables; hosts build selection UIs from `ALL` + `label()`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedRule {
    None,
    RotateLinearX,
    RotateLinearY,
    RotateLinearZ,
    RotateSineX,
    RotateSineY,
    RotateSineZ,
    ScaleSineX,
    ScaleSineY,
    ScaleSineZ,
    TranslateSineX,
    TranslateSineY,
    TranslateSineZ,
    TranslateLinearX,
    TranslateLinearY,
    TranslateLinearZ,
}

impl NamedRule {
    /// All 16 named rules, `None` first.
    pub const ALL: [NamedRule; 16] = [
        NamedRule::None,
        NamedRule::RotateLinearX,
        NamedRule::RotateLinearY,
        NamedRule::RotateLinearZ,
        NamedRule::RotateSineX,
        NamedRule::RotateSineY,
        NamedRule::RotateSineZ,
        NamedRule::ScaleSineX,
        NamedRule::ScaleSineY,
        NamedRule::ScaleSineZ,
        NamedRule::TranslateSineX,
        NamedRule::TranslateSineY,
        NamedRule::TranslateSineZ,
        NamedRule::TranslateLinearX,
        NamedRule::TranslateLinearY,
        NamedRule::TranslateLinearZ,
    ];

    /// Canonical 3-character code.
    pub fn code(self) -> RuleCode {
        match self {
            NamedRule::None => RuleCode::NONE,
            NamedRule::RotateLinearX => RuleCode::from_chars('R', 'l', 'x'),
            NamedRule::RotateLinearY => RuleCode::from_chars('R', 'l', 'y'),
            NamedRule::RotateLinearZ => RuleCode::from_chars('R', 'l', 'z'),
            NamedRule::RotateSineX => RuleCode::from_chars('R', 's', 'x'),
            NamedRule::RotateSineY => RuleCode::from_chars('R', 's', 'y'),
            NamedRule::RotateSineZ => RuleCode::from_chars('R', 's', 'z'),
            NamedRule::ScaleSineX => RuleCode::from_chars('S', 's', 'x'),
            NamedRule::ScaleSineY => RuleCode::from_chars('S', 's', 'y'),
            NamedRule::ScaleSineZ => RuleCode::from_chars('S', 's', 'z'),
            NamedRule::TranslateSineX => RuleCode::from_chars('T', 's', 'x'),
            NamedRule::TranslateSineY => RuleCode::from_chars('T', 's', 'y'),
            NamedRule::TranslateSineZ => RuleCode::from_chars('T', 's', 'z'),
            NamedRule::TranslateLinearX => RuleCode::from_chars('T', 'l', 'x'),
            NamedRule::TranslateLinearY => RuleCode::from_chars('T', 'l', 'y'),
            NamedRule::TranslateLinearZ => RuleCode::from_chars('T', 'l', 'z'),
        }
    }

    /// Display label for property panels.
    pub fn label(self) -> &'static str {
        match self {
            NamedRule::None => "none",
            NamedRule::RotateLinearX => "R.x = t",
            NamedRule::RotateLinearY => "R.y = t",
            NamedRule::RotateLinearZ => "R.z = t",
            NamedRule::RotateSineX => "R.x = sin(t)",
            NamedRule::RotateSineY => "R.y = sin(t)",
            NamedRule::RotateSineZ => "R.z = sin(t)",
            NamedRule::ScaleSineX => "scale.x = sin(t)",
            NamedRule::ScaleSineY => "scale.y = sin(t)",
            NamedRule::ScaleSineZ => "scale.z = sin(t)",
            NamedRule::TranslateSineX => "trans.x = sin(t)",
            NamedRule::TranslateSineY => "trans.y = sin(t)",
            NamedRule::TranslateSineZ => "trans.z = sin(t)",
            NamedRule::TranslateLinearX => "trans.x = t",
            NamedRule::TranslateLinearY => "trans.y = t",
            NamedRule::TranslateLinearZ => "trans.z = t",
        }
    }

    /// Reverse lookup from a canonical code.
    pub fn from_code(code: RuleCode) -> Option<NamedRule> {
        Self::ALL.iter().copied().find(|r| r.code() == code)
    }
}
