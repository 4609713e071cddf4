use serde::{Serialize, Deserialize};
use std::fmt;

/// Number of pockets on a single-zero wheel
pub const SEGMENT_COUNT: usize = 37;

/// Angular width of one segment in degrees
pub const SEGMENT_WIDTH: f64 = 360.0 / SEGMENT_COUNT as f64;

/// Labels in the order they appear around the wheel, clockwise from the pointer
pub const WHEEL_NUMBERS: [u8; SEGMENT_COUNT] = [
    0, 32, 15, 19, 4, 21, 2, 25, 17, 34, 6, 27, 13, 36, 11, 30, 8, 23, 10, 5, 24,
    16, 33, 1, 20, 14, 31, 9, 22, 18, 29, 7, 28, 12, 35, 3, 26,
];

pub const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

// Inverse of WHEEL_NUMBERS: label -> position on the wheel
const SEGMENT_INDEX: [u8; SEGMENT_COUNT] = {
    let mut index = [0u8; SEGMENT_COUNT];
    let mut i = 0;
    while i < SEGMENT_COUNT {
        index[WHEEL_NUMBERS[i] as usize] = i as u8;
        i += 1;
    }
    index
};

/// A pocket label in `0..=36`. Only constructible through checked constructors,
/// so every `Label` has exactly one segment on the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Label(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLabel(pub u8);

impl fmt::Display for InvalidLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a wheel label (expected 0..=36)", self.0)
    }
}

impl std::error::Error for InvalidLabel {}

impl Label {
    pub const ZERO: Label = Label(0);
    pub const MAX: u8 = (SEGMENT_COUNT - 1) as u8;

    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Label(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// All labels in ascending numeric order (betting board order, not wheel order).
    pub fn all() -> impl Iterator<Item = Label> {
        (0..=Self::MAX).map(Label)
    }

    pub fn segment_index(self) -> usize {
        segment_index_of(self)
    }

    pub fn color(self) -> SegmentColor {
        color_of(self)
    }
}

impl TryFrom<u8> for Label {
    type Error = InvalidLabel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Label::new(value).ok_or(InvalidLabel(value))
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentColor {
    Neutral,
    Red,
    Black,
}

impl SegmentColor {
    /// Fill color used by the wheel and the betting board.
    pub const fn hex(&self) -> &'static str {
        match self {
            Self::Neutral => "#10b981",
            Self::Red => "#ef4444",
            Self::Black => "#111827",
        }
    }
}

/// Position of `label` around the wheel, in `0..37`.
pub fn segment_index_of(label: Label) -> usize {
    SEGMENT_INDEX[label.0 as usize] as usize
}

/// Label printed on the segment at `index`. `None` past the last segment.
pub fn label_at(index: usize) -> Option<Label> {
    WHEEL_NUMBERS.get(index).map(|&n| Label(n))
}

pub fn color_of(label: Label) -> SegmentColor {
    if label.0 == 0 {
        SegmentColor::Neutral
    } else if RED_NUMBERS.contains(&label.0) {
        SegmentColor::Red
    } else {
        SegmentColor::Black
    }
}

/// Angle of the segment's center measured from the pointer, in degrees.
pub fn segment_angle(index: usize) -> f64 {
    index as f64 * SEGMENT_WIDTH
}

/// Rounds an angle or coordinate to 3 decimal places. Rendering only.
pub fn round_for_render(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
