use std::{fmt, ops::Mul};

use serde::{Serialize, Serializer};

/// A length in logical pixels. Themes express radii and breakpoint
/// thresholds in this unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Px(f32);

/// Creates a pixel length.
pub const fn px(value: f32) -> Px {
    Px(value)
}

impl Px {
    pub fn get(self) -> f32 {
        self.0
    }
}

impl Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl From<f32> for Px {
    fn from(value: f32) -> Self {
        Px(value)
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl Serialize for Px {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f32(self.0)
    }
}
