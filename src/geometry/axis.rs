//! Coordinate axes
//!
//! Alignment reads and writes one component of a 3D vector at a time.
//! `Axis` names that component and knows how to get and set it.

use crate::core::errors::AlignError;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three scene axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Reflect)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index inside a `Vec3`
    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Identifier used on the command line and in settings files
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// Read this axis' component of `v`
    pub fn get(&self, v: Vec3) -> f32 {
        v[self.index()]
    }

    /// Overwrite this axis' component of `v`, leaving the others alone
    pub fn set(&self, v: &mut Vec3, value: f32) {
        v[self.index()] = value;
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(AlignError::UnknownAxis(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_get_and_set() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Axis::X.get(v), 1.0);
        assert_eq!(Axis::Y.get(v), 2.0);
        assert_eq!(Axis::Z.get(v), 3.0);

        Axis::Y.set(&mut v, -7.5);
        assert_eq!(v, Vec3::new(1.0, -7.5, 3.0));
    }

    #[test]
    fn test_axis_parsing() {
        assert_eq!("x".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!("Y".parse::<Axis>().unwrap(), Axis::Y);
        assert_eq!(" z ".parse::<Axis>().unwrap(), Axis::Z);
        assert!(matches!(
            "w".parse::<Axis>(),
            Err(AlignError::UnknownAxis(name)) if name == "w"
        ));
    }

    #[test]
    fn test_axis_string_forms() {
        for axis in Axis::ALL {
            assert_eq!(axis.as_str().parse::<Axis>().unwrap(), axis);
            assert_eq!(axis.to_string(), axis.as_str());
        }
    }

    #[test]
    fn test_axis_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Axis::Z).unwrap(), "\"z\"");
        let axis: Axis = serde_json::from_str("\"y\"").unwrap();
        assert_eq!(axis, Axis::Y);
    }
}
