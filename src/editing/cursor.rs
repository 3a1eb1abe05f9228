//! 3D cursor access
//!
//! Hosts before 2.80 expose the cursor as a bare scene location, later hosts as
//! a cursor object with its own location. Both hold the same value.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// First host version that stores the cursor as an object
pub const CURSOR_OBJECT_VERSION: HostVersion = HostVersion::new(2, 80, 0);

/// Version of the host application
#[derive(
    Resource, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "[u32; 3]", into = "[u32; 3]")]
pub struct HostVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl HostVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Whether this host only provides the legacy cursor location
    pub fn uses_legacy_cursor(&self) -> bool {
        *self < CURSOR_OBJECT_VERSION
    }
}

impl Default for HostVersion {
    fn default() -> Self {
        CURSOR_OBJECT_VERSION
    }
}

impl From<[u32; 3]> for HostVersion {
    fn from([major, minor, patch]: [u32; 3]) -> Self {
        Self::new(major, minor, patch)
    }
}

impl From<HostVersion> for [u32; 3] {
    fn from(version: HostVersion) -> Self {
        [version.major, version.minor, version.patch]
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// The scene's 3D cursor (hosts from 2.80 on)
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct Cursor3d {
    pub location: Vec3,
}

/// The scene's cursor location (hosts before 2.80)
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct LegacyCursorLocation(pub Vec3);

/// Resolve the reference point for the given host version
///
/// Falls back to whichever cursor is present, then to the origin.
pub fn reference_location(
    version: HostVersion,
    cursor: Option<&Cursor3d>,
    legacy: Option<&LegacyCursorLocation>,
) -> Vec3 {
    let modern = cursor.map(|cursor| cursor.location);
    let legacy = legacy.map(|legacy| legacy.0);
    let preferred = if version.uses_legacy_cursor() {
        legacy.or(modern)
    } else {
        modern.or(legacy)
    };
    preferred.unwrap_or_else(|| {
        warn!("No 3D cursor available for host {}, using the origin", version);
        Vec3::ZERO
    })
}
