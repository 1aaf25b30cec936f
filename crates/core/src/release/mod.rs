// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use strum::{Display, EnumIter, FromRepr, IntoStaticStr};

use crate::ConfigError;

///////////////////////////////////////////////////////////////////////
// ReleaseType
///////////////////////////////////////////////////////////////////////

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    FromRepr,
    EnumIter,
    Display,
    IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ReleaseType {
    #[default]
    Single = 0,
    Ep = 1,
    Album = 2,
    /// Multiple artists
    Compilation = 3,
}

///////////////////////////////////////////////////////////////////////
// TrackCountRange
///////////////////////////////////////////////////////////////////////

pub type TrackCount = usize;

/// Inclusive range of track counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TrackCountRange {
    pub min: TrackCount,
    pub max: TrackCount,
}

impl TrackCountRange {
    #[must_use]
    pub const fn new(min: TrackCount, max: TrackCount) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min > self.max
    }

    #[must_use]
    pub const fn contains(&self, count: TrackCount) -> bool {
        self.min <= count && count <= self.max
    }
}

impl fmt::Display for TrackCountRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { min, max } = self;
        write!(f, "{min}-{max}")
    }
}

///////////////////////////////////////////////////////////////////////
// ReleaseTypeRules
///////////////////////////////////////////////////////////////////////

/// Track count constraints for every [`ReleaseType`].
///
/// The table is total: a range exists for every member of the
/// enumeration, otherwise it could not have been constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReleaseTypeRules {
    single: TrackCountRange,
    ep: TrackCountRange,
    album: TrackCountRange,
    compilation: TrackCountRange,
}

impl ReleaseTypeRules {
    pub const DEFAULT_SINGLE: TrackCountRange = TrackCountRange::new(1, 3);
    pub const DEFAULT_EP: TrackCountRange = TrackCountRange::new(4, 6);
    pub const DEFAULT_ALBUM: TrackCountRange = TrackCountRange::new(7, 100);
    pub const DEFAULT_COMPILATION: TrackCountRange = TrackCountRange::new(4, 100);

    /// Builds the table from configured entries.
    ///
    /// Later entries for the same release type replace earlier ones.
    pub fn try_from_ranges(
        ranges: impl IntoIterator<Item = (ReleaseType, TrackCountRange)>,
    ) -> Result<Self, ConfigError> {
        let mut single = None;
        let mut ep = None;
        let mut album = None;
        let mut compilation = None;
        for (release_type, range) in ranges {
            if range.is_empty() {
                return Err(ConfigError::EmptyTrackCountRange {
                    release_type,
                    min: range.min,
                    max: range.max,
                });
            }
            let slot = match release_type {
                ReleaseType::Single => &mut single,
                ReleaseType::Ep => &mut ep,
                ReleaseType::Album => &mut album,
                ReleaseType::Compilation => &mut compilation,
            };
            *slot = Some(range);
        }
        let missing = ConfigError::MissingReleaseType;
        Ok(Self {
            single: single.ok_or(missing(ReleaseType::Single))?,
            ep: ep.ok_or(missing(ReleaseType::Ep))?,
            album: album.ok_or(missing(ReleaseType::Album))?,
            compilation: compilation.ok_or(missing(ReleaseType::Compilation))?,
        })
    }

    #[must_use]
    pub const fn range_for(&self, release_type: ReleaseType) -> TrackCountRange {
        match release_type {
            ReleaseType::Single => self.single,
            ReleaseType::Ep => self.ep,
            ReleaseType::Album => self.album,
            ReleaseType::Compilation => self.compilation,
        }
    }

    #[must_use]
    pub const fn is_track_count_valid(&self, release_type: ReleaseType, count: TrackCount) -> bool {
        self.range_for(release_type).contains(count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ReleaseType, TrackCountRange)> + '_ {
        <ReleaseType as strum::IntoEnumIterator>::iter()
            .map(|release_type| (release_type, self.range_for(release_type)))
    }
}

impl Default for ReleaseTypeRules {
    fn default() -> Self {
        Self {
            single: Self::DEFAULT_SINGLE,
            ep: Self::DEFAULT_EP,
            album: Self::DEFAULT_ALBUM,
            compilation: Self::DEFAULT_COMPILATION,
        }
    }
}
