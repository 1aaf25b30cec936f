// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use labeldesk_core::ConfigError;

use crate::prelude::*;

mod _core {
    pub(super) use labeldesk_core::release::*;
}

///////////////////////////////////////////////////////////////////////
// ReleaseType
///////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReleaseType {
    Single,
    Ep,
    Album,
    Compilation,
}

impl From<_core::ReleaseType> for ReleaseType {
    fn from(from: _core::ReleaseType) -> Self {
        use _core::ReleaseType::*;
        match from {
            Single => Self::Single,
            Ep => Self::Ep,
            Album => Self::Album,
            Compilation => Self::Compilation,
        }
    }
}

impl From<ReleaseType> for _core::ReleaseType {
    fn from(from: ReleaseType) -> Self {
        use ReleaseType::*;
        match from {
            Single => Self::Single,
            Ep => Self::Ep,
            Album => Self::Album,
            Compilation => Self::Compilation,
        }
    }
}

///////////////////////////////////////////////////////////////////////
// TrackCountRange
///////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackCountRange {
    pub min: _core::TrackCount,
    pub max: _core::TrackCount,
}

impl From<_core::TrackCountRange> for TrackCountRange {
    fn from(from: _core::TrackCountRange) -> Self {
        let _core::TrackCountRange { min, max } = from;
        Self { min, max }
    }
}

impl From<TrackCountRange> for _core::TrackCountRange {
    fn from(from: TrackCountRange) -> Self {
        let TrackCountRange { min, max } = from;
        Self::new(min, max)
    }
}

///////////////////////////////////////////////////////////////////////
// ReleaseTypeRules
///////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReleaseTypeRule {
    pub release_type: ReleaseType,

    pub track_count: TrackCountRange,
}

pub type ReleaseTypeRules = Vec<ReleaseTypeRule>;

pub fn try_into_rules(from: ReleaseTypeRules) -> Result<_core::ReleaseTypeRules, ConfigError> {
    _core::ReleaseTypeRules::try_from_ranges(from.into_iter().map(|rule| {
        let ReleaseTypeRule {
            release_type,
            track_count,
        } = rule;
        (release_type.into(), track_count.into())
    }))
}

#[must_use]
pub fn from_rules(from: &_core::ReleaseTypeRules) -> ReleaseTypeRules {
    from.iter()
        .map(|(release_type, track_count)| ReleaseTypeRule {
            release_type: release_type.into(),
            track_count: track_count.into(),
        })
        .collect()
}
