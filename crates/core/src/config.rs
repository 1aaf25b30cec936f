// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use thiserror::Error;

use crate::release::ReleaseType;

/// Inconsistent rule tables detected while loading the configuration.
///
/// These are deployment errors and must abort the startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no track count range configured for release type {0}")]
    MissingReleaseType(ReleaseType),

    #[error("track count range of release type {release_type} is empty: {min} > {max}")]
    EmptyTrackCountRange {
        release_type: ReleaseType,
        min: usize,
        max: usize,
    },

    #[error("empty main category name")]
    EmptyMainCategory,

    #[error("duplicate main category \"{0}\"")]
    DuplicateMainCategory(String),

    #[error("main category \"{0}\" has no subcategories")]
    NoSubcategories(String),

    #[error("main category \"{0}\" contains an empty subcategory")]
    EmptySubcategory(String),

    #[error("duplicate subcategory \"{sub_category}\" in main category \"{main_category}\"")]
    DuplicateSubcategory {
        main_category: String,
        sub_category: String,
    },

    #[error("no allowed file extensions")]
    NoAllowedExtensions,

    #[error("invalid file extension \"{0}\"")]
    InvalidExtension(String),

    #[error("maximum file size must be positive")]
    ZeroMaxFileSize,

    #[error("invalid minimum duration: {0}")]
    InvalidMinDuration(String),

    #[error("invalid number of required channels: {0}")]
    InvalidRequiredChannels(u16),

    #[error("invalid minimum sample rate: {0}")]
    InvalidMinSampleRate(String),

    #[error("bit depth range is empty: {min} > {max}")]
    EmptyBitDepthRange { min: u8, max: u8 },
}
