// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use labeldesk_core::{
    AudioFileInvalidity, SubmissionInvalidity, audio::file::FileSize, release::TrackCount,
};

use crate::{prelude::*, release::TrackCountRange};

/// A single rule failure, tagged with its code.
///
/// The parameters are kept typed for rendering localized messages.
///
/// The code never contains parameters. A missing field is encoded as
/// `{"code":"MISSING_FIELD","field":"title"}` while the `Display`
/// representation of the core type reads `MISSING_FIELD:title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "code",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Violation {
    MissingField {
        field: String,
    },
    InvalidCategoryPair,
    TrackCountOutOfRange {
        expected: TrackCountRange,
        actual: TrackCount,
    },
    UnsupportedFormat {
        allowed_extensions: Vec<String>,
    },
    FileTooLarge {
        max_file_size: FileSize,
    },
}

impl From<SubmissionInvalidity> for Violation {
    fn from(from: SubmissionInvalidity) -> Self {
        match from {
            SubmissionInvalidity::MissingField(field) => Self::MissingField {
                field: field.to_string(),
            },
            SubmissionInvalidity::InvalidCategoryPair => Self::InvalidCategoryPair,
            SubmissionInvalidity::TrackCountOutOfRange { expected, actual } => {
                Self::TrackCountOutOfRange {
                    expected: expected.into(),
                    actual,
                }
            }
        }
    }
}

impl From<AudioFileInvalidity> for Violation {
    fn from(from: AudioFileInvalidity) -> Self {
        match from {
            AudioFileInvalidity::UnsupportedFormat { allowed_extensions } => {
                Self::UnsupportedFormat {
                    allowed_extensions: allowed_extensions
                        .iter()
                        .map(ToString::to_string)
                        .collect(),
                }
            }
            AudioFileInvalidity::FileTooLarge { max_file_size } => {
                Self::FileTooLarge { max_file_size }
            }
        }
    }
}

pub fn from_invalidities<T>(invalidities: impl IntoIterator<Item = T>) -> Vec<Violation>
where
    T: Into<Violation>,
{
    invalidities.into_iter().map(Into::into).collect()
}
