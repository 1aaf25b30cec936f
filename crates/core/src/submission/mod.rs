// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use jiff::civil::Date;
use smol_str::SmolStr;
use strum::{Display, EnumIter, IntoEnumIterator as _, IntoStaticStr};

use crate::{
    audio::{
        DurationMs,
        signal::{BitrateBps, SampleRateHz},
    },
    category::CategoryCatalog,
    prelude::*,
    release::{ReleaseType, ReleaseTypeRules, TrackCount, TrackCountRange},
};

mod status;
pub use self::status::SubmissionStatus;

///////////////////////////////////////////////////////////////////////
// Track
///////////////////////////////////////////////////////////////////////

pub type TrackNumber = u16;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Track {
    pub track_number: TrackNumber,

    pub title: String,

    pub artist: String,

    pub file_path: String,

    pub duration: DurationMs,

    /// International Standard Recording Code
    pub isrc: Option<String>,

    /// Audio format, e.g. "WAV"
    pub format: SmolStr,

    pub bitrate: BitrateBps,

    pub sample_rate: SampleRateHz,
}

///////////////////////////////////////////////////////////////////////
// Submission
///////////////////////////////////////////////////////////////////////

/// A release on its way from draft to publication.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Submission {
    pub title: String,

    pub artist: String,

    pub album_name: Option<String>,

    /// Universal Product Code
    pub upc: Option<String>,

    pub release_type: ReleaseType,

    pub release_date: Option<Date>,

    pub main_category: String,

    pub sub_category: String,

    pub tracks: Vec<Track>,

    pub status: SubmissionStatus,
}

/// Text fields that must not be empty or only contain whitespace.
fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn replace_if_changed<T: PartialEq>(target: &mut T, value: T) -> bool {
    if *target == value {
        return false;
    }
    *target = value;
    true
}

impl Submission {
    /// A new draft without tracks.
    #[must_use]
    pub fn new_draft(
        title: impl Into<String>,
        artist: impl Into<String>,
        release_type: ReleaseType,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            release_type,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn track_count(&self) -> TrackCount {
        self.tracks.len()
    }

    #[must_use]
    pub fn is_missing(&self, field: RequiredField) -> bool {
        match field {
            RequiredField::Title => is_blank(&self.title),
            RequiredField::Artist => is_blank(&self.artist),
            RequiredField::MainCategory => is_blank(&self.main_category),
            RequiredField::SubCategory => is_blank(&self.sub_category),
            RequiredField::ReleaseDate => self.release_date.is_none(),
        }
    }

    /// Required fields that are still missing, in display order.
    pub fn missing_required_fields(&self) -> impl Iterator<Item = RequiredField> + '_ {
        RequiredField::iter().filter(|field| self.is_missing(*field))
    }

    #[must_use]
    pub fn has_required_fields(&self) -> bool {
        self.missing_required_fields().next().is_none()
    }

    /// Applies a single field update.
    ///
    /// Returns `true` if the submission has been modified. Selecting a
    /// different main category resets the sub category, which must then
    /// be chosen again from the subcategories of the new main category.
    pub fn apply(&mut self, update: SubmissionUpdate) -> bool {
        match update {
            SubmissionUpdate::Title(title) => replace_if_changed(&mut self.title, title),
            SubmissionUpdate::Artist(artist) => replace_if_changed(&mut self.artist, artist),
            SubmissionUpdate::AlbumName(album_name) => {
                replace_if_changed(&mut self.album_name, album_name)
            }
            SubmissionUpdate::Upc(upc) => replace_if_changed(&mut self.upc, upc),
            SubmissionUpdate::ReleaseType(release_type) => {
                replace_if_changed(&mut self.release_type, release_type)
            }
            SubmissionUpdate::ReleaseDate(release_date) => {
                replace_if_changed(&mut self.release_date, release_date)
            }
            SubmissionUpdate::MainCategory(main_category) => {
                if !replace_if_changed(&mut self.main_category, main_category) {
                    return false;
                }
                self.sub_category.clear();
                true
            }
            SubmissionUpdate::SubCategory(sub_category) => {
                replace_if_changed(&mut self.sub_category, sub_category)
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, Display, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum RequiredField {
    Title,
    Artist,
    MainCategory,
    SubCategory,
    ReleaseDate,
}

/// Typed update of a single editable field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionUpdate {
    Title(String),
    Artist(String),
    AlbumName(Option<String>),
    Upc(Option<String>),
    ReleaseType(ReleaseType),
    ReleaseDate(Option<Date>),
    MainCategory(String),
    SubCategory(String),
}

///////////////////////////////////////////////////////////////////////
// Validation
///////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionInvalidity {
    #[display("MISSING_FIELD:{_0}")]
    MissingField(RequiredField),

    #[display("INVALID_CATEGORY_PAIR")]
    InvalidCategoryPair,

    #[display("TRACK_COUNT_OUT_OF_RANGE")]
    TrackCountOutOfRange {
        expected: TrackCountRange,
        actual: TrackCount,
    },
}

impl SubmissionInvalidity {
    /// The code without any parameters.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.into()
    }
}

/// Checks if a submission may leave the draft state.
#[derive(Clone, Copy, Debug)]
pub struct SubmissionValidator<'a> {
    categories: &'a CategoryCatalog,
    release_types: &'a ReleaseTypeRules,
}

impl<'a> SubmissionValidator<'a> {
    #[must_use]
    pub const fn new(categories: &'a CategoryCatalog, release_types: &'a ReleaseTypeRules) -> Self {
        Self {
            categories,
            release_types,
        }
    }

    #[must_use]
    pub const fn categories(&self) -> &'a CategoryCatalog {
        self.categories
    }

    #[must_use]
    pub const fn release_types(&self) -> &'a ReleaseTypeRules {
        self.release_types
    }

    /// Evaluates all rules in a fixed order: required fields,
    /// category pair, track count.
    pub fn validate_submission(
        &self,
        submission: &Submission,
    ) -> ValidationResult<SubmissionInvalidity> {
        let mut context = submission
            .missing_required_fields()
            .fold(ValidationContext::new(), |context, field| {
                context.invalidate(SubmissionInvalidity::MissingField(field))
            });
        context = context.invalidate_if(
            !self
                .categories
                .is_valid_pair(&submission.main_category, &submission.sub_category),
            SubmissionInvalidity::InvalidCategoryPair,
        );
        let actual = submission.track_count();
        if !self
            .release_types
            .is_track_count_valid(submission.release_type, actual)
        {
            let expected = self.release_types.range_for(submission.release_type);
            context = context
                .invalidate(SubmissionInvalidity::TrackCountOutOfRange { expected, actual });
        }
        context.into()
    }

    #[must_use]
    pub fn validate_for_submission(&self, submission: &Submission) -> Vec<SubmissionInvalidity> {
        collect_invalidities(self.validate_submission(submission))
    }

    #[must_use]
    pub fn is_acceptable_for_submission(&self, submission: &Submission) -> bool {
        self.validate_submission(submission).is_ok()
    }
}

#[cfg(test)]
mod tests;
