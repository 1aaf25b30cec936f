// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(unreachable_pub)]
#![warn(unsafe_code)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(clippy::pedantic)]
// Additional restrictions
#![warn(clippy::clone_on_ref_ptr)]
#![warn(clippy::self_named_module_files)]
// Repetitions of module/type names occur frequently when using many
// modules for keeping the size of the source files handy. Often
// types have the same name as their parent module.
#![allow(clippy::module_name_repetitions)]
// Using wildcard imports consciously is acceptable.
#![allow(clippy::wildcard_imports)]
// Importing all enum variants into a narrow, local scope is acceptable.
#![allow(clippy::enum_glob_use)]

pub mod audio;
pub mod category;
pub mod folder;
pub mod release;
pub mod submission;
pub mod user;

mod config;
pub use self::config::ConfigError;

pub use self::{
    audio::file::{
        AudioFile, AudioFileCandidate, AudioFileInvalidity, AudioFileValidator, ValidationRuleSet,
    },
    category::CategoryCatalog,
    folder::Folder,
    release::{ReleaseType, ReleaseTypeRules, TrackCountRange},
    submission::{
        RequiredField, Submission, SubmissionInvalidity, SubmissionStatus, SubmissionUpdate,
        SubmissionValidator, Track,
    },
    user::{User, UserRole},
};

pub mod prelude {
    pub(crate) use semval::prelude::*;
    // Re-export trait methods from semval
    pub use semval::{IsValid, Validate as _};

    pub use crate::collect_invalidities;
}

/// Flattens a validation result into the ordered list of invalidities.
///
/// The order is the order in which the rules were evaluated.
#[must_use]
pub fn collect_invalidities<V: semval::Invalidity>(
    result: semval::prelude::ValidationResult<V>,
) -> Vec<V> {
    result
        .map_err(|err| err.into_iter().collect::<Vec<_>>())
        .err()
        .unwrap_or_default()
}
