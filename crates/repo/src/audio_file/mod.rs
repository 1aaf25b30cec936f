// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use labeldesk_core::AudioFile;

use crate::{folder::RecordId as FolderId, prelude::*};

record_id_newtype!(RecordId);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    /// Matched case-insensitively against name and category.
    pub text: Option<String>,
}

impl SearchFilter {
    #[must_use]
    pub fn matches(&self, audio_file: &AudioFile) -> bool {
        let Self { text } = self;
        text.as_deref().is_none_or(|text| audio_file.matches_text(text))
    }
}

/// Uploaded audio files.
pub trait EntityRepo {
    fn insert_audio_file(
        &mut self,
        folder_id: Option<FolderId>,
        audio_file: &AudioFile,
    ) -> RepoResult<RecordId>;

    /// Collects the matching files in insertion order.
    fn search_audio_files(
        &mut self,
        filter: &SearchFilter,
        collector: &mut dyn ReservableRecordCollector<Header = RecordId, Record = AudioFile>,
    ) -> RepoResult<()>;

    fn count_audio_files(&mut self) -> RepoResult<RecordCount>;
}
