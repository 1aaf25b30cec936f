// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use labeldesk_core::{Submission, SubmissionStatus};

use crate::prelude::*;

record_id_newtype!(RecordId);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub status: Option<SubmissionStatus>,

    /// Matched case-insensitively against title and artist.
    pub text: Option<String>,
}

impl SearchFilter {
    #[must_use]
    pub fn matches(&self, submission: &Submission) -> bool {
        let Self { status, text } = self;
        if status.is_some_and(|status| status != submission.status) {
            return false;
        }
        let Some(text) = text.as_deref().map(str::trim).filter(|text| !text.is_empty()) else {
            return true;
        };
        let needle = text.to_lowercase();
        contains_lowercase(&submission.title, &needle)
            || contains_lowercase(&submission.artist, &needle)
    }
}

pub trait EntityRepo {
    fn insert_submission(&mut self, submission: &Submission) -> RepoResult<RecordId>;

    fn load_submission(&mut self, id: RecordId) -> RepoResult<Submission>;

    /// Replaces the stored submission, including its status.
    fn update_submission(&mut self, id: RecordId, submission: &Submission) -> RepoResult<()>;

    fn update_submission_status(
        &mut self,
        id: RecordId,
        status: SubmissionStatus,
    ) -> RepoResult<()>;

    /// Collects the matching submissions in insertion order.
    fn search_submissions(
        &mut self,
        filter: &SearchFilter,
        collector: &mut dyn ReservableRecordCollector<Header = RecordId, Record = Submission>,
    ) -> RepoResult<()>;

    fn count_submissions(&mut self, status: Option<SubmissionStatus>) -> RepoResult<RecordCount>;

    /// Total number of tracks over all submissions.
    fn count_tracks(&mut self) -> RepoResult<RecordCount>;
}
