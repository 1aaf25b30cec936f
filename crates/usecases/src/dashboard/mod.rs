// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use strum::IntoEnumIterator as _;

use labeldesk_repo::{
    audio_file::EntityRepo as AudioFileRepo, submission::EntityRepo as SubmissionRepo,
};

use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_submissions: RecordCount,

    /// Submissions that are waiting for a decision of the label.
    pub pending_approvals: RecordCount,

    pub total_tracks: RecordCount,

    pub total_files: RecordCount,
}

pub fn load_stats<Repo>(repo: &mut Repo) -> Result<DashboardStats>
where
    Repo: SubmissionRepo + AudioFileRepo,
{
    let total_submissions = repo.count_submissions(None)?;
    let pending_approvals = SubmissionStatus::iter()
        .filter(|status| status.is_awaiting_approval())
        .map(|status| repo.count_submissions(Some(status)))
        .sum::<RepoResult<RecordCount>>()?;
    let total_tracks = repo.count_tracks()?;
    let total_files = repo.count_audio_files()?;
    Ok(DashboardStats {
        total_submissions,
        pending_approvals,
        total_tracks,
        total_files,
    })
}
