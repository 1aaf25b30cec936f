// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use labeldesk_core::{AudioFile, AudioFileCandidate, AudioFileInvalidity, AudioFileValidator};
use labeldesk_repo::{
    audio_file::{EntityRepo, RecordId, SearchFilter},
    folder::RecordId as FolderId,
};

use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary<K> {
    /// Files that may be uploaded, in input order.
    pub accepted: Vec<K>,

    /// Files that must not be uploaded, in input order.
    pub rejected: Vec<(K, Vec<AudioFileInvalidity>)>,
}

impl<K> Default for Summary<K> {
    fn default() -> Self {
        Self {
            accepted: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

/// Validates the files that have been selected for upload.
///
/// Each file is checked on its own, i.e. invalid files never
/// prevent the upload of the remaining files.
pub fn validate_upload_batch<'a, K, I>(validator: &AudioFileValidator, candidates: I) -> Summary<K>
where
    I: IntoIterator<Item = (K, &'a AudioFileCandidate)>,
{
    let mut summary = Summary::default();
    for (key, invalidities) in validator.validate_batch(candidates) {
        if invalidities.is_empty() {
            summary.accepted.push(key);
        } else {
            summary.rejected.push((key, invalidities));
        }
    }
    log::debug!(
        "Validated upload batch: {num_accepted} accepted, {num_rejected} rejected",
        num_accepted = summary.accepted.len(),
        num_rejected = summary.rejected.len()
    );
    summary
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Registered(RecordId),
    Rejected(Vec<AudioFileInvalidity>),
}

/// Stores an uploaded file after validating it once more.
///
/// Rejected files are not stored.
pub fn register_upload(
    repo: &mut impl EntityRepo,
    validator: &AudioFileValidator,
    folder_id: Option<FolderId>,
    candidate: AudioFileCandidate,
    category: impl Into<String>,
) -> Result<Outcome> {
    let invalidities = validator.validate(&candidate);
    if !invalidities.is_empty() {
        log::info!(
            "Rejected upload of {file_name}: {num_invalidities} violation(s)",
            file_name = candidate.file_name,
            num_invalidities = invalidities.len()
        );
        return Ok(Outcome::Rejected(invalidities));
    }
    let audio_file = AudioFile::from_candidate(candidate, category);
    let id = repo.insert_audio_file(folder_id, &audio_file)?;
    log::debug!("Registered audio file {id}: {name}", name = audio_file.name);
    Ok(Outcome::Registered(id))
}

pub fn search(
    repo: &mut impl EntityRepo,
    filter: &SearchFilter,
) -> Result<Vec<(RecordId, AudioFile)>> {
    let mut collector = Vec::new();
    repo.search_audio_files(filter, &mut collector)?;
    Ok(collector)
}

#[cfg(test)]
mod tests;
