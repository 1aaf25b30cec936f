// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use labeldesk_core::{Submission, SubmissionInvalidity, SubmissionUpdate, SubmissionValidator};
use labeldesk_repo::submission::{EntityRepo, RecordId, SearchFilter};

use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The submission already has the requested status.
    Unchanged,

    Updated(SubmissionStatus),

    /// The submission may not leave the draft state yet.
    Rejected(Vec<SubmissionInvalidity>),
}

#[must_use]
pub fn validate_for_submission(
    validator: &SubmissionValidator<'_>,
    submission: &Submission,
) -> Vec<SubmissionInvalidity> {
    validator.validate_for_submission(submission)
}

/// Checks the fields that are required for creating a new draft.
pub fn validate_input(submission: &Submission) -> InputResult<()> {
    let missing_fields = submission
        .missing_required_fields()
        .map(|field| field.to_string())
        .collect::<Vec<_>>();
    if missing_fields.is_empty() {
        return Ok(());
    }
    Err(anyhow::anyhow!("Missing required fields: {}", missing_fields.join(", ")).into())
}

pub fn create_draft(repo: &mut impl EntityRepo, mut submission: Submission) -> Result<RecordId> {
    validate_input(&submission)?;
    submission.status = SubmissionStatus::Draft;
    let id = repo.insert_submission(&submission)?;
    log::debug!("Created draft submission {id}: {title}", title = submission.title);
    Ok(id)
}

/// Applies field updates to an editable submission.
///
/// Returns `true` if the stored submission has been modified.
pub fn update_fields(
    repo: &mut impl EntityRepo,
    id: RecordId,
    updates: impl IntoIterator<Item = SubmissionUpdate>,
) -> Result<bool> {
    let mut submission = repo.load_submission(id)?;
    if !submission.status.is_editable() {
        return Err(InputError(anyhow::anyhow!(
            "Submission {id} is not editable in status {status}",
            status = submission.status
        ))
        .into());
    }
    let mut modified = false;
    for update in updates {
        modified |= submission.apply(update);
    }
    if !modified {
        return Ok(false);
    }
    repo.update_submission(id, &submission)?;
    Ok(true)
}

pub fn update_status(
    repo: &mut impl EntityRepo,
    validator: &SubmissionValidator<'_>,
    id: RecordId,
    next_status: SubmissionStatus,
) -> Result<Outcome> {
    let submission = repo.load_submission(id)?;
    let status = submission.status;
    if status == next_status {
        return Ok(Outcome::Unchanged);
    }
    if !status.can_transition_to(next_status) {
        return Err(Error::Transition {
            from: status,
            to: next_status,
        });
    }
    if status.requires_validation(next_status) {
        let invalidities = validator.validate_for_submission(&submission);
        if !invalidities.is_empty() {
            log::debug!(
                "Submission {id} cannot leave status {status}: {num_invalidities} violation(s)",
                num_invalidities = invalidities.len()
            );
            return Ok(Outcome::Rejected(invalidities));
        }
    }
    repo.update_submission_status(id, next_status)
        .inspect_err(|err| {
            log::warn!("Failed to update status of submission {id}: {err}");
        })?;
    log::debug!("Updated status of submission {id}: {status} -> {next_status}");
    Ok(Outcome::Updated(next_status))
}

pub fn search(
    repo: &mut impl EntityRepo,
    filter: &SearchFilter,
) -> Result<Vec<(RecordId, Submission)>> {
    let mut collector = Vec::new();
    repo.search_submissions(filter, &mut collector)?;
    Ok(collector)
}
