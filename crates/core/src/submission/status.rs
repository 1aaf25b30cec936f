// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use strum::{Display, EnumIter, FromRepr, IntoStaticStr};

/// Workflow state of a submission.
///
/// ```text
/// DRAFT -> PENDING -> REVIEW -> APPROVED -> PUBLISHED
///                          \-> REJECTED
/// ```
///
/// Every state may return to DRAFT for editing and resubmission.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    FromRepr,
    EnumIter,
    Display,
    IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum SubmissionStatus {
    #[default]
    Draft = 0,
    Pending = 1,
    Review = 2,
    Approved = 3,
    Rejected = 4,
    Published = 5,
}

impl SubmissionStatus {
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        use SubmissionStatus::*;
        match self {
            Draft => matches!(next, Draft | Pending),
            Pending => matches!(next, Draft | Review),
            Review => matches!(next, Draft | Approved | Rejected),
            Approved => matches!(next, Draft | Published),
            Rejected | Published => matches!(next, Draft),
        }
    }

    /// Leaving the draft state requires a submission without
    /// any violations. All other transitions are not gated.
    #[must_use]
    pub const fn requires_validation(self, next: Self) -> bool {
        matches!((self, next), (Self::Draft, Self::Pending))
    }

    #[must_use]
    pub const fn is_editable(self) -> bool {
        matches!(self, Self::Draft)
    }

    #[must_use]
    pub const fn is_awaiting_approval(self) -> bool {
        matches!(self, Self::Pending)
    }
}
