// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use labeldesk_core::{User, UserRole};

use crate::prelude::*;

record_id_newtype!(RecordId);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub role: Option<UserRole>,

    /// Matched case-insensitively against display name, username and email.
    pub text: Option<String>,
}

impl SearchFilter {
    #[must_use]
    pub fn matches(&self, user: &User) -> bool {
        let Self { role, text } = self;
        if role.is_some_and(|role| role != user.role) {
            return false;
        }
        text.as_deref().is_none_or(|text| user.matches_text(text))
    }
}

pub trait EntityRepo {
    fn insert_user(&mut self, user: &User) -> RepoResult<RecordId>;

    /// Collects the matching users in insertion order.
    fn search_users(
        &mut self,
        filter: &SearchFilter,
        collector: &mut dyn ReservableRecordCollector<Header = RecordId, Record = User>,
    ) -> RepoResult<()>;
}
