// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use labeldesk_core::User;
use labeldesk_repo::user::{EntityRepo, RecordId, SearchFilter};

use super::*;

pub fn search(repo: &mut impl EntityRepo, filter: &SearchFilter) -> Result<Vec<(RecordId, User)>> {
    let mut collector = Vec::new();
    repo.search_users(filter, &mut collector)?;
    Ok(collector)
}

#[cfg(test)]
mod tests;
