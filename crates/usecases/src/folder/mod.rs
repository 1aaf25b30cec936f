// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use labeldesk_core::Folder;
use labeldesk_repo::folder::{EntityRepo, RecordId};

use super::*;

/// Creates a new folder with the trimmed `name`.
///
/// Blank names are rejected.
pub fn create(
    repo: &mut impl EntityRepo,
    parent_id: Option<RecordId>,
    name: &str,
) -> Result<RecordId> {
    let folder = Folder::try_new(name)
        .ok_or_else(|| InputError(anyhow::anyhow!("Missing folder name")))?;
    let id = repo.insert_folder(parent_id, &folder)?;
    log::debug!("Created folder {id}: {name}", name = folder.name());
    Ok(id)
}

pub fn load_children(
    repo: &mut impl EntityRepo,
    parent_id: Option<RecordId>,
) -> Result<Vec<(RecordId, Folder)>> {
    let mut collector = Vec::new();
    repo.load_folders(parent_id, &mut collector)?;
    Ok(collector)
}
