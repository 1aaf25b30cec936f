// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use labeldesk_core::Folder;

use crate::prelude::*;

record_id_newtype!(RecordId);

pub trait EntityRepo {
    /// Creates a folder, either top-level or below `parent_id`.
    ///
    /// Fails with [`RepoError::NotFound`] if the parent does not exist.
    fn insert_folder(
        &mut self,
        parent_id: Option<RecordId>,
        folder: &Folder,
    ) -> RepoResult<RecordId>;

    /// Collects the direct children of `parent_id` or the top-level
    /// folders, in insertion order.
    fn load_folders(
        &mut self,
        parent_id: Option<RecordId>,
        collector: &mut dyn ReservableRecordCollector<Header = RecordId, Record = Folder>,
    ) -> RepoResult<()>;
}
