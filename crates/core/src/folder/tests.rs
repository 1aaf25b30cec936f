// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn name_is_trimmed() {
    let folder = Folder::try_new("  Demo Tracks \n").unwrap();
    assert_eq!("Demo Tracks", folder.name());
}

#[test]
fn blank_name_is_rejected() {
    assert_eq!(None, Folder::try_new(""));
    assert_eq!(None, Folder::try_new(" \t "));
}
