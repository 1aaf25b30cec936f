// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::prelude::*;

#[test]
fn collect_into_vec() {
    let mut collector: Vec<(i64, &str)> = Vec::new();
    ReservableRecordCollector::reserve(&mut collector, 2);
    collector.collect(1, "first");
    collector.collect(2, "second");
    assert_eq!(vec![(1, "first"), (2, "second")], collector);
}
