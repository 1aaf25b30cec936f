// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn channel_count_default() {
    assert_eq!(ChannelCount::ZERO, ChannelCount::default());
    assert!(ChannelCount::default().validate().is_err());
}

#[test]
fn channel_count_minmax() {
    assert!(ChannelCount::MIN.validate().is_ok());
    assert!(ChannelCount::MAX.validate().is_ok());
}

#[test]
fn stereo() {
    assert_eq!(2, ChannelCount::STEREO.value());
    assert!(ChannelCount::STEREO.is_valid());
    assert_eq!("2", ChannelCount::STEREO.to_string());
}
