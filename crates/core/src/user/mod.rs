// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use strum::{Display, EnumIter, FromRepr, IntoStaticStr};

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
pub enum UserRole {
    #[default]
    Composer = 0,
    Producer = 1,
    Performer = 2,
    LabelManager = 3,
    Administrator = 4,
}

impl UserRole {
    /// Roles that may move submissions through review.
    #[must_use]
    pub const fn is_staff(self) -> bool {
        matches!(self, Self::LabelManager | Self::Administrator)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct User {
    pub email: String,

    pub username: String,

    pub display_name: String,

    pub role: UserRole,
}

impl User {
    /// Case-insensitive substring match on display name, username
    /// and email.
    ///
    /// An empty or blank `text` matches every user.
    #[must_use]
    pub fn matches_text(&self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return true;
        }
        let text = text.to_lowercase();
        let Self {
            email,
            username,
            display_name,
            role: _,
        } = self;
        [display_name, username, email]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&text))
    }
}
