// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

/// A named folder for organizing uploaded audio files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Folder {
    name: String,
}

impl Folder {
    /// Trims the name.
    ///
    /// Returns `None` if nothing remains.
    #[must_use]
    pub fn try_new(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_owned(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests;
