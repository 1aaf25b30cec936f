// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Release submission and audio upload validation for music labels.
//!
//! The rule tables and validators of `labeldesk-core` are re-exported
//! at the top level. All other sub-crates are available behind features.

pub use labeldesk_core::*;

#[cfg(feature = "json")]
pub use labeldesk_core_json as core_json;

#[cfg(feature = "repo")]
pub use labeldesk_repo as repo;

#[cfg(feature = "settings")]
pub use labeldesk_settings as settings;

#[cfg(feature = "usecases")]
pub use labeldesk_usecases as usecases;
