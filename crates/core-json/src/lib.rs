// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Serializable mirrors of the configuration tables and violation
//! reports of `labeldesk-core`.
//!
//! Conversions into the core types are fallible and fail with
//! [`labeldesk_core::ConfigError`] if the decoded tables are inconsistent.

pub mod prelude {
    pub(crate) use serde::{Deserialize, Serialize};
}

pub mod audio;
pub mod category;
pub mod release;
pub mod violation;

pub use self::violation::Violation;
