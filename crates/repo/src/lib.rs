// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Repository traits implemented by the data access layer.

#[macro_use]
mod macros;

pub mod audio_file;
pub mod folder;
pub mod submission;
pub mod user;

pub type RecordId = i64;

pub type RecordCount = u64;

pub mod prelude {
    use thiserror::Error;

    pub use crate::RecordCount;

    pub trait RecordCollector {
        type Header;
        type Record;

        /// Collect a new element
        fn collect(&mut self, header: Self::Header, record: Self::Record);
    }

    impl<H, R> RecordCollector for Vec<(H, R)> {
        type Header = H;
        type Record = R;

        fn collect(&mut self, header: Self::Header, record: Self::Record) {
            self.push((header, record));
        }
    }

    pub trait ReservableRecordCollector: RecordCollector {
        /// Reserve additional capacity for new elements
        fn reserve(&mut self, additional: usize);
    }

    impl<H, R> ReservableRecordCollector for Vec<(H, R)> {
        fn reserve(&mut self, additional: usize) {
            Vec::reserve(self, additional);
        }
    }

    #[derive(Error, Debug)]
    pub enum RepoError {
        #[error("not found")]
        NotFound,

        #[error("conflict")]
        Conflict,

        #[error(transparent)]
        Other(#[from] anyhow::Error),
    }

    pub type RepoResult<T> = Result<T, RepoError>;

    /// Case-insensitive substring match.
    ///
    /// The `needle` is expected in lowercase.
    #[must_use]
    pub fn contains_lowercase(haystack: &str, needle: &str) -> bool {
        haystack.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests;
