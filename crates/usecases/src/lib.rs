// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

#![cfg_attr(not(test), deny(clippy::panic_in_result_fn))]

use std::result::Result as StdResult;

use labeldesk_core::SubmissionStatus;
use labeldesk_repo::prelude::*;
use thiserror::Error;

pub mod audio_file;
pub mod dashboard;
pub mod folder;
pub mod submission;
pub mod user;

#[derive(Error, Debug)]
#[error(transparent)]
pub struct InputError(#[from] pub anyhow::Error);

pub type InputResult<T> = StdResult<T, InputError>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("impermissible status transition: {from} -> {to}")]
    Transition {
        from: SubmissionStatus,
        to: SubmissionStatus,
    },

    #[error(transparent)]
    Repository(#[from] RepoError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = StdResult<T, Error>;
