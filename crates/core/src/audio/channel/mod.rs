// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use semval::prelude::*;

///////////////////////////////////////////////////////////////////////
// ChannelCount
///////////////////////////////////////////////////////////////////////

pub type NumberOfChannels = u16;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, derive_more::Display)]
#[repr(transparent)]
pub struct ChannelCount(NumberOfChannels);

impl ChannelCount {
    pub const ZERO: Self = Self(0);
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(u16::MAX);

    pub const MONO: Self = Self(1);
    pub const STEREO: Self = Self(2);

    #[must_use]
    pub const fn new(value: NumberOfChannels) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> NumberOfChannels {
        let Self(value) = self;
        value
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        <Self as IsValid>::is_valid(self)
    }
}

#[derive(Copy, Clone, Debug)]
pub enum ChannelCountInvalidity {
    Min(ChannelCount),
    Max(ChannelCount),
}

impl Validate for ChannelCount {
    type Invalidity = ChannelCountInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(*self < Self::MIN, Self::Invalidity::Min(Self::MIN))
            .invalidate_if(*self > Self::MAX, Self::Invalidity::Max(Self::MAX))
            .into()
    }
}

#[cfg(test)]
mod tests;
