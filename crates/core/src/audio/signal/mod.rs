// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use crate::{ConfigError, prelude::*};

///////////////////////////////////////////////////////////////////////
// Bitrate
///////////////////////////////////////////////////////////////////////

pub type BitsPerSecond = f64;

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct BitrateBps(BitsPerSecond);

impl BitrateBps {
    pub const UNIT_OF_MEASURE: &'static str = "bps";

    #[must_use]
    pub const fn new(inner: BitsPerSecond) -> Self {
        Self(inner)
    }

    #[must_use]
    pub fn from_kbps(kbps: u32) -> Self {
        Self(BitsPerSecond::from(kbps) * 1_000.0)
    }

    #[must_use]
    pub const fn to_inner(self) -> BitsPerSecond {
        let Self(inner) = self;
        inner
    }
}

impl fmt::Display for BitrateBps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_inner(), Self::UNIT_OF_MEASURE)
    }
}

///////////////////////////////////////////////////////////////////////
// SampleRate
///////////////////////////////////////////////////////////////////////

pub type SamplesPerSecond = f64;

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct SampleRateHz(SamplesPerSecond);

impl SampleRateHz {
    pub const UNIT_OF_MEASURE: &'static str = "Hz";

    pub const ZERO: Self = Self(0.0);
    pub const MIN: Self = Self(f64::MIN_POSITIVE);
    pub const MAX: Self = Self(192_000.0);

    pub const COMPACT_DISC: Self = Self(44_100.0);

    #[must_use]
    pub const fn new(inner: SamplesPerSecond) -> Self {
        Self(inner)
    }

    #[must_use]
    pub const fn to_inner(self) -> SamplesPerSecond {
        let Self(inner) = self;
        inner
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        <Self as IsValid>::is_valid(self)
    }
}

#[derive(Copy, Clone, Debug)]
pub enum SampleRateHzInvalidity {
    Min(SampleRateHz),
    Max(SampleRateHz),
}

impl Validate for SampleRateHz {
    type Invalidity = SampleRateHzInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(
                self.0.is_nan() || *self < Self::MIN,
                Self::Invalidity::Min(Self::MIN),
            )
            .invalidate_if(*self > Self::MAX, Self::Invalidity::Max(Self::MAX))
            .into()
    }
}

impl fmt::Display for SampleRateHz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_inner(), Self::UNIT_OF_MEASURE)
    }
}

///////////////////////////////////////////////////////////////////////
// BitDepth
///////////////////////////////////////////////////////////////////////

pub type BitsPerSample = u8;

/// Inclusive range of bits per sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitDepthRange {
    min: BitsPerSample,
    max: BitsPerSample,
}

impl BitDepthRange {
    /// 16 to 24 bits.
    pub const STUDIO: Self = Self { min: 16, max: 24 };

    pub fn try_new(min: BitsPerSample, max: BitsPerSample) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::EmptyBitDepthRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(self) -> BitsPerSample {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> BitsPerSample {
        self.max
    }

    #[must_use]
    pub const fn contains(self, bits_per_sample: BitsPerSample) -> bool {
        self.min <= bits_per_sample && bits_per_sample <= self.max
    }
}

impl fmt::Display for BitDepthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { min, max } = self;
        write!(f, "{min}-{max} bit")
    }
}
