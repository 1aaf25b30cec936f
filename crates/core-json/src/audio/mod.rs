// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use labeldesk_core::{
    ConfigError,
    audio::{
        DurationInMilliseconds, DurationMs,
        channel::{ChannelCount, NumberOfChannels},
        file::FileSize,
        signal::{BitDepthRange, BitsPerSample, SampleRateHz, SamplesPerSecond},
    },
};

use crate::prelude::*;

mod _core {
    pub(super) use labeldesk_core::audio::file::*;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BitDepth {
    pub min: BitsPerSample,
    pub max: BitsPerSample,
}

/// Rules for audio files that are offered for upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ValidationRuleSet {
    pub allowed_extensions: Vec<String>,

    /// Bytes
    pub max_file_size: FileSize,

    pub min_duration_ms: DurationInMilliseconds,

    pub required_channels: NumberOfChannels,

    pub bit_depth: BitDepth,

    pub min_sample_rate_hz: SamplesPerSecond,
}

impl From<&_core::ValidationRuleSet> for ValidationRuleSet {
    fn from(from: &_core::ValidationRuleSet) -> Self {
        let _core::ValidationRuleSet {
            allowed_extensions,
            max_file_size,
            min_duration,
            required_channels,
            bit_depth,
            min_sample_rate,
        } = from;
        Self {
            allowed_extensions: allowed_extensions.iter().map(ToString::to_string).collect(),
            max_file_size: *max_file_size,
            min_duration_ms: min_duration.to_inner(),
            required_channels: required_channels.value(),
            bit_depth: BitDepth {
                min: bit_depth.min(),
                max: bit_depth.max(),
            },
            min_sample_rate_hz: min_sample_rate.to_inner(),
        }
    }
}

impl TryFrom<ValidationRuleSet> for _core::ValidationRuleSet {
    type Error = ConfigError;

    fn try_from(from: ValidationRuleSet) -> Result<Self, Self::Error> {
        let ValidationRuleSet {
            allowed_extensions,
            max_file_size,
            min_duration_ms,
            required_channels,
            bit_depth,
            min_sample_rate_hz,
        } = from;
        let BitDepth { min, max } = bit_depth;
        let into = Self {
            allowed_extensions: allowed_extensions.into_iter().map(Into::into).collect(),
            max_file_size,
            min_duration: DurationMs::from_inner(min_duration_ms),
            required_channels: ChannelCount::new(required_channels),
            bit_depth: BitDepthRange::try_new(min, max)?,
            min_sample_rate: SampleRateHz::new(min_sample_rate_hz),
        };
        into.check()?;
        Ok(into)
    }
}
