// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Pre-upload gatekeeping of audio files and the records of
//! accepted uploads.
//!
//! Only the metadata that is available before the upload starts is
//! inspected, i.e. the file name and the size in bytes. The content
//! related rules (duration, channels, bit depth, sample rate) are part
//! of the configuration but are applied by a later stage after the
//! file contents have been read.

use mime::Mime;
use smol_str::SmolStr;

use crate::{
    ConfigError,
    audio::{
        DurationMs,
        channel::ChannelCount,
        signal::{BitDepthRange, BitrateBps, SampleRateHz},
    },
    prelude::*,
};

pub type FileSize = u64;

const MEBIBYTE: FileSize = 1024 * 1024;

/// A file that has been selected for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioFileCandidate {
    pub file_name: String,

    /// Size in bytes
    pub size: FileSize,

    /// Declared by the client and not verified. The validation
    /// rules only look at the file name and the size.
    pub content_type: Option<Mime>,
}

impl AudioFileCandidate {
    #[must_use]
    pub fn new(file_name: impl Into<String>, size: FileSize) -> Self {
        Self {
            file_name: file_name.into(),
            size,
            content_type: None,
        }
    }

    #[must_use]
    pub fn with_content_type(self, content_type: Mime) -> Self {
        Self {
            content_type: Some(content_type),
            ..self
        }
    }

    /// The suffix after the last dot of the file name.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, extension)| extension)
            .filter(|extension| !extension.is_empty())
    }

    /// The declared content type or an `audio/*` type derived from
    /// the extension.
    #[must_use]
    pub fn content_type_or_guess(&self) -> Mime {
        if let Some(content_type) = &self.content_type {
            return content_type.clone();
        }
        self.extension()
            .and_then(|extension| {
                format!("audio/{}", extension.to_ascii_lowercase())
                    .parse()
                    .ok()
            })
            .unwrap_or(mime::APPLICATION_OCTET_STREAM)
    }
}

/// An audio file that has been uploaded.
#[derive(Clone, Debug, PartialEq)]
pub struct AudioFile {
    pub name: String,

    /// Size in bytes
    pub size: FileSize,

    pub content_type: Mime,

    /// Upper case extension, e.g. "WAV"
    pub format: SmolStr,

    /// Unknown until the contents have been analyzed.
    pub duration: Option<DurationMs>,

    pub bitrate: Option<BitrateBps>,

    pub sample_rate: Option<SampleRateHz>,

    /// Free text, usually a main category
    pub category: String,
}

impl AudioFile {
    /// An accepted upload candidate without content metadata.
    #[must_use]
    pub fn from_candidate(candidate: AudioFileCandidate, category: impl Into<String>) -> Self {
        let content_type = candidate.content_type_or_guess();
        let format = candidate
            .extension()
            .map(|extension| SmolStr::new(extension.to_ascii_uppercase()))
            .unwrap_or_default();
        let AudioFileCandidate {
            file_name,
            size,
            content_type: _,
        } = candidate;
        Self {
            name: file_name,
            size,
            content_type,
            format,
            duration: None,
            bitrate: None,
            sample_rate: None,
            category: category.into(),
        }
    }

    /// Case-insensitive substring match on name and category.
    ///
    /// An empty or blank `text` matches every file.
    #[must_use]
    pub fn matches_text(&self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return true;
        }
        let text = text.to_lowercase();
        self.name.to_lowercase().contains(&text) || self.category.to_lowercase().contains(&text)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValidationRuleSet {
    /// Matched case-insensitively, kept as configured for display.
    pub allowed_extensions: Vec<SmolStr>,

    /// Size limit in bytes (inclusive)
    pub max_file_size: FileSize,

    pub min_duration: DurationMs,

    pub required_channels: ChannelCount,

    pub bit_depth: BitDepthRange,

    pub min_sample_rate: SampleRateHz,
}

impl ValidationRuleSet {
    pub const DEFAULT_MAX_FILE_SIZE: FileSize = 100 * MEBIBYTE;

    #[must_use]
    pub fn is_allowed_extension(&self, extension: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension))
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        let Self {
            allowed_extensions,
            max_file_size,
            min_duration,
            required_channels,
            bit_depth: _,
            min_sample_rate,
        } = self;
        if allowed_extensions.is_empty() {
            return Err(ConfigError::NoAllowedExtensions);
        }
        if let Some(invalid) = allowed_extensions
            .iter()
            .find(|extension| extension.is_empty() || extension.contains('.'))
        {
            return Err(ConfigError::InvalidExtension(invalid.to_string()));
        }
        if *max_file_size == 0 {
            return Err(ConfigError::ZeroMaxFileSize);
        }
        if !min_duration.is_valid() {
            return Err(ConfigError::InvalidMinDuration(min_duration.to_string()));
        }
        if !required_channels.is_valid() {
            return Err(ConfigError::InvalidRequiredChannels(
                required_channels.value(),
            ));
        }
        if !min_sample_rate.is_valid() {
            return Err(ConfigError::InvalidMinSampleRate(
                min_sample_rate.to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ValidationRuleSet {
    fn default() -> Self {
        Self {
            allowed_extensions: vec![SmolStr::new_static("WAV"), SmolStr::new_static("FLAC")],
            max_file_size: Self::DEFAULT_MAX_FILE_SIZE,
            min_duration: DurationMs::from_secs(2),
            required_channels: ChannelCount::STEREO,
            bit_depth: BitDepthRange::STUDIO,
            min_sample_rate: SampleRateHz::COMPACT_DISC,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioFileInvalidity {
    #[display("UNSUPPORTED_FORMAT")]
    UnsupportedFormat { allowed_extensions: Vec<SmolStr> },

    #[display("FILE_TOO_LARGE")]
    FileTooLarge { max_file_size: FileSize },
}

impl AudioFileInvalidity {
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.into()
    }
}

/// Checks upload candidates against an immutable [`ValidationRuleSet`].
#[derive(Clone, Debug)]
pub struct AudioFileValidator {
    rule_set: ValidationRuleSet,
}

impl AudioFileValidator {
    pub fn try_new(rule_set: ValidationRuleSet) -> Result<Self, ConfigError> {
        rule_set.check()?;
        Ok(Self { rule_set })
    }

    #[must_use]
    pub const fn rule_set(&self) -> &ValidationRuleSet {
        &self.rule_set
    }

    /// Evaluates all rules, the extension rule first.
    pub fn validate_candidate(
        &self,
        candidate: &AudioFileCandidate,
    ) -> ValidationResult<AudioFileInvalidity> {
        let ValidationRuleSet {
            allowed_extensions,
            max_file_size,
            ..
        } = &self.rule_set;
        let supported = candidate
            .extension()
            .is_some_and(|extension| self.rule_set.is_allowed_extension(extension));
        let mut context = ValidationContext::new();
        if !supported {
            context = context.invalidate(AudioFileInvalidity::UnsupportedFormat {
                allowed_extensions: allowed_extensions.clone(),
            });
        }
        context
            .invalidate_if(
                candidate.size > *max_file_size,
                AudioFileInvalidity::FileTooLarge {
                    max_file_size: *max_file_size,
                },
            )
            .into()
    }

    /// All violations of a single candidate, empty if valid.
    #[must_use]
    pub fn validate(&self, candidate: &AudioFileCandidate) -> Vec<AudioFileInvalidity> {
        collect_invalidities(self.validate_candidate(candidate))
    }

    /// Validates each candidate independently.
    ///
    /// The results keep the order of the input.
    pub fn validate_batch<'a, K, I>(&self, candidates: I) -> Vec<(K, Vec<AudioFileInvalidity>)>
    where
        I: IntoIterator<Item = (K, &'a AudioFileCandidate)>,
    {
        candidates
            .into_iter()
            .map(|(key, candidate)| (key, self.validate(candidate)))
            .collect()
    }
}
