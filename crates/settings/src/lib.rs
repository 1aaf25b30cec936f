// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use labeldesk_core::{
    AudioFileValidator, CategoryCatalog, ConfigError, ReleaseTypeRules, SubmissionValidator,
};
use labeldesk_core_json::{
    audio::ValidationRuleSet,
    category::{self, Catalog},
    release::{self, ReleaseTypeRules as ReleaseTypeRuleList},
};

pub const FILE_NAME: &str = "labeldesk_settings";

pub const FILE_SUFFIX: &str = "ron";

/// The persistent rule configuration.
///
/// Sections that are missing in the file are filled with
/// the built-in defaults. Unknown sections are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Main categories with their subcategories, in display order.
    pub categories: Catalog,

    /// Track count range per release type.
    pub release_types: ReleaseTypeRuleList,

    /// Pre-upload checks for audio files.
    pub audio_rules: ValidationRuleSet,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            categories: category::from_catalog(&CategoryCatalog::default()),
            release_types: release::from_rules(&ReleaseTypeRules::default()),
            audio_rules: (&labeldesk_core::ValidationRuleSet::default()).into(),
        }
    }
}

impl Settings {
    pub fn load(parent_dir: &Path) -> anyhow::Result<Settings> {
        let file_path = new_settings_file_path(parent_dir.to_path_buf());
        log::info!("Loading settings from file: {}", file_path.display());
        match fs::read_to_string(&file_path) {
            Ok(text) => ron::from_str(&text).map_err(Into::into),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Ok(Default::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, parent_dir: &Path) -> anyhow::Result<()> {
        let file_path = new_settings_file_path(parent_dir.to_path_buf());
        log::info!("Saving current settings into file: {}", file_path.display());
        let text = ron::ser::to_string_pretty(self, Default::default())?;
        if let Some(parent_path) = file_path.parent() {
            fs::create_dir_all(parent_path)?;
        }
        fs::write(&file_path, text)?;
        Ok(())
    }

    /// Checks the tables and converts them into the immutable rules.
    pub fn try_into_rules(self) -> Result<Rules, ConfigError> {
        let Self {
            categories,
            release_types,
            audio_rules,
        } = self;
        let categories = category::try_into_catalog(categories)?;
        let release_types = release::try_into_rules(release_types)?;
        let audio_file_validator = AudioFileValidator::try_new(audio_rules.try_into()?)?;
        Ok(Rules {
            categories,
            release_types,
            audio_file_validator,
        })
    }
}

#[must_use]
fn new_settings_file_path(parent_dir: PathBuf) -> PathBuf {
    let mut path_buf = parent_dir;
    path_buf.push(FILE_NAME);
    path_buf.set_extension(FILE_SUFFIX);
    path_buf
}

/// Immutable rule tables, loaded once at startup and passed into
/// the validators.
#[derive(Debug, Clone)]
pub struct Rules {
    pub categories: CategoryCatalog,

    pub release_types: ReleaseTypeRules,

    pub audio_file_validator: AudioFileValidator,
}

impl Rules {
    #[must_use]
    pub const fn submission_validator(&self) -> SubmissionValidator<'_> {
        SubmissionValidator::new(&self.categories, &self.release_types)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            categories: Default::default(),
            release_types: Default::default(),
            audio_file_validator: AudioFileValidator::try_new(Default::default())
                .expect("valid default audio rules"),
        }
    }
}

/// Loads the settings and fails on inconsistent rule tables.
///
/// A missing settings file is not an error.
pub fn load_rules(parent_dir: &Path) -> anyhow::Result<Rules> {
    let settings = Settings::load(parent_dir)?;
    let rules = settings.try_into_rules().map_err(|err| {
        log::error!("Invalid settings: {err}");
        err
    })?;
    log::info!(
        "Loaded {num_categories} main categories",
        num_categories = rules.categories.len()
    );
    Ok(rules)
}
