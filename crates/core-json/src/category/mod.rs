// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use labeldesk_core::ConfigError;

use crate::prelude::*;

mod _core {
    pub(super) use labeldesk_core::category::*;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Category {
    pub name: String,

    pub subcategories: Vec<String>,
}

impl From<Category> for _core::Category {
    fn from(from: Category) -> Self {
        let Category {
            name,
            subcategories,
        } = from;
        Self {
            name,
            subcategories,
        }
    }
}

impl From<&_core::Category> for Category {
    fn from(from: &_core::Category) -> Self {
        let _core::Category {
            name,
            subcategories,
        } = from;
        Self {
            name: name.clone(),
            subcategories: subcategories.clone(),
        }
    }
}

/// Main categories in the order in which they are offered.
pub type Catalog = Vec<Category>;

pub fn try_into_catalog(from: Catalog) -> Result<_core::CategoryCatalog, ConfigError> {
    _core::CategoryCatalog::try_from_categories(from.into_iter().map(Into::into))
}

#[must_use]
pub fn from_catalog(from: &_core::CategoryCatalog) -> Catalog {
    from.categories().iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests;
