// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn deserialize_catalog() {
    let json = r#"[
        {"name": "Jazz", "subcategories": ["Smooth", "Fusion"]},
        {"name": "Electronic", "subcategories": ["Ambient"]}
    ]"#;
    let catalog: Catalog = serde_json::from_str(json).unwrap();
    let catalog = try_into_catalog(catalog).unwrap();
    assert_eq!(
        vec!["Jazz", "Electronic"],
        catalog.main_categories().collect::<Vec<_>>()
    );
    assert!(catalog.is_valid_pair("Jazz", "Fusion"));
}

#[test]
fn reject_unknown_fields() {
    let json = r#"[{"name": "Jazz", "subcategories": ["Smooth"], "color": "blue"}]"#;
    assert!(serde_json::from_str::<Catalog>(json).is_err());
}

#[test]
fn duplicate_main_category_fails() {
    let catalog = vec![
        Category {
            name: "Jazz".to_owned(),
            subcategories: vec!["Smooth".to_owned()],
        },
        Category {
            name: "Jazz".to_owned(),
            subcategories: vec!["Fusion".to_owned()],
        },
    ];
    assert_eq!(
        Err(ConfigError::DuplicateMainCategory("Jazz".to_owned())),
        try_into_catalog(catalog)
    );
}

#[test]
fn default_catalog_survives_conversion() {
    let default_catalog = _core::CategoryCatalog::default();
    assert_eq!(
        Ok(default_catalog.clone()),
        try_into_catalog(from_catalog(&default_catalog))
    );
}
