// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use labeldesk_core::UserRole;
use test_log::test;

use crate::tests::InMemoryRepo;

use super::*;

fn new_user(username: &str, display_name: &str, role: UserRole) -> User {
    User {
        email: format!("{username}@example.com"),
        username: username.to_owned(),
        display_name: display_name.to_owned(),
        role,
    }
}

#[test]
fn search_by_role_and_text() -> anyhow::Result<()> {
    let mut repo = InMemoryRepo::default();
    repo.insert_user(&new_user("sarah", "Sarah Artist", UserRole::Performer))?;
    let john = repo.insert_user(&new_user("john", "John Producer", UserRole::Producer))?;
    repo.insert_user(&new_user("admin", "Label Admin", UserRole::Administrator))?;

    assert_eq!(3, search(&mut repo, &SearchFilter::default())?.len());

    let producers = search(
        &mut repo,
        &SearchFilter {
            role: Some(UserRole::Producer),
            text: None,
        },
    )?;
    assert_eq!(vec![john], producers.iter().map(|(id, _)| *id).collect::<Vec<_>>());

    let found = search(
        &mut repo,
        &SearchFilter {
            role: None,
            text: Some("LABEL".to_owned()),
        },
    )?;
    assert_eq!(1, found.len());
    assert_eq!("admin", found[0].1.username);
    Ok(())
}

#[test]
fn duplicate_email_conflicts() -> anyhow::Result<()> {
    let mut repo = InMemoryRepo::default();
    repo.insert_user(&new_user("sarah", "Sarah Artist", UserRole::Performer))?;
    assert!(matches!(
        repo.insert_user(&new_user("sarah", "Sarah", UserRole::Composer)),
        Err(RepoError::Conflict)
    ));
    Ok(())
}
