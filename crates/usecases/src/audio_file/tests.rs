// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use labeldesk_core::ValidationRuleSet;
use test_log::test;

use crate::tests::InMemoryRepo;

use super::*;

const MEBIBYTE: u64 = 1024 * 1024;

#[test]
fn invalid_files_do_not_block_others() {
    let validator = AudioFileValidator::try_new(ValidationRuleSet::default()).unwrap();
    let candidates = [
        ("a", AudioFileCandidate::new("intro.wav", 10 * MEBIBYTE)),
        ("b", AudioFileCandidate::new("track.mp3", 1_000)),
        ("c", AudioFileCandidate::new("outro.FLAC", 100 * MEBIBYTE)),
        ("d", AudioFileCandidate::new("bonus.wav", 200 * MEBIBYTE)),
    ];
    let summary = validate_upload_batch(
        &validator,
        candidates.iter().map(|(id, candidate)| (*id, candidate)),
    );
    assert_eq!(vec!["a", "c"], summary.accepted);
    assert_eq!(
        vec!["b", "d"],
        summary
            .rejected
            .iter()
            .map(|(id, _)| *id)
            .collect::<Vec<_>>()
    );
    assert_eq!(
        vec![AudioFileInvalidity::FileTooLarge {
            max_file_size: 100 * MEBIBYTE
        }],
        summary.rejected[1].1
    );
}

#[test]
fn empty_batch() {
    let validator = AudioFileValidator::try_new(ValidationRuleSet::default()).unwrap();
    let summary = validate_upload_batch(&validator, Vec::<(u32, &AudioFileCandidate)>::new());
    assert_eq!(Summary::default(), summary);
}

#[test]
fn register_accepted_upload_only() -> anyhow::Result<()> {
    let validator = AudioFileValidator::try_new(ValidationRuleSet::default())?;
    let mut repo = InMemoryRepo::default();

    let outcome = register_upload(
        &mut repo,
        &validator,
        None,
        AudioFileCandidate::new("master.wav", 10 * MEBIBYTE),
        "Electronic",
    )?;
    assert!(matches!(outcome, Outcome::Registered(_)));

    let outcome = register_upload(
        &mut repo,
        &validator,
        None,
        AudioFileCandidate::new("preview.mp3", 1_000),
        "Electronic",
    )?;
    let Outcome::Rejected(invalidities) = outcome else {
        unreachable!();
    };
    assert!(matches!(
        invalidities.as_slice(),
        [AudioFileInvalidity::UnsupportedFormat { .. }]
    ));

    assert_eq!(1, repo.audio_files.len());
    assert_eq!("WAV", repo.audio_files[0].1.format);
    Ok(())
}

#[test]
fn register_into_unknown_folder() -> anyhow::Result<()> {
    let validator = AudioFileValidator::try_new(ValidationRuleSet::default())?;
    let mut repo = InMemoryRepo::default();
    let result = register_upload(
        &mut repo,
        &validator,
        Some(FolderId::new(1)),
        AudioFileCandidate::new("master.wav", 1_000),
        "Electronic",
    );
    assert!(matches!(result, Err(Error::Repository(RepoError::NotFound))));
    Ok(())
}

#[test]
fn search_by_name_or_category() -> anyhow::Result<()> {
    let validator = AudioFileValidator::try_new(ValidationRuleSet::default())?;
    let mut repo = InMemoryRepo::default();
    for (file_name, category) in [
        ("Urban Beat.wav", "Hip Hop"),
        ("Night Drive.flac", "Electronic"),
        ("Smooth Sax.wav", "Jazz"),
    ] {
        register_upload(
            &mut repo,
            &validator,
            None,
            AudioFileCandidate::new(file_name, 1_000),
            category,
        )?;
    }

    assert_eq!(3, search(&mut repo, &SearchFilter::default())?.len());

    let found = search(
        &mut repo,
        &SearchFilter {
            text: Some("ELECTRONIC".to_owned()),
        },
    )?;
    assert_eq!(1, found.len());
    assert_eq!("Night Drive.flac", found[0].1.name);

    let found = search(
        &mut repo,
        &SearchFilter {
            text: Some("sax".to_owned()),
        },
    )?;
    assert_eq!(vec![3], found.iter().map(|(id, _)| id.to_inner()).collect::<Vec<_>>());
    Ok(())
}
