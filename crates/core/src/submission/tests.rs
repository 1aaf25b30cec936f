// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use jiff::civil::date;
use strum::IntoEnumIterator as _;

use super::*;

fn new_track(track_number: TrackNumber) -> Track {
    Track {
        track_number,
        title: format!("Track {track_number}"),
        artist: "Sarah Artist".to_owned(),
        file_path: format!("/tracks/track-{track_number}.wav"),
        duration: DurationMs::from_secs(245),
        format: "WAV".into(),
        bitrate: BitrateBps::from_kbps(1_411),
        sample_rate: SampleRateHz::COMPACT_DISC,
        ..Default::default()
    }
}

fn new_submission(
    release_type: ReleaseType,
    track_count: TrackNumber,
    main_category: &str,
    sub_category: &str,
) -> Submission {
    Submission {
        title: "Midnight Dreams".to_owned(),
        artist: "Sarah Artist".to_owned(),
        album_name: Some("Midnight Dreams".to_owned()),
        release_type,
        release_date: Some(date(2024, 12, 30)),
        main_category: main_category.to_owned(),
        sub_category: sub_category.to_owned(),
        tracks: (1..=track_count).map(new_track).collect(),
        ..Default::default()
    }
}

fn codes(invalidities: &[SubmissionInvalidity]) -> Vec<String> {
    invalidities.iter().map(ToString::to_string).collect()
}

#[test]
fn complete_submission_is_acceptable() {
    let categories = CategoryCatalog::default();
    let release_types = ReleaseTypeRules::default();
    let validator = SubmissionValidator::new(&categories, &release_types);
    let submission = new_submission(ReleaseType::Album, 7, "Jazz", "Smooth");
    assert!(validator.validate_for_submission(&submission).is_empty());
    assert!(validator.is_acceptable_for_submission(&submission));
}

#[test]
fn single_without_tracks() {
    let categories = CategoryCatalog::default();
    let release_types = ReleaseTypeRules::default();
    let validator = SubmissionValidator::new(&categories, &release_types);
    let submission = new_submission(ReleaseType::Single, 0, "Electronic", "Ambient");
    assert_eq!(
        vec![SubmissionInvalidity::TrackCountOutOfRange {
            expected: TrackCountRange::new(1, 3),
            actual: 0,
        }],
        validator.validate_for_submission(&submission)
    );
}

#[test]
fn ep_with_five_tracks() {
    let categories = CategoryCatalog::default();
    let release_types = ReleaseTypeRules::default();
    let validator = SubmissionValidator::new(&categories, &release_types);
    let submission = new_submission(ReleaseType::Ep, 5, "Electronic", "Ambient");
    assert!(validator.validate_for_submission(&submission).is_empty());
}

#[test]
fn mismatched_category_pair() {
    let categories = CategoryCatalog::default();
    let release_types = ReleaseTypeRules::default();
    let validator = SubmissionValidator::new(&categories, &release_types);
    let submission = new_submission(ReleaseType::Ep, 5, "Jazz", "House");
    assert_eq!(
        vec![SubmissionInvalidity::InvalidCategoryPair],
        validator.validate_for_submission(&submission)
    );
}

#[test]
fn empty_draft_reports_everything_in_order() {
    let categories = CategoryCatalog::default();
    let release_types = ReleaseTypeRules::default();
    let validator = SubmissionValidator::new(&categories, &release_types);
    let invalidities = validator.validate_for_submission(&Submission::default());
    assert_eq!(
        vec![
            "MISSING_FIELD:title",
            "MISSING_FIELD:artist",
            "MISSING_FIELD:mainCategory",
            "MISSING_FIELD:subCategory",
            "MISSING_FIELD:releaseDate",
            "INVALID_CATEGORY_PAIR",
            "TRACK_COUNT_OUT_OF_RANGE",
        ],
        codes(&invalidities)
    );
    assert_eq!(
        vec![
            "MISSING_FIELD",
            "MISSING_FIELD",
            "MISSING_FIELD",
            "MISSING_FIELD",
            "MISSING_FIELD",
            "INVALID_CATEGORY_PAIR",
            "TRACK_COUNT_OUT_OF_RANGE",
        ],
        invalidities
            .iter()
            .map(SubmissionInvalidity::code)
            .collect::<Vec<_>>()
    );
}

#[test]
fn whitespace_only_fields_are_missing() {
    let categories = CategoryCatalog::default();
    let release_types = ReleaseTypeRules::default();
    let validator = SubmissionValidator::new(&categories, &release_types);
    let mut submission = new_submission(ReleaseType::Single, 1, "Electronic", "Ambient");
    submission.title = " \t".to_owned();
    assert_eq!(
        vec![SubmissionInvalidity::MissingField(RequiredField::Title)],
        validator.validate_for_submission(&submission)
    );
}

#[test]
fn missing_release_date() {
    let categories = CategoryCatalog::default();
    let release_types = ReleaseTypeRules::default();
    let validator = SubmissionValidator::new(&categories, &release_types);
    let mut submission = new_submission(ReleaseType::Single, 2, "Electronic", "Ambient");
    submission.release_date = None;
    assert_eq!(
        vec!["MISSING_FIELD:releaseDate"],
        codes(&validator.validate_for_submission(&submission))
    );
}

#[test]
fn validation_is_idempotent() {
    let categories = CategoryCatalog::default();
    let release_types = ReleaseTypeRules::default();
    let validator = SubmissionValidator::new(&categories, &release_types);
    let submission = new_submission(ReleaseType::Compilation, 2, "Jazz", "House");
    let first = validator.validate_for_submission(&submission);
    let second = validator.validate_for_submission(&submission);
    assert_eq!(2, first.len());
    assert_eq!(first, second);
}

#[test]
fn drafts_may_have_no_tracks() {
    let draft = Submission::new_draft("Jazz Sessions", "John Producer", ReleaseType::Ep);
    assert_eq!(SubmissionStatus::Draft, draft.status);
    assert_eq!(0, draft.track_count());
    assert!(draft.status.is_editable());
}

#[test]
fn required_fields_subset_check() {
    let mut submission = Submission::new_draft("Urban Vibes", "Various Artists", ReleaseType::Single);
    assert_eq!(
        vec![
            RequiredField::MainCategory,
            RequiredField::SubCategory,
            RequiredField::ReleaseDate
        ],
        submission.missing_required_fields().collect::<Vec<_>>()
    );
    assert!(!submission.has_required_fields());
    submission.apply(SubmissionUpdate::MainCategory("Hip Hop".to_owned()));
    submission.apply(SubmissionUpdate::SubCategory("Urban".to_owned()));
    submission.apply(SubmissionUpdate::ReleaseDate(Some(date(2025, 1, 15))));
    assert!(submission.has_required_fields());
}

#[test]
fn required_field_names() {
    assert_eq!(
        vec![
            "title",
            "artist",
            "mainCategory",
            "subCategory",
            "releaseDate"
        ],
        RequiredField::iter()
            .map(|field| field.to_string())
            .collect::<Vec<_>>()
    );
}

#[test]
fn apply_updates() {
    let mut submission = Submission::default();
    assert!(submission.apply(SubmissionUpdate::Title("Jazz Sessions".to_owned())));
    assert!(!submission.apply(SubmissionUpdate::Title("Jazz Sessions".to_owned())));
    assert!(submission.apply(SubmissionUpdate::ReleaseType(ReleaseType::Ep)));
    assert!(!submission.apply(SubmissionUpdate::ReleaseType(ReleaseType::Ep)));
    assert!(submission.apply(SubmissionUpdate::AlbumName(Some(
        "Jazz Sessions EP".to_owned()
    ))));
    assert!(submission.apply(SubmissionUpdate::Upc(Some("123456789012".to_owned()))));
    assert!(submission.apply(SubmissionUpdate::AlbumName(None)));
    assert_eq!("Jazz Sessions", submission.title);
    assert_eq!(ReleaseType::Ep, submission.release_type);
    assert_eq!(None, submission.album_name);
    assert_eq!(Some("123456789012"), submission.upc.as_deref());
}

#[test]
fn changing_main_category_resets_sub_category() {
    let mut submission = new_submission(ReleaseType::Ep, 5, "Jazz", "Contemporary");
    assert!(!submission.apply(SubmissionUpdate::MainCategory("Jazz".to_owned())));
    assert_eq!("Contemporary", submission.sub_category);
    assert!(submission.apply(SubmissionUpdate::MainCategory("Electronic".to_owned())));
    assert_eq!("Electronic", submission.main_category);
    assert!(submission.sub_category.is_empty());
    assert!(submission.is_missing(RequiredField::SubCategory));
}

#[test]
fn status_transitions() {
    use SubmissionStatus::*;
    assert!(Draft.can_transition_to(Pending));
    assert!(Pending.can_transition_to(Review));
    assert!(Review.can_transition_to(Approved));
    assert!(Review.can_transition_to(Rejected));
    assert!(Approved.can_transition_to(Published));
    assert!(!Draft.can_transition_to(Review));
    assert!(!Pending.can_transition_to(Published));
    assert!(!Rejected.can_transition_to(Approved));
    assert!(!Published.can_transition_to(Pending));
}

#[test]
fn every_status_may_return_to_draft() {
    for status in SubmissionStatus::iter() {
        assert!(status.can_transition_to(SubmissionStatus::Draft), "{status}");
    }
}

#[test]
fn only_leaving_draft_requires_validation() {
    for from in SubmissionStatus::iter() {
        for to in SubmissionStatus::iter() {
            assert_eq!(
                from == SubmissionStatus::Draft && to == SubmissionStatus::Pending,
                from.requires_validation(to)
            );
        }
    }
}

#[test]
fn status_codes() {
    assert_eq!("DRAFT", SubmissionStatus::Draft.to_string());
    assert_eq!("PUBLISHED", SubmissionStatus::Published.to_string());
    assert_eq!(
        Some(SubmissionStatus::Review),
        SubmissionStatus::from_repr(2)
    );
}
