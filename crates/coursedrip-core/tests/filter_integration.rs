//! End-to-end drip filter tests over a content fixture.
//!
//! Exercises the full pipeline: fixture -> in-memory store -> schedule
//! access control -> quiz drip filter.

use chrono::{DateTime, TimeZone, Utc};
use coursedrip_core::{
    ContentFixture, DripConfig, QuizDripFilter, ScheduleAccessControl,
};

const FIXTURE: &str = r#"{
    "posts": [
        {"id": 1, "kind": "lesson", "content": "Lesson one"},
        {"id": 2, "kind": "quiz", "content": "Pick the correct answer from the options below and submit before the deadline to earn full credit for this module today"},
        {"id": 3, "kind": "lesson", "content": "Lesson two"},
        {"id": 4, "kind": "quiz", "content": "Second quiz body", "excerpt": "A short teaser"},
        {"id": 5, "kind": "quiz", "content": "Undripped quiz"}
    ],
    "drip": {
        "2": {"drip_type": "absolute", "drip_date": "2024-03-01"},
        "4": {"drip_type": "dynamic", "offset_days": 7}
    },
    "lesson_quiz": {"1": 2, "3": 4},
    "enrollments": [
        {"user_id": 7, "lesson_id": 3, "enrolled_at": "2024-02-10T00:00:00Z"}
    ]
}"#;

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap()
}

fn fixture() -> ContentFixture {
    serde_json::from_str(FIXTURE).unwrap()
}

#[test]
fn quizzes_pass_through_once_released() {
    let (store, enrollments) = fixture().into_parts();
    let access = ScheduleAccessControl::new(&store, enrollments, 7, at(2024, 6, 1));
    let config = DripConfig::default();
    let filter = QuizDripFilter::new(&config, &store, &access, config.request_context(7));

    let posts: Vec<_> = store
        .posts()
        .into_iter()
        .filter(|p| p.kind == coursedrip_core::PostKind::Quiz)
        .collect();
    assert_eq!(filter.filter(posts.clone()), posts);
}

#[test]
fn lesson_result_sets_are_never_touched() {
    let (store, enrollments) = fixture().into_parts();
    let access = ScheduleAccessControl::new(&store, enrollments, 7, at(2024, 2, 1));
    let config = DripConfig::default();
    let filter = QuizDripFilter::new(&config, &store, &access, config.request_context(7));

    let posts: Vec<_> = store
        .posts()
        .into_iter()
        .filter(|p| p.kind == coursedrip_core::PostKind::Lesson)
        .collect();
    assert_eq!(filter.filter(posts.clone()), posts);
}

#[test]
fn absolute_drip_blocks_before_release_and_formats_the_date() {
    let (store, enrollments) = fixture().into_parts();
    let access = ScheduleAccessControl::new(&store, enrollments, 7, at(2024, 2, 1));
    let config = DripConfig::default();
    let filter = QuizDripFilter::new(&config, &store, &access, config.request_context(7));

    let out = filter.filter(store.posts().into_iter().filter(|p| p.id == 2).collect());
    let quiz = &out[0];

    assert!(quiz
        .content
        .ends_with("This quiz will become available on March 1, 2024.</div>"));
    // Preview of the original body survives ahead of the notice.
    assert!(quiz.content.starts_with("<p>Pick the correct answer"));
    assert!(quiz.content.contains("&hellip;"));
    assert!(!quiz.render.show_questions);
    assert!(!quiz.render.show_pagination);

    // Quiz 2 had no excerpt: the new excerpt previews the new content.
    assert!(quiz.excerpt.starts_with("<p>Pick the correct answer"));
    assert!(quiz.excerpt.ends_with("</div>"));
}

#[test]
fn dynamic_drip_formats_the_enrollment_relative_date() {
    let (store, enrollments) = fixture().into_parts();
    let access = ScheduleAccessControl::new(&store, enrollments, 7, at(2024, 2, 12));
    let config = DripConfig::default();
    let filter = QuizDripFilter::new(&config, &store, &access, config.request_context(7));

    let out = filter.filter(store.posts().into_iter().filter(|p| p.id == 4).collect());
    let quiz = &out[0];

    // 2024-02-10 enrollment + 7 days.
    assert!(quiz.content.contains("February 17, 2024"));
    // Quiz 4 had an excerpt: it is kept and ellipsized.
    assert!(quiz.excerpt.starts_with("<p>A short teaser&hellip;</p>"));
}

#[test]
fn dynamic_drip_is_open_to_other_users() {
    let (store, enrollments) = fixture().into_parts();
    // User 8 never enrolled; the dynamic schedule cannot block them.
    let access = ScheduleAccessControl::new(&store, enrollments, 8, at(2024, 2, 12));
    let config = DripConfig::default();
    let filter = QuizDripFilter::new(&config, &store, &access, config.request_context(8));

    let posts: Vec<_> = store.posts().into_iter().filter(|p| p.id == 4).collect();
    assert_eq!(filter.filter(posts.clone()), posts);
}

#[test]
fn configured_template_without_token_appends_the_date() {
    let (store, enrollments) = fixture().into_parts();
    let access = ScheduleAccessControl::new(&store, enrollments, 7, at(2024, 2, 1));
    let mut config = DripConfig::default();
    config
        .set("messages.quiz_message", "Come back later")
        .unwrap();
    let filter = QuizDripFilter::new(&config, &store, &access, config.request_context(7));

    assert_eq!(
        filter.drip_message(Some(2)),
        "Come back later March 1, 2024"
    );
}

#[test]
fn localized_display_follows_the_configured_locale() {
    let (store, enrollments) = fixture().into_parts();
    let access = ScheduleAccessControl::new(&store, enrollments, 7, at(2024, 2, 12));
    let mut config = DripConfig::default();
    config.set("display.locale", "fr_FR").unwrap();
    config.set("display.date_format", "%-d %B %Y").unwrap();
    let filter = QuizDripFilter::new(&config, &store, &access, config.request_context(7));

    // Dynamic strategy formats through the locale; 2024-02-17.
    assert_eq!(filter.drip_message(Some(4)), filter.template().as_str().replace("[date]", "17 f\u{e9}vrier 2024"));
}

#[test]
fn undripped_quiz_in_a_blocked_set_is_untouched() {
    let mut fixture = fixture();
    // Give quiz 5 a lesson but no drip metadata.
    fixture.lesson_quiz.insert(6, 5);
    let (store, enrollments) = fixture.into_parts();
    let access = ScheduleAccessControl::new(&store, enrollments, 7, at(2024, 2, 1));
    let config = DripConfig::default();
    let filter = QuizDripFilter::new(&config, &store, &access, config.request_context(7));

    let posts: Vec<_> = store.posts().into_iter().filter(|p| p.id == 5).collect();
    assert_eq!(filter.filter(posts.clone()), posts);
}
