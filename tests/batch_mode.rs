use jokerate::batch;
use jokerate::config::{Config, SeedJoke};
use jokerate::ui::app::App;
use jokerate::ui::notification::NotificationKind;
use serde_json::Value;

fn run_batch(seeds: &[(&str, i64)], script: &str) -> (Value, Vec<NotificationKind>, batch::BatchSummary) {
    let config = Config {
        jokes: seeds
            .iter()
            .map(|(text, rating)| SeedJoke::new(*text, *rating))
            .collect(),
        ..Config::default()
    };
    let mut app = App::new(&config);
    let mut out = Vec::new();
    let mut kinds = Vec::new();
    let summary = batch::run(script.as_bytes(), &mut out, &mut app, |n| kinds.push(n.kind))
        .expect("batch should run");
    let json = serde_json::from_slice(&out).expect("output is JSON");
    (json, kinds, summary)
}

#[test]
fn test_batch_prints_final_snapshot() {
    let (json, kinds, summary) = run_batch(
        &[("first", 0), ("second", -5)],
        "up 1\nup 1\ndown 2\nadd   third  \nedit 1 renamed\n",
    );

    assert_eq!(
        json,
        serde_json::json!([
            { "id": 1, "text": "renamed", "rating": 2 },
            { "id": 2, "text": "third", "rating": 0 },
        ])
    );
    assert_eq!(
        kinds,
        vec![
            NotificationKind::Info,
            NotificationKind::Success,
            NotificationKind::Success,
        ]
    );
    assert_eq!(summary.commands, 5);
    assert_eq!(summary.notifications, 3);
}

#[test]
fn test_batch_rejects_long_text() {
    let script = format!("add {}\n", "x".repeat(151));
    let (json, kinds, _) = run_batch(&[], &script);
    assert_eq!(json, serde_json::json!([]));
    assert_eq!(kinds, vec![NotificationKind::Error]);
}

#[test]
fn test_batch_ignores_unknown_and_missing_ids() {
    let (json, kinds, summary) = run_batch(&[("only", 1)], "frobnicate\nup 42\ndelete 9\n");
    assert_eq!(json, serde_json::json!([{ "id": 1, "text": "only", "rating": 1 }]));
    assert!(kinds.is_empty());
    assert_eq!(summary.unrecognized, 1);
    assert_eq!(summary.commands, 3);
}
