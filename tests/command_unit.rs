use anyhow::Result;
use emojidump::{execute, load_dataset, parse, EmojiRecord, ErrorKind, Outcome};

fn sample() -> Vec<EmojiRecord> {
    serde_sample(r#"[{"e":"😀","v":1.0},{"e":"😎","v":6.0},{"e":"🤖","v":9.0}]"#)
}

fn serde_sample(json: &str) -> Vec<EmojiRecord> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("emoji.json");
    std::fs::write(&path, json).unwrap();
    load_dataset(&path).unwrap()
}

#[test]
fn full_pipeline_black_box() {
    let source = sample();
    let mut rng = fastrand::Rng::with_seed(1);
    let outcome = execute(&parse("unicode=6.0 join=true"), &source, &mut rng);
    match outcome {
        Outcome::Success(dump) => {
            assert_eq!(dump.rendered, "😀😎");
            assert_eq!(dump.separator, "");
            assert!(dump.summary.contains('2'));
            assert!(dump.summary.contains('3'));
        }
        Outcome::Failure(err) => panic!("unexpected failure: {err}"),
    }
}

#[test]
fn last_option_wins_through_the_pipeline() {
    let source = sample();
    let mut rng = fastrand::Rng::with_seed(1);
    let outcome = execute(&parse("max=1 max=2"), &source, &mut rng);
    match outcome {
        Outcome::Success(dump) => assert_eq!(dump.rendered, "😀 😎"),
        Outcome::Failure(err) => panic!("unexpected failure: {err}"),
    }
}

#[test]
fn unrecognized_options_are_ignored() {
    let source = sample();
    let mut rng = fastrand::Rng::with_seed(1);
    let outcome = execute(&parse("verbose=true limit=1 max=2"), &source, &mut rng);
    assert!(matches!(outcome, Outcome::Success(dump) if dump.rendered == "😀 😎"));
}

#[test]
fn validation_failure_is_a_validation_error() {
    let source = sample();
    let mut rng = fastrand::Rng::with_seed(1);
    let outcome = execute(&parse("shuffle=maybe"), &source, &mut rng);
    match outcome {
        Outcome::Failure(err) => {
            assert_eq!(err.kind, ErrorKind::Validation);
            assert!(err.message.contains("shuffle"));
            assert!(err.message.contains("maybe"));
        }
        Outcome::Success(_) => panic!("expected failure"),
    }
}

#[test]
fn one_shot_command_reports_success_and_failure() {
    let source = sample();
    let mut rng = fastrand::Rng::with_seed(1);
    assert!(emojidump::repl::run_command("max=1", &source, &mut rng));
    assert!(!emojidump::repl::run_command("unicode=2.0", &source, &mut rng));
}

#[test]
fn dataset_round_trip_from_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("emoji.json");
    std::fs::write(&path, r#"[{"e":"🎉","v":3.0},{"e":"🦀","v":11.0}]"#)?;

    let source = load_dataset(&path)?;
    let mut rng = fastrand::Rng::with_seed(1);
    match execute(&parse("unicode=3.0"), &source, &mut rng) {
        Outcome::Success(dump) => assert_eq!(dump.rendered, "🎉"),
        Outcome::Failure(err) => panic!("unexpected failure: {err}"),
    }
    Ok(())
}
