// tests/argument_builder.rs

use std::path::Path;

use proptest::prelude::*;

use unirun::args::{Invocation, LogTarget, build_arguments, fixed_flags, parse_custom_options};

#[test]
fn flag_followed_by_flag_is_emitted_alone() {
    let parsed = parse_custom_options("-test -targetPlatform StandaloneWindows64 -quit");
    assert_eq!(
        parsed,
        vec![
            "-test".to_string(),
            "-targetPlatform StandaloneWindows64".to_string(),
            "-quit".to_string(),
        ]
    );
}

#[test]
fn orphan_values_are_dropped() {
    let parsed = parse_custom_options("orphan -a one two -b");
    assert_eq!(parsed, vec!["-a one".to_string(), "-b".to_string()]);
}

#[test]
fn multi_word_values_keep_only_the_first_word() {
    let parsed = parse_custom_options("-name My Game");
    assert_eq!(parsed, vec!["-name My".to_string()]);
}

#[test]
fn empty_string_yields_nothing() {
    assert!(parse_custom_options("").is_empty());
}

#[test]
fn double_space_leaves_an_empty_token_that_is_consumed_as_value() {
    // Splitting is on single spaces, so "-a  -b" has an empty token between
    // the flags and "-a" takes it as its value.
    let parsed = parse_custom_options("-a  -b");
    assert_eq!(parsed, vec!["-a ".to_string(), "-b".to_string()]);
}

#[test]
fn build_prefix_has_quit_and_method() {
    let args = fixed_flags(
        &Invocation::Build {
            method: "Builder.Build".to_string(),
        },
        Path::new("/work/game"),
        LogTarget::File(Path::new("/work/game/Logs/unirun.log")),
    );
    assert_eq!(
        args,
        vec![
            "-batchmode",
            "-quit",
            "-logFile",
            "/work/game/Logs/unirun.log",
            "-projectPath",
            "/work/game",
            "-executeMethod",
            "Builder.Build",
        ]
    );
}

#[test]
fn run_prefix_has_no_quit_and_optional_method() {
    let project = Path::new("/work/game");
    let log = LogTarget::File(Path::new("/work/game/Logs/unirun.log"));

    let plain = fixed_flags(&Invocation::Run { method: None }, project, log);
    assert_eq!(
        plain,
        vec![
            "-batchmode",
            "-logFile",
            "/work/game/Logs/unirun.log",
            "-projectPath",
            "/work/game",
        ]
    );

    let with_method = fixed_flags(
        &Invocation::Run {
            method: Some("Tests.Run".to_string()),
        },
        project,
        log,
    );
    assert_eq!(&with_method[5..], &["-executeMethod", "Tests.Run"]);
}

#[test]
fn custom_options_follow_the_fixed_prefix() {
    let args = build_arguments(
        &Invocation::Build {
            method: "Builder.Build".to_string(),
        },
        Path::new("/p"),
        LogTarget::Stdout,
        "-buildTarget Android -quit",
    );
    assert_eq!(args.len(), 10);
    assert_eq!(args[0], "-batchmode");
    assert_eq!(args[8], "-buildTarget Android");
    assert_eq!(args[9], "-quit");
}

#[test]
fn stdout_log_target_passes_a_dash() {
    let args = fixed_flags(
        &Invocation::Build {
            method: "Builder.Build".to_string(),
        },
        Path::new("/work/game"),
        LogTarget::Stdout,
    );
    assert_eq!(&args[2..4], &["-logFile", "-"]);
    assert!(!args.iter().any(|a| a.ends_with(".log")));
}

fn token() -> impl Strategy<Value = String> {
    "-?[A-Za-z0-9.]{1,8}"
}

proptest! {
    /// Every dash token yields exactly one entry, in order, and nothing else
    /// survives.
    #[test]
    fn one_entry_per_flag_in_order(tokens in proptest::collection::vec(token(), 0..12)) {
        let input = tokens.join(" ");
        let parsed = parse_custom_options(&input);

        let flags: Vec<&String> = tokens.iter().filter(|t| t.starts_with('-')).collect();
        prop_assert_eq!(parsed.len(), flags.len());

        for (entry, flag) in parsed.iter().zip(flags) {
            prop_assert!(entry.starts_with('-'));
            let head = entry.split(' ').next().unwrap_or_default();
            prop_assert_eq!(head, flag.as_str());
        }
    }

    /// A value is attached exactly when the flag is directly followed by a
    /// non-flag token.
    #[test]
    fn values_attach_to_the_preceding_flag(tokens in proptest::collection::vec(token(), 0..12)) {
        let input = tokens.join(" ");
        let parsed = parse_custom_options(&input);

        let mut expected = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            if tokens[i].starts_with('-') {
                match tokens.get(i + 1) {
                    Some(next) if !next.starts_with('-') => {
                        expected.push(format!("{} {}", tokens[i], next));
                        i += 2;
                        continue;
                    }
                    _ => expected.push(tokens[i].clone()),
                }
            }
            i += 1;
        }
        prop_assert_eq!(parsed, expected);
    }
}
