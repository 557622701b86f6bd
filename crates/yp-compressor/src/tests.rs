use crate::*;
use crate::filler;
use crate::format;
use crate::shorthand;
use crate::tokens;
use std::sync::Arc;

const SONG_REQUEST: &str = "Hey can you please add a feature where users can only request 3 songs every 10 minutes? I don't want people spamming the queue. Make sure it returns a proper error message.";

// ========== Mode detection ==========

#[test]
fn test_mode_indicator_new_project() {
    assert_eq!(detect_mode("Let's start a NEW PROJECT for invoices"), Mode::NewProject);
    assert_eq!(detect_mode("scaffold a cli"), Mode::NewProject);
    assert_eq!(detect_mode("what tech stack should we use"), Mode::NewProject);
}

#[test]
fn test_mode_indicator_substring() {
    assert_eq!(detect_mode("review the app architecture"), Mode::NewProject);
}

#[test]
fn test_mode_default_in_project() {
    assert_eq!(detect_mode("fix the navbar on mobile"), Mode::InProject);
    assert_eq!(detect_mode(SONG_REQUEST), Mode::InProject);
}

#[test]
fn test_mode_empty() {
    assert_eq!(detect_mode(""), Mode::InProject);
}

// ========== Filler stripping ==========

#[test]
fn test_filler_case_insensitive() {
    let a = filler::strip_filler("Please add a button");
    let b = filler::strip_filler("please ADD a button");
    assert_eq!(a, "add a button");
    assert_eq!(a, b);
}

#[test]
fn test_filler_word_boundaries() {
    assert_eq!(filler::strip_filler("the likely outcome"), "the likely outcome");
    assert_eq!(filler::strip_filler("hi there, this is childish"), "there, this is childish");
    assert_eq!(filler::strip_filler("justify the text"), "justify the text");
}

#[test]
fn test_filler_multi_word() {
    assert_eq!(filler::strip_filler("I would like a dark mode"), "a dark mode");
    assert_eq!(filler::strip_filler("Thank you very much"), "much");
}

#[test]
fn test_filler_every_not_very() {
    assert_eq!(filler::strip_filler("poll every hour"), "poll every hour");
}

#[test]
fn test_filler_collapses_whitespace() {
    assert_eq!(filler::strip_filler("  add   \n\t a   test  "), "add a test");
}

#[test]
fn test_filler_all_removed() {
    assert_eq!(filler::strip_filler("Hey, please just basically"), ",");
    assert_eq!(filler::strip_filler("please just hey"), "");
}

#[test]
fn test_filler_empty() {
    assert_eq!(filler::strip_filler(""), "");
}

// ========== Shorthand ==========

#[test]
fn test_shorthand_every_minutes() {
    let result = shorthand::apply_shorthand("limit to 3 songs every 10 minutes");
    assert_eq!(result, "limit to 3 songs /10min");
}

#[test]
fn test_shorthand_per_unit() {
    assert_eq!(shorthand::apply_shorthand("5 requests per minute"), "5 requests /min");
    assert_eq!(shorthand::apply_shorthand("100 calls per user per day"), "100 calls /user /day");
}

#[test]
fn test_shorthand_case_insensitive() {
    assert_eq!(shorthand::apply_shorthand("wait 30 SECONDS"), "wait 30 sec");
}

#[test]
fn test_shorthand_error_chain() {
    assert_eq!(shorthand::apply_shorthand("return a proper error message"), "return a error");
}

#[test]
fn test_shorthand_rate_collapse() {
    assert_eq!(shorthand::collapse_rates("3 / 10 min"), "3/10min");
    assert_eq!(shorthand::collapse_rates("3/ 10 MIN"), "3/10min");
    assert_eq!(shorthand::collapse_rates("5 /min"), "5 /min");
}

#[test]
fn test_shorthand_rate_keeps_preceding_word() {
    assert_eq!(shorthand::collapse_rates("songs / 10 min"), "songs /10min");
    assert_eq!(
        shorthand::apply_shorthand("check https://x.io / 5 minutes"),
        "check https://x.io /5min"
    );
}

#[test]
fn test_shorthand_substitution_only() {
    let text = "keep every word here";
    let result = shorthand::apply_shorthand(text);
    assert_eq!(result, "keep / word here");
    assert_eq!(shorthand::apply_shorthand("nothing to shorten"), "nothing to shorten");
}

#[test]
fn test_shorthand_empty() {
    assert_eq!(shorthand::apply_shorthand(""), "");
}

// ========== Formatting ==========

#[test]
fn test_action_by_list_order() {
    let lex = Lexicon::shared();
    assert_eq!(format::detect_action("remove the old add button", &lex), Some("add"));
    assert_eq!(format::detect_action("refactor then fix", &lex), Some("fix"));
    assert_eq!(format::detect_action("make it faster", &lex), None);
}

#[test]
fn test_action_substring_match() {
    let lex = Lexicon::shared();
    assert_eq!(format::detect_action("validate the address field", &lex), Some("add"));
}

#[test]
fn test_format_in_project_capitalizes() {
    assert_eq!(format::format_in_project("fix the login flow"), "Fix the login flow");
    assert_eq!(format::format_in_project(""), "");
}

#[test]
fn test_format_new_project_unchanged() {
    assert_eq!(format::format_new_project("todo app. tech: rust"), "todo app. tech: rust");
}

#[test]
fn test_capitalize_unicode() {
    assert_eq!(format::capitalize_first("élan vital"), "Élan vital");
    assert_eq!(format::capitalize_first("42 things"), "42 things");
}

// ========== Tokens ==========

#[test]
fn test_tokens_ceil() {
    assert_eq!(tokens::estimate_tokens(""), 0);
    assert_eq!(tokens::estimate_tokens("abcd"), 1);
    assert_eq!(tokens::estimate_tokens("abcde"), 2);
    assert_eq!(tokens::estimate_tokens("ééé"), 1);
}

#[test]
fn test_tokens_savings_signed() {
    assert_eq!(tokens::token_savings("abcdefgh", "abcd"), 1);
    assert_eq!(tokens::token_savings("ab", "abcdefgh"), -1);
}

// ========== Pipeline ==========

#[test]
fn test_compress_song_request() {
    let result = compress(SONG_REQUEST, Some(Mode::InProject));
    let out = result.compressed();
    assert_eq!(
        out,
        "Add a feature where users can only request 3 songs /10min? i don't want people spamming the queue. it returns a error."
    );
    assert!(out.starts_with("Add"));
    assert!(out.to_lowercase().contains("add"));
    assert!(out.contains("3 songs"));
    assert!(out.contains("/10min"));
    assert!(out.contains("error"));
    assert!(!out.contains("proper error message"));
    for filler in ["hey", "can you", "please"] {
        assert!(!out.to_lowercase().starts_with(filler));
    }
    assert_eq!(result.mode(), Mode::InProject);
    assert_eq!(result.original(), SONG_REQUEST);
}

#[test]
fn test_compress_every_minutes_in_project() {
    let result = compress("limit requests every 10 minutes", Some(Mode::InProject));
    assert_eq!(result.compressed(), "Limit requests /10min");
}

#[test]
fn test_compress_empty_both_modes() {
    for mode in [Some(Mode::NewProject), Some(Mode::InProject), None] {
        let result = compress("", mode);
        assert_eq!(result.compressed(), "");
        assert_eq!(result.token_estimate(), 0);
    }
}

#[test]
fn test_compress_only_filler() {
    let result = compress("please just hey", None);
    assert_eq!(result.compressed(), "");
    assert_eq!(result.token_estimate(), 0);
    assert_eq!(result.mode(), Mode::InProject);
}

#[test]
fn test_compress_deterministic() {
    let a = compress(SONG_REQUEST, None);
    let b = compress(SONG_REQUEST, None);
    assert_eq!(a, b);
}

#[test]
fn test_compress_token_estimate_exact() {
    let inputs = [
        SONG_REQUEST,
        "I want to build a new app from scratch",
        "fix it",
        "Could you please update the README? Thanks!",
        "ünïcödé every 5 hours",
    ];
    for input in inputs {
        let result = compress(input, None);
        let expected = result.compressed().chars().count().div_ceil(4);
        assert_eq!(result.token_estimate(), expected, "input: {input}");
    }
}

#[test]
fn test_compress_mode_override() {
    let input = "build app from scratch please fix the login";
    let forced = compress(input, Some(Mode::InProject));
    assert_eq!(forced.mode(), Mode::InProject);
    assert_eq!(forced.compressed(), "Build app from scratch fix the login");

    let detected = compress(input, None);
    assert_eq!(detected.mode(), Mode::NewProject);
    assert_eq!(detected.compressed(), "build app from scratch fix the login");
}

#[test]
fn test_compress_override_new_project_on_task_text() {
    let result = compress("fix the navbar", Some(Mode::NewProject));
    assert_eq!(result.mode(), Mode::NewProject);
    assert_eq!(result.compressed(), "fix the navbar");
}

#[test]
fn test_compress_new_project_detected() {
    let input = "I want to build a new app from scratch. Tech stack: basically React and Postgres.";
    let result = compress(input, None);
    assert_eq!(result.mode(), Mode::NewProject);
    assert_eq!(result.compressed(), "to build a new app from scratch. tech stack: react and postgres.");
}

#[test]
fn test_compress_savings() {
    let result = compress(SONG_REQUEST, None);
    assert!(result.token_savings() > 0);
    assert_eq!(
        result.token_savings(),
        result.original_tokens() as i64 - result.token_estimate() as i64
    );
}

#[test]
fn test_result_serde_shape() {
    let result = compress("fix it", None);
    let val = serde_json::to_value(&result).unwrap();
    assert_eq!(val["original"], "fix it");
    assert_eq!(val["compressed"], "Fix it");
    assert_eq!(val["mode"], "in-project");
    assert_eq!(val["tokenEstimate"], 2);
}

#[test]
fn test_compressor_concurrent() {
    let compressor = Arc::new(PromptCompressor::new());
    let expected = compressor.compress(SONG_REQUEST, None);
    std::thread::scope(|s| {
        for _ in 0..4 {
            let compressor = Arc::clone(&compressor);
            let expected = &expected;
            s.spawn(move || {
                assert_eq!(&compressor.compress(SONG_REQUEST, None), expected);
            });
        }
    });
}

// ========== Custom lexicon ==========

#[test]
fn test_custom_lexicon() {
    let spec = LexiconSpec {
        fillers: vec!["um".into()],
        shorthand: vec![("database".into(), "db".into())],
        ..LexiconSpec::default()
    };
    let compressor = PromptCompressor::with_lexicon(Lexicon::compile(&spec).unwrap());
    let result = compressor.compress("Um migrate the database please", Some(Mode::InProject));
    assert_eq!(result.compressed(), "Migrate the db please");
}

#[test]
fn test_custom_shorthand_chain_order() {
    let spec = LexiconSpec {
        shorthand: vec![
            ("a to b".into(), "x-y".into()),
            ("x-y".into(), "z".into()),
        ],
        ..LexiconSpec::default()
    };
    let compressor = PromptCompressor::with_lexicon(Lexicon::compile(&spec).unwrap());
    assert_eq!(compressor.apply_shorthand("map a to b"), "map z");
}

#[test]
fn test_custom_shorthand_literal_replacement() {
    let spec = LexiconSpec {
        shorthand: vec![("dollars".into(), "$".into())],
        ..LexiconSpec::default()
    };
    let compressor = PromptCompressor::with_lexicon(Lexicon::compile(&spec).unwrap());
    assert_eq!(compressor.apply_shorthand("5 dollars"), "5 $");
}

#[test]
fn test_custom_lexicon_skips_blank_entries() {
    let spec = LexiconSpec {
        fillers: vec!["".into(), "  ".into(), "um".into()],
        shorthand: vec![("".into(), "x".into())],
        ..LexiconSpec::default()
    };
    let lexicon = Lexicon::compile(&spec).unwrap();
    assert_eq!(lexicon.fillers().len(), 1);
    assert!(lexicon.shorthand().is_empty());
}

#[test]
fn test_custom_lexicon_oversized_phrase() {
    let spec = LexiconSpec {
        fillers: vec!["a".repeat(1 << 22)],
        ..LexiconSpec::default()
    };
    let err = Lexicon::compile(&spec).unwrap_err();
    assert!(matches!(err, yp_core::YpError::Lexicon(_)));
    assert!(err.to_string().len() < 1024);
}

#[test]
fn test_lexicon_spec_from_json() {
    let json = r#"{
        "fillers": ["yo"],
        "shorthand": [["per week", "/wk"]],
        "new_project_indicators": ["greenfield"],
        "action_verbs": ["ship"]
    }"#;
    let spec: LexiconSpec = serde_json::from_str(json).unwrap();
    let compressor = PromptCompressor::with_lexicon(Lexicon::compile(&spec).unwrap());
    assert_eq!(compressor.detect_mode("a Greenfield service"), Mode::NewProject);
    assert_eq!(compressor.detect_mode("a new project"), Mode::InProject);
    let result = compressor.compress("yo ship twice per week", None);
    assert_eq!(result.compressed(), "Ship twice /wk");
    assert_eq!(format::detect_action(result.compressed(), compressor.lexicon()), None);
    assert_eq!(format::detect_action("ship it", compressor.lexicon()), Some("ship"));
}

#[test]
fn test_default_spec_matches_tables() {
    let spec = LexiconSpec::default();
    assert_eq!(spec.fillers.len(), lexicon::FILLER_WORDS.len());
    assert_eq!(spec.shorthand.first().map(|(l, _)| l.as_str()), Some("per minute"));
    assert_eq!(spec.shorthand.last().map(|(l, s)| (l.as_str(), s.as_str())), Some(("every", "/")));
}
