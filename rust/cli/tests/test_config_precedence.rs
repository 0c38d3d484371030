//! Configuration precedence: default < file < env < flags.

use serde_json::Value;
use serial_test::serial;
use std::io::Write;

const VARS: &[&str] = &[
    "HILO_CONFIG",
    "HILO_DECKS",
    "HILO_SEED",
    "HILO_COUNT",
    "HILO_DAS",
    "HILO_RESPLIT",
    "HILO_H17",
    "HILO_PEEK",
];

fn clear_env() {
    for var in VARS {
        unsafe {
            std::env::remove_var(var);
        }
    }
}

fn cfg_json() -> Value {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = hilo_cli::run(["hilo", "cfg"], &mut out, &mut err);
    assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));
    serde_json::from_slice(&out).unwrap()
}

#[test]
#[serial]
fn defaults() {
    clear_env();
    let json = cfg_json();
    assert_eq!(json["decks"]["value"], 6);
    assert_eq!(json["decks"]["source"], "default");
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["count"]["value"], 0.0);
    assert_eq!(json["hole_card_peek"]["value"], false);
    assert_eq!(json["options"], 0);
}

#[test]
#[serial]
fn file_then_env() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "decks = 4\nseed = 99\ndouble_after_split = true\nhole_card_peek = true"
    )
    .unwrap();
    unsafe {
        std::env::set_var("HILO_CONFIG", file.path());
        std::env::set_var("HILO_SEED", "7");
        std::env::set_var("HILO_COUNT", "-1.5");
    }
    let json = cfg_json();
    clear_env();

    assert_eq!(json["decks"]["value"], 4);
    assert_eq!(json["decks"]["source"], "file");
    assert_eq!(json["seed"]["value"], 7);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["count"]["value"], -1.5);
    assert_eq!(json["count"]["source"], "env");
    assert_eq!(json["double_after_split"]["source"], "file");
    assert_eq!(json["resplit"]["source"], "default");
    assert_eq!(json["options"], 0b1001);
}

#[test]
#[serial]
fn flags_override_env_count() {
    clear_env();
    unsafe {
        std::env::set_var("HILO_COUNT", "30");
    }
    let run_ev = |extra: &[&str]| {
        let mut args = vec!["hilo", "ev", "--hand", "16", "--up", "T", "--json"];
        args.extend_from_slice(extra);
        let mut out = Vec::new();
        let mut err = Vec::new();
        assert_eq!(hilo_cli::run(args, &mut out, &mut err), 0);
        serde_json::from_slice::<Value>(&out).unwrap()
    };
    let from_env = run_ev(&[]);
    let from_flag = run_ev(&["--count", "0"]);
    clear_env();

    assert_eq!(from_env["count"], 30.0);
    assert_eq!(from_flag["count"], 0.0);
}

#[test]
#[serial]
fn flags_clear_rules_enabled_in_env() {
    clear_env();
    unsafe {
        std::env::set_var("HILO_RESPLIT", "1");
        std::env::set_var("HILO_PEEK", "1");
    }
    let chart_rules = |extra: &[&str]| {
        let mut args = vec!["hilo", "chart", "--json"];
        args.extend_from_slice(extra);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = hilo_cli::run(args, &mut out, &mut err);
        assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));
        serde_json::from_slice::<Value>(&out).unwrap()["rules"].clone()
    };
    let from_env = chart_rules(&[]);
    let cleared = chart_rules(&["--no-resplit"]);
    let toggled = chart_rules(&["--no-peek", "--peek", "--no-resplit", "--h17"]);
    clear_env();

    assert_eq!(from_env["resplit"], true);
    assert_eq!(from_env["hole_card_peek"], true);
    assert_eq!(cleared["resplit"], false);
    assert_eq!(cleared["hole_card_peek"], true);
    assert_eq!(toggled["resplit"], false);
    assert_eq!(toggled["hole_card_peek"], true);
    assert_eq!(toggled["dealer_hits_soft_17"], true);
}
