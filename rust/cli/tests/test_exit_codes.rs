//! Exit codes and stream discipline: results on stdout, errors on stderr.

use serial_test::serial;

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = hilo_cli::run(args, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
#[serial]
fn successful_commands_return_zero() {
    for args in [
        &["hilo", "chart"][..],
        &["hilo", "ev", "--hand", "16", "--up", "T"],
        &["hilo", "shoe", "--decks", "1"],
        &["hilo", "rng"],
        &["hilo", "cfg"],
    ] {
        let (code, out, err) = run(args);
        assert_eq!(code, 0, "{args:?}: {err}");
        assert!(!out.is_empty(), "{args:?} printed nothing");
        assert!(err.is_empty(), "{args:?} wrote to stderr: {err}");
    }
}

#[test]
#[serial]
fn invalid_count_returns_two() {
    let (code, out, err) = run(&["hilo", "chart", "--count", "-45"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.starts_with("Error: Engine error: True count -45"));
}

#[test]
fn bad_arguments_return_two() {
    let (code, out, err) = run(&["hilo", "ev", "--hand", "s25", "--up", "6"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("soft total must be between 12 and 21"));

    let (code, _, err) = run(&["hilo", "rng", "--seed", "-1"]);
    assert_eq!(code, 2);
    assert!(err.contains("Usage: hilo <command> [options]"));
}

#[test]
#[serial]
fn invalid_config_file_returns_two() {
    unsafe {
        std::env::set_var("HILO_CONFIG", "/nonexistent/hilo.toml");
    }
    let (code, out, err) = run(&["hilo", "chart"]);
    let (cfg_code, _, cfg_err) = run(&["hilo", "cfg"]);
    unsafe {
        std::env::remove_var("HILO_CONFIG");
    }

    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.starts_with("Error: Configuration error: cannot read config file"));
    assert_eq!(cfg_code, 2);
    assert!(cfg_err.starts_with("Error: Invalid configuration: cannot read config file"));
}

#[test]
fn version_flag_prints_to_stdout() {
    let (code, out, _) = run(&["hilo", "--version"]);
    assert_eq!(code, 0);
    assert!(out.starts_with("hilo "));
}
