//! Configuration layering: defaults < file < env < CLI flags.
//!
//! Every test mutates process environment, so all of them run serially.

use serde_json::Value;
use serial_test::serial;
use std::io::Write;

const VARS: [&str; 5] = [
    "HOLDEM_CONFIG",
    "HOLDEM_SEED",
    "HOLDEM_STARTING_STACK",
    "HOLDEM_SMALL_BLIND",
    "HOLDEM_BIG_BLIND",
];

fn clear_env() {
    for var in VARS {
        unsafe {
            std::env::remove_var(var);
        }
    }
}

fn set_env(key: &str, value: &str) {
    unsafe {
        std::env::set_var(key, value);
    }
}

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut argv = vec!["holdem"];
    argv.extend_from_slice(args);
    let code = holdem_cli::run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn cfg_json() -> Value {
    let (code, out, err) = run(&["cfg"]);
    assert_eq!(code, 0, "stderr: {}", err);
    serde_json::from_str(&out).expect("cfg prints JSON")
}

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn defaults_when_nothing_is_set() {
    clear_env();
    let json = cfg_json();
    assert_eq!(json["starting_stack"]["value"].as_u64(), Some(1000));
    assert_eq!(json["starting_stack"]["source"].as_str(), Some("default"));
    assert_eq!(json["small_blind"]["value"].as_u64(), Some(10));
    assert_eq!(json["big_blind"]["value"].as_u64(), Some(20));
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["seed"]["source"].as_str(), Some("default"));
}

#[test]
#[serial]
fn file_overrides_defaults() {
    clear_env();
    let file = config_file("starting_stack = 500\nseed = 456\n");
    set_env("HOLDEM_CONFIG", file.path().to_str().unwrap());

    let json = cfg_json();
    assert_eq!(json["starting_stack"]["value"].as_u64(), Some(500));
    assert_eq!(json["starting_stack"]["source"].as_str(), Some("file"));
    assert_eq!(json["seed"]["value"].as_u64(), Some(456));
    assert_eq!(json["seed"]["source"].as_str(), Some("file"));
    assert_eq!(json["big_blind"]["source"].as_str(), Some("default"));
    clear_env();
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let file = config_file("seed = 456\nbig_blind = 40\n");
    set_env("HOLDEM_CONFIG", file.path().to_str().unwrap());
    set_env("HOLDEM_SEED", "789");

    let json = cfg_json();
    assert_eq!(json["seed"]["value"].as_u64(), Some(789));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["big_blind"]["value"].as_u64(), Some(40));
    assert_eq!(json["big_blind"]["source"].as_str(), Some("file"));
    clear_env();
}

#[test]
#[serial]
fn cli_seed_overrides_env() {
    clear_env();
    set_env("HOLDEM_SEED", "789");

    let (code, out, _) = run(&["deal", "--seed", "5"]);
    assert_eq!(code, 0);
    assert!(out.starts_with("deal: seed=5 "), "{}", out);

    let (code, out, _) = run(&["deal"]);
    assert_eq!(code, 0);
    assert!(out.starts_with("deal: seed=789 "), "{}", out);
    clear_env();
}

#[test]
#[serial]
fn env_blinds_reach_the_table() {
    clear_env();
    set_env("HOLDEM_SMALL_BLIND", "25");
    set_env("HOLDEM_BIG_BLIND", "50");

    let (code, out, _) = run(&["sim", "--hands", "1", "--seed", "3", "--json", "--bot", "calling"]);
    assert_eq!(code, 0);
    let hand: Value = serde_json::from_str(out.lines().next().unwrap()).unwrap();
    // calling stations limp and check down, so the pot is two big blinds
    assert_eq!(hand["pot"].as_u64(), Some(100));
    clear_env();
}

#[test]
#[serial]
fn invalid_blinds_are_a_config_error() {
    clear_env();
    set_env("HOLDEM_SMALL_BLIND", "30");
    set_env("HOLDEM_BIG_BLIND", "20");

    let (code, out, err) = run(&["cfg"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Configuration error"), "{}", err);
    clear_env();
}

#[test]
#[serial]
fn malformed_env_number_is_rejected() {
    clear_env();
    set_env("HOLDEM_STARTING_STACK", "lots");

    let (code, _, err) = run(&["cfg"]);
    assert_eq!(code, 2);
    assert!(err.contains("HOLDEM_STARTING_STACK"), "{}", err);
    clear_env();
}

#[test]
#[serial]
fn unknown_file_keys_are_rejected() {
    clear_env();
    let file = config_file("ante = 5\n");
    set_env("HOLDEM_CONFIG", file.path().to_str().unwrap());

    let (code, _, err) = run(&["cfg"]);
    assert_eq!(code, 2);
    assert!(err.contains("cannot parse config file"), "{}", err);
    clear_env();
}
