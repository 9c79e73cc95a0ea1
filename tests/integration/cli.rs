use std::process::{Command, Output};

fn bigfib(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bigfib"))
        .args(args)
        .env_remove("BIGFIB_LOG")
        .output()
        .expect("Failed to spawn bigfib")
}

fn stdout_of(args: &[&str]) -> String {
    let output = bigfib(args);
    assert!(
        output.status.success(),
        "bigfib {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is not UTF-8")
}

#[test]
fn test_index_10_prints_55() {
    assert_eq!(stdout_of(&["10"]), "55\n");
}

#[test]
fn test_index_1_prints_1() {
    assert_eq!(stdout_of(&["1"]), "1\n");
    assert_eq!(stdout_of(&["2"]), "1\n");
}

#[test]
fn test_index_1000_has_209_digits() {
    let text = stdout_of(&["1000"]);
    let digits = text.strip_suffix('\n').unwrap();
    assert_eq!(digits.len(), 209);
    assert!(digits.bytes().all(|b| b.is_ascii_digit()));
    assert!(!digits.starts_with('0'));
}

#[test]
fn test_arithmetics_print_the_same() {
    let limbs = stdout_of(&["2500", "--arithmetic", "limbs"]);
    let num_bigint = stdout_of(&["2500", "--arithmetic", "num-bigint"]);
    assert_eq!(limbs, num_bigint);
}

#[test]
fn test_repeated_runs_are_identical() {
    assert_eq!(stdout_of(&["777"]), stdout_of(&["777"]));
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    let output = bigfib(&["12", "--verbose"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "144\n");
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_zero_index_is_rejected() {
    let output = bigfib(&["0"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_digit_limit_aborts_before_output() {
    let output = bigfib(&["100", "--max-digits", "20"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("string conversion limit exceeded"), "{}", stderr);
}

#[test]
fn test_bad_log_env_is_reported() {
    let output = Command::new(env!("CARGO_BIN_EXE_bigfib"))
        .arg("5")
        .env("BIGFIB_LOG", "shouting")
        .output()
        .expect("Failed to spawn bigfib");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("BIGFIB_LOG"));
}

/// Full default run: F(1,000,000)
#[test]
#[ignore = "slow outside release builds; run with --release -- --ignored"]
fn test_default_index_prints_f_one_million() {
    let text = stdout_of(&[]);
    let digits = text.strip_suffix('\n').unwrap();
    assert_eq!(digits.len(), 208_988);
    assert!(digits.bytes().all(|b| b.is_ascii_digit()));
}
