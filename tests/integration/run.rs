use std::num::NonZeroU64;

use bigfib::bignum::BigNat;
use bigfib::fibonacci::{fibonacci, Arithmetic};
use bigfib::output::OutputError;
use bigfib::run;
use bigfib::util::config::RunConfig;

fn config(index: u64) -> RunConfig {
    RunConfig {
        index: NonZeroU64::new(index).unwrap(),
        ..RunConfig::default()
    }
}

#[test]
fn test_run_writes_f10() {
    let mut out = Vec::new();
    let summary = run(&config(10), &mut out).unwrap();
    assert_eq!(out, b"55\n");
    assert_eq!(summary.digits, 2);
    assert_eq!(summary.arithmetic, Arithmetic::Limbs);
    assert_eq!(summary.index.get(), 10);
}

#[test]
fn test_run_num_bigint_f100() {
    let config = RunConfig {
        arithmetic: Arithmetic::NumBigint,
        ..config(100)
    };
    let mut out = Vec::new();
    let summary = run(&config, &mut out).unwrap();
    assert_eq!(out, b"354224848179261915075\n");
    assert_eq!(summary.digits, 21);
}

#[test]
fn test_run_digit_limit_error_chain() {
    let config = RunConfig {
        max_digits: Some(208),
        ..config(1000)
    };
    let mut out = Vec::new();
    let err = run(&config, &mut out).unwrap_err();

    assert!(out.is_empty());
    assert_eq!(err.to_string(), "Failed to print F(1000)");
    assert!(matches!(
        err.downcast_ref::<OutputError>(),
        Some(OutputError::DigitLimitExceeded {
            digits: 209,
            limit: 208
        })
    ));
}

#[test]
fn test_printed_value_satisfies_recurrence() {
    let mut out = Vec::new();
    run(&config(3000), &mut out).unwrap();
    let printed: BigNat = String::from_utf8(out)
        .unwrap()
        .trim_end()
        .parse()
        .unwrap();

    let expected = &fibonacci(NonZeroU64::new(2999).unwrap())
        + &fibonacci(NonZeroU64::new(2998).unwrap());
    assert_eq!(printed, expected);
}

#[test]
#[ignore = "slow outside release builds; run with --release -- --ignored"]
fn test_f_one_million_satisfies_recurrence() {
    let mut out = Vec::new();
    let summary = run(&RunConfig::default(), &mut out).unwrap();
    assert_eq!(summary.digits, 208_988);

    let printed: BigNat = String::from_utf8(out)
        .unwrap()
        .trim_end()
        .parse()
        .unwrap();
    let expected = &fibonacci(NonZeroU64::new(999_999).unwrap())
        + &fibonacci(NonZeroU64::new(999_998).unwrap());
    assert_eq!(printed, expected);
}
