//! Integration tests for binary-level startup behavior.

use std::process::Command;

fn run_shelver(vars: &[(&str, &str)]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_shelver");
    Command::new(bin).env_clear().envs(vars.iter().copied()).output().expect("failed to run shelver binary")
}

#[test]
fn empty_environment_fails_before_any_remote_call() {
    let output = run_shelver(&[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("PARTNER_ID"));
}

#[test]
fn non_numeric_partner_id_is_rejected() {
    let output = run_shelver(&[("PARTNER_ID", "forty-two")]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Missing or invalid PARTNER_ID"));
}

#[test]
fn missing_admin_secret_is_rejected() {
    let output = run_shelver(&[("PARTNER_ID", "4242")]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("ADMIN_SECRET"));
}
