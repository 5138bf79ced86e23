//! CLI tests for the vehicle, phone, purchase and todo commands.

mod common;

use common::TestEnv;

#[test]
fn help_lists_commands() {
    let env = TestEnv::new();
    let result = env.run(&["--help"]);

    assert!(result.is_success());
    for command in ["area", "range", "phone", "pay", "todo"] {
        assert!(result.stdout.contains(command), "missing {command}");
    }
}

#[test]
fn area_help_mentions_descriptors() {
    let env = TestEnv::new();
    let result = env.run(&["area", "--help"]);

    assert!(result.is_success());
    assert!(result.stdout.contains("DESCRIPTOR"));
    assert!(result.stdout.contains("--total"));
}

#[test]
fn range_standard_and_hybrid() {
    let env = TestEnv::new();

    let standard = env.run(&["--precision", "0", "range", "--capacity", "10", "--efficiency", "15"]);
    assert!(standard.is_success(), "stderr: {}", standard.stderr);
    assert_eq!(standard.stdout, "standard 150\n");

    let hybrid = env.run(&[
        "--precision",
        "0",
        "range",
        "--capacity",
        "10",
        "--efficiency",
        "15",
        "--electric",
        "50",
    ]);
    assert!(hybrid.is_success(), "stderr: {}", hybrid.stderr);
    assert_eq!(hybrid.stdout, "hybrid 200\n");
}

#[test]
fn range_rejects_negative_capacity() {
    let env = TestEnv::new();
    let result = env.run(&["range", "--capacity", "-1", "--efficiency", "15"]);

    assert!(!result.is_success());
    assert!(result.stdout.is_empty());
}

#[test]
fn feature_phone_reports_missing_camera() {
    let env = TestEnv::new();
    let result = env.run(&["phone", "feature", "--call", "555-0100", "--photo"]);

    assert!(result.is_success(), "stderr: {}", result.stderr);
    let lines = result.lines();
    assert_eq!(lines[0], "model: Nokia 3310");
    assert_eq!(lines[1], "capabilities: call");
    assert!(lines[2].starts_with("call: ok"));
    assert!(lines[3].starts_with("camera: unsupported"));
}

#[test]
fn smartphone_does_everything() {
    let env = TestEnv::new();
    let result = env.run(&["phone", "smartphone", "--photo", "--wifi", "home"]);

    assert!(result.is_success(), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("capabilities: call, camera, wifi"));
    assert!(result.stdout.contains("camera: ok"));
    assert!(result.stdout.contains("wifi: ok (joined home)"));
}

#[test]
fn phone_rejects_bad_number() {
    let env = TestEnv::new();
    let result = env.run(&["phone", "smartphone", "--call", "not-a-number"]);

    assert!(!result.is_success());
}

#[test]
fn pay_approve_and_decline() {
    let env = TestEnv::new();

    let approved = env.run(&["pay", "--amount", "12.5"]);
    assert!(approved.is_success(), "stderr: {}", approved.stderr);
    assert_eq!(approved.stdout, "approved 12.50 via approve\n");

    let declined = env.run(&["pay", "--amount", "12.5", "--processor", "decline"]);
    assert!(declined.is_success(), "stderr: {}", declined.stderr);
    assert_eq!(declined.stdout, "declined 12.50 via decline\n");
}

#[test]
fn pay_limit_processor() {
    let env = TestEnv::new();

    let within = env.run(&["pay", "--amount", "10", "--processor", "limit", "--limit", "10"]);
    assert_eq!(within.stdout, "approved 10.00 via limit\n");

    let over = env.run(&["pay", "--amount", "10.01", "--processor", "limit", "--limit", "10"]);
    assert_eq!(over.stdout, "declined 10.01 via limit\n");

    let missing = env.run(&["pay", "--amount", "1", "--processor", "limit"]);
    assert!(!missing.is_success());
}

#[test]
fn pay_zero_amount_fails() {
    let env = TestEnv::new();
    let result = env.run(&["pay", "--amount", "0"]);

    assert!(!result.is_success());
    assert!(result.stdout.is_empty());
}

#[test]
fn todo_adds_and_removes() {
    let env = TestEnv::new();
    let result = env.run(&["todo", "milk", "eggs", "bread", "--remove", "1", "--list", "shop"]);

    assert!(result.is_success(), "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "shop: milk,bread\n");
}

#[test]
fn todo_json() {
    let env = TestEnv::new();
    let result = env.run(&["--json", "todo", "a", "b"]);

    assert!(result.is_success(), "stderr: {}", result.stderr);
    let event: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
    assert_eq!(event["event"], "todo");
    assert_eq!(event["list"], "default");
    assert_eq!(event["items"], serde_json::json!(["a", "b"]));
}

#[test]
fn pay_reference_is_reported() {
    let env = TestEnv::new();

    let text = env.run(&["pay", "--amount", "5", "--reference", "order-7"]);
    assert!(text.is_success(), "stderr: {}", text.stderr);
    assert_eq!(text.stdout, "approved 5.00 via approve (ref order-7)\n");

    let json = env.run(&["--json", "pay", "--amount", "5", "--reference", "order-7"]);
    let event: serde_json::Value = serde_json::from_str(json.stdout.trim()).unwrap();
    assert_eq!(event["reference"], "order-7");
}
