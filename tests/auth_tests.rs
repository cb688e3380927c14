// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::auth::{OtpFlow, MOCK_OTP};
use fintrack::error::ValidationError;

#[test]
fn short_phone_is_rejected() {
    let mut flow = OtpFlow::new();
    let err = flow.request_code("12345").unwrap_err();
    assert_eq!(err, ValidationError::InvalidPhone);
    assert_eq!(flow, OtpFlow::Idle);
}

#[test]
fn phone_is_normalized_to_digits() {
    let mut flow = OtpFlow::new();
    flow.request_code("+91 98765-43210").unwrap();
    let identity = flow.verify(MOCK_OTP).unwrap();
    assert_eq!(identity, "919876543210");
    assert_eq!(flow.identity(), Some("919876543210"));
}

#[test]
fn second_request_while_pending_is_rejected() {
    let mut flow = OtpFlow::new();
    flow.request_code("9876543210").unwrap();
    let err = flow.request_code("9876543210").unwrap_err();
    assert_eq!(err, ValidationError::CodeAlreadySent);
}

#[test]
fn verify_requires_a_pending_code() {
    let mut flow = OtpFlow::new();
    let err = flow.verify(MOCK_OTP).unwrap_err();
    assert_eq!(err, ValidationError::NoCodePending);
}

#[test]
fn malformed_code_is_rejected_before_comparison() {
    let mut flow = OtpFlow::new();
    flow.request_code("9876543210").unwrap();
    assert_eq!(flow.verify("12").unwrap_err(), ValidationError::MalformedOtp);
    assert_eq!(
        flow.verify("abcdef").unwrap_err(),
        ValidationError::MalformedOtp
    );
}

#[test]
fn wrong_code_allows_retry() {
    let mut flow = OtpFlow::new();
    flow.request_code("9876543210").unwrap();
    assert_eq!(flow.verify("000000").unwrap_err(), ValidationError::WrongOtp);
    // Still pending: a retry with the right code succeeds.
    assert_eq!(flow.verify(MOCK_OTP).unwrap(), "9876543210");
}

#[test]
fn resend_only_valid_while_pending() {
    let mut flow = OtpFlow::new();
    assert_eq!(flow.resend().unwrap_err(), ValidationError::NoCodePending);
    flow.request_code("9876543210").unwrap();
    flow.resend().unwrap();
    flow.verify(MOCK_OTP).unwrap();
    assert_eq!(flow.resend().unwrap_err(), ValidationError::NoCodePending);
}
