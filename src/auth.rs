// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ValidationError;

/// The only code the mock verifier accepts. There is no real OTP
/// delivery; this exists for interface completeness.
pub const MOCK_OTP: &str = "123456";

const MIN_PHONE_DIGITS: usize = 10;

/// Login flow as an explicit state machine: a second code request
/// while one is pending is rejected instead of racing, and a wrong
/// code leaves the flow in `CodeSent` so the user can retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpFlow {
    Idle,
    CodeSent { phone: String },
    Verified { phone: String },
}

impl Default for OtpFlow {
    fn default() -> Self {
        OtpFlow::Idle
    }
}

impl OtpFlow {
    pub fn new() -> Self {
        OtpFlow::Idle
    }

    /// Normalizes the phone to its digits and moves to `CodeSent`.
    /// Only valid from `Idle`.
    pub fn request_code(&mut self, phone: &str) -> Result<(), ValidationError> {
        if !matches!(self, OtpFlow::Idle) {
            return Err(ValidationError::CodeAlreadySent);
        }
        let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
        if digits.len() < MIN_PHONE_DIGITS {
            return Err(ValidationError::InvalidPhone);
        }
        *self = OtpFlow::CodeSent { phone: digits };
        Ok(())
    }

    /// Re-issues the pending code. Only valid while a code is pending.
    pub fn resend(&mut self) -> Result<(), ValidationError> {
        match self {
            OtpFlow::CodeSent { .. } => Ok(()),
            _ => Err(ValidationError::NoCodePending),
        }
    }

    /// Checks the submitted code against the mock value. On success the
    /// flow moves to `Verified` and the identity is returned.
    pub fn verify(&mut self, code: &str) -> Result<String, ValidationError> {
        let phone = match self {
            OtpFlow::CodeSent { phone } => phone.clone(),
            _ => return Err(ValidationError::NoCodePending),
        };
        if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::MalformedOtp);
        }
        if code != MOCK_OTP {
            return Err(ValidationError::WrongOtp);
        }
        *self = OtpFlow::Verified {
            phone: phone.clone(),
        };
        Ok(phone)
    }

    pub fn identity(&self) -> Option<&str> {
        match self {
            OtpFlow::Verified { phone } => Some(phone),
            _ => None,
        }
    }
}
