// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// User-input failures. None of these are fatal: the operation simply
/// does not proceed and the message is shown inline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Amount must be a positive number")]
    NonPositiveAmount,
    #[error("Please provide a description for 'Other' expenses")]
    NoteRequired,
    #[error("Please enter a valid mobile number")]
    InvalidPhone,
    #[error("OTP must be 6 digits")]
    MalformedOtp,
    #[error("Invalid OTP. Hint: Use 123456")]
    WrongOtp,
    #[error("A code is already pending for this login")]
    CodeAlreadySent,
    #[error("No code has been requested yet")]
    NoCodePending,
}
