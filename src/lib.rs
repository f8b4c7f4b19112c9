//! Typed Rust client for the Movider SMS and Verify HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for
//! wire-format details (form encoding, JSON/XML decoding), and a small client layer
//! orchestrating requests.
//!
//! ```rust,no_run
//! use movider::{Credentials, MessageText, MoviderClient, Recipient, SendSms, SmsOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), movider::MoviderError> {
//!     let client = MoviderClient::new(Credentials::new("key", "secret")?);
//!     let to = Recipient::new("66812345678")?;
//!     let text = MessageText::new("hello")?;
//!     let request = SendSms::new(vec![to], text, SmsOptions::default())?;
//!     let _resp = client.send_sms(request).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Credentials, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, MoviderClient, MoviderClientBuilder,
    MoviderError,
};
pub use domain::{
    AcknowledgeResponse, AcknowledgeVerification, ApiError, CallbackMethod, CallbackUrl,
    CancelResponse, CancelVerification, CodeLength, Language, MessageText, NextEventWaitSeconds,
    PhoneNumber, PinExpireSeconds, Recipient, RejectedNumber, RequestId, ResponseFormat, SendSms,
    SendSmsResponse, SendVerification, SenderId, SentSms, SmsOptions, Tag, ValidationError,
    VerificationCode, VerificationResponse, VerifyOptions,
};
