use std::fmt;

use crate::domain::value::RequestId;

#[derive(Debug, Clone, PartialEq)]
pub struct SendSmsResponse {
    pub remaining_balance: f64,
    pub total_sms: u32,
    pub phone_number_list: Vec<SentSms>,
    pub bad_phone_number_list: Vec<RejectedNumber>,
}

/// A recipient the message was accepted for.
#[derive(Debug, Clone, PartialEq)]
pub struct SentSms {
    pub number: String,
    pub message_id: String,
    pub price: f64,
}

/// A recipient Movider refused, with the reason it gave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedNumber {
    pub number: String,
    pub msg: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResponse {
    pub request_id: RequestId,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AcknowledgeResponse {
    pub request_id: RequestId,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelResponse {
    pub request_id: RequestId,
}

/// Error body returned by Movider for any non-200 response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: i32,
    pub name: String,
    pub description: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.name)?;
        if !self.description.is_empty() {
            write!(f, ": {}", self.description)?;
        }
        Ok(())
    }
}
