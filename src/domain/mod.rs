//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    AcknowledgeVerification, CancelVerification, ResponseFormat, SendSms, SendVerification,
    SmsOptions, VerifyOptions,
};
pub use response::{
    AcknowledgeResponse, ApiError, CancelResponse, RejectedNumber, SendSmsResponse, SentSms,
    VerificationResponse,
};
pub use validation::ValidationError;
pub use value::{
    ApiKey, ApiSecret, CallbackMethod, CallbackUrl, CodeLength, Language, MessageText,
    NextEventWaitSeconds, PhoneNumber, PinExpireSeconds, Recipient, RequestId, SenderId, Tag,
    VerificationCode,
};
