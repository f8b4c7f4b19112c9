use crate::domain::validation::ValidationError;
use crate::domain::value::{
    CallbackMethod, CallbackUrl, CodeLength, Language, MessageText, NextEventWaitSeconds,
    PinExpireSeconds, Recipient, RequestId, SenderId, Tag, VerificationCode,
};

/// Response body format requested through the `Accept` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
}

impl ResponseFormat {
    /// Value of the `Accept` header for this format.
    pub fn accept(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
        }
    }
}

/// Optional parameters of `sms`. Unset fields are sent empty and the server default applies.
#[derive(Debug, Clone, Default)]
pub struct SmsOptions {
    pub callback_url: Option<CallbackUrl>,
    pub callback_method: Option<CallbackMethod>,
    pub from: Option<SenderId>,
    pub tag: Option<Tag>,
}

#[derive(Debug, Clone)]
pub struct SendSms {
    recipients: Vec<Recipient>,
    text: MessageText,
    options: SmsOptions,
}

impl SendSms {
    /// Build an SMS request for one or more recipients.
    ///
    /// Fails with [`ValidationError::Empty`] when `recipients` is empty.
    pub fn new(
        recipients: Vec<Recipient>,
        text: MessageText,
        options: SmsOptions,
    ) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: Recipient::FIELD,
            });
        }
        Ok(Self {
            recipients,
            text,
            options,
        })
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn options(&self) -> &SmsOptions {
        &self.options
    }
}

/// Optional parameters of `verify`. Unset numeric fields are sent as `0` (server default).
#[derive(Debug, Clone, Default)]
pub struct VerifyOptions {
    pub code_length: Option<CodeLength>,
    pub language: Option<Language>,
    pub next_event_wait: Option<NextEventWaitSeconds>,
    pub pin_expire: Option<PinExpireSeconds>,
    pub from: Option<SenderId>,
    pub tag: Option<Tag>,
}

#[derive(Debug, Clone)]
pub struct SendVerification {
    to: Recipient,
    options: VerifyOptions,
}

impl SendVerification {
    pub fn new(to: Recipient, options: VerifyOptions) -> Self {
        Self { to, options }
    }

    pub fn to(&self) -> &Recipient {
        &self.to
    }

    pub fn options(&self) -> &VerifyOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
pub struct AcknowledgeVerification {
    request_id: RequestId,
    code: VerificationCode,
}

impl AcknowledgeVerification {
    pub fn new(request_id: RequestId, code: VerificationCode) -> Self {
        Self { request_id, code }
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    pub fn code(&self) -> &VerificationCode {
        &self.code
    }
}

#[derive(Debug, Clone)]
pub struct CancelVerification {
    request_id: RequestId,
}

impl CancelVerification {
    pub fn new(request_id: RequestId) -> Self {
        Self { request_id }
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }
}
