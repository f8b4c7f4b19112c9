use crate::domain::validation::ValidationError;

use phonenumber::country;
use secrecy::{ExposeSecret, SecretString};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Movider `api_key`.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Form field name used by Movider (`api_key`).
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
/// Movider `api_secret`.
///
/// Invariant: non-empty after trimming. The value is redacted from `Debug` output.
pub struct ApiSecret(SecretString);

impl ApiSecret {
    /// Form field name used by Movider (`api_secret`).
    pub const FIELD: &'static str = "api_secret";

    /// Create a validated [`ApiSecret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(SecretString::from(trimmed.to_owned())))
    }

    /// Expose the secret for inclusion in a request body.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Phone number as sent to Movider (`to`).
///
/// Invariant: non-empty after trimming and free of the `,` recipient separator. No
/// normalization is applied; parse into [`PhoneNumber`] and convert if you want one.
pub struct Recipient(String);

impl Recipient {
    /// Form field name used by Movider (`to`).
    pub const FIELD: &'static str = "to";

    /// Separator used when several recipients share the `to` field.
    pub const SEPARATOR: char = ',';

    /// Create a validated recipient holding exactly one number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if trimmed.contains(Self::SEPARATOR) {
            return Err(ValidationError::ContainsSeparator {
                field: Self::FIELD,
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to Movider.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for Recipient {
    /// International format without the leading `+` (`66812345678`).
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164.trim_start_matches('+').to_owned())
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Form field name used by Movider (`to`).
    pub const FIELD: &'static str = "to";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`text`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Form field name used by Movider (`text`).
    pub const FIELD: &'static str = "text";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender name or number (`from`), e.g. `MOVIDER` or `MVDVERIFY`.
///
/// Invariant: non-empty after trimming.
pub struct SenderId(String);

impl SenderId {
    /// Form field name used by Movider (`from`).
    pub const FIELD: &'static str = "from";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Free-form label used to group requests in Movider reports (`tag`).
///
/// Invariant: non-empty after trimming.
pub struct Tag(String);

impl Tag {
    /// Form field name used by Movider (`tag`).
    pub const FIELD: &'static str = "tag";

    /// Create a validated [`Tag`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Webhook receiving delivery reports (`callback_url`).
///
/// Overrides the webhook configured in the Movider dashboard.
pub struct CallbackUrl(url::Url);

impl CallbackUrl {
    /// Form field name used by Movider (`callback_url`).
    pub const FIELD: &'static str = "callback_url";

    /// Parse an absolute callback URL.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let url = url::Url::parse(value).map_err(|_| ValidationError::InvalidUrl {
            field: Self::FIELD,
            input: value.to_owned(),
        })?;
        Ok(Self(url))
    }

    /// Borrow the URL as sent to Movider.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// HTTP method Movider uses to call the webhook (`callback_method`).
pub enum CallbackMethod {
    #[default]
    Get,
    Post,
}

impl CallbackMethod {
    /// Form field name used by Movider (`callback_method`).
    pub const FIELD: &'static str = "callback_method";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Verification request id (`request_id`) returned by `verify`.
///
/// Invariant: non-empty after trimming.
pub struct RequestId(String);

impl RequestId {
    /// Form field name used by Movider (`request_id`).
    pub const FIELD: &'static str = "request_id";

    /// Create a validated [`RequestId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated request id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Code the end user received and typed back (`code`).
///
/// Invariant: non-empty after trimming.
pub struct VerificationCode(String);

impl VerificationCode {
    /// Form field name used by Movider (`code`).
    pub const FIELD: &'static str = "code";

    /// Create a validated [`VerificationCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Length of the generated verification code (`code_length`).
pub enum CodeLength {
    Four,
    Six,
}

impl CodeLength {
    /// Form field name used by Movider (`code_length`).
    pub const FIELD: &'static str = "code_length";

    /// Accepts only 4 or 6.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        match value {
            4 => Ok(Self::Four),
            6 => Ok(Self::Six),
            actual => Err(ValidationError::InvalidCodeLength { actual }),
        }
    }

    pub fn value(self) -> u8 {
        match self {
            Self::Four => 4,
            Self::Six => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Language of the verification message template (`language`).
pub enum Language {
    EnGb,
    EnUs,
    ThTh,
}

impl Language {
    /// Form field name used by Movider (`language`).
    pub const FIELD: &'static str = "language";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::EnGb => "en-gb",
            Self::EnUs => "en-us",
            Self::ThTh => "th-th",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Lifetime of the verification code in seconds (`pin_expire`).
///
/// Invariant: `120..=600`.
pub struct PinExpireSeconds(u32);

impl PinExpireSeconds {
    /// Form field name used by Movider (`pin_expire`).
    pub const FIELD: &'static str = "pin_expire";

    /// Minimum allowed lifetime.
    pub const MIN: u32 = 120;
    /// Maximum allowed lifetime.
    pub const MAX: u32 = 600;

    /// Create a validated lifetime.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Seconds Movider waits before calling the recipient with the code (`next_event_wait`).
///
/// Must fall inside the `pin_expire` window; the server checks that, not this crate.
pub struct NextEventWaitSeconds(u32);

impl NextEventWaitSeconds {
    /// Form field name used by Movider (`next_event_wait`).
    pub const FIELD: &'static str = "next_event_wait";

    /// Zero is rejected because it is the wire value for "server default".
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: 1,
                max: u32::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}
