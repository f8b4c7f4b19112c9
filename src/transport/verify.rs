use serde::Deserialize;

use super::format::{TransportError, decode_body, request_id_field};
use crate::domain::{
    AcknowledgeResponse, AcknowledgeVerification, CancelResponse, CancelVerification, CodeLength,
    Language, NextEventWaitSeconds, PinExpireSeconds, Recipient, RequestId, ResponseFormat,
    SendVerification, SenderId, Tag, VerificationCode, VerificationResponse,
};

#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
struct VerificationWireResponse {
    request_id: String,
    number: String,
}

#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
struct AcknowledgeWireResponse {
    request_id: String,
    price: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
struct CancelWireResponse {
    request_id: String,
}

pub fn encode_send_verification_form(request: &SendVerification) -> Vec<(String, String)> {
    let options = request.options();

    // Zero and empty are the server's "use default" values.
    vec![
        (
            CodeLength::FIELD.to_owned(),
            options
                .code_length
                .map_or(0, CodeLength::value)
                .to_string(),
        ),
        (
            Language::FIELD.to_owned(),
            options
                .language
                .map(Language::as_str)
                .unwrap_or_default()
                .to_owned(),
        ),
        (
            NextEventWaitSeconds::FIELD.to_owned(),
            options
                .next_event_wait
                .map_or(0, NextEventWaitSeconds::value)
                .to_string(),
        ),
        (
            PinExpireSeconds::FIELD.to_owned(),
            options
                .pin_expire
                .map_or(0, PinExpireSeconds::value)
                .to_string(),
        ),
        (
            Tag::FIELD.to_owned(),
            options
                .tag
                .as_ref()
                .map(Tag::as_str)
                .unwrap_or_default()
                .to_owned(),
        ),
        (Recipient::FIELD.to_owned(), request.to().raw().to_owned()),
        (
            SenderId::FIELD.to_owned(),
            options
                .from
                .as_ref()
                .map(SenderId::as_str)
                .unwrap_or_default()
                .to_owned(),
        ),
    ]
}

pub fn encode_acknowledge_form(request: &AcknowledgeVerification) -> Vec<(String, String)> {
    vec![
        (
            RequestId::FIELD.to_owned(),
            request.request_id().as_str().to_owned(),
        ),
        (
            VerificationCode::FIELD.to_owned(),
            request.code().as_str().to_owned(),
        ),
    ]
}

pub fn encode_cancel_form(request: &CancelVerification) -> Vec<(String, String)> {
    vec![(
        RequestId::FIELD.to_owned(),
        request.request_id().as_str().to_owned(),
    )]
}

pub fn decode_verification_response(
    format: ResponseFormat,
    body: &str,
) -> Result<VerificationResponse, TransportError> {
    let parsed: VerificationWireResponse = decode_body(format, body)?;
    Ok(VerificationResponse {
        request_id: request_id_field(parsed.request_id)?,
        number: parsed.number,
    })
}

pub fn decode_acknowledge_response(
    format: ResponseFormat,
    body: &str,
) -> Result<AcknowledgeResponse, TransportError> {
    let parsed: AcknowledgeWireResponse = decode_body(format, body)?;
    Ok(AcknowledgeResponse {
        request_id: request_id_field(parsed.request_id)?,
        price: parsed.price,
    })
}

pub fn decode_cancel_response(
    format: ResponseFormat,
    body: &str,
) -> Result<CancelResponse, TransportError> {
    let parsed: CancelWireResponse = decode_body(format, body)?;
    Ok(CancelResponse {
        request_id: request_id_field(parsed.request_id)?,
    })
}
