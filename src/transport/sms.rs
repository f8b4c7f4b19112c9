use serde::Deserialize;

use super::format::{TransportError, decode_body};
use crate::domain::{
    CallbackMethod, CallbackUrl, MessageText, Recipient, RejectedNumber, ResponseFormat, SendSms,
    SendSmsResponse, SenderId, SentSms, Tag,
};

#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
struct SendSmsWireResponse {
    remaining_balance: f64,
    total_sms: u32,
    #[serde(default)]
    phone_number_list: Vec<SentSmsWire>,
    #[serde(default)]
    bad_phone_number_list: Vec<RejectedNumberWire>,
}

#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
struct SentSmsWire {
    number: String,
    message_id: String,
    price: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
struct RejectedNumberWire {
    number: String,
    #[serde(default)]
    msg: String,
}

pub fn encode_send_sms_form(request: &SendSms) -> Vec<(String, String)> {
    let options = request.options();
    let to = request
        .recipients()
        .iter()
        .map(Recipient::raw)
        .collect::<Vec<_>>()
        .join(&Recipient::SEPARATOR.to_string());

    vec![
        (
            CallbackUrl::FIELD.to_owned(),
            options
                .callback_url
                .as_ref()
                .map(CallbackUrl::as_str)
                .unwrap_or_default()
                .to_owned(),
        ),
        (
            CallbackMethod::FIELD.to_owned(),
            options
                .callback_method
                .map(CallbackMethod::as_str)
                .unwrap_or_default()
                .to_owned(),
        ),
        (
            SenderId::FIELD.to_owned(),
            options
                .from
                .as_ref()
                .map(SenderId::as_str)
                .unwrap_or_default()
                .to_owned(),
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
        (
            MessageText::FIELD.to_owned(),
            request.text().as_str().to_owned(),
        ),
        (Recipient::FIELD.to_owned(), to),
    ]
}

pub fn decode_send_sms_response(
    format: ResponseFormat,
    body: &str,
) -> Result<SendSmsResponse, TransportError> {
    let parsed: SendSmsWireResponse = decode_body(format, body)?;

    Ok(SendSmsResponse {
        remaining_balance: parsed.remaining_balance,
        total_sms: parsed.total_sms,
        phone_number_list: parsed
            .phone_number_list
            .into_iter()
            .map(|it| SentSms {
                number: it.number,
                message_id: it.message_id,
                price: it.price,
            })
            .collect(),
        bad_phone_number_list: parsed
            .bad_phone_number_list
            .into_iter()
            .map(|it| RejectedNumber {
                number: it.number,
                msg: it.msg,
            })
            .collect(),
    })
}
