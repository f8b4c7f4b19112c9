//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod format;
mod sms;
mod verify;

pub use format::{TransportError, decode_api_error};
pub use sms::{decode_send_sms_response, encode_send_sms_form};
pub use verify::{
    decode_acknowledge_response, decode_cancel_response, decode_verification_response,
    encode_acknowledge_form, encode_cancel_form, encode_send_verification_form,
};
