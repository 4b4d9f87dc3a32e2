//! # WhatsApp Order Link
//!
//! Turns the formatted order message into a `wa.me` chat-initiation link.
//! The message travels as a URL-encoded `text` query parameter; the
//! destination phone number is configuration. Opening the link (browser,
//! QR code, copy-paste) is the caller's concern.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left bare inside the `text` parameter. Everything else is
/// percent-encoded, matching what `encodeURIComponent` produces.
const TEXT_PARAM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds the chat link for a destination phone number (international
/// format, digits only) and an order message. The message itself is passed
/// through unmodified apart from the encoding.
pub fn order_link(phone: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        phone,
        utf8_percent_encode(message, TEXT_PARAM)
    )
}
