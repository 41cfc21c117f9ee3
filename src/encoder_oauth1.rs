use percent_encoding::{utf8_percent_encode, AsciiSet};
use std::borrow::Cow;

// https://tools.ietf.org/html/rfc5849#section-3.6
// * ALPHA, DIGIT, '-', '.', '_', '~' MUST NOT be encoded.
// * All other characters MUST be encoded.
// * The two hexadecimal characters used to represent encoded
//   characters MUST be uppercase.
const TARGETS_FOR_PARAMS: &AsciiSet = &percent_encoding::NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode `value` for use in signature material and headers.
pub fn encode(value: &str) -> String {
    encode_cow(value).into_owned()
}

/// Same as [`encode`], borrowing when nothing needs escaping.
pub fn encode_cow(value: &str) -> Cow<'_, str> {
    utf8_percent_encode(value, TARGETS_FOR_PARAMS).into()
}
