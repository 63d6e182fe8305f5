use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// Same unreserved set as JavaScript's encodeURIComponent.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn string_to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

pub fn url_encode(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}
