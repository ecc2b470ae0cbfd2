/// Mail-composition link construction.
///
/// Building the `mailto:` URL is the whole contact action; the app never
/// talks to a mail server itself.

/// Percent-encode a query component (RFC 3986 unreserved characters pass
/// through, everything else is escaped byte-wise).
fn encode_component(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

/// `mailto:` link with a fixed recipient and subject.
pub fn mailto_link(email: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", email, encode_component(subject))
}
