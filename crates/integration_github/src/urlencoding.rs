//! Percent-encoding for URL path segments and query values

/// Percent-encode a value for use in a URL
///
/// Leaves unreserved characters (`A-Z`, `a-z`, `0-9`, `-`, `_`, `.`, `~`)
/// untouched and encodes every other byte, including spaces.
pub fn encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            },
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
