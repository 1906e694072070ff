//! URL percent-encoding helpers
//!
//! Request paths arrive percent-encoded; listing links are written back the
//! same way.

/// Decode `%XX` escapes in a request path
///
/// Malformed escapes are kept literally. Byte sequences that are not valid
/// UTF-8 after decoding are replaced with U+FFFD.
pub fn percent_decode(input: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(input.as_bytes())).into_owned()
}

/// Encode a path for use in an `href`, segment by segment so `/` survives
pub fn percent_encode_path(input: &str) -> String {
    input
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
