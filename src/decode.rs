use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use tracing::debug;

/// HTML bytes decoded into text, with the encoding that was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub encoding: &'static str,
    /// Set when malformed sequences were replaced with U+FFFD.
    pub had_errors: bool,
}

/// Decode raw HTML bytes of unknown encoding. A byte order mark wins;
/// otherwise the encoding is guessed from the content.
pub fn decode_html(bytes: &[u8]) -> Decoded {
    let encoding = match Encoding::for_bom(bytes) {
        Some((encoding, _)) => encoding,
        None => {
            let mut detector = EncodingDetector::new();
            detector.feed(bytes, true);
            detector.guess(None, true)
        }
    };

    // `decode` sniffs and strips the BOM itself.
    let (text, used, had_errors) = encoding.decode(bytes);
    debug!(encoding = used.name(), had_errors, len = bytes.len(), "html decoded");

    Decoded {
        text: text.into_owned(),
        encoding: used.name(),
        had_errors,
    }
}
