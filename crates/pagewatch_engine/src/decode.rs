use chardetng::EncodingDetector;
use encoding_rs::Encoding;

/// Decode response bytes to UTF-8: BOM first, then the `Content-Type`
/// charset parameter, then chardetng detection.
///
/// Decoding is lossy: malformed bytes become U+FFFD instead of failing the
/// fetch.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> String {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(encoding) = content_type
        .and_then(extract_charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return decode_with(bytes, encoding);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    decode_with(bytes, detector.guess(None, true))
}

fn extract_charset(content_type: &str) -> Option<String> {
    const KEY: &str = "charset=";
    content_type.split(';').find_map(|part| {
        let part = part.trim();
        let prefix = part.get(..KEY.len())?;
        if !prefix.eq_ignore_ascii_case(KEY) {
            return None;
        }
        let value = part[KEY.len()..].trim_matches([' ', '"', '\''].as_ref());
        (!value.is_empty()).then(|| value.to_string())
    })
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> String {
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}
