//! Заглушка для блюд без фотографии

use once_cell::sync::Lazy;

/// Фиксированная SVG-картинка: тарелка с приборами и подпись.
pub const PLACEHOLDER_SVG: &str = concat!(
    r##"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="300" viewBox="0 0 400 300">"##,
    r##"<rect fill="#F7F0E8" width="400" height="300"/>"##,
    r##"<text fill="#B8895A" font-family="sans-serif" font-size="48" x="50%" y="45%" text-anchor="middle">🍽️</text>"##,
    r##"<text fill="#8B7B6B" font-family="sans-serif" font-size="14" x="50%" y="60%" text-anchor="middle">Фото скоро появится</text>"##,
    r##"</svg>"##,
);

static PLACEHOLDER_DATA_URI: Lazy<String> = Lazy::new(|| {
    format!(
        "data:image/svg+xml,{}",
        urlencoding::encode(PLACEHOLDER_SVG)
    )
});

/// `data:` URI заглушки, пригодный для `src` картинки
pub fn placeholder_data_uri() -> &'static str {
    PLACEHOLDER_DATA_URI.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_decodes_back_to_svg() {
        let uri = placeholder_data_uri();
        let payload = uri.strip_prefix("data:image/svg+xml,").unwrap();
        assert!(!payload.contains('<'));
        assert!(!payload.contains('#'));
        assert_eq!(urlencoding::decode(payload).unwrap(), PLACEHOLDER_SVG);
    }

    #[test]
    fn test_caption_present() {
        assert!(PLACEHOLDER_SVG.contains("Фото скоро появится"));
    }
}
