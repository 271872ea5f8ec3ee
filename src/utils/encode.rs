use htmlentity::entity::{CharacterSet, EncodeType, ICodedDataTrait};

/// Escapes HTML-significant characters before a value is interpolated into
/// a rendered page.
pub(crate) fn encode(input: &str) -> String {
    htmlentity::entity::encode(
        input.as_bytes(),
        &EncodeType::NamedOrDecimal,
        &CharacterSet::SpecialChars,
    )
    .to_string()
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(encode("admin"), "admin");
    }

    #[test]
    fn markup_is_escaped() {
        let encoded = encode("<script>alert('hi')</script>");
        assert!(!encoded.contains('<'));
        assert!(!encoded.contains('>'));
    }
}
