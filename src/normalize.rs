use unicode_normalization::UnicodeNormalization;

/// Splits raw document text into lines with unified endings. Uses NFC
/// (canonical composition only) so code-block bodies stay verbatim.
pub fn split_lines(text: &str) -> Vec<String> {
    let text: String = text.nfc().collect();
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    text.split('\n').map(|l| l.to_string()).collect()
}
