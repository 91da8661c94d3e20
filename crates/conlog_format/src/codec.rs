//! Conversion between UTF-8 narrow text and UTF-16 wide text.

use std::fmt;

/// Errors produced when decoding wide text back into UTF-8.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The UTF-16 input contained an unpaired surrogate.
    #[error("invalid UTF-16 text: {0}")]
    InvalidUtf16(#[from] std::string::FromUtf16Error),
}

/// An owned UTF-16 string.
///
/// Wide text is kept as raw code units so that it can be handed to console
/// APIs that expect wide characters without another conversion.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct WideString {
    units: Vec<u16>,
}

impl WideString {
    /// Creates an empty wide string.
    pub fn new() -> Self {
        Self { units: Vec::new() }
    }

    /// Wraps existing UTF-16 code units without validating them.
    pub fn from_units(units: Vec<u16>) -> Self {
        Self { units }
    }

    /// Returns the UTF-16 code units.
    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    /// Returns a borrowed view of this string.
    pub fn as_wide_str(&self) -> WideStr<'_> {
        WideStr::new(&self.units)
    }

    /// Consumes the string and returns its code units.
    pub fn into_units(self) -> Vec<u16> {
        self.units
    }

    /// Returns the number of UTF-16 code units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if the string holds no code units.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Removes every NUL code unit in place.
    pub fn strip_nul(&mut self) {
        self.units.retain(|&unit| unit != 0);
    }

    /// Decodes back to UTF-8, failing on unpaired surrogates.
    pub fn to_narrow(&self) -> Result<String, CodecError> {
        to_narrow(&self.units)
    }

    /// Decodes back to UTF-8, replacing invalid sequences with U+FFFD.
    pub fn to_narrow_lossy(&self) -> String {
        to_narrow_lossy(&self.units)
    }
}

impl From<&str> for WideString {
    fn from(text: &str) -> Self {
        to_wide(text)
    }
}

impl From<Vec<u16>> for WideString {
    fn from(units: Vec<u16>) -> Self {
        Self::from_units(units)
    }
}

impl fmt::Debug for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{:?}", self.to_narrow_lossy())
    }
}

/// A borrowed slice of UTF-16 code units.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WideStr<'a> {
    units: &'a [u16],
}

impl<'a> WideStr<'a> {
    /// Wraps a slice of UTF-16 code units.
    pub fn new(units: &'a [u16]) -> Self {
        Self { units }
    }

    /// Returns the UTF-16 code units.
    pub fn as_units(&self) -> &'a [u16] {
        self.units
    }

    /// Decodes back to UTF-8, replacing invalid sequences with U+FFFD.
    pub fn to_narrow_lossy(&self) -> String {
        to_narrow_lossy(self.units)
    }
}

impl fmt::Debug for WideStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{:?}", self.to_narrow_lossy())
    }
}

/// Transcodes UTF-8 text into UTF-16 code units.
pub fn to_wide(text: &str) -> WideString {
    WideString {
        units: text.encode_utf16().collect(),
    }
}

/// Decodes UTF-16 code units into UTF-8.
pub fn to_narrow(units: &[u16]) -> Result<String, CodecError> {
    Ok(String::from_utf16(units)?)
}

/// Decodes UTF-16 code units into UTF-8, replacing unpaired surrogates.
pub fn to_narrow_lossy(units: &[u16]) -> String {
    String::from_utf16_lossy(units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_round_trip() {
        let wide = to_wide("hello");
        assert_eq!(wide.len(), 5);
        assert_eq!(wide.to_narrow().unwrap(), "hello");
    }

    #[test]
    fn non_bmp_uses_surrogate_pair() {
        let wide = to_wide("a\u{1F600}");
        assert_eq!(wide.as_units().len(), 3);
        assert_eq!(wide.to_narrow().unwrap(), "a\u{1F600}");
    }

    #[test]
    fn unpaired_surrogate_is_rejected() {
        let err = to_narrow(&[0x61, 0xD800]).unwrap_err();
        assert!(format!("{err}").starts_with("invalid UTF-16 text:"));
        assert_eq!(to_narrow_lossy(&[0x61, 0xD800]), "a\u{FFFD}");
    }

    #[test]
    fn strip_nul_removes_every_nul() {
        let mut wide = WideString::from_units(vec![0x61, 0, 0x62, 0]);
        wide.strip_nul();
        assert_eq!(wide.as_units(), &[0x61, 0x62]);
    }

    #[test]
    fn debug_shows_decoded_text() {
        let wide = WideString::from("ok");
        assert_eq!(format!("{wide:?}"), "L\"ok\"");
        assert_eq!(format!("{:?}", wide.as_wide_str()), "L\"ok\"");
    }

    #[test]
    fn empty_input() {
        assert!(to_wide("").is_empty());
        assert_eq!(to_narrow(&[]).unwrap(), "");
    }
}
