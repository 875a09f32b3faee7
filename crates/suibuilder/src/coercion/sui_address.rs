use crate::prelude::*;

/// Max number of hex digits in an address or object id (32 bytes).
const MAX_HEX_DIGITS: usize = 64;

/// Validates `s` as a `0x` prefixed hex identifier of at most 32 bytes,
/// returning its lowercase form.
fn parse_hex_identifier(s: &str, kind: &str) -> Result<String> {
    let malformed = || Error::MalformedHexIdentifier {
        kind: kind.to_owned(),
        bad_value: s.to_owned(),
    };
    let digits = s.trim().strip_prefix("0x").ok_or_else(malformed)?;
    if digits.is_empty()
        || digits.len() > MAX_HEX_DIGITS
        || !digits.chars().all(|c| c.is_ascii_hexdigit())
    {
        return Err(malformed());
    }
    Ok(format!("0x{}", digits.to_ascii_lowercase()))
}

/// Zero pads the digits of a validated identifier to the full 64.
fn pad_hex_identifier(s: &str) -> String {
    let digits = s.trim_start_matches("0x");
    format!("0x{:0>width$}", digits, width = MAX_HEX_DIGITS)
}

/// A Sui account address, e.g. `0x2` or a full 32 byte
/// `0xa1b2...` string.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "String", into = "String")]
pub struct SuiAddress(String);

impl SuiAddress {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(format!("0x{}", hex::encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The zero padded, 64 hex digit form.
    pub fn to_long_form(&self) -> String {
        pad_hex_identifier(&self.0)
    }
}

impl FromStr for SuiAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_hex_identifier(s, "address").map(Self)
    }
}

impl TryFrom<String> for SuiAddress {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SuiAddress> for String {
    fn from(value: SuiAddress) -> Self {
        value.0
    }
}

/// Identifier of an on chain object, same textual shape as [`SuiAddress`].
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectId(String);

impl ObjectId {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(format!("0x{}", hex::encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The zero padded, 64 hex digit form.
    pub fn to_long_form(&self) -> String {
        pad_hex_identifier(&self.0)
    }
}

impl FromStr for ObjectId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_hex_identifier(s, "object id").map(Self)
    }
}

impl TryFrom<String> for ObjectId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ObjectId> for String {
    fn from(value: ObjectId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_form_is_kept() {
        let sut: ObjectId = "0x5".parse().unwrap();
        assert_eq!(sut.as_str(), "0x5");
        assert_eq!(
            sut.to_long_form(),
            "0x0000000000000000000000000000000000000000000000000000000000000005"
        );
    }

    #[test]
    fn lowercased() {
        let sut: SuiAddress = "0xDEADbeef".parse().unwrap();
        assert_eq!(sut.to_string(), "0xdeadbeef");
    }

    #[test]
    fn from_bytes() {
        let sut = SuiAddress::from_bytes(hex!(
            "00000000000000000000000000000000000000000000000000000000000000a1"
        ));
        assert_eq!(sut.to_long_form(), sut.as_str());
        assert!(sut.as_str().ends_with("a1"));
    }

    #[test]
    fn malformed() {
        let too_long = format!("0x{}", "1".repeat(65));
        for bad in ["", "0x", "5", "0xzz", too_long.as_str()] {
            assert_eq!(
                bad.parse::<SuiAddress>(),
                Err(Error::MalformedHexIdentifier {
                    kind: "address".to_owned(),
                    bad_value: bad.to_owned(),
                })
            );
        }
    }

    #[test]
    fn deserialize_validates() {
        let ok: ObjectId = serde_json::from_str("\"0x6\"").unwrap();
        assert_eq!(ok.as_str(), "0x6");
        assert!(serde_json::from_str::<ObjectId>("\"six\"").is_err());
    }
}
