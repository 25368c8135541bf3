use quick_xml::{de, se};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Error;

/// A root-level registration payload.
///
/// Every request and response record the Access Server exchanges carries a
/// fixed root element local name; the element sequence below the root is the
/// struct's field order.
pub trait Message: Serialize + DeserializeOwned {
    /// Root element local name of this payload.
    const LOCAL: &'static str;

    /// Marshals the payload to an XML document fragment.
    fn to_xml(&self) -> Result<String, Error> {
        Ok(se::to_string_with_root(Self::LOCAL, self)?)
    }

    /// Unmarshals a payload from an XML document.
    fn from_xml(xml: &str) -> Result<Self, Error> {
        Ok(de::from_str(xml)?)
    }
}

/// Codec for `base64Binary` elements carrying certificate material.
pub(crate) mod base64_binary {
    use base64::engine::general_purpose::STANDARD as BASE64_STD;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match bytes {
            Some(bytes) => serializer.serialize_str(&BASE64_STD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(text) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        // XML canonical form allows embedded whitespace.
        let compact: String = text.split_whitespace().collect();
        if compact.is_empty() {
            return Ok(None);
        }
        BASE64_STD
            .decode(compact.as_bytes())
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    #[serde(default)]
    struct Carrier {
        #[serde(skip_serializing_if = "Option::is_none", with = "super::base64_binary")]
        cert: Option<Vec<u8>>,
    }

    #[test]
    fn base64_binary_round_trips() {
        let carrier = Carrier {
            cert: Some(b"certificate material".to_vec()),
        };
        let xml = quick_xml::se::to_string_with_root("Carrier", &carrier).expect("serialize");
        assert!(xml.contains("Y2VydGlmaWNhdGUgbWF0ZXJpYWw="));
        let parsed: Carrier = quick_xml::de::from_str(&xml).expect("parse");
        assert_eq!(parsed, carrier);
    }

    #[test]
    fn base64_binary_accepts_wrapped_content() {
        let xml = "<Carrier><cert>Y2VydGlmaWNhdGUg\n  bWF0ZXJpYWw=</cert></Carrier>";
        let parsed: Carrier = quick_xml::de::from_str(xml).expect("parse");
        assert_eq!(parsed.cert.as_deref(), Some(&b"certificate material"[..]));
    }

    #[test]
    fn absent_element_is_none() {
        let parsed: Carrier = quick_xml::de::from_str("<Carrier/>").expect("parse");
        assert_eq!(parsed.cert, None);
    }
}
