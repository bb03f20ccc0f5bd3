//! `serde_as` adapters for field elements on the wire: lowercase
//! `0x`-prefixed hex without padding on output; hex or plain decimal
//! accepted on input.

use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serializer};
#[cfg(test)]
use serde::Serialize;
use serde_with::{DeserializeAs, SerializeAs};

use stark_rust_curve::Felt;

/// A [`Felt`] serialized as an unpadded hex string.
pub struct UfeHex;

/// An optional [`Felt`] serialized as an unpadded hex string or `null`.
pub struct UfeHexOption;

impl SerializeAs<Felt> for UfeHex {
    fn serialize_as<S>(value: &Felt, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{value:#x}"))
    }
}

impl<'de> DeserializeAs<'de, Felt> for UfeHex {
    fn deserialize_as<D>(deserializer: D) -> Result<Felt, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Felt::from_str(&value).map_err(serde::de::Error::custom)
    }
}

impl SerializeAs<Option<Felt>> for UfeHexOption {
    fn serialize_as<S>(value: &Option<Felt>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_str(&format!("{value:#x}")),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> DeserializeAs<'de, Option<Felt>> for UfeHexOption {
    fn deserialize_as<D>(deserializer: D) -> Result<Option<Felt>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(value) => Felt::from_str(&value)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
