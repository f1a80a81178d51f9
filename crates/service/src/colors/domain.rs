use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Full major -> hue mapping at the moment of a read. Serializes as a JSON
/// object keyed by the decimal major, ascending.
pub type ColorSnapshot = BTreeMap<i64, i64>;

/// Upsert payload; missing fields default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSetting {
    #[serde(default)]
    pub major: i64,
    #[serde(default)]
    pub hue: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn snapshot_keys_serialize_as_strings() {
        let snap: ColorSnapshot = [(10, 2), (3, 7)].into_iter().collect();
        assert_eq!(serde_json::to_value(&snap).expect("serialize"), json!({"3": 7, "10": 2}));
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let s: ColorSetting = serde_json::from_value(json!({"hue": 4})).expect("deserialize");
        assert_eq!(s, ColorSetting { major: 0, hue: 4 });
    }
}
