// lib/src/config/config_serializers.rs

use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serializer};

use crate::config::config_structs::ModeSetting;

// YAML scalars such as `mode: repeated` arrive as plain strings.
pub mod mode_setting_serde {
    use super::*;

    pub fn serialize<S>(mode: &ModeSetting, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&mode.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ModeSetting, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ModeSetting::from_str(&s).map_err(D::Error::custom)
    }
}
