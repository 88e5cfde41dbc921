//! # Country Records
//!
//! Typed mirror of the upstream REST Countries JSON. Only the fields the
//! catalog displays are modelled; everything else in the payload is ignored.
//!
//! ```text
//! Country
//! ├── name
//! │   ├── official            // the only required field
//! │   ├── common
//! │   └── nativeName          // { "<lang>": { official, common } }
//! ├── cca2 / cca3
//! ├── flags.png
//! ├── altSpellings            // ordered
//! └── idd
//!     ├── root                // "+4"
//!     └── suffixes            // ["4"]
//! ```
//!
//! Records are immutable once fetched. The upstream omits fields freely
//! (e.g. `"idd": {}` for Antarctica), so everything but the official name
//! is defaulted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub name: CountryName,
    #[serde(default)]
    pub cca2: String,
    #[serde(default)]
    pub cca3: String,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default, rename = "altSpellings")]
    pub alt_spellings: Vec<String>,
    #[serde(default)]
    pub idd: Idd,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CountryName {
    pub official: String,
    #[serde(default)]
    pub common: String,
    /// Keyed by ISO 639-3 language code. Sorted for stable display.
    #[serde(default, rename = "nativeName")]
    pub native_name: BTreeMap<String, NativeName>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct NativeName {
    #[serde(default)]
    pub official: String,
    #[serde(default)]
    pub common: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Flags {
    pub png: Option<String>,
    /// Text description of the flag.
    pub alt: Option<String>,
}

/// International direct dialing info.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Idd {
    pub root: Option<String>,
    pub suffixes: Option<Vec<String>>,
}

impl Country {
    pub fn official_name(&self) -> &str {
        &self.name.official
    }
}
