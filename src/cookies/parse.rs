//! Reading the flat `name=value; name=value` string held by the store.

use crate::utils::EncodingUtils;

/// One `name=value` pair, still percent-encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEntry<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl RawEntry<'_> {
    pub fn decoded_name(&self) -> String {
        EncodingUtils::decode_component(self.name)
    }

    pub fn decoded_value(&self) -> String {
        EncodingUtils::decode_component(self.value)
    }
}

/// Entries in store order; fragments without `=` are skipped
pub fn entries(flat: &str) -> impl Iterator<Item = RawEntry<'_>> {
    flat.split(';').filter_map(|fragment| {
        let (name, value) = fragment.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(RawEntry {
            name,
            value: value.trim_start(),
        })
    })
}

/// First entry whose decoded name equals `name`
pub fn find<'a>(flat: &'a str, name: &str) -> Option<RawEntry<'a>> {
    entries(flat).find(|entry| entry.decoded_name() == name)
}

/// Decoded value for `name`; empty values read as absent
pub fn value_of(flat: &str, name: &str) -> Option<String> {
    find(flat, name)
        .map(|entry| entry.decoded_value())
        .filter(|value| !value.is_empty())
}

/// Decoded names in store order
pub fn names(flat: &str) -> Vec<String> {
    entries(flat).map(|entry| entry.decoded_name()).collect()
}
