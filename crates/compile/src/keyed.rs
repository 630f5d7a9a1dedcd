//! Ordered JSON objects backed by a `Vec`
//!
//! Records are written as a JSON object keyed by something derived from each
//! record, in the order they are stored. Reading keeps the document order and
//! checks every key against the record it names.

// standard library
use std::fmt;
use std::format as f;
use std::marker::PhantomData;

// external crates
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, Serializer};

/// Anything stored in a JSON object under a key derived from itself
pub(crate) trait Keyed {
    fn key(&self) -> String;
}

pub(crate) fn serialize<S, T>(items: &[T], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Keyed + Serialize,
{
    serializer.collect_map(items.iter().map(|item| (item.key(), item)))
}

pub(crate) fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Keyed + Deserialize<'de>,
{
    deserializer.deserialize_map(KeyedVisitor(PhantomData))
}

struct KeyedVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for KeyedVisitor<T>
where
    T: Keyed + Deserialize<'de>,
{
    type Value = Vec<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of keyed records")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut items = Vec::with_capacity(map.size_hint().unwrap_or(0));

        while let Some((key, item)) = map.next_entry::<String, T>()? {
            if key != item.key() {
                return Err(de::Error::custom(f!(
                    "key \"{key}\" does not match record \"{}\"",
                    item.key()
                )));
            }
            items.push(item);
        }

        Ok(items)
    }
}
