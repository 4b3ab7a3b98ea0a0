//! `serde` support, enabled by the `serde` feature.
//!
//! Unions serialize externally tagged by case, `{"case2": "text"}`. Options
//! serialize as a nullable value, like [`core::option::Option`].

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{option::Option, repr::Nil};

impl Serialize for Nil {
    fn serialize<S: Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
        match *self {}
    }
}

impl<'de> Deserialize<'de> for Nil {
    fn deserialize<D: Deserializer<'de>>(_: D) -> Result<Self, D::Error> {
        Err(de::Error::custom("this union has no such case"))
    }
}

impl<T: Serialize> Serialize for Option<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_std().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Option<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        core::option::Option::<T>::deserialize(deserializer).map(Option::from_std)
    }
}
