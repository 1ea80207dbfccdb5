use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
};

use crate::{FixedArray, Value};


/// Serializes as a sequence of slots; empty slots become `null`.
impl<T: Serialize> Serialize for FixedArray<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Deserializes from a sequence; `null` elements become empty slots.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for FixedArray<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Option<T>>::deserialize(deserializer).map(FixedArray::from_slots)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Array(arr) => arr.serialize(serializer),
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null, a boolean, a number, a string or a sequence")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> { Ok(Value::Null) }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> { Ok(Value::Null) }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<Value, E> { Ok(Value::Bool(b)) }

    fn visit_i64<E: de::Error>(self, i: i64) -> Result<Value, E> { Ok(Value::Int(i)) }

    fn visit_u64<E: de::Error>(self, u: u64) -> Result<Value, E> {
        Ok(i64::try_from(u).map_or(Value::Float(u as f64), Value::Int))
    }

    fn visit_f64<E: de::Error>(self, x: f64) -> Result<Value, E> { Ok(Value::Float(x)) }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Value, E> { Ok(Value::from(s)) }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Value, E> { Ok(Value::Str(s)) }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut slots = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(slot) = seq.next_element::<Option<Value>>()? {
            slots.push(slot);
        }
        Ok(Value::Array(FixedArray::from_slots(slots)))
    }
}

/// Top-level `null` reads as [`Value::Null`]; `null` inside a sequence reads
/// as an empty slot.
impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}
