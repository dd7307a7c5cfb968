use crate::ring::Ring;
use core::fmt;
use core::marker::PhantomData;
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

impl<T: Serialize, const S: usize> Serialize for Ring<T, S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct RingVisitor<T, const S: usize>(PhantomData<T>);

impl<'de, T: Deserialize<'de>, const S: usize> Visitor<'de> for RingVisitor<T, S> {
    type Value = Ring<T, S>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of at most {S} elements")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut ring = Ring::new();
        while let Some(item) = seq.next_element()? {
            if ring.is_full() {
                let mut len = S + 1;
                while seq.next_element::<de::IgnoredAny>()?.is_some() {
                    len += 1;
                }
                return Err(de::Error::invalid_length(len, &self));
            }
            ring.push_back(item);
        }
        Ok(ring)
    }
}

impl<'de, T: Deserialize<'de>, const S: usize> Deserialize<'de> for Ring<T, S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(RingVisitor(PhantomData))
    }
}
