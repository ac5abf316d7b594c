use std::fmt;
use std::marker::PhantomData;
use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::FixedView;

/// Serializes like `[T; N]`: a tuple of `N` elements.
///
/// Requires crate feature `"serde"`
impl<'a, T, const N: usize> Serialize for FixedView<'a, T, N>
    where T: Serialize
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_tuple(N)?;
        for elt in self.iter() {
            seq.serialize_element(elt)?;
        }
        seq.end()
    }
}

impl<'a, T, const N: usize> FixedView<'a, T, N> {
    /// Deserialize a sequence of exactly `N` elements into the referenced
    /// storage, front to back.
    ///
    /// **Errors** with `invalid_length` if the input holds fewer or more than
    /// `N` elements. Elements read before the error was detected have already
    /// been written to the storage.
    ///
    /// Requires crate feature `"serde"`
    pub fn deserialize_into<'de, D>(&mut self, deserializer: D) -> Result<(), D::Error>
        where D: Deserializer<'de>,
              T: Deserialize<'de>,
    {
        deserializer.deserialize_tuple(N, FixedViewVisitor { view: self, marker: PhantomData })
    }
}

struct FixedViewVisitor<'v, 'a, 'de, T, const N: usize> {
    view: &'v mut FixedView<'a, T, N>,
    marker: PhantomData<&'de ()>,
}

impl<'v, 'a, 'de, T, const N: usize> Visitor<'de> for FixedViewVisitor<'v, 'a, 'de, T, N>
    where T: Deserialize<'de>
{
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an array of length {}", N)
    }

    fn visit_seq<S: SeqAccess<'de>>(self, mut seq: S) -> Result<(), S::Error> {
        for index in 0..N {
            match seq.next_element()? {
                Some(elt) => self.view[index] = elt,
                None => return Err(de::Error::invalid_length(index, &self)),
            }
        }
        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }
        Ok(())
    }
}
