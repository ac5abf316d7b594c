use borsh::io::{Read, Result, Write};
use borsh::{BorshDeserialize, BorshSerialize};

use crate::FixedView;

/// Writes the same bytes as `[T; N]`: the elements in order, no length prefix.
///
/// Requires crate feature `"borsh"`
impl<'a, T, const N: usize> BorshSerialize for FixedView<'a, T, N>
    where T: BorshSerialize
{
    fn serialize<W: Write>(&self, writer: &mut W) -> Result<()> {
        BorshSerialize::serialize(self.as_array(), writer)
    }
}

impl<'a, T, const N: usize> FixedView<'a, T, N> {
    /// Read `N` borsh-encoded elements from `reader` into the referenced
    /// storage, front to back.
    ///
    /// Elements read before an error have already been written to the storage.
    ///
    /// ```
    /// use fixedview::FixedView;
    ///
    /// let bytes = borsh::to_vec(&[7u16, 8, 9]).unwrap();
    /// let mut storage = [0u16; 3];
    /// FixedView::new(&mut storage).read_into(&mut &bytes[..]).unwrap();
    /// assert_eq!(storage, [7, 8, 9]);
    /// ```
    ///
    /// Requires crate feature `"borsh"`
    pub fn read_into<R: Read>(&mut self, reader: &mut R) -> Result<()>
        where T: BorshDeserialize
    {
        for slot in self.iter_mut() {
            *slot = T::deserialize_reader(reader)?;
        }
        Ok(())
    }
}
