use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::convert::TryFrom;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Rev;
use std::marker::PhantomData;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::errors::OutOfRangeError;
use crate::len_check::check_len_nonzero;

/// A fixed-length view over `N` contiguous elements owned by someone else.
///
/// The `FixedView` is a pointer-sized handle to an array it does not own. It
/// behaves like the `[T; N]` it points at: comparison, hashing and debug
/// output use the contents, and assignment, fill and swap write through to
/// the referenced storage. The view never rebinds to other storage.
///
/// `N` is part of the type and must be nonzero; there is no runtime length.
///
/// The view dereferences to `[T; N]`, so the full array and slice API is
/// available too. Inherent methods of the same name (`swap`, `fill`, `iter`)
/// shadow the slice methods; reach those through [`as_mut_slice`].
///
/// ```
/// use fixedview::FixedView;
///
/// let mut a = [1, 2, 3];
/// let mut b = [3, 2, 1];
/// let mut va = FixedView::new(&mut a);
/// let mut vb = FixedView::new(&mut b);
///
/// assert!(va < vb);
/// va.swap(&mut vb);
/// assert_eq!(va, [3, 2, 1]);
/// assert_eq!(vb, [1, 2, 3]);
/// ```
///
/// A zero-length view does not compile:
///
/// ```compile_fail
/// use fixedview::FixedView;
///
/// let mut empty: [u8; 0] = [];
/// let view = FixedView::new(&mut empty);
/// ```
///
/// [`as_mut_slice`]: FixedView::as_mut_slice
pub struct FixedView<'a, T, const N: usize> {
    // first of N initialized elements, valid for reads and writes for 'a
    ptr: NonNull<T>,
    marker: PhantomData<&'a mut [T; N]>,
}

unsafe impl<'a, T: Send, const N: usize> Send for FixedView<'a, T, N> {}
unsafe impl<'a, T: Sync, const N: usize> Sync for FixedView<'a, T, N> {}

impl<'a, T, const N: usize> FixedView<'a, T, N> {
    /// Number of elements in every view of this type.
    pub const CAPACITY: usize = N;

    /// Create a view over `array`.
    ///
    /// ```
    /// use fixedview::FixedView;
    ///
    /// let mut array = [1, 2, 3];
    /// let mut view = FixedView::new(&mut array);
    /// view[0] = 10;
    /// assert_eq!(array, [10, 2, 3]);
    /// ```
    #[inline]
    pub fn new(array: &'a mut [T; N]) -> Self {
        check_len_nonzero::<N>();
        FixedView { ptr: NonNull::from(array).cast(), marker: PhantomData }
    }

    /// Create a view over the `N` elements starting at `ptr`.
    ///
    /// The length is taken from the type, since a bare pointer does not carry
    /// one.
    ///
    /// ```
    /// use fixedview::FixedView;
    ///
    /// let mut grid = [[1u8; 4]; 3];
    /// let ptr = grid.as_mut_ptr() as *mut u8;
    /// let mut flat = unsafe { FixedView::<u8, 12>::from_ptr(ptr) };
    /// flat.fill(7);
    /// assert_eq!(grid, [[7; 4]; 3]);
    /// ```
    ///
    /// # Safety
    ///
    /// - `ptr` must be non-null, aligned, and point at `N` initialized,
    ///   contiguous elements of `T` that stay valid for reads and writes for
    ///   `'a`.
    /// - For the duration of `'a` the elements must not be accessed other
    ///   than through views bound to the same pointer.
    /// - Several views bound to the same pointer may exist at once, but only
    ///   one of them may be in use at a time: no reference obtained from one
    ///   view (through `at_mut`, `front_mut`, indexing, `iter_mut`,
    ///   `as_mut_array` or any other accessor) may still be in use while
    ///   another view over the same storage is used.
    /// - Aliasing views must not be sent to or shared with other threads.
    ///
    /// [`same_storage`], [`assign`], [`assign_array`], [`take_from`],
    /// [`swap`] and [`swap_array`] compare storage identity before touching
    /// any element, and do nothing when both sides are the same storage. They
    /// may be called with aliasing arguments.
    ///
    /// `N` is not checked against the real length of the storage.
    ///
    /// [`same_storage`]: FixedView::same_storage
    /// [`assign`]: FixedView::assign
    /// [`assign_array`]: FixedView::assign_array
    /// [`take_from`]: FixedView::take_from
    /// [`swap`]: FixedView::swap
    /// [`swap_array`]: FixedView::swap_array
    #[inline]
    pub unsafe fn from_ptr(ptr: *mut T) -> Self {
        check_len_nonzero::<N>();
        debug_assert!(!ptr.is_null());
        FixedView { ptr: NonNull::new_unchecked(ptr), marker: PhantomData }
    }

    /// Create a view over `slice` if its length is exactly `N`.
    ///
    /// ```
    /// use fixedview::FixedView;
    ///
    /// let mut data = vec![1, 2, 3, 4];
    /// assert!(FixedView::<_, 3>::from_slice(&mut data[..]).is_none());
    /// let view = FixedView::<_, 2>::from_slice(&mut data[2..]).unwrap();
    /// assert_eq!(view, [3, 4]);
    /// ```
    pub fn from_slice(slice: &'a mut [T]) -> Option<Self> {
        <&'a mut [T; N]>::try_from(slice).ok().map(FixedView::new)
    }

    /// Give back the borrow of the referenced array.
    #[inline]
    pub fn into_array_mut(self) -> &'a mut [T; N] {
        unsafe { &mut *self.ptr.as_ptr().cast::<[T; N]>() }
    }

    /// Return the number of elements, which is always `N`.
    #[inline]
    pub const fn len(&self) -> usize { N }

    /// Return the capacity of the view, which is always `N`.
    #[inline]
    pub const fn capacity(&self) -> usize { N }

    /// Return `true` if the view has no elements.
    ///
    /// Zero-length views cannot be constructed, so this is always `false`.
    #[inline]
    pub const fn is_empty(&self) -> bool { N == 0 }

    /// Return `true` if `self` and `other` reference the same storage.
    ///
    /// Contents are not looked at; see `==` for that.
    ///
    /// ```
    /// use fixedview::FixedView;
    ///
    /// let mut a = [1, 2];
    /// let mut b = [1, 2];
    /// let ptr = a.as_mut_ptr();
    /// let va = unsafe { FixedView::<_, 2>::from_ptr(ptr) };
    /// let alias = unsafe { FixedView::<_, 2>::from_ptr(ptr) };
    /// let vb = FixedView::new(&mut b);
    ///
    /// assert_eq!(va, vb);
    /// assert!(!va.same_storage(&vb));
    /// assert!(va.same_storage(&alias));
    /// ```
    #[inline]
    pub fn same_storage(&self, other: &FixedView<'_, T, N>) -> bool {
        self.ptr == other.ptr
    }

    /// Return a reference to the array this view points at.
    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        unsafe { &*self.ptr.as_ptr().cast::<[T; N]>() }
    }

    /// Return a mutable reference to the array this view points at.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        unsafe { &mut *self.ptr.as_ptr().cast::<[T; N]>() }
    }

    /// Return a slice containing all elements of the view.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), N) }
    }

    /// Return a mutable slice containing all elements of the view.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), N) }
    }

    /// Return a raw pointer to the first element.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Return a raw mutable pointer to the first element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Return a reference to the element at `index`, or an error carrying
    /// `index` if it is not less than `N`.
    ///
    /// ```
    /// use fixedview::FixedView;
    ///
    /// let mut array = [1, 3, 5, 7, 9];
    /// let view = FixedView::new(&mut array);
    ///
    /// assert_eq!(view.at(2), Ok(&5));
    /// assert_eq!(view.at(5).unwrap_err().index(), 5);
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, OutOfRangeError> {
        if index < N {
            unsafe { Ok(self.get_unchecked(index)) }
        } else {
            Err(range_error(index))
        }
    }

    /// Return a mutable reference to the element at `index`, or an error
    /// carrying `index` if it is not less than `N`.
    ///
    /// Nothing is written when the index is out of range.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRangeError> {
        if index < N {
            unsafe { Ok(self.get_unchecked_mut(index)) }
        } else {
            Err(range_error(index))
        }
    }

    /// Return a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < N);
        &*self.ptr.as_ptr().add(index)
    }

    /// Return a mutable reference to the element at `index` without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < N);
        &mut *self.ptr.as_ptr().add(index)
    }

    /// Return the first element.
    #[inline]
    pub fn front(&self) -> &T {
        &self.as_array()[0]
    }

    /// Return the first element, mutably.
    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        &mut self.as_mut_array()[0]
    }

    /// Return the last element.
    #[inline]
    pub fn back(&self) -> &T {
        &self.as_array()[N - 1]
    }

    /// Return the last element, mutably.
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        &mut self.as_mut_array()[N - 1]
    }

    /// Iterate the elements front to back.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate the elements front to back, mutably.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Iterate the elements back to front.
    ///
    /// ```
    /// use fixedview::FixedView;
    ///
    /// let mut array = [1, 2, 3];
    /// let view = FixedView::new(&mut array);
    /// let reversed: Vec<_> = view.iter_rev().copied().collect();
    /// assert_eq!(reversed, [3, 2, 1]);
    /// ```
    #[inline]
    pub fn iter_rev(&self) -> Rev<slice::Iter<'_, T>> {
        self.iter().rev()
    }

    /// Iterate the elements back to front, mutably.
    #[inline]
    pub fn iter_rev_mut(&mut self) -> Rev<slice::IterMut<'_, T>> {
        self.iter_mut().rev()
    }

    /// Write a clone of `value` into every element.
    ///
    /// ```
    /// use fixedview::FixedView;
    ///
    /// let mut array = [1, 3, 5, 7, 9];
    /// FixedView::new(&mut array).fill(0);
    /// assert_eq!(array, [0; 5]);
    /// ```
    #[inline]
    pub fn fill(&mut self, value: T)
        where T: Clone
    {
        self.as_mut_slice().fill(value)
    }

    /// Write the values returned by calling `f` repeatedly into the elements,
    /// front to back.
    #[inline]
    pub fn fill_with<F>(&mut self, f: F)
        where F: FnMut() -> T
    {
        self.as_mut_slice().fill_with(f)
    }

    /// Copy the contents of `other` into the storage of `self`.
    ///
    /// `self` keeps pointing at its own storage. Nothing happens if both
    /// views reference the same storage.
    ///
    /// ```
    /// use fixedview::FixedView;
    ///
    /// let mut a = [0; 3];
    /// let mut b = [4, 5, 6];
    /// let mut va = FixedView::new(&mut a);
    /// va.assign(&FixedView::new(&mut b));
    /// assert_eq!(a, [4, 5, 6]);
    /// ```
    pub fn assign(&mut self, other: &FixedView<'_, T, N>)
        where T: Clone
    {
        if self.same_storage(other) {
            return;
        }
        self.as_mut_slice().clone_from_slice(other.as_slice());
    }

    /// Copy the contents of `array` into the storage of `self`.
    ///
    /// Nothing happens if `array` is the storage `self` references.
    pub fn assign_array(&mut self, array: &[T; N])
        where T: Clone
    {
        if ptr::eq(self.as_ptr(), array.as_ptr()) {
            return;
        }
        self.as_mut_slice().clone_from_slice(array);
    }

    /// Move the contents of `other` into the storage of `self`, leaving
    /// `T::default()` in each element of `other`.
    ///
    /// Nothing happens if both views reference the same storage.
    ///
    /// ```
    /// use fixedview::FixedView;
    ///
    /// let mut a = [String::new(), String::new()];
    /// let mut b = [String::from("x"), String::from("y")];
    /// FixedView::new(&mut a).take_from(&mut FixedView::new(&mut b));
    /// assert_eq!(a, ["x", "y"]);
    /// assert_eq!(b, ["", ""]);
    /// ```
    pub fn take_from(&mut self, other: &mut FixedView<'_, T, N>)
        where T: Default
    {
        if self.same_storage(other) {
            return;
        }
        for (dst, src) in self.iter_mut().zip(other.iter_mut()) {
            *dst = mem::take(src);
        }
    }

    /// Move the elements of `array` into the storage of `self`, dropping the
    /// values they replace.
    pub fn move_from(&mut self, array: [T; N]) {
        for (dst, src) in self.iter_mut().zip(IntoIterator::into_iter(array)) {
            *dst = src;
        }
    }

    /// Exchange the contents of the storage of `self` and `other`.
    ///
    /// The views themselves keep referencing their own storage. Nothing
    /// happens if both views reference the same storage.
    pub fn swap(&mut self, other: &mut FixedView<'_, T, N>) {
        if self.same_storage(other) {
            return;
        }
        self.as_mut_slice().swap_with_slice(other.as_mut_slice());
    }

    /// Exchange the contents of the storage of `self` and `array`.
    ///
    /// Nothing happens if `array` is the storage `self` references.
    ///
    /// ```
    /// use fixedview::FixedView;
    ///
    /// let mut a = [1, 2];
    /// let mut b = [3, 4];
    /// FixedView::new(&mut a).swap_array(&mut b);
    /// assert_eq!((a, b), ([3, 4], [1, 2]));
    /// ```
    pub fn swap_array(&mut self, array: &mut [T; N]) {
        if ptr::eq(self.as_ptr(), array.as_ptr()) {
            return;
        }
        self.as_mut_slice().swap_with_slice(array);
    }
}

#[inline(never)]
#[cold]
fn range_error(index: usize) -> OutOfRangeError {
    OutOfRangeError::new(index)
}

impl<'a, T, const N: usize> Deref for FixedView<'a, T, N> {
    type Target = [T; N];
    #[inline]
    fn deref(&self) -> &[T; N] {
        self.as_array()
    }
}

impl<'a, T, const N: usize> DerefMut for FixedView<'a, T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T; N] {
        self.as_mut_array()
    }
}

/// Create a `FixedView` over an array.
///
/// ```
/// use fixedview::FixedView;
///
/// let mut array = [1, 2, 3];
/// let view: FixedView<_, 3> = (&mut array).into();
/// assert_eq!(view.len(), 3);
/// ```
impl<'a, T, const N: usize> From<&'a mut [T; N]> for FixedView<'a, T, N> {
    fn from(array: &'a mut [T; N]) -> Self {
        FixedView::new(array)
    }
}

/// Iterate the `FixedView` with references to each element.
impl<'b, 'a, T, const N: usize> IntoIterator for &'b FixedView<'a, T, N> {
    type Item = &'b T;
    type IntoIter = slice::Iter<'b, T>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// Iterate the `FixedView` with mutable references to each element.
///
/// ```
/// use fixedview::FixedView;
///
/// let mut array = [1, 2, 3];
/// let mut view = FixedView::new(&mut array);
///
/// for elt in &mut view {
///     *elt *= 2;
/// }
/// assert_eq!(array, [2, 4, 6]);
/// ```
impl<'b, 'a, T, const N: usize> IntoIterator for &'b mut FixedView<'a, T, N> {
    type Item = &'b mut T;
    type IntoIter = slice::IterMut<'b, T>;
    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

/// Iterate the referenced elements for the whole borrow `'a`.
///
/// The view is consumed by this operation; the storage is not.
impl<'a, T, const N: usize> IntoIterator for FixedView<'a, T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.into_array_mut().iter_mut() }
}

impl<'a, 'b, T, const N: usize> PartialEq<FixedView<'b, T, N>> for FixedView<'a, T, N>
    where T: PartialEq
{
    #[inline]
    fn eq(&self, other: &FixedView<'b, T, N>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a, T, const N: usize> PartialEq<[T; N]> for FixedView<'a, T, N>
    where T: PartialEq
{
    #[inline]
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<'a, T, const N: usize> PartialEq<[T]> for FixedView<'a, T, N>
    where T: PartialEq
{
    #[inline]
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<'a, T, const N: usize> PartialEq<FixedView<'a, T, N>> for [T; N]
    where T: PartialEq
{
    #[inline]
    fn eq(&self, other: &FixedView<'a, T, N>) -> bool {
        &self[..] == other.as_slice()
    }
}

impl<'a, T, const N: usize> PartialEq<FixedView<'a, T, N>> for [T]
    where T: PartialEq
{
    #[inline]
    fn eq(&self, other: &FixedView<'a, T, N>) -> bool {
        self == other.as_slice()
    }
}

impl<'a, T, const N: usize> Eq for FixedView<'a, T, N> where T: Eq { }

impl<'a, 'b, T, const N: usize> PartialOrd<FixedView<'b, T, N>> for FixedView<'a, T, N>
    where T: PartialOrd
{
    #[inline]
    fn partial_cmp(&self, other: &FixedView<'b, T, N>) -> Option<cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }

    #[inline] fn lt(&self, other: &FixedView<'b, T, N>) -> bool { self.as_slice().lt(other.as_slice()) }
    #[inline] fn le(&self, other: &FixedView<'b, T, N>) -> bool { self.as_slice().le(other.as_slice()) }
    #[inline] fn ge(&self, other: &FixedView<'b, T, N>) -> bool { self.as_slice().ge(other.as_slice()) }
    #[inline] fn gt(&self, other: &FixedView<'b, T, N>) -> bool { self.as_slice().gt(other.as_slice()) }
}

impl<'a, T, const N: usize> PartialOrd<[T; N]> for FixedView<'a, T, N>
    where T: PartialOrd
{
    #[inline]
    fn partial_cmp(&self, other: &[T; N]) -> Option<cmp::Ordering> {
        self.as_slice().partial_cmp(&other[..])
    }
}

impl<'a, T, const N: usize> PartialOrd<FixedView<'a, T, N>> for [T; N]
    where T: PartialOrd
{
    #[inline]
    fn partial_cmp(&self, other: &FixedView<'a, T, N>) -> Option<cmp::Ordering> {
        self[..].partial_cmp(other.as_slice())
    }
}

impl<'a, T, const N: usize> Ord for FixedView<'a, T, N> where T: Ord {
    #[inline]
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<'a, T, const N: usize> Hash for FixedView<'a, T, N>
    where T: Hash
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_slice(), state)
    }
}

impl<'a, T, const N: usize> Borrow<[T]> for FixedView<'a, T, N> {
    fn borrow(&self) -> &[T] { self.as_slice() }
}

impl<'a, T, const N: usize> BorrowMut<[T]> for FixedView<'a, T, N> {
    fn borrow_mut(&mut self) -> &mut [T] { self.as_mut_slice() }
}

impl<'a, T, const N: usize> AsRef<[T]> for FixedView<'a, T, N> {
    fn as_ref(&self) -> &[T] { self.as_slice() }
}

impl<'a, T, const N: usize> AsMut<[T]> for FixedView<'a, T, N> {
    fn as_mut(&mut self) -> &mut [T] { self.as_mut_slice() }
}

impl<'a, T, const N: usize> AsRef<[T; N]> for FixedView<'a, T, N> {
    fn as_ref(&self) -> &[T; N] { self.as_array() }
}

impl<'a, T, const N: usize> AsMut<[T; N]> for FixedView<'a, T, N> {
    fn as_mut(&mut self) -> &mut [T; N] { self.as_mut_array() }
}

impl<'a, T, const N: usize> fmt::Debug for FixedView<'a, T, N> where T: fmt::Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Debug::fmt(self.as_slice(), f) }
}

#[cfg(feature = "zeroize")]
/// Zero the referenced storage when the `zeroize` feature is enabled.
///
/// ```
/// use fixedview::FixedView;
/// use zeroize::Zeroize;
/// let mut key = [0x5au8; 8];
/// FixedView::new(&mut key).zeroize();
/// assert_eq!(key, [0; 8]);
/// ```
impl<'a, T, const N: usize> zeroize::Zeroize for FixedView<'a, T, N>
    where T: zeroize::Zeroize
{
    fn zeroize(&mut self) {
        zeroize::Zeroize::zeroize(self.as_mut_array());
    }
}
