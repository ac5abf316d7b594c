extern crate fixedview;
#[macro_use] extern crate matches;

use fixedview::{FixedView, OutOfRangeError};
use std::cell::Cell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::mem;


#[test]
fn test_simple() {
    let mut storage = [1, 3, 5, 7, 9];
    let mut view = FixedView::new(&mut storage);

    assert_eq!(view.at(2), Ok(&5));
    assert_eq!(view.at(5), Err(OutOfRangeError::new(5)));
    view.fill(0);
    assert_eq!(storage, [0, 0, 0, 0, 0]);

    let mut a = [1, 2, 3];
    let mut b = [3, 2, 1];
    let mut va = FixedView::new(&mut a);
    let mut vb = FixedView::new(&mut b);
    assert!(va < vb);
    va.swap(&mut vb);
    assert_eq!(a, [3, 2, 1]);
    assert_eq!(b, [1, 2, 3]);
}

#[test]
fn test_checked_unchecked_agree() {
    let mut storage = [10, 20, 30, 40];
    let view = FixedView::new(&mut storage);
    for i in 0..view.len() {
        let checked = view.at(i).unwrap();
        let unchecked = unsafe { view.get_unchecked(i) };
        assert!(std::ptr::eq(checked, unchecked));
        assert_eq!(*checked, view[i]);
    }
}

#[test]
fn test_at_out_of_range() {
    let mut storage = [1u8; 4];
    let mut view = FixedView::new(&mut storage);

    for &i in &[4, 5, 100, usize::MAX] {
        assert_matches!(view.at(i), Err(ref e) if e.index() == i);
        assert_matches!(view.at_mut(i), Err(ref e) if e.index() == i);
    }
    assert_eq!(storage, [1; 4]);
}

#[test]
fn test_at_mut_writes_through() {
    let mut storage = [0; 3];
    let mut view = FixedView::new(&mut storage);
    *view.at_mut(1).unwrap() = 7;
    unsafe {
        *view.get_unchecked_mut(2) = 8;
    }
    assert_eq!(storage, [0, 7, 8]);
}

#[test]
fn test_error_display() {
    let mut storage = [1, 2];
    let view = FixedView::new(&mut storage);
    let err = view.at(5).unwrap_err();
    assert_eq!(err.index(), 5);
    assert_eq!(err.to_string(), "Out of range: 5");
    assert_eq!(format!("{:?}", err), "OutOfRangeError: Out of range: 5");

    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert_eq!(boxed.to_string(), "Out of range: 5");
}

#[test]
fn test_aliasing() {
    let mut storage = [1, 2, 3, 4];
    {
        let mut view = FixedView::new(&mut storage);
        view[0] = 10;
        *view.back_mut() = 40;
        for elt in view.iter_mut().skip(1).take(2) {
            *elt *= 100;
        }
    }
    assert_eq!(storage, [10, 200, 300, 40]);
}

#[test]
fn test_from_ptr_flattens_grid() {
    let mut grid = [[0u32; 3]; 2];
    let ptr = grid.as_mut_ptr() as *mut u32;
    let mut flat = unsafe { FixedView::<u32, 6>::from_ptr(ptr) };
    for (i, elt) in flat.iter_mut().enumerate() {
        *elt = i as u32;
    }
    assert_eq!(flat.as_ptr(), ptr as *const u32);
    assert_eq!(grid, [[0, 1, 2], [3, 4, 5]]);
}

#[test]
fn test_from_slice() {
    let mut data = vec![1, 2, 3, 4, 5];
    assert!(FixedView::<_, 4>::from_slice(&mut data[..]).is_none());
    assert!(FixedView::<_, 6>::from_slice(&mut data[..]).is_none());

    let mut tail = FixedView::<_, 2>::from_slice(&mut data[3..]).unwrap();
    tail.fill(0);
    assert_eq!(data, [1, 2, 3, 0, 0]);
}

#[test]
fn test_fill() {
    let mut storage = [1, 2, 3];
    let mut view = FixedView::new(&mut storage);
    view.fill(9);
    assert_eq!(view, [9, 9, 9]);
    view.fill(9);
    assert_eq!(view, [9, 9, 9]);

    let mut next = 0;
    view.fill_with(|| { next += 2; next });
    assert_eq!(storage, [2, 4, 6]);
}

#[test]
fn test_swap() {
    let mut a = [String::from("a"), String::from("b")];
    let mut b = [String::from("c"), String::from("d")];
    let pa = a.as_ptr();
    let mut va = FixedView::new(&mut a);
    let mut vb = FixedView::new(&mut b);

    va.swap(&mut vb);
    // contents moved, not the views
    assert_eq!(va.as_ptr(), pa);
    assert_eq!(va, [String::from("c"), String::from("d")]);
    assert_eq!(vb, [String::from("a"), String::from("b")]);
}

#[test]
fn test_swap_same_storage() {
    let mut storage = [1, 2, 3];
    let ptr = storage.as_mut_ptr();
    let mut v1 = unsafe { FixedView::<_, 3>::from_ptr(ptr) };
    let mut v2 = unsafe { FixedView::<_, 3>::from_ptr(ptr) };
    assert!(v1.same_storage(&v2));

    v1.swap(&mut v2);
    assert_eq!(v1, [1, 2, 3]);
    v1.assign(&v2);
    assert_eq!(v1, [1, 2, 3]);
    v1.take_from(&mut v2);
    assert_eq!(storage, [1, 2, 3]);
}

#[test]
fn test_swap_array_same_storage() {
    let mut storage = [1, 2, 3];
    let ptr = storage.as_mut_ptr();
    let mut view = unsafe { FixedView::<_, 3>::from_ptr(ptr) };
    let own = unsafe { FixedView::<_, 3>::from_ptr(ptr) }.into_array_mut();

    view.swap_array(own);
    view.assign_array(own);
    assert_eq!(storage, [1, 2, 3]);
}

#[test]
fn test_aliasing_views_used_in_turn() {
    let mut storage = [0, 0];
    let ptr = storage.as_mut_ptr();
    let mut v1 = unsafe { FixedView::<_, 2>::from_ptr(ptr) };
    let mut v2 = unsafe { FixedView::<_, 2>::from_ptr(ptr) };

    // each reference ends before the other view is touched
    *v1.front_mut() = 5;
    assert_eq!(*v2.front(), 5);
    *v2.at_mut(1).unwrap() = 9;
    assert_eq!(v1.at(1), Ok(&9));
    for elt in v1.iter_mut() {
        *elt += 1;
    }
    assert_eq!(v2, [6, 10]);
    assert_eq!(storage, [6, 10]);
}

#[test]
fn test_swap_array() {
    let mut a = [1, 2, 3];
    let mut b = [4, 5, 6];
    let mut va = FixedView::new(&mut a);
    va.swap_array(&mut b);
    assert_eq!(va, [4, 5, 6]);
    assert_eq!(b, [1, 2, 3]);
}

#[test]
fn test_assign() {
    let mut a = [0; 4];
    let mut b = [1, 2, 3, 4];
    let pa = a.as_ptr();
    let mut va = FixedView::new(&mut a);
    let vb = FixedView::new(&mut b);

    va.assign(&vb);
    assert_eq!(va.as_ptr(), pa);
    assert!(!va.same_storage(&vb));
    assert_eq!(va, vb);

    va.assign_array(&[5, 6, 7, 8]);
    assert_eq!(a, [5, 6, 7, 8]);
    assert_eq!(b, [1, 2, 3, 4]);
}

#[test]
fn test_take_from() {
    let mut a = [vec![0], vec![0]];
    let mut b = [vec![1, 2], vec![3]];
    let mut va = FixedView::new(&mut a);
    let mut vb = FixedView::new(&mut b);

    va.take_from(&mut vb);
    assert_eq!(va, [vec![1, 2], vec![3]]);
    assert_eq!(vb, [Vec::<i32>::new(), Vec::new()]);
}

#[test]
fn test_move_from_drops_replaced() {
    let flag = &Cell::new(0);

    struct Bump<'a>(&'a Cell<i32>);

    impl<'a> Drop for Bump<'a> {
        fn drop(&mut self) {
            let n = self.0.get();
            self.0.set(n + 1);
        }
    }

    let mut storage = [Bump(flag), Bump(flag), Bump(flag)];
    {
        let mut view = FixedView::new(&mut storage);
        view.move_from([Bump(flag), Bump(flag), Bump(flag)]);
        assert_eq!(flag.get(), 3);
    }
    // dropping the view drops nothing
    assert_eq!(flag.get(), 3);
    drop(storage);
    assert_eq!(flag.get(), 6);
}

#[test]
fn test_comparison() {
    let mut a = [1, 2, 3];
    let mut b = [1, 2, 3];
    let mut c = [1, 2, 4];
    let va = FixedView::new(&mut a);
    let vb = FixedView::new(&mut b);
    let vc = FixedView::new(&mut c);

    assert!(!va.same_storage(&vb));
    assert_eq!(va, vb);
    assert_ne!(va, vc);
    assert!(va < vc && va <= vc && vc > va && vc >= va);
    assert!(va <= vb && va >= vb);
    assert_eq!(va.cmp(&vc), std::cmp::Ordering::Less);
    assert_eq!(va.partial_cmp(&[0, 9, 9]), Some(std::cmp::Ordering::Greater));
    assert!([0, 9, 9] < va && [1, 2, 3] <= va && [1, 2, 4] > va);
    assert_eq!([1, 2, 3].partial_cmp(&vb), Some(std::cmp::Ordering::Equal));

    assert!(va == [1, 2, 3]);
    assert!([1, 2, 3] == va);
    assert!(va == [1, 2, 3][..]);
    assert!([1, 2, 4][..] == vc);
}

#[test]
fn test_hash_follows_contents() {
    fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    let mut a = [7u8, 8, 9];
    let mut b = [7u8, 8, 9];
    let va = FixedView::new(&mut a);
    let vb = FixedView::new(&mut b);
    assert_eq!(hash_of(&va), hash_of(&vb));
    assert_eq!(hash_of(&va), hash_of(&[7u8, 8, 9]));
}

#[test]
fn test_iter() {
    let mut storage = [1, 2, 3];
    let mut view = FixedView::new(&mut storage);

    let mut iter = view.iter();
    assert_eq!(iter.size_hint(), (3, Some(3)));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), Some(&1));

    // restartable
    assert_eq!(view.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(view.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(view.iter_rev().copied().collect::<Vec<_>>(), [3, 2, 1]);

    let mut n = 0;
    for elt in view.iter_rev_mut() {
        n += 1;
        *elt += n * 10;
    }
    assert_eq!(view, [31, 22, 13]);

    let sum: i32 = (&view).into_iter().sum();
    assert_eq!(sum, 66);

    for elt in view {
        *elt = 0;
    }
    assert_eq!(storage, [0; 3]);
}

#[test]
fn test_capacity() {
    let mut storage = [0u16; 7];
    let view = FixedView::new(&mut storage);
    assert_eq!(view.len(), 7);
    assert_eq!(view.capacity(), 7);
    assert_eq!(FixedView::<u16, 7>::CAPACITY, 7);
    assert!(!view.is_empty());
}

#[test]
fn test_front_back() {
    let mut storage = [4, 5, 6];
    let mut view = FixedView::new(&mut storage);
    assert_eq!(*view.front(), 4);
    assert_eq!(*view.back(), 6);
    *view.front_mut() = 0;
    assert_eq!(storage, [0, 5, 6]);

    let mut single = [1];
    let view = FixedView::new(&mut single);
    assert!(std::ptr::eq(view.front(), view.back()));
}

#[test]
fn test_data_pointer() {
    let mut storage = [1.0f64, 2.0];
    let expected = storage.as_ptr();
    let mut view = FixedView::new(&mut storage);
    assert_eq!(view.as_ptr(), expected);
    unsafe {
        *view.as_mut_ptr().add(1) = 3.0;
    }
    assert_eq!(view.as_slice(), &[1.0, 3.0]);
}

#[test]
fn test_deref_array_api() {
    let mut storage = [3, 1, 2];
    let mut view = FixedView::new(&mut storage);
    view.as_mut_slice().sort();
    assert_eq!(view.get(1), Some(&2));
    assert_eq!(view.get(3), None);
    assert!(view.contains(&3));
    let array: &[i32; 3] = view.as_ref();
    assert_eq!(array, &[1, 2, 3]);
    assert_eq!(view.into_array_mut(), &mut [1, 2, 3]);
}

#[test]
#[should_panic]
fn test_index_oob() {
    fn read(view: &FixedView<i32, 2>, index: usize) -> i32 { view[index] }

    let mut storage = [0; 2];
    let view = FixedView::new(&mut storage);
    read(&view, 2);
}

#[test]
fn test_debug() {
    let mut storage = ["x", "y"];
    let view = FixedView::new(&mut storage);
    assert_eq!(format!("{:?}", view), r#"["x", "y"]"#);
}

#[test]
fn test_zero_sized_elements() {
    let mut storage = [(); 4];
    let mut view = FixedView::new(&mut storage);
    view.fill(());
    assert_eq!(view.iter().count(), 4);
    assert_matches!(view.at(4), Err(_));
}

#[test]
fn test_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}
    let mut data = [vec![1], vec![2]];
    let view = FixedView::new(&mut data);
    assert_send_sync(&view);
}

#[test]
fn test_compact_size() {
    type ByteView<'a> = FixedView<'a, u8, 64>;
    assert_eq!(mem::size_of::<ByteView>(), mem::size_of::<*mut u8>());
    assert_eq!(mem::size_of::<Option<ByteView>>(), mem::size_of::<*mut u8>());
}
