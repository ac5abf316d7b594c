pub struct ConstGenericSmuggler<const CONST: usize> {}

pub trait LenIsNonZero {
    const CHECK: ();
}

impl<const N: usize> LenIsNonZero for ConstGenericSmuggler<N> {
    const CHECK: () = {
        if N == 0 {
            panic!("FixedView: cannot view a zero-length array");
        }
    };
}

/// Fails to compile when instantiated with `N == 0`.
pub const fn check_len_nonzero<const N: usize>() {
    <ConstGenericSmuggler<N> as LenIsNonZero>::CHECK
}
