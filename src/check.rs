//! The acceptance relation behind [`tcon_check!`](crate::tcon_check).
//!
//! A canary of type `C` accepts a value of type `V` when `C:
//! Compatible<V>` holds. A failed check therefore surfaces as an
//! unsatisfied trait bound at the call site, which is the entire error
//! story of this crate: there is no runtime error path.

use core::marker::PhantomData;

use crate::AnyPtr;

/// Value types a canary of type `Self` accepts.
///
/// Every type accepts itself, a const pointer canary additionally
/// accepts the mut pointer to the same pointee, and an [`AnyPtr`]
/// canary accepts any pointer-shaped value.
///
/// Acceptance only ever discards capabilities, so a mut pointer canary
/// does not accept a const pointer:
///
/// ```compile_fail
/// fn assert_compat<C: tcon::Compatible<V>, V>() {}
/// assert_compat::<*mut u32, *const u32>();
/// ```
pub trait Compatible<V: ?Sized> {}

impl<T: ?Sized> Compatible<T> for T {}

impl<T: ?Sized> Compatible<*mut T> for *const T {}

impl<T: ?Sized> Compatible<*mut T> for AnyPtr {}
impl<T: ?Sized> Compatible<*const T> for AnyPtr {}
impl<'a, T: ?Sized> Compatible<&'a T> for AnyPtr {}
impl<'a, T: ?Sized> Compatible<&'a mut T> for AnyPtr {}

/// Compares a canary type against a value type. Compiles to nothing;
/// the whole point is the `Compatible` bound.
pub const fn check_compatible<C, V>(_canary: PhantomData<C>, _value: PhantomData<V>)
where
    C: Compatible<V> + ?Sized,
    V: ?Sized,
{
}

/// Captures the type of an expression without evaluating anything at
/// runtime.
pub const fn type_of_val<T: ?Sized>(_value: &T) -> PhantomData<T> {
    PhantomData
}
