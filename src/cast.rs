//! The type-directed cast behind [`tcon_cast!`](crate::tcon_cast).

use core::marker::PhantomData;

use crate::AnyPtr;

/// Maps a canary type `Self` and a value type `V` to the cast result.
///
/// For a concrete pointer canary the target is the canary type itself.
/// For an [`AnyPtr`] canary there is no concrete type to recover, so
/// the target degrades to a unit pointer. Mutability can be discarded
/// by the cast (a mut pointer value through a const pointer canary)
/// but never conferred.
pub trait CanaryCast<V> {
    /// The static type the cast produces.
    type Target;

    /// Reinterprets the pointer. No other runtime work happens.
    fn cast(value: V) -> Self::Target;
}

impl<T, U: ?Sized> CanaryCast<*mut U> for *mut T {
    type Target = *mut T;

    fn cast(value: *mut U) -> *mut T {
        value as *mut T
    }
}

impl<T, U: ?Sized> CanaryCast<*const U> for *const T {
    type Target = *const T;

    fn cast(value: *const U) -> *const T {
        value as *const T
    }
}

impl<T, U: ?Sized> CanaryCast<*mut U> for *const T {
    type Target = *const T;

    fn cast(value: *mut U) -> *const T {
        value as *const T
    }
}

impl<U: ?Sized> CanaryCast<*mut U> for AnyPtr {
    type Target = *mut ();

    fn cast(value: *mut U) -> *mut () {
        value as *mut ()
    }
}

impl<U: ?Sized> CanaryCast<*const U> for AnyPtr {
    type Target = *const ();

    fn cast(value: *const U) -> *const () {
        value as *const ()
    }
}

/// Casts `value` to the target type of the canary `C`.
pub fn cast_to_canary<C, V>(_canary: PhantomData<C>, value: V) -> C::Target
where
    C: CanaryCast<V>,
{
    C::cast(value)
}
