// Crates that have the "proc-macro" crate type are only allowed to export
// procedural macros. So we cannot have one crate that defines the #[tcon]
// attribute alongside other types of public APIs like traits and structs.
//
// We solve this by defining the attribute in a separate tcon-impl crate
// and re-exporting it from this crate, so that users only have one crate
// that they need to import. The traits, the helper functions and the
// tcon_check!/tcon_cast! macros all live here.
//
// Everything in this crate happens at compile time. A canary marker is a
// zero-sized struct whose phantom fields record, per named slot, the
// element type a generic container promises to hold. The checking macros
// compare call-site expressions against those recorded types; nothing is
// ever read from or written to the marker at runtime.

#![no_std]

pub use tcon_impl::tcon;

pub mod cast;
pub mod check;
pub mod wrap;

pub use cast::CanaryCast;
pub use check::Compatible;
pub use wrap::Wrap;

/// Wildcard canary type, the counterpart of a `void *` canary.
///
/// A canary declared with this type accepts any pointer-shaped value in
/// [`tcon_check!`] (raw pointers and references alike), and degrades
/// [`tcon_cast!`] to a unit pointer since there is no concrete element
/// type to cast to.
pub struct AnyPtr;

/// Typechecks a typed container.
///
/// `tcon_check!(x, canary, value)` verifies at compile time that `value`
/// has the type declared by the `canary` field of `x`'s marker, then
/// evaluates to `x` unchanged so it can be chained inline. The value
/// expression is only probed for its type; the probe sits in dead code
/// and is never executed.
///
/// The container must carry its canary marker in a field named `tcon`,
/// and both that field and the canary must be visible at the call site.
///
/// ```
/// use tcon::{tcon, tcon_check};
///
/// #[tcon]
/// pub struct StringListCon {
///     pub canary: *mut String,
/// }
///
/// pub struct StringList {
///     pub slots: Vec<*mut ()>,
///     pub tcon: StringListCon,
/// }
///
/// fn len(list: &StringList) -> usize {
///     list.slots.len()
/// }
///
/// let list = StringList { slots: Vec::new(), tcon: StringListCon::new() };
/// let elem: *mut String = core::ptr::null_mut();
///
/// // Chains: len() receives the original &list.
/// assert_eq!(len(tcon_check!(&list, canary, elem)), 0);
/// ```
///
/// A wrong element type is rejected at compile time:
///
/// ```compile_fail
/// use tcon::{tcon, tcon_check};
///
/// #[tcon]
/// pub struct StringListCon {
///     pub canary: *mut String,
/// }
///
/// pub struct StringList {
///     pub slots: Vec<*mut ()>,
///     pub tcon: StringListCon,
/// }
///
/// let list = StringList { slots: Vec::new(), tcon: StringListCon::new() };
/// let elem: *mut i64 = core::ptr::null_mut();
/// tcon_check!(&list, canary, elem);
/// ```
#[macro_export]
macro_rules! tcon_check {
    ($x:expr, $canary:ident, $value:expr) => {
        match $x {
            __tcon_x => {
                if false {
                    $crate::check::check_compatible(
                        __tcon_x.tcon.$canary,
                        $crate::check::type_of_val(&$value),
                    );
                }
                __tcon_x
            }
        }
    };
}

/// Casts a value to a canary type for a container.
///
/// `tcon_cast!(x, canary, value)` evaluates to `value` with its static
/// type rewritten to the type the `canary` field of `x`'s marker
/// declares. The only runtime operation is the raw pointer cast itself;
/// the container's contents are never read, only its zero-sized marker
/// field is named.
///
/// For an [`AnyPtr`] canary there is no concrete element type, so the
/// result degrades to `*mut ()` (or `*const ()` for a const pointer
/// value).
///
/// ```
/// use tcon::{tcon, tcon_cast};
///
/// #[tcon]
/// pub struct StringListCon {
///     pub canary: *mut String,
/// }
///
/// pub struct StringList {
///     pub slots: Vec<*mut ()>,
///     pub tcon: StringListCon,
/// }
///
/// let mut list = StringList { slots: Vec::new(), tcon: StringListCon::new() };
/// let elem = Box::into_raw(Box::new(String::from("hello")));
/// list.slots.push(elem as *mut ());
///
/// let raw = list.slots.pop().unwrap();
/// let back: *mut String = tcon_cast!(&list, canary, raw);
/// let elem = unsafe { Box::from_raw(back) };
/// assert_eq!(*elem, "hello");
/// ```
///
/// A cast never confers mutability:
///
/// ```compile_fail
/// use tcon::{tcon, tcon_cast};
///
/// #[tcon]
/// pub struct Con {
///     pub canary: *mut u32,
/// }
///
/// pub struct Holder {
///     pub tcon: Con,
/// }
///
/// let h = Holder { tcon: Con::new() };
/// let p: *const u32 = core::ptr::null();
/// tcon_cast!(&h, canary, p);
/// ```
#[macro_export]
macro_rules! tcon_cast {
    ($x:expr, $canary:ident, $value:expr) => {
        $crate::cast::cast_to_canary(($x).tcon.$canary, $value)
    };
}
