//! Wrapping an existing container type with a canary marker.

/// Attaches the canary marker `Con` to a raw container value without
/// editing the container's own type.
///
/// This is for the case where the untyped container comes from
/// elsewhere and cannot grow a marker field of its own. The marker
/// field is named `tcon` and public, so `tcon_check!` and `tcon_cast!`
/// apply to a `Wrap` directly. `Wrap` adds no storage over `Raw`.
///
/// ```
/// use tcon::{tcon, tcon_check, Wrap};
///
/// pub struct RawList {
///     pub slots: Vec<*mut ()>,
/// }
///
/// #[tcon]
/// pub struct StringListCon {
///     pub canary: *mut String,
/// }
///
/// let list: Wrap<RawList, StringListCon> = Wrap::new(RawList { slots: Vec::new() });
/// let elem: *mut String = core::ptr::null_mut();
/// assert!(tcon_check!(&list, canary, elem).raw().slots.is_empty());
/// ```
pub struct Wrap<Raw, Con> {
    raw: Raw,
    /// The canary marker. Public so the checking macros can name it.
    pub tcon: Con,
}

impl<Raw, Con: Default> Wrap<Raw, Con> {
    /// Wraps a raw container value.
    pub fn new(raw: Raw) -> Self {
        Wrap {
            raw,
            tcon: Con::default(),
        }
    }
}

impl<Raw, Con> Wrap<Raw, Con> {
    /// Unwraps to the raw container.
    pub fn raw(&self) -> &Raw {
        &self.raw
    }

    /// Unwraps to the raw container, mutably.
    pub fn raw_mut(&mut self) -> &mut Raw {
        &mut self.raw
    }

    /// Unwraps by value, dropping the marker.
    pub fn into_raw(self) -> Raw {
        self.raw
    }
}

impl<Raw: Default, Con: Default> Default for Wrap<Raw, Con> {
    fn default() -> Self {
        Wrap::new(Raw::default())
    }
}
