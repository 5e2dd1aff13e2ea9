//! Compact 8-bit encoding of symbol values.

use super::symbol::Symbol;
use std::fmt;
use std::marker::PhantomData;

/// Raw 8-bit code for a value of the symbol domain `T`.
///
/// A code built from a symbol is always in range. A code built with
/// [`Code::from_raw`] may hold anything, including the sentinel
/// (`T::COUNT`) or beyond. The dispatch engine works on codes so that
/// out-of-range events and corrupted states stay detectable.
///
/// # Example
///
/// ```rust
/// use fsm_table::core::{Code, Symbol};
/// use fsm_table::symbol_enum;
///
/// symbol_enum! {
///     enum Valve {
///         Shut,
///         Open,
///     }
/// }
///
/// let open: Code<Valve> = Valve::Open.into();
/// assert_eq!(open.raw(), 1);
/// assert_eq!(open.decode(), Some(Valve::Open));
///
/// assert!(!Code::<Valve>::sentinel().is_valid());
/// assert_eq!(Code::<Valve>::from_raw(7).decode(), None);
/// ```
pub struct Code<T> {
    raw: u8,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: Symbol> Code<T> {
    /// Wrap a raw code without range checking.
    pub const fn from_raw(raw: u8) -> Self {
        Self {
            raw,
            _phantom: PhantomData,
        }
    }

    /// The sentinel code, equal to the domain's cardinality.
    ///
    /// Saturates at `u8::MAX` for domains too large to encode; such domains
    /// are rejected when a machine is built.
    pub fn sentinel() -> Self {
        Self::from_raw(u8::try_from(T::COUNT).unwrap_or(u8::MAX))
    }

    /// The first declared value's code.
    pub const fn initial() -> Self {
        Self::from_raw(0)
    }

    pub const fn raw(self) -> u8 {
        self.raw
    }

    /// Whether the code names a declared value.
    pub fn is_valid(self) -> bool {
        usize::from(self.raw) < T::COUNT
    }

    /// Decode back to the symbol, `None` when out of range.
    pub fn decode(self) -> Option<T> {
        if self.is_valid() {
            T::from_index(self.raw)
        } else {
            None
        }
    }

    /// Symbol name, or `"<invalid>"` for out-of-range codes.
    pub fn name(self) -> &'static str {
        self.decode().map_or("<invalid>", Symbol::name)
    }
}

impl<T: Symbol> From<T> for Code<T> {
    fn from(value: T) -> Self {
        Self::from_raw(value.index())
    }
}

// Manual impls: derives would put the bounds on `T` itself.
impl<T> Clone for Code<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Code<T> {}

impl<T> PartialEq for Code<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T> Eq for Code<T> {}

impl<T: Symbol> PartialEq<T> for Code<T> {
    fn eq(&self, other: &T) -> bool {
        self.raw == other.index()
    }
}

impl<T: Symbol> fmt::Debug for Code<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.decode() {
            Some(value) => write!(f, "{:?}", value),
            None => write!(f, "Code({}, invalid)", self.raw),
        }
    }
}

impl<T: Symbol> fmt::Display for Code<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.decode() {
            Some(value) => f.write_str(value.name()),
            None => write!(f, "#{}", self.raw),
        }
    }
}
