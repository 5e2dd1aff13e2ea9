//! Symbol trait for state and event domains.
//!
//! States and events are both finite, ordered enumerations. Declaration order
//! defines each value's ordinal, and the first declared state is the initial
//! state of every machine built over that domain.

use std::fmt::Debug;

/// A finite, ordered domain of symbolic identifiers.
///
/// Implemented by state and event enumerations. `COUNT` is the explicit
/// cardinality of the domain; it doubles as the "out of range" sentinel
/// for the compact 8-bit encoding carried by [`Code`](super::Code).
///
/// Most integrators use [`symbol_enum!`](crate::symbol_enum) rather than
/// implementing this by hand.
///
/// # Example
///
/// ```rust
/// use fsm_table::core::Symbol;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum Door {
///     Closed,
///     Open,
/// }
///
/// impl Symbol for Door {
///     const COUNT: usize = 2;
///
///     fn index(self) -> u8 {
///         self as u8
///     }
///
///     fn from_index(index: u8) -> Option<Self> {
///         match index {
///             0 => Some(Self::Closed),
///             1 => Some(Self::Open),
///             _ => None,
///         }
///     }
///
///     fn name(self) -> &'static str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///         }
///     }
/// }
///
/// assert_eq!(Door::from_index(1), Some(Door::Open));
/// assert_eq!(Door::Open.index(), 1);
/// assert_eq!(Door::from_index(2), None);
/// ```
pub trait Symbol: Copy + Eq + Debug + Send + Sync + 'static {
    /// Number of declared values in the domain.
    const COUNT: usize;

    /// Ordinal of this value, in declaration order.
    fn index(self) -> u8;

    /// Inverse of [`index`](Symbol::index). `None` for any `index >= COUNT`.
    fn from_index(index: u8) -> Option<Self>;

    /// Name for display and logging.
    fn name(self) -> &'static str;

    /// All declared values, in declaration order.
    fn all() -> impl Iterator<Item = Self> {
        (0..=u8::MAX)
            .take(Self::COUNT)
            .filter_map(Self::from_index)
    }
}
