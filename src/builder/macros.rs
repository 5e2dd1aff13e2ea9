//! Macros for declaring state and event domains.

/// Declare a fieldless enum and implement [`Symbol`](crate::core::Symbol) for it.
///
/// Variants are numbered in declaration order starting at zero, and `COUNT`
/// is the number of variants. A compile-time assertion rejects domains whose
/// sentinel would not fit the 8-bit code.
///
/// The generated enum derives `serde::Serialize` and `serde::Deserialize`, so
/// the invoking crate must depend on `serde` with the `derive` feature.
///
/// # Example
///
/// ```
/// use fsm_table::core::Symbol;
/// use fsm_table::symbol_enum;
///
/// symbol_enum! {
///     pub enum PumpState {
///         Idle,
///         Priming,
///         Running,
///     }
/// }
///
/// assert_eq!(PumpState::COUNT, 3);
/// assert_eq!(PumpState::Running.index(), 2);
/// assert_eq!(PumpState::Priming.name(), "Priming");
/// ```
#[macro_export]
macro_rules! symbol_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $name {
            const VARIANTS: &'static [$name] = &[$(Self::$variant),+];
        }

        const _: () = assert!(
            $name::VARIANTS.len() <= u8::MAX as usize,
            "symbol domain does not fit an 8-bit code with its sentinel"
        );

        impl $crate::core::Symbol for $name {
            const COUNT: usize = $name::VARIANTS.len();

            fn index(self) -> u8 {
                self as u8
            }

            fn from_index(index: u8) -> Option<Self> {
                Self::VARIANTS.get(usize::from(index)).copied()
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }
    };
}
