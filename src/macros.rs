//! Macro for declaring state enums.

/// Declare a unit-variant enum together with its `State` implementation.
///
/// Extra attributes on the enum and its variants (doc comments, additional
/// derives, `#[default]`) are passed through.
///
/// # Example
///
/// ```
/// use heroine::core::State;
/// use heroine::state_enum;
///
/// state_enum! {
///     #[derive(Copy, Eq, Default)]
///     pub enum Gait {
///         #[default]
///         Trot,
///         Gallop,
///     }
/// }
///
/// assert_eq!(Gait::Gallop.name(), "Gallop");
/// assert_eq!(Gait::default(), Gait::Trot);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
