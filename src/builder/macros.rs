//! Macros for ergonomic state declaration.

/// Generate a [`State`](crate::State) implementation for a plain enum.
///
/// Each variant's name becomes the state's `name()`, which in turn feeds
/// the `enter:`/`leave:` notification topics.
///
/// # Example
///
/// ```
/// use switchback::{state_enum, State, StateMachine};
///
/// state_enum! {
///     pub enum Light {
///         Red,
///         Yellow,
///         Green,
///     }
/// }
///
/// assert_eq!(Light::Red.name(), "Red");
///
/// let mut machine = StateMachine::builder()
///     .states([Light::Red, Light::Yellow, Light::Green])
///     .build()
///     .unwrap();
/// assert!(machine.set_state(Light::Green));
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
        #[derive(Clone, PartialEq, Debug, serde::Serialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
