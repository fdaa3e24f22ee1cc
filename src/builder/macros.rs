//! Macros for ergonomic label and table construction.

/// Declare a unit enum usable as both a `State` and an `Event` label.
///
/// The generated enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
/// `Debug`, `Serialize` and `Deserialize`, and gets an inherent `name()` that
/// returns the variant name.
///
/// # Example
///
/// ```
/// use fsmcell::label_enum;
///
/// label_enum! {
///     pub enum FetchState {
///         Idle,
///         Loading,
///         Success,
///         Error,
///     }
/// }
///
/// assert_eq!(FetchState::Loading.name(), "Loading");
/// ```
#[macro_export]
macro_rules! label_enum {
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
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Variant name of the label.
            #[allow(dead_code)]
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                $name::name(self)
            }
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                $name::name(self)
            }
        }
    };
}

/// Build a `TransitionTable` from a literal description.
///
/// Each state maps to a block of `event => rule` pairs. A rule is anything
/// that converts into a `TransitionRule`: a bare target state, or
/// [`guarded`](crate::core::guarded) for a guarded rule. An empty block
/// declares a state with no outgoing rules.
///
/// # Example
///
/// ```
/// use fsmcell::core::guarded;
/// use fsmcell::{label_enum, transitions};
///
/// label_enum! {
///     enum Fetch { Idle, Loading, Success, Error }
/// }
///
/// label_enum! {
///     enum Signal { Start, Resolve, Reject, Retry }
/// }
///
/// let table = transitions! {
///     Fetch::Idle => { Signal::Start => Fetch::Loading },
///     Fetch::Loading => {
///         Signal::Resolve => Fetch::Success,
///         Signal::Reject => Fetch::Error,
///     },
///     Fetch::Error => { Signal::Retry => guarded(Fetch::Loading, || true) },
///     Fetch::Success => {},
/// };
///
/// assert_eq!(table.len(), 4);
/// assert!(table.contains_state(&Fetch::Success));
/// ```
#[macro_export]
macro_rules! transitions {
    (
        $(
            $from:expr => {
                $( $event:expr => $rule:expr ),* $(,)?
            }
        ),* $(,)?
    ) => {{
        let mut table = $crate::core::TransitionTable::new();
        $(
            {
                let from = $from;
                table.add_state(::std::clone::Clone::clone(&from));
                $(
                    table.insert(::std::clone::Clone::clone(&from), $event, $rule);
                )*
            }
        )*
        table
    }};
}
