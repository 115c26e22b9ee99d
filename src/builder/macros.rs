//! Macros for declaring closed state, event and element sets.

/// Generate a unit-variant state enum with its `State` and `Closed`
/// implementations.
///
/// # Example
///
/// ```
/// use switchyard::core::{Closed, State};
/// use switchyard::state_enum;
///
/// state_enum! {
///     pub enum Lamp {
///         Off,
///         On,
///         Burnt,
///     }
///     final: [Burnt]
/// }
///
/// assert_eq!(Lamp::On.name(), "On");
/// assert!(Lamp::Burnt.is_final());
/// assert_eq!(Lamp::VARIANTS.len(), 3);
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

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
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

            #[allow(unreachable_patterns)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }

        impl $crate::core::Closed for $name {
            const VARIANTS: &'static [Self] = &[$(Self::$variant),*];
        }
    };
}

/// Generate a unit-variant event enum whose variants carry a stable
/// textual name, with its `Event` and `Closed` implementations.
///
/// # Example
///
/// ```
/// use switchyard::core::Event;
/// use switchyard::event_enum;
///
/// event_enum! {
///     pub enum Switch {
///         Flip => "flip",
///         Reset => "reset",
///     }
/// }
///
/// assert_eq!(Switch::Flip.name(), "flip");
/// assert_eq!(Switch::parse("reset"), Some(Switch::Reset));
/// assert_eq!(Switch::parse("Reset"), None);
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
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

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            fn parse(name: &str) -> Option<Self> {
                match name {
                    $($label => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        impl $crate::core::Closed for $name {
            const VARIANTS: &'static [Self] = &[$(Self::$variant),*];
        }
    };
}

/// Generate a closed element enum together with its visitor trait.
///
/// Each variant wraps one payload type and names the visitor method that
/// handles it. The enum, the trait and the dispatching `match` come from
/// the same variant list, so a variant without a visitor method cannot
/// exist, and every visitor must implement every method.
///
/// # Example
///
/// ```
/// use switchyard::element_set;
/// use switchyard::visitor::{accept, Element};
///
/// pub struct Circle { pub radius: f64 }
/// pub struct Square { pub side: f64 }
///
/// element_set! {
///     pub enum Shape: ShapeVisitor {
///         Circle(Circle) => visit_circle,
///         Square(Square) => visit_square,
///     }
/// }
///
/// struct Area;
///
/// impl ShapeVisitor for Area {
///     type Output = f64;
///
///     fn visit_circle(&mut self, c: &Circle) -> f64 {
///         std::f64::consts::PI * c.radius * c.radius
///     }
///
///     fn visit_square(&mut self, s: &Square) -> f64 {
///         s.side * s.side
///     }
/// }
///
/// let square = Shape::Square(Square { side: 3.0 });
/// assert_eq!(square.kind(), "Square");
/// assert_eq!(accept(&square, &mut Area), 9.0);
/// ```
#[macro_export]
macro_rules! element_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $visitor:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident($payload:ty) => $method:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant($payload)
            ),+
        }

        #[doc = concat!("Visitor over every [`", stringify!($name), "`] variant.")]
        $vis trait $visitor {
            /// Value produced by each visit.
            type Output;

            $(
                #[doc = concat!("Handle a `", stringify!($variant), "` element.")]
                fn $method(&mut self, element: &$payload) -> Self::Output;
            )+
        }

        impl $crate::visitor::Element for $name {
            fn kind(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => stringify!($variant)),+
                }
            }
        }

        impl<V: $visitor + ?Sized> $crate::visitor::Accept<V> for $name {
            type Output = <V as $visitor>::Output;

            fn accept(&self, visitor: &mut V) -> Self::Output {
                match self {
                    $(Self::$variant(element) => visitor.$method(element)),+
                }
            }
        }
    };
}
