//! Double dispatch over closed element sets.
//!
//! An element set is a closed enum whose variants each accept a visitor;
//! the visitor implements one operation per variant. Which operation runs
//! is resolved from the concrete variant at call time, without the caller
//! naming it.
//!
//! Element sets are declared with [`element_set!`](crate::element_set),
//! which generates the enum, its visitor trait and the dispatching `match`
//! from one variant list. The `match` has no fallback arm: adding a
//! variant without a visitor method fails to compile, so there is no
//! "unhandled variant" case to report at runtime.
//!
//! # Example
//!
//! ```rust
//! use switchyard::element_set;
//! use switchyard::visitor::accept_all;
//!
//! pub struct Word(pub String);
//! pub struct Number(pub i64);
//!
//! element_set! {
//!     pub enum Token: TokenVisitor {
//!         Word(Word) => visit_word,
//!         Number(Number) => visit_number,
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Tally {
//!     words: usize,
//!     sum: i64,
//! }
//!
//! impl TokenVisitor for Tally {
//!     type Output = ();
//!
//!     fn visit_word(&mut self, _word: &Word) {
//!         self.words += 1;
//!     }
//!
//!     fn visit_number(&mut self, number: &Number) {
//!         self.sum += number.0;
//!     }
//! }
//!
//! let tokens = vec![
//!     Token::Word(Word("a".into())),
//!     Token::Number(Number(4)),
//!     Token::Number(Number(5)),
//! ];
//!
//! let mut tally = Tally::default();
//! accept_all(&tokens, &mut tally);
//! assert_eq!(tally.words, 1);
//! assert_eq!(tally.sum, 9);
//! ```

use tracing::trace;

/// A variant of a closed element set.
pub trait Element {
    /// Name of the concrete variant, for diagnostics.
    fn kind(&self) -> &'static str;
}

/// An element that can be visited by `V`.
///
/// Implemented by [`element_set!`](crate::element_set) for every visitor
/// of the generated trait.
pub trait Accept<V: ?Sized>: Element {
    /// Value produced by the visit.
    type Output;

    /// Call the visitor operation matching this element's variant.
    fn accept(&self, visitor: &mut V) -> Self::Output;
}

/// Dispatch one element to the matching operation of `visitor`.
pub fn accept<E, V>(element: &E, visitor: &mut V) -> E::Output
where
    E: Accept<V>,
    V: ?Sized,
{
    trace!(kind = element.kind(), "dispatching element");
    element.accept(visitor)
}

/// Dispatch every element in order, collecting the results.
///
/// The same visitor sees every element, so it can accumulate state
/// across the whole structure.
pub fn accept_all<'a, E, V, I>(elements: I, visitor: &mut V) -> Vec<E::Output>
where
    E: Accept<V> + 'a,
    V: ?Sized,
    I: IntoIterator<Item = &'a E>,
{
    elements
        .into_iter()
        .map(|element| accept(element, &mut *visitor))
        .collect()
}
