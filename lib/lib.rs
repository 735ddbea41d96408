//! This package contains the exact-arithmetic core of a decision-diagram
//! quantum circuit simulator: amplitudes are stored as elements of the ring
//! **Z**[*ω*, 1/√2] rather than floating-point numbers, so state vectors and
//! gate matrices represented as shared diagrams stay exact no matter how
//! many gates are applied, and equal amplitudes always collapse to the
//! identical hash-consed terminal.
//!
//! - [`amplitude`] provides the ring element itself, its canonical form, and
//! all of the arithmetic the supported gate set induces on it.
//! - [`dd`] binds the ring into a hash-consing engine's terminal-value
//! protocol and provides the single-qubit selector diagrams and cofactor
//! restrictions gates are assembled from. The engine itself (parallel apply
//! recursion, node table, garbage collection) is an external collaborator,
//! stood in for by a minimal in-memory table.
//!
//! # See also
//! - [Sylvan](https://github.com/trolando/sylvan): a parallel
//! (multi-terminal) binary decision diagram library with custom leaf
//! support.
//! - [MQT DDSIM](https://github.com/cda-tum/mqt-ddsim): a quantum circuit
//! simulator built on decision diagrams.

pub mod amplitude;
pub mod dd;

pub use amplitude::Amplitude;

pub extern crate num_bigint;

/// Handy macro to create [`Amplitude`]s from more natural and succinct
/// syntax.
///
/// A single argument is a plain integer; four arguments are the *ω*-basis
/// coefficients; a trailing `; k` sets the √2 exponent. The result is
/// always in canonical form.
///
/// ```
/// use amp_dd::amp;
///
/// assert_eq!( amp!(5),             amp!(5, 0, 0, 0)     );
/// assert_eq!( amp!(2, 0, 2, 0; 2), amp!(1, 0, 1, 0)     );
/// assert_eq!( -amp!(0, 1, 0, -1),  amp!(0, -1, 0, 1)    );
/// assert_eq!( amp!(1, 0, 0, 0; 1), amp!(2, 0, 0, 0; 3)  );
/// ```
#[macro_export]
macro_rules! amp {
    ( $a:expr )
        => { $crate::amplitude::Amplitude::from($a as i64) };
    ( $a:expr, $b:expr, $c:expr, $d:expr )
        => { $crate::amplitude::Amplitude::new($a, $b, $c, $d, 0) };
    ( $a:expr, $b:expr, $c:expr, $d:expr ; $k:expr )
        => { $crate::amplitude::Amplitude::new($a, $b, $c, $d, $k) };
}
