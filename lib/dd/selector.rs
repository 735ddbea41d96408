//! Builders for the one-variable selector diagrams and cofactor
//! restrictions used to assemble gate diagrams from amplitude terminals.
//!
//! A selector over `xt` weights the `xt = 1` half-space with the
//! multiplicative identity and the `xt = 0` half-space with zero (the
//! complement builder mirrors this); multiplying a diagram by a selector
//! masks it to one cofactor, and the restrictions extract cofactors
//! directly. Together these are the building blocks gate assembly composes
//! through the engine's `apply`.

use rustc_hash::FxHashMap;
use crate::{
    amplitude::Amplitude,
    dd::{ DdError, DdRef, DdResult, Var, engine::Engine },
};

/// Build the two-level diagram over `xt` whose `xt = 0` edge carries the
/// additive identity and whose `xt = 1` edge carries the multiplicative
/// identity.
pub fn make_selector<E>(en: &mut E, xt: Var) -> DdResult<DdRef>
where E: Engine + ?Sized
{
    let lo = en.make_leaf(&Amplitude::zero());
    let hi = en.make_leaf(&Amplitude::one());
    en.make_node(xt, lo, hi)
}

/// Mirror of [`make_selector`]: the `xt = 0` edge carries 1 and the
/// `xt = 1` edge carries 0.
pub fn make_selector_comp<E>(en: &mut E, xt: Var) -> DdResult<DdRef>
where E: Engine + ?Sized
{
    let lo = en.make_leaf(&Amplitude::one());
    let hi = en.make_leaf(&Amplitude::zero());
    en.make_node(xt, lo, hi)
}

/// The cofactor of `t` at `xt = 1`.
///
/// Correct whether `xt` lies above, at, or below `t`'s top variable; levels
/// absent from `t` are skipped, and rebuilt levels re-cons through the
/// engine's canonical-node rules.
pub fn restrict_high<E>(en: &mut E, t: DdRef, xt: Var) -> DdResult<DdRef>
where E: Engine + ?Sized
{
    let mut memo = FxHashMap::default();
    restrict(en, t, xt, true, &mut memo)
}

/// The cofactor of `t` at `xt = 0`.
pub fn restrict_low<E>(en: &mut E, t: DdRef, xt: Var) -> DdResult<DdRef>
where E: Engine + ?Sized
{
    let mut memo = FxHashMap::default();
    restrict(en, t, xt, false, &mut memo)
}

// results are memoized per call; a full engine routes this through its
// shared operation cache instead
fn restrict<E>(
    en: &mut E,
    t: DdRef,
    xt: Var,
    high: bool,
    memo: &mut FxHashMap<DdRef, DdRef>,
) -> DdResult<DdRef>
where E: Engine + ?Sized
{
    if let Some(&r) = memo.get(&t) { return Ok(r); }
    let r = match en.branch(t) {
        None => {
            // terminals are constant in every variable
            en.leaf_value(t).ok_or(DdError::MissingNode(t))?;
            t
        },
        Some((var, low, high_child)) => {
            if var == xt {
                if high { high_child } else { low }
            } else if var > xt {
                // xt is absent above this point, so the cofactor is t
                // itself
                t
            } else {
                let l = restrict(en, low, xt, high, memo)?;
                let h = restrict(en, high_child, xt, high, memo)?;
                en.make_node(var, l, h)?
            }
        },
    };
    memo.insert(t, r);
    Ok(r)
}
