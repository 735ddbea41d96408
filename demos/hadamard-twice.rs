//! Apply a Hadamard-style transform twice to a one-qubit state and recover
//! the *identical* shared diagram node. A floating-point back-end would
//! come back merely close; with exact amplitudes and hash-consing,
//! `H·H|0⟩` is `|0⟩`, pointer-equal.

use anyhow::Result;
use amp_dd::{
    amplitude::Amplitude,
    dd::{
        make_selector, make_selector_comp, restrict_high, restrict_low,
        DdRef, Engine, LeafRegistry, NodeTable, Var,
    },
};

// new amplitude at xt = 0 is (f0 + f1)/√2; at xt = 1 it is (f0 − f1)/√2
fn hadamard(en: &mut NodeTable, t: DdRef, xt: Var) -> Result<DdRef> {
    let f0 = restrict_low(en, t, xt)?;
    let f1 = restrict_high(en, t, xt)?;
    let sum = en.plus(f0, f1)?;
    let diff = en.minus(f0, f1)?;
    let keep = make_selector_comp(en, xt)?;
    let flip = make_selector(en, xt)?;
    let lo = en.times(keep, sum)?;
    let hi = en.times(flip, diff)?;
    let both = en.plus(lo, hi)?;
    Ok(en.div_sqrt2(both)?)
}

fn main() -> Result<()> {
    let mut registry = LeafRegistry::new();
    let mut en = NodeTable::new(&mut registry);

    // |0⟩: amplitude 1 at x0 = 0, amplitude 0 at x0 = 1
    let one = en.make_leaf(&Amplitude::one());
    let zero = en.make_leaf(&Amplitude::zero());
    let state = en.make_node(0, one, zero)?;
    en.protect(state);

    let h1 = hadamard(&mut en, state, 0)?;
    // both assignments now carry 1/√2, so the diagram is a single terminal
    if let Some(v) = en.leaf_value(h1) {
        println!("H|0⟩ collapses to one shared amplitude: {}", v);
    }

    let h2 = hadamard(&mut en, h1, 0)?;
    println!("H·H|0⟩ is the same hash-consed node: {}", h2 == state);

    en.protect(h2);
    let reclaimed = en.collect_garbage();
    println!(
        "collection reclaimed {} intermediate nodes; {} remain live",
        reclaimed,
        en.count_nodes(),
    );
    Ok(())
}
