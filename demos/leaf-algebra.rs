//! Tour of the exact amplitude ring: canonical forms, the gate-induced
//! scalar operations, and the absence of rounding drift.

use num_complex::Complex64;
use amp_dd::{ amp, amplitude::Amplitude };

fn main() {
    let r = Amplitude::frac_1_sqrt_2();
    println!("1/√2          = {}", r);
    println!("(1/√2)²       = {}", r.clone() * r.clone());
    println!("1/√2 + 1/√2   = {}", r.clone() + r.clone());
    println!("as float      = {}", Complex64::from(&r));

    // distinct encodings of one value reduce to the same canonical tuple
    println!(
        "(ω − ω³)/(√2)² = {}  (same as {})",
        amp!(0, 1, 0, -1; 2),
        r,
    );

    // the eight phase units cycle through rot1
    let mut z = Amplitude::one();
    for n in 0..8 {
        println!("ω^{} = {}", n, z);
        z = z.rot1();
    }

    // a thousand alternating scalings land exactly back on 1
    let mut z = Amplitude::one();
    for _ in 0..1000 {
        z = z.div_sqrt2().rot1().mul_sqrt2().rot2().rot1().rot2().rot2();
    }
    println!("after 1000 round trips: {}", z);
}
