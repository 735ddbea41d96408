//! Complex numbers represented as members of the ring **Z**[*ω*, 1/√2],
//! where *ω* = exp(*iπ*/4) is the primitive 8th root of unity.
//!
//! All such elements can be represented using four unbounded integer
//! coefficients (*a*, *b*, *c*, *d*) and a non-negative exponent *k*, giving
//! a complex number as (*a* + *b ω* + *c ω*² + *d ω*³) / (√2)^*k*. These are
//! exact representations of all possible amplitudes that can arise from
//! Clifford+*T*-style quantum circuits, so no rounding error accumulates no
//! matter how many gates are applied.
//!
//! The basis satisfies *ω*⁴ = −1 (hence *ω*² = *i*) and √2 = *ω* − *ω*³,
//! which together close the representation under every ring operation
//! implemented here.

use std::ops::{ Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Neg };
use num_bigint::{ BigInt, BigUint };
use num_complex::Complex64 as C64;
use num_traits::{ One, Pow, Signed, ToPrimitive, Zero };

// parity via the low bit; two's complement makes this sign-safe
fn even(x: &BigInt) -> bool { !x.bit(0) }

/// An element of the ring **Z**[*ω*, 1/√2].
///
/// All elements of this ring are complex numbers that can be written in the
/// form
///
/// <blockquote>
///   <p style="font-size:20px">
///     (
///         <i>a</i>
///         + <i>b ω</i>
///         + <i>c ω</i><sup>2</sup>
///         + <i>d ω</i><sup>3</sup>
///     ) / (√2)<sup><i>k</i></sup>
///   </p>
/// </blockquote>
///
/// with *ω* = exp(*iπ*/4) and *k* ≥ 0.
///
/// Values are kept in a canonical form in which *k* is minimal: whenever the
/// numerator is divisible by √2 = *ω* − *ω*³ and *k* > 0, the factor is moved
/// out of the numerator and *k* is decremented. Since the numerator
/// coefficients are unique for a fixed *k* (the basis is linearly
/// independent), the canonical five-tuple is unique per complex number and
/// derived equality/hashing are exact.
///
/// ```
/// # use amp_dd::amplitude::Amplitude;
/// let r = Amplitude::frac_1_sqrt_2();
/// assert_eq!( r.clone() * r.clone(), Amplitude::new(1, 0, 0, 0, 2) );
/// assert_eq!( r.clone().mul_sqrt2(), Amplitude::one() );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Amplitude {
    /// Purely real, rational part.
    pub(crate) a: BigInt,
    /// *ω* component.
    pub(crate) b: BigInt,
    /// *ω*² (purely imaginary) component.
    pub(crate) c: BigInt,
    /// *ω*³ component.
    pub(crate) d: BigInt,
    /// Exponent on the outer factor of 1/√2.
    pub(crate) k: BigUint,
}

impl Amplitude {
    /// The constant value 0.
    pub fn zero() -> Self {
        Self {
            a: BigInt::zero(),
            b: BigInt::zero(),
            c: BigInt::zero(),
            d: BigInt::zero(),
            k: BigUint::zero(),
        }
    }

    /// The real unit 1.
    pub fn one() -> Self { Self::new(1, 0, 0, 0, 0) }

    /// The phase unit *ω* = exp(*iπ*/4).
    pub fn omega() -> Self { Self::new(0, 1, 0, 0, 0) }

    /// The imaginary unit *i* = *ω*².
    pub fn i() -> Self { Self::new(0, 0, 1, 0, 0) }

    /// The phase unit *ω*³ = exp(3*iπ*/4).
    pub fn omega3() -> Self { Self::new(0, 0, 0, 1, 0) }

    /// The real number √2 = *ω* − *ω*³.
    pub fn sqrt_2() -> Self { Self::new(0, 1, 0, -1, 0) }

    /// The real number 1/√2.
    pub fn frac_1_sqrt_2() -> Self { Self::new(1, 0, 0, 0, 1) }

    /// Create a new `Amplitude` denoting
    /// (`a` + `b` *ω* + `c` *ω*² + `d` *ω*³) / (√2)^`k`, reduced to canonical
    /// form.
    pub fn new<T>(a: T, b: T, c: T, d: T, k: u64) -> Self
    where T: Into<BigInt>
    {
        let mut z = Self {
            a: a.into(),
            b: b.into(),
            c: c.into(),
            d: d.into(),
            k: BigUint::from(k),
        };
        z.reduce();
        z
    }

    /// Create a new `Amplitude` from full-precision parts, reduced to
    /// canonical form.
    pub fn from_parts(a: BigInt, b: BigInt, c: BigInt, d: BigInt, k: BigUint)
        -> Self
    {
        let mut z = Self { a, b, c, d, k };
        z.reduce();
        z
    }

    // the numerator is divisible by √2 iff a ≡ c and b ≡ d (mod 2); this
    // follows from N/√2 = N·√2/2 and the rotation below
    fn sqrt2_divides_numer(&self) -> bool {
        even(&(&self.a + &self.c)) && even(&(&self.b + &self.d))
    }

    // numerator × √2, with √2 = ω − ω³ folded through ω⁴ = −1:
    // (a, b, c, d) ← (b − d, a + c, b + d, c − a)
    fn mul_sqrt2_numer(&mut self) {
        let a = &self.b - &self.d;
        let b = &self.a + &self.c;
        let c = &self.b + &self.d;
        let d = &self.c - &self.a;
        self.a = a;
        self.b = b;
        self.c = c;
        self.d = d;
    }

    // numerator ÷ √2; caller must have checked `sqrt2_divides_numer`
    fn div_sqrt2_numer(&mut self) {
        let a = (&self.b - &self.d) / 2;
        let b = (&self.a + &self.c) / 2;
        let c = (&self.b + &self.d) / 2;
        let d = (&self.c - &self.a) / 2;
        self.a = a;
        self.b = b;
        self.c = c;
        self.d = d;
    }

    // numerator × (√2)^pow, leaving k unchanged
    fn scale_up(&mut self, pow: &BigUint) {
        if pow.bit(0) { self.mul_sqrt2_numer(); }
        let half: BigUint = pow.clone() >> 1_u32;
        if !half.is_zero() {
            let f: BigInt = Pow::pow(BigInt::from(2), half);
            self.a *= &f;
            self.b *= &f;
            self.c *= &f;
            self.d *= &f;
        }
    }

    pub(crate) fn reduce(&mut self) {
        if self.a.is_zero() && self.b.is_zero()
            && self.c.is_zero() && self.d.is_zero()
        {
            self.k = BigUint::zero();
            return;
        }
        while !self.k.is_zero() && self.sqrt2_divides_numer() {
            self.div_sqrt2_numer();
            self.k -= 1_u32;
        }
    }

    pub(crate) fn reduced(&self) -> Self {
        let mut new = self.clone();
        new.reduce();
        new
    }

    /// Return `true` if `self` is already in canonical form.
    pub fn is_canonical(&self) -> bool {
        if self.a.is_zero() && self.b.is_zero()
            && self.c.is_zero() && self.d.is_zero()
        {
            self.k.is_zero()
        } else {
            self.k.is_zero() || !self.sqrt2_divides_numer()
        }
    }

    /// Multiply by 1/√2.
    pub fn div_sqrt2(mut self) -> Self {
        self.k += 1_u32;
        self.reduce();
        self
    }

    /// Multiply by √2.
    pub fn mul_sqrt2(mut self) -> Self {
        self.mul_sqrt2_numer();
        self.reduce();
        self
    }

    /// Multiply by *ω*.
    ///
    /// The coefficients shift cyclically, with the wrapped coefficient
    /// picking up a sign flip from *ω*·*ω*³ = −1; *k* is unchanged. Applying
    /// this eight times is the identity, and four times is a negation.
    pub fn rot1(self) -> Self {
        let Self { a, b, c, d, k } = self;
        Self { a: -d, b: a, c: b, d: c, k }
    }

    /// Multiply by *ω*² = *i*; equivalent to two applications of
    /// [`rot1`][Self::rot1].
    pub fn rot2(self) -> Self {
        let Self { a, b, c, d, k } = self;
        Self { a: -c, b: -d, c: a, d: b, k }
    }

    /// Split into a global sign and the representative whose first nonzero
    /// coefficient in (*a*, *b*, *c*, *d*) order is positive.
    ///
    /// This is the stored orientation when an engine shares a single leaf
    /// between a value and its negation behind a complement bit on the
    /// referencing edge. Zero orients positively.
    pub fn orient(&self) -> (bool, Self) {
        let lead =
            [&self.a, &self.b, &self.c, &self.d].into_iter()
            .find(|x| !x.is_zero());
        match lead {
            Some(x) if x.is_negative() => (true, -self),
            _ => (false, self.clone()),
        }
    }
}

impl From<i64> for Amplitude {
    fn from(a: i64) -> Self { Self::new(a, 0, 0, 0, 0) }
}

impl From<&Amplitude> for C64 {
    fn from(z: &Amplitude) -> Self {
        use std::f64::consts::FRAC_1_SQRT_2 as ONRT2;
        const OMEGA1: C64 = C64 { re: ONRT2, im:  ONRT2 };
        const OMEGA2: C64 = C64 { re: 0.0,   im:  1.0   };
        const OMEGA3: C64 = C64 { re: -ONRT2, im: ONRT2 };
        let a = z.a.to_f64().unwrap_or(f64::NAN);
        let b = z.b.to_f64().unwrap_or(f64::NAN);
        let c = z.c.to_f64().unwrap_or(f64::NAN);
        let d = z.d.to_f64().unwrap_or(f64::NAN);
        let k = z.k.to_f64().unwrap_or(f64::INFINITY);
        (a + b * OMEGA1 + c * OMEGA2 + d * OMEGA3) / 2.0_f64.powf(0.5 * k)
    }
}

impl Neg for Amplitude {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.a = -self.a;
        self.b = -self.b;
        self.c = -self.c;
        self.d = -self.d;
        self
    }
}

impl Neg for &Amplitude {
    type Output = Amplitude;

    fn neg(self) -> Amplitude { -self.clone() }
}

impl AddAssign<&Amplitude> for Amplitude {
    fn add_assign(&mut self, rhs: &Amplitude) {
        if rhs.is_zero() { return; }
        if self.is_zero() {
            *self = rhs.clone();
            return;
        }
        match self.k.cmp(&rhs.k) {
            std::cmp::Ordering::Less => {
                let powdiff = &rhs.k - &self.k;
                self.scale_up(&powdiff);
                self.k = rhs.k.clone();
                self.a += &rhs.a;
                self.b += &rhs.b;
                self.c += &rhs.c;
                self.d += &rhs.d;
            },
            std::cmp::Ordering::Greater => {
                let powdiff = &self.k - &rhs.k;
                let mut r = rhs.clone();
                r.scale_up(&powdiff);
                self.a += r.a;
                self.b += r.b;
                self.c += r.c;
                self.d += r.d;
            },
            std::cmp::Ordering::Equal => {
                self.a += &rhs.a;
                self.b += &rhs.b;
                self.c += &rhs.c;
                self.d += &rhs.d;
            },
        }
        self.reduce();
    }
}

impl AddAssign<Amplitude> for Amplitude {
    fn add_assign(&mut self, rhs: Amplitude) { *self += &rhs; }
}

impl Add<&Amplitude> for Amplitude {
    type Output = Self;

    fn add(mut self, rhs: &Amplitude) -> Self {
        self += rhs;
        self
    }
}

impl Add<Amplitude> for Amplitude {
    type Output = Self;

    fn add(mut self, rhs: Amplitude) -> Self {
        self += &rhs;
        self
    }
}

impl Add<&Amplitude> for &Amplitude {
    type Output = Amplitude;

    fn add(self, rhs: &Amplitude) -> Amplitude { self.clone() + rhs }
}

impl SubAssign<&Amplitude> for Amplitude {
    fn sub_assign(&mut self, rhs: &Amplitude) {
        if rhs.is_zero() { return; }
        if self.is_zero() {
            *self = -rhs;
            return;
        }
        match self.k.cmp(&rhs.k) {
            std::cmp::Ordering::Less => {
                let powdiff = &rhs.k - &self.k;
                self.scale_up(&powdiff);
                self.k = rhs.k.clone();
                self.a -= &rhs.a;
                self.b -= &rhs.b;
                self.c -= &rhs.c;
                self.d -= &rhs.d;
            },
            std::cmp::Ordering::Greater => {
                let powdiff = &self.k - &rhs.k;
                let mut r = rhs.clone();
                r.scale_up(&powdiff);
                self.a -= r.a;
                self.b -= r.b;
                self.c -= r.c;
                self.d -= r.d;
            },
            std::cmp::Ordering::Equal => {
                self.a -= &rhs.a;
                self.b -= &rhs.b;
                self.c -= &rhs.c;
                self.d -= &rhs.d;
            },
        }
        self.reduce();
    }
}

impl SubAssign<Amplitude> for Amplitude {
    fn sub_assign(&mut self, rhs: Amplitude) { *self -= &rhs; }
}

impl Sub<&Amplitude> for Amplitude {
    type Output = Self;

    fn sub(mut self, rhs: &Amplitude) -> Self {
        self -= rhs;
        self
    }
}

impl Sub<Amplitude> for Amplitude {
    type Output = Self;

    fn sub(mut self, rhs: Amplitude) -> Self {
        self -= &rhs;
        self
    }
}

impl Sub<&Amplitude> for &Amplitude {
    type Output = Amplitude;

    fn sub(self, rhs: &Amplitude) -> Amplitude { self.clone() - rhs }
}

impl MulAssign<&Amplitude> for Amplitude {
    fn mul_assign(&mut self, rhs: &Amplitude) {
        if self.is_zero() || rhs.is_one() { return; }
        if rhs.is_zero() {
            *self = Amplitude::zero();
            return;
        }
        if self.is_one() {
            *self = rhs.clone();
            return;
        }
        // bilinear expansion over the 16 basis pairs, folding ω⁴ = −1
        let (a, b, c, d) = (&self.a, &self.b, &self.c, &self.d);
        let (e, f, g, h) = (&rhs.a, &rhs.b, &rhs.c, &rhs.d);
        let r0 = a * e - b * h - c * g - d * f;
        let r1 = a * f + b * e - c * h - d * g;
        let r2 = a * g + b * f + c * e - d * h;
        let r3 = a * h + b * g + c * f + d * e;
        self.a = r0;
        self.b = r1;
        self.c = r2;
        self.d = r3;
        self.k += &rhs.k;
        self.reduce();
    }
}

impl MulAssign<Amplitude> for Amplitude {
    fn mul_assign(&mut self, rhs: Amplitude) { *self *= &rhs; }
}

impl Mul<&Amplitude> for Amplitude {
    type Output = Self;

    fn mul(mut self, rhs: &Amplitude) -> Self {
        self *= rhs;
        self
    }
}

impl Mul<Amplitude> for Amplitude {
    type Output = Self;

    fn mul(mut self, rhs: Amplitude) -> Self {
        self *= &rhs;
        self
    }
}

impl Mul<&Amplitude> for &Amplitude {
    type Output = Amplitude;

    fn mul(self, rhs: &Amplitude) -> Amplitude { self.clone() * rhs }
}

impl Zero for Amplitude {
    fn zero() -> Self { Amplitude::zero() }

    fn is_zero(&self) -> bool {
        self.a.is_zero() && self.b.is_zero()
            && self.c.is_zero() && self.d.is_zero()
    }
}

impl One for Amplitude {
    fn one() -> Self { Amplitude::one() }
}

impl std::fmt::Display for Amplitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            write!(f, "0")?;
            return Ok(());
        }
        if !self.k.is_zero() { write!(f, "(")?; }
        let mut prev = false;
        if !self.a.is_zero() {
            write!(f, "{}", self.a)?;
            prev = true;
        }
        if prev {
            if self.b.is_positive() {
                write!(f, " + {}ω", self.b)?;
            } else if self.b.is_negative() {
                write!(f, " - {}ω", self.b.abs())?;
            }
        } else if !self.b.is_zero() {
            write!(f, "{}ω", self.b)?;
            prev = true;
        }
        if prev {
            if self.c.is_positive() {
                write!(f, " + {}ω²", self.c)?;
            } else if self.c.is_negative() {
                write!(f, " - {}ω²", self.c.abs())?;
            }
        } else if !self.c.is_zero() {
            write!(f, "{}ω²", self.c)?;
            prev = true;
        }
        if prev {
            if self.d.is_positive() {
                write!(f, " + {}ω³", self.d)?;
            } else if self.d.is_negative() {
                write!(f, " - {}ω³", self.d.abs())?;
            }
        } else if !self.d.is_zero() {
            write!(f, "{}ω³", self.d)?;
        }
        if !self.k.is_zero() {
            if self.k == BigUint::from(1_u32) {
                write!(f, ")/√2")?;
            } else {
                write!(f, ")/√2^{}", self.k)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;
    use rand::{ thread_rng, Rng };

    fn raw(a: i32, b: i32, c: i32, d: i32, k: u64) -> Amplitude {
        Amplitude {
            a: a.into(),
            b: b.into(),
            c: c.into(),
            d: d.into(),
            k: BigUint::from(k),
        }
    }

    fn direct_eq(lhs: &Amplitude, rhs: &Amplitude) -> bool {
        lhs.a == rhs.a
            && lhs.b == rhs.b
            && lhs.c == rhs.c
            && lhs.d == rhs.d
            && lhs.k == rhs.k
    }

    fn randamp<R: Rng>(rng: &mut R) -> Amplitude {
        Amplitude::new(
            rng.gen_range(-9..=9_i32),
            rng.gen_range(-9..=9_i32),
            rng.gen_range(-9..=9_i32),
            rng.gen_range(-9..=9_i32),
            rng.gen_range(0..5_u64),
        )
    }

    #[test]
    fn reduce() {
        let z = raw(2, 2, 2, 2, 2);
        assert!(direct_eq(&z.reduced(), &raw(1, 1, 1, 1, 0)));

        // 2/√2 = √2 = ω − ω³
        let z = raw(2, 0, 0, 0, 1);
        assert!(direct_eq(&z.reduced(), &raw(0, 1, 0, -1, 0)));

        let z = raw(1, 1, 1, 1, 3);
        assert!(direct_eq(&z.reduced(), &raw(0, 1, 1, 0, 2)));

        let z = raw(3, 0, 1, 0, 2);
        assert!(direct_eq(&z.reduced(), &raw(0, 2, 0, -1, 1)));

        let z = raw(0, 0, 0, 0, 5);
        assert!(direct_eq(&z.reduced(), &raw(0, 0, 0, 0, 0)));

        // k cannot go below zero, so even numerators stay put at k = 0
        let z = raw(4, 0, 0, 0, 0);
        assert!(direct_eq(&z.reduced(), &raw(4, 0, 0, 0, 0)));

        let z = raw(1, 2, 0, 0, 4);
        assert!(direct_eq(&z.reduced(), &raw(1, 2, 0, 0, 4)));
    }

    #[test]
    fn reduce_idempotent_and_value_preserving() {
        for (a, b, c, d) in iproduct!(-2..=2, -2..=2, -2..=2, -2..=2) {
            for k in 0..4_u64 {
                let z = raw(a, b, c, d, k);
                let once = z.reduced();
                let twice = once.reduced();
                assert!(direct_eq(&once, &twice));
                assert!(once.is_canonical());
                let fz = C64::from(&z);
                let fo = C64::from(&once);
                assert!((fz - fo).norm() < 1e-9);
            }
        }
    }

    #[test]
    fn equal_encodings() {
        // three routes to 1/√2
        assert_eq!(Amplitude::new(0, 1, 0, -1, 2), Amplitude::new(1, 0, 0, 0, 1));
        assert_eq!(Amplitude::frac_1_sqrt_2(), Amplitude::new(1, 0, 0, 0, 1));
        assert_eq!(Amplitude::new(2, 0, 0, 0, 3), Amplitude::frac_1_sqrt_2());
    }

    #[test]
    fn add() {
        let r = Amplitude::frac_1_sqrt_2();
        assert_eq!(r.clone() + r.clone(), Amplitude::sqrt_2());

        // alignment across differing exponents
        let z = Amplitude::one() + Amplitude::frac_1_sqrt_2();
        assert!(direct_eq(&z, &raw(1, 1, 0, -1, 1)));

        assert_eq!(Amplitude::zero() + Amplitude::i(), Amplitude::i());
        assert_eq!(Amplitude::omega() + Amplitude::zero(), Amplitude::omega());
    }

    #[test]
    fn sub() {
        let mut rng = thread_rng();
        for _ in 0..40 {
            let x = randamp(&mut rng);
            assert_eq!(x.clone() - x.clone(), Amplitude::zero());
        }
        assert_eq!(
            Amplitude::zero() - Amplitude::omega(),
            -Amplitude::omega(),
        );
        assert_eq!(Amplitude::sqrt_2() - Amplitude::zero(), Amplitude::sqrt_2());
    }

    #[test]
    fn mul() {
        // ω · ω³ = ω⁴ = −1
        let z = Amplitude::omega() * Amplitude::omega3();
        assert_eq!(z, -Amplitude::one());

        // √2 · √2 = 2
        let z = Amplitude::sqrt_2() * Amplitude::sqrt_2();
        assert!(direct_eq(&z, &raw(2, 0, 0, 0, 0)));

        // (1/√2)² = 1/2
        let r = Amplitude::frac_1_sqrt_2();
        assert!(direct_eq(&(r.clone() * r), &raw(1, 0, 0, 0, 2)));

        let z = Amplitude::new(1, 1, 0, 0, 0) * Amplitude::new(0, 0, 1, 1, 0);
        assert!(direct_eq(&z, &raw(-1, 0, 1, 2, 0)));

        assert_eq!(Amplitude::i() * Amplitude::zero(), Amplitude::zero());
        assert_eq!(Amplitude::one() * Amplitude::omega3(), Amplitude::omega3());
    }

    #[test]
    fn ring_laws() {
        let mut rng = thread_rng();
        for _ in 0..40 {
            let x = randamp(&mut rng);
            let y = randamp(&mut rng);
            let z = randamp(&mut rng);
            assert_eq!(x.clone() + &y, y.clone() + &x);
            assert_eq!(x.clone() * &y, y.clone() * &x);
            assert_eq!(
                (x.clone() + &y) + &z,
                x.clone() + &(y.clone() + &z),
            );
            assert_eq!(
                (x.clone() * &y) * &z,
                x.clone() * &(y.clone() * &z),
            );
            assert_eq!(
                x.clone() * &(y.clone() + &z),
                x.clone() * &y + &(x.clone() * &z),
            );
            assert_eq!(-(-x.clone()), x);
        }
    }

    #[test]
    fn mul_matches_float() {
        let mut rng = thread_rng();
        for _ in 0..40 {
            let x = randamp(&mut rng);
            let y = randamp(&mut rng);
            let exact = C64::from(&(x.clone() * &y));
            let approx = C64::from(&x) * C64::from(&y);
            assert!((exact - approx).norm() < 1e-6);
        }
    }

    #[test]
    fn rot() {
        assert_eq!(Amplitude::one().rot1(), Amplitude::omega());
        assert_eq!(Amplitude::omega3().rot1(), -Amplitude::one());

        let mut rng = thread_rng();
        for _ in 0..40 {
            let x = randamp(&mut rng);
            let mut z = x.clone();
            for _ in 0..4 { z = z.rot1(); }
            assert_eq!(z, -x.clone());
            for _ in 0..4 { z = z.rot1(); }
            assert_eq!(z, x);
            assert_eq!(x.clone().rot2(), x.clone().rot1().rot1());
            assert_eq!(x.clone().rot1(), x.clone() * Amplitude::omega());
            assert_eq!(x.clone().rot2(), x.clone() * Amplitude::i());
        }
    }

    #[test]
    fn div_sqrt2() {
        let r = Amplitude::one().div_sqrt2();
        assert!(direct_eq(&r, &raw(1, 0, 0, 0, 1)));
        assert_eq!(r, Amplitude::frac_1_sqrt_2());

        let half = Amplitude::one().div_sqrt2().div_sqrt2();
        assert!(direct_eq(&half, &raw(1, 0, 0, 0, 2)));
        assert_eq!(half, r.clone() * r.clone());

        assert_eq!(Amplitude::sqrt_2().div_sqrt2(), Amplitude::one());

        let mut rng = thread_rng();
        for _ in 0..40 {
            let x = randamp(&mut rng);
            assert_eq!(x.clone().div_sqrt2().mul_sqrt2(), x);
            // two k-increments halve the value exactly
            assert_eq!(
                x.clone().div_sqrt2().div_sqrt2(),
                x.clone() * Amplitude::new(1, 0, 0, 0, 2),
            );
        }
    }

    #[test]
    fn orient() {
        let (neg, repr) = (-Amplitude::one()).orient();
        assert!(neg);
        assert_eq!(repr, Amplitude::one());

        let (neg, repr) = Amplitude::zero().orient();
        assert!(!neg);
        assert_eq!(repr, Amplitude::zero());

        let (neg, repr) = Amplitude::new(0, -1, 0, 3, 0).orient();
        assert!(neg);
        assert_eq!(repr, Amplitude::new(0, 1, 0, -3, 0));
    }

    #[test]
    fn display() {
        assert_eq!(Amplitude::zero().to_string(), "0");
        assert_eq!(Amplitude::frac_1_sqrt_2().to_string(), "(1)/√2");
        assert_eq!(Amplitude::sqrt_2().to_string(), "1ω - 1ω³");
        assert_eq!(Amplitude::new(-2, 0, 1, 0, 0).to_string(), "-2 + 1ω²");
        assert_eq!(
            Amplitude::new(1, 2, 0, 0, 4).to_string(),
            "(1 + 2ω)/√2^4",
        );
    }

    #[test]
    fn approx_eval() {
        let z = C64::from(&Amplitude::sqrt_2());
        assert!((z - C64::new(2.0_f64.sqrt(), 0.0)).norm() < 1e-12);
        let z = C64::from(&Amplitude::i());
        assert!((z - C64::new(0.0, 1.0)).norm() < 1e-12);
        let z = C64::from(&Amplitude::omega());
        assert!((z - C64::from_polar(1.0, std::f64::consts::FRAC_PI_4)).norm() < 1e-12);
    }
}
