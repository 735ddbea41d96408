//! Lifecycle of amplitude terminals inside an engine-owned node table.
//!
//! The engine holds exclusive ownership of every interned leaf; this module
//! supplies the callbacks it drives them with. Nothing here ever mutates a
//! stored value or re-enters diagram operations.

use std::hash::{ Hash, Hasher };
use rustc_hash::FxHasher;
use crate::amplitude::Amplitude;

/// Identifier for a terminal type registered with an engine instance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LeafTypeId(u32);

/// Registry of terminal types for one engine instance.
///
/// Created alongside the engine adapter and held by whichever component
/// constructs diagrams, so two engines in one process never contend over a
/// shared type id.
#[derive(Debug, Default)]
pub struct LeafRegistry {
    names: Vec<String>,
}

impl LeafRegistry {
    /// Create a new, empty registry.
    pub fn new() -> Self { Self::default() }

    /// Register a terminal type under a human-readable name and return its
    /// id.
    pub fn register<S>(&mut self, name: S) -> LeafTypeId
    where S: Into<String>
    {
        let id = LeafTypeId(self.names.len() as u32);
        self.names.push(name.into());
        id
    }

    /// Look up the name a type id was registered under.
    pub fn name(&self, id: LeafTypeId) -> Option<&str> {
        self.names.get(id.0 as usize).map(String::as_str)
    }

    /// Return the number of registered terminal types.
    pub fn len(&self) -> usize { self.names.len() }

    /// Return `true` if no terminal types have been registered.
    pub fn is_empty(&self) -> bool { self.names.is_empty() }
}

/// Owned storage for one terminal value.
///
/// Created by [`TerminalOps::create`] from a transient payload and held in
/// the engine's table until its collection pass decides no root protects it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeafData {
    value: Amplitude,
}

impl LeafData {
    /// The canonical value stored in this leaf.
    pub fn value(&self) -> &Amplitude { &self.value }
}

/// Terminal-value lifecycle callbacks a node table drives leaf storage
/// with.
///
/// `create` and `destroy` run under the engine's table lock or at its
/// collection safepoint; they must not block and must not re-enter diagram
/// operations. Everything else reads immutable inputs only, so the engine
/// may call it from any worker task without synchronization.
pub trait TerminalOps {
    /// Transient input handed to [`create`][Self::create]; the engine may
    /// reuse or free it immediately after the call returns.
    type Payload: ?Sized;
    /// Owned storage held in the table.
    type Stored;

    /// Deep-copy a payload into owned storage, aliasing nothing owned by
    /// the caller.
    fn create(&self, payload: &Self::Payload) -> Self::Stored;

    /// Release a leaf's storage; called exactly once per leaf, only from
    /// the engine's collection pass.
    fn destroy(&self, stored: Self::Stored);

    /// Exact equality of stored values.
    fn equals(&self, a: &Self::Stored, b: &Self::Stored) -> bool;

    /// Seeded hash of a stored value; must agree with
    /// [`equals`][Self::equals] under every seed.
    fn hash(&self, a: &Self::Stored, seed: u64) -> u64;

    /// Human-readable rendering; `complemented` renders the negated value,
    /// for engines that share a leaf between a value and its negation via a
    /// complement bit on the referencing edge.
    fn to_str(&self, a: &Self::Stored, complemented: bool) -> String;
}

/// [`TerminalOps`] implementation for [`Amplitude`] leaves.
#[derive(Copy, Clone, Debug, Default)]
pub struct AmpLeafOps;

impl TerminalOps for AmpLeafOps {
    type Payload = Amplitude;
    type Stored = LeafData;

    fn create(&self, payload: &Amplitude) -> LeafData {
        // a non-canonical payload can only come from an engine-side bug
        assert!(payload.is_canonical(), "leaf payload is not canonical");
        LeafData { value: payload.clone() }
    }

    fn destroy(&self, stored: LeafData) { drop(stored); }

    fn equals(&self, a: &LeafData, b: &LeafData) -> bool {
        a.value == b.value
    }

    fn hash(&self, a: &LeafData, seed: u64) -> u64 {
        let mut h = FxHasher::default();
        h.write_u64(seed);
        a.value.hash(&mut h);
        h.finish()
    }

    fn to_str(&self, a: &LeafData, complemented: bool) -> String {
        if complemented {
            (-a.value()).to_string()
        } else {
            a.value().to_string()
        }
    }
}
