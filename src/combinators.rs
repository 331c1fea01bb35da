//! Arithmetic combinators for composing signals.
//!
//! Each combinator evaluates its children exactly once per tick and combines
//! the results. Outputs are not rescaled; a sum of two full-range signals
//! will exceed [-1.0, 1.0] until the mixer's quantization stage clamps it.

use crate::{Module, ModuleRef};

/// Adds two signals together (mixing).
pub struct Add {
    a: ModuleRef,
    b: ModuleRef,
}

impl Add {
    /// Creates a new Add combinator.
    pub fn new(a: ModuleRef, b: ModuleRef) -> Self {
        Self { a, b }
    }
}

impl Module for Add {
    fn next_sample(&mut self) -> f32 {
        self.a.next_sample() + self.b.next_sample()
    }
}

/// Subtracts the second signal from the first.
pub struct Sub {
    a: ModuleRef,
    b: ModuleRef,
}

impl Sub {
    /// Creates a new Sub combinator.
    pub fn new(a: ModuleRef, b: ModuleRef) -> Self {
        Self { a, b }
    }
}

impl Module for Sub {
    fn next_sample(&mut self) -> f32 {
        self.a.next_sample() - self.b.next_sample()
    }
}

/// Multiplies two signals together (amplitude or ring modulation).
pub struct Mult {
    a: ModuleRef,
    b: ModuleRef,
}

impl Mult {
    /// Creates a new Mult combinator.
    pub fn new(a: ModuleRef, b: ModuleRef) -> Self {
        Self { a, b }
    }
}

impl Module for Mult {
    fn next_sample(&mut self) -> f32 {
        self.a.next_sample() * self.b.next_sample()
    }
}

/// Full-wave rectifier: the magnitude of its child signal.
pub struct Abs {
    source: ModuleRef,
}

impl Abs {
    /// Creates a new Abs combinator.
    pub fn new(source: ModuleRef) -> Self {
        Self { source }
    }
}

impl Module for Abs {
    fn next_sample(&mut self) -> f32 {
        self.source.next_sample().abs()
    }
}
