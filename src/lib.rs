//! Constant-time multi-precision integer arithmetic core.
//!
//! # About
//! This crate implements the branchless limb-array operations that
//! higher-level cryptographic primitives (modular exponentiation, blinding,
//! scalar multiplication) build on: conditional assignment, addition,
//! subtraction, swap, and absolute value, together with a constant-time
//! modular reduction composed from them.
//!
//! Every conditional operation is controlled by a [`ConstChoice`] enable
//! flag and performs the identical sequence of word operations regardless of
//! the flag, the operand values, or the carry history. Selection is done via
//! an all-zero/all-one mask (`a ^ (mask & (a ^ b))`), never via a branch or
//! a secret-dependent index.
//!
//! # Goals
//! - `no_std`-friendly; heap allocation only behind the `alloc` feature.
//! - Constant-time by default, interoperating with the [`subtle`] crate.
//! - Secret operands live in `MemoryClass::Secure` buffers which are
//!   zeroized on drop via the [`zeroize`] crate.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod choice;
mod limb;
mod mpi_ref;
mod primitives;
mod word;

#[cfg(feature = "alloc")]
mod boxed;

pub use crate::{
    choice::ConstChoice,
    limb::Limb,
    mpi_ref::MpiRef,
    word::{WideWord, Word},
};

#[cfg(feature = "alloc")]
pub use crate::boxed::{BoxedMpi, MemoryClass};

pub use subtle;
pub use zeroize;
