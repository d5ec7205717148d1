#![no_std]
#![allow(clippy::type_complexity)]

//! Composable lazy sequences, driven by *pushing* items into a continuation.
//!
//! The central abstraction of this crate is the [`Sequence`] trait: a sequence is anything that can drive a caller-supplied closure over its elements, one at a time, in order. The closure returns a `bool` at every element — `false` asks the sequence to stop immediately. That single boolean, propagated faithfully through every layer, is the only cancellation mechanism in the crate.
//!
//! On top of this contract sit three groups of functionality:
//!
//! - **Sources and combinators** ([`sequence`]): [`range`], [`count`], [`repeat`], [`from_slice`], [`from_iter`], [`from_fn`], and the adapter methods of [`SequenceExt`] ([`map`](SequenceExt::map), [`filter`](SequenceExt::filter), [`take_while`](SequenceExt::take_while), [`chain`](SequenceExt::chain), [`slice`](SequenceExt::slice), [`group_by`](SequenceExt::group_by), and friends). These hold nothing but their parameters and compute nothing until run.
//! - **The pull adapter** ([`pull`]): [`Pull`] turns any sequence inside-out, exposing on-demand [`next`](Iterator::next) and [`stop`](Pull::stop) calls instead of a callback. It is built on the [`coro`] module, a cooperative suspend/resume primitive.
//! - **Multi-consumer replay** ([`tee`]): [`tee()`](tee()) splits one sequence into `n` independent sequences which replay the same elements, each at its own pace, while the underlying source is driven exactly once per distinct element.
//!
//! ## Fundamental Design Choices
//!
//! - Push first: internal iteration is the primitive, external (pull) iteration is an adapter over it.
//! - Early stopping is a value, not an error: every `run` returns whether iteration completed (`true`) or was stopped (`false`), and every combinator forwards that verdict.
//! - Resource release is tied to ownership: pull adapters stop themselves when dropped, tee consumers retire themselves when dropped. There is no "remember to close" convention.
//! - `no_std` core; everything that needs an OS thread (the coroutine primitive and all pull-based functionality) lives behind the default-on `std` feature.
//!
//! ## Caveats
//!
//! This crate makes some simplifying assumptions. Each removes significant complexity, but constrains applicability.
//!
//! - The suspend/resume primitive exchanges values with a dedicated worker thread through rendezvous channels. Caller and worker strictly alternate, so there is no observable parallelism — but sequences handed to [`Pull`], [`tee()`](tee()), [`compress`](SequenceExt::compress) or [`group_by`](SequenceExt::group_by) must be `Send + 'static`.
//! - A single sequence value is meant to be driven from one execution context at a time. The types make cross-thread misuse unrepresentable where they can, and interleaving calls into one tee group from multiple threads simultaneously is outside the intended discipline (the locks keep it memory-safe, nothing more).
//! - Unwinding a panic out of a user-supplied closure propagates the panic out of the call that triggered it and leaves the surrounding adapters in a stopped state. Do not attempt to resume iteration after a panic.

#[cfg(feature = "std")]
extern crate std;

pub mod sequence;
pub use sequence::{
    count, count_by, from_fn, from_iter, from_slice, range, repeat, repeat_n, Integer, Number,
    Sequence, SequenceExt,
};

#[cfg(feature = "std")]
pub mod coro;

#[cfg(feature = "std")]
pub mod pull;
#[cfg(feature = "std")]
pub use pull::Pull;

#[cfg(feature = "std")]
pub mod tee;
#[cfg(feature = "std")]
pub use tee::{tee, Tee};

/// A “prelude” for crates using the `pushseq` crate.
///
/// Unlike the standard library’s prelude you’ll have to import its contents manually:
///
/// ```
/// use pushseq::prelude::*;
/// ```
///
/// The prelude may grow over time.
pub mod prelude {
    pub use crate::sequence::{
        count, count_by, from_fn, from_iter, from_slice, range, repeat, repeat_n, Sequence,
        SequenceExt,
    };

    #[cfg(feature = "std")]
    pub use crate::{pull::Pull, tee::tee};
}
