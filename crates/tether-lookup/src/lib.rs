//! Typed lookup emulation
//!
//! The host hierarchy only hands out type-erased handles when queried
//! generically. These scans recover type-safe component queries by reading
//! each candidate's stored type tag: [`typed`] filters on an exact tag,
//! [`recognized`] degenerates to "any handle with a tag at all".
//!
//! Results preserve the hierarchy's enumeration order exactly; multi-result
//! queries count matches before allocating, so the returned vector is
//! precisely sized and never reallocates.

pub mod recognized;
mod scan;
pub mod typed;
