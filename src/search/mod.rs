// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search algorithms: where the rubber meets the road.
//!
//! A parsed query becomes a set of term slots, slots become candidate
//! documents, candidates become a ranked list.
//!
//! ```text
//! ParsedQuery ──▶ prefix::expand_prefix ──┐
//!      │                                  ▼
//!      └──────▶ matcher::MatchSet::build ──▶ candidates ──▶ ranking::rank
//! ```
//!
//! Exclusion and formatting happen afterwards, in the engine, because they
//! need the resolved document records and the caller's options.

pub mod matcher;
pub mod prefix;
pub mod ranking;

pub use matcher::{Candidate, MatchSet, SlotKind, TermSlot};
pub use prefix::expand_prefix;
pub use ranking::{compare_ranked, rank, RankedResult};
