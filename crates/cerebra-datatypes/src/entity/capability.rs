// Copyright 2025 Cerebra Project Developers
// SPDX-License-Identifier: Apache-2.0

//! Capability seams every datatype is composed from.
//!
//! A concrete datatype pairs exactly one scientific capability (numeric
//! state and domain computations) with exactly one framework capability
//! (identity and storage metadata). The two halves live in separate structs,
//! so their attribute namespaces can never collide; the compiler enforces
//! the pairing rules that a dynamic mixin system would have to police at
//! class-definition time.

use crate::DataTypeError;

/// Numeric/domain half of a datatype.
///
/// `configure` recomputes every derived field from the raw fields currently
/// held by the capability. It must be idempotent: calling it twice in a row
/// leaves the derived fields identical, with no accumulated side effects.
pub trait ScientificCapability {
    fn configure(&mut self) -> Result<(), DataTypeError>;
}

/// Persistence/metadata half of a datatype.
///
/// Framework configuration runs strictly after the scientific half has been
/// configured and receives it read-only, since framework-derived fields
/// (display slicing, summary metadata) depend on scientific-derived counts.
/// Storage-backed failures propagate to the caller unmodified.
pub trait FrameworkCapability<S: ScientificCapability> {
    fn configure(&mut self, scientific: &S) -> Result<(), DataTypeError>;
}
