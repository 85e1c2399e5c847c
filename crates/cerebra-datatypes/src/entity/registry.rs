// Copyright 2025 Cerebra Project Developers
// SPDX-License-Identifier: Apache-2.0

//! Taxonomy registry - single source of truth for reconstructing concrete
//! datatypes from their persisted discriminator tags.

use std::sync::OnceLock;

use ahash::AHashMap;
use tracing::info;

use super::{DataType, EntityKind};
use crate::coupling::{LinearCoupling, SigmoidalCoupling};
use crate::spectral::{
    CoherenceSpectrum, ComplexCoherenceSpectrum, FourierSpectrum, WaveletCoefficients,
};
use crate::surfaces::{BrainSkull, CorticalSurface, EEGCap, FaceSurface, SkinAir, SkullSkin};
use crate::temporal_correlations::CrossCorrelation;
use crate::DataTypeError;

/// Builds one bare (unconfigured) entity of a concrete datatype.
pub type EntityFactory = fn() -> Box<dyn DataType>;

/// Maps each [`EntityKind`] discriminator to the factory for its concrete
/// datatype.
///
/// The registry is assembled once during process initialization and is
/// read-only afterwards, so sharing a reference across threads needs no
/// locking. Lookups of unregistered tags fail loudly; there is no fallback
/// to a base datatype.
pub struct TaxonomyRegistry {
    factories: AHashMap<EntityKind, EntityFactory>,
}

impl TaxonomyRegistry {
    /// An empty registry. Use [`TaxonomyRegistry::builtin`] for the full
    /// datatype family.
    pub fn new() -> Self {
        Self {
            factories: AHashMap::new(),
        }
    }

    /// Registry covering every concrete datatype in this crate.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.install(EntityKind::CorticalSurface, || {
            Box::<CorticalSurface>::default()
        });
        registry.install(EntityKind::SkinAir, || Box::<SkinAir>::default());
        registry.install(EntityKind::BrainSkull, || Box::<BrainSkull>::default());
        registry.install(EntityKind::SkullSkin, || Box::<SkullSkin>::default());
        registry.install(EntityKind::EegCap, || Box::<EEGCap>::default());
        registry.install(EntityKind::FaceSurface, || Box::<FaceSurface>::default());
        registry.install(EntityKind::LinearCoupling, || {
            Box::<LinearCoupling>::default()
        });
        registry.install(EntityKind::SigmoidalCoupling, || {
            Box::<SigmoidalCoupling>::default()
        });
        registry.install(EntityKind::FourierSpectrum, || {
            Box::<FourierSpectrum>::default()
        });
        registry.install(EntityKind::WaveletCoefficients, || {
            Box::<WaveletCoefficients>::default()
        });
        registry.install(EntityKind::CoherenceSpectrum, || {
            Box::<CoherenceSpectrum>::default()
        });
        registry.install(EntityKind::ComplexCoherenceSpectrum, || {
            Box::<ComplexCoherenceSpectrum>::default()
        });
        registry.install(EntityKind::CrossCorrelation, || {
            Box::<CrossCorrelation>::default()
        });
        info!(
            registered = registry.len(),
            "taxonomy registry assembled"
        );
        registry
    }

    /// Register a factory for a kind that is not yet taken.
    ///
    /// # Errors
    ///
    /// Returns a composition error if the kind already has a factory; two
    /// concrete datatypes can never share a discriminator.
    pub fn register(&mut self, kind: EntityKind, factory: EntityFactory) -> Result<(), DataTypeError> {
        if self.factories.contains_key(&kind) {
            return Err(DataTypeError::Composition(format!(
                "entity kind '{}' is already registered",
                kind
            )));
        }
        self.factories.insert(kind, factory);
        Ok(())
    }

    // Registration of the built-in family, where duplicates cannot occur.
    fn install(&mut self, kind: EntityKind, factory: EntityFactory) {
        let previous = self.factories.insert(kind, factory);
        debug_assert!(previous.is_none(), "built-in kind registered twice");
    }

    /// Instantiate a bare entity of the concrete datatype behind `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`DataTypeError::UnknownKind`] when no datatype registered
    /// the discriminator.
    pub fn create(&self, kind: EntityKind) -> Result<Box<dyn DataType>, DataTypeError> {
        match self.factories.get(&kind) {
            Some(factory) => Ok(factory()),
            None => Err(DataTypeError::UnknownKind(kind.tag().to_string())),
        }
    }

    /// Instantiate from a stored discriminator string.
    pub fn create_from_tag(&self, tag: &str) -> Result<Box<dyn DataType>, DataTypeError> {
        let kind: EntityKind = tag.parse()?;
        self.create(kind)
    }

    pub fn contains(&self, kind: EntityKind) -> bool {
        self.factories.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// The kinds currently registered, in no particular order.
    pub fn kinds(&self) -> impl Iterator<Item = EntityKind> + '_ {
        self.factories.keys().copied()
    }
}

impl Default for TaxonomyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static TAXONOMY: OnceLock<TaxonomyRegistry> = OnceLock::new();

/// Process-wide registry of the built-in datatype family, assembled on
/// first use and immutable afterwards.
pub fn taxonomy() -> &'static TaxonomyRegistry {
    TAXONOMY.get_or_init(TaxonomyRegistry::builtin)
}
