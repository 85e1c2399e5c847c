// Copyright 2025 Cerebra Project Developers
// SPDX-License-Identifier: Apache-2.0

//! Discriminator tags for the concrete datatype family.

use crate::DataTypeError;
use serde::{Deserialize, Serialize};

/// Discriminator identifying one concrete datatype variant.
///
/// Exactly one tag exists per concrete composite entity; abstract parents
/// (plain `Surface`, `OpenSurface`) carry no tag and can never be
/// reconstructed from persisted data. The string form of each tag is the
/// value written next to a persisted entity so that the taxonomy registry
/// can rebuild the right concrete type later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    #[serde(rename = "CORTICAL")]
    CorticalSurface,
    #[serde(rename = "OUTER_SKIN")]
    SkinAir,
    #[serde(rename = "INNER_SKULL")]
    BrainSkull,
    #[serde(rename = "OUTER_SKULL")]
    SkullSkin,
    #[serde(rename = "EEG_CAP")]
    EegCap,
    #[serde(rename = "FACE")]
    FaceSurface,
    #[serde(rename = "COUPLING_LINEAR")]
    LinearCoupling,
    #[serde(rename = "COUPLING_SIGMOIDAL")]
    SigmoidalCoupling,
    #[serde(rename = "SPECTRUM_FOURIER")]
    FourierSpectrum,
    #[serde(rename = "SPECTRUM_WAVELET")]
    WaveletCoefficients,
    #[serde(rename = "SPECTRUM_COHERENCE")]
    CoherenceSpectrum,
    #[serde(rename = "SPECTRUM_COMPLEX_COHERENCE")]
    ComplexCoherenceSpectrum,
    #[serde(rename = "CROSS_CORRELATION")]
    CrossCorrelation,
}

impl EntityKind {
    /// The stable discriminator string persisted alongside an entity.
    pub const fn tag(&self) -> &'static str {
        match self {
            EntityKind::CorticalSurface => "CORTICAL",
            EntityKind::SkinAir => "OUTER_SKIN",
            EntityKind::BrainSkull => "INNER_SKULL",
            EntityKind::SkullSkin => "OUTER_SKULL",
            EntityKind::EegCap => "EEG_CAP",
            EntityKind::FaceSurface => "FACE",
            EntityKind::LinearCoupling => "COUPLING_LINEAR",
            EntityKind::SigmoidalCoupling => "COUPLING_SIGMOIDAL",
            EntityKind::FourierSpectrum => "SPECTRUM_FOURIER",
            EntityKind::WaveletCoefficients => "SPECTRUM_WAVELET",
            EntityKind::CoherenceSpectrum => "SPECTRUM_COHERENCE",
            EntityKind::ComplexCoherenceSpectrum => "SPECTRUM_COMPLEX_COHERENCE",
            EntityKind::CrossCorrelation => "CROSS_CORRELATION",
        }
    }

    /// All discriminators with a registered concrete datatype.
    pub const fn all() -> [EntityKind; 13] {
        [
            EntityKind::CorticalSurface,
            EntityKind::SkinAir,
            EntityKind::BrainSkull,
            EntityKind::SkullSkin,
            EntityKind::EegCap,
            EntityKind::FaceSurface,
            EntityKind::LinearCoupling,
            EntityKind::SigmoidalCoupling,
            EntityKind::FourierSpectrum,
            EntityKind::WaveletCoefficients,
            EntityKind::CoherenceSpectrum,
            EntityKind::ComplexCoherenceSpectrum,
            EntityKind::CrossCorrelation,
        ]
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = DataTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CORTICAL" => Ok(EntityKind::CorticalSurface),
            "OUTER_SKIN" => Ok(EntityKind::SkinAir),
            "INNER_SKULL" => Ok(EntityKind::BrainSkull),
            "OUTER_SKULL" => Ok(EntityKind::SkullSkin),
            "EEG_CAP" => Ok(EntityKind::EegCap),
            "FACE" => Ok(EntityKind::FaceSurface),
            "COUPLING_LINEAR" => Ok(EntityKind::LinearCoupling),
            "COUPLING_SIGMOIDAL" => Ok(EntityKind::SigmoidalCoupling),
            "SPECTRUM_FOURIER" => Ok(EntityKind::FourierSpectrum),
            "SPECTRUM_WAVELET" => Ok(EntityKind::WaveletCoefficients),
            "SPECTRUM_COHERENCE" => Ok(EntityKind::CoherenceSpectrum),
            "SPECTRUM_COMPLEX_COHERENCE" => Ok(EntityKind::ComplexCoherenceSpectrum),
            "CROSS_CORRELATION" => Ok(EntityKind::CrossCorrelation),
            _ => Err(DataTypeError::UnknownKind(s.to_string())),
        }
    }
}
