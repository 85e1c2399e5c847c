// Copyright 2025 Cerebra Project Developers
// SPDX-License-Identifier: Apache-2.0

//! Spectral decomposition datatypes.
//!
//! These entities store the raw output of spectral analysers (complex
//! coefficients as separate real/imaginary arrays, frequency axis first)
//! and derive the presentation quantities - frequency vector, amplitude,
//! phase, power - on `configure`.

use ndarray::{Array1, ArrayD, IxDyn, Zip};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entity::{
    DataType, EntityInfo, EntityKind, FrameworkCapability, ScientificCapability, ValidationRules,
};
use crate::{DataTypeError, ValidationError};

fn empty() -> ArrayD<f64> {
    ArrayD::zeros(IxDyn(&[0]))
}

fn amplitude_of(re: &ArrayD<f64>, im: &ArrayD<f64>) -> ArrayD<f64> {
    Zip::from(re).and(im).map_collect(|&r, &i| (r * r + i * i).sqrt())
}

fn phase_of(re: &ArrayD<f64>, im: &ArrayD<f64>) -> ArrayD<f64> {
    Zip::from(re).and(im).map_collect(|&r, &i| i.atan2(r))
}

fn power_of(re: &ArrayD<f64>, im: &ArrayD<f64>) -> ArrayD<f64> {
    Zip::from(re).and(im).map_collect(|&r, &i| r * r + i * i)
}

fn require_matching_shapes(re: &ArrayD<f64>, im: &ArrayD<f64>) -> Result<(), DataTypeError> {
    if re.shape() != im.shape() {
        return Err(ValidationError::StructurallyUnsound(format!(
            "Could not process this spectrum because its real ({:?}) and imaginary ({:?}) \
             coefficient arrays have different shapes.",
            re.shape(),
            im.shape()
        ))
        .into());
    }
    Ok(())
}

/// Scientific half of the Fourier spectrum datatype.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FourierSpectrumScientific {
    /// Length, in time units, of the segments the source was split into.
    pub segment_length: f64,
    /// Name of the taper applied before transforming, if any.
    pub windowing_function: Option<String>,
    /// Real part of the complex coefficients, frequency axis first.
    pub array_re: ArrayD<f64>,
    /// Imaginary part of the complex coefficients, frequency axis first.
    pub array_im: ArrayD<f64>,
    /// Derived: frequencies of the coefficient rows.
    #[serde(default)]
    pub frequency: Array1<f64>,
    #[serde(default = "empty")]
    pub amplitude: ArrayD<f64>,
    #[serde(default = "empty")]
    pub phase: ArrayD<f64>,
    #[serde(default = "empty")]
    pub power: ArrayD<f64>,
}

impl Default for FourierSpectrumScientific {
    fn default() -> Self {
        Self {
            segment_length: 1.0,
            windowing_function: None,
            array_re: empty(),
            array_im: empty(),
            frequency: Array1::zeros(0),
            amplitude: empty(),
            phase: empty(),
            power: empty(),
        }
    }
}

impl FourierSpectrumScientific {
    /// Number of points along the frequency axis.
    pub fn number_of_frequencies(&self) -> usize {
        self.array_re.shape().first().copied().unwrap_or(0)
    }
}

impl ScientificCapability for FourierSpectrumScientific {
    fn configure(&mut self) -> Result<(), DataTypeError> {
        require_matching_shapes(&self.array_re, &self.array_im)?;
        let points = self.number_of_frequencies();
        self.frequency = if self.segment_length > 0.0 {
            let step = 1.0 / self.segment_length;
            Array1::from_iter((0..points).map(|i| i as f64 * step))
        } else {
            Array1::zeros(0)
        };
        self.amplitude = amplitude_of(&self.array_re, &self.array_im);
        self.phase = phase_of(&self.array_re, &self.array_im);
        self.power = power_of(&self.array_re, &self.array_im);
        debug!(frequencies = points, "fourier spectrum fields recomputed");
        Ok(())
    }
}

/// Scientific half of the wavelet coefficients datatype.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveletCoefficientsScientific {
    /// Analysed frequencies, one per coefficient row.
    pub frequencies: Array1<f64>,
    /// Sampling period of the reconstructed time axis.
    pub sample_period: f64,
    /// Mother-wavelet quality factor (centre frequency over bandwidth).
    pub q_ratio: f64,
    pub array_re: ArrayD<f64>,
    pub array_im: ArrayD<f64>,
    #[serde(default = "empty")]
    pub amplitude: ArrayD<f64>,
    #[serde(default = "empty")]
    pub phase: ArrayD<f64>,
    #[serde(default = "empty")]
    pub power: ArrayD<f64>,
}

impl Default for WaveletCoefficientsScientific {
    fn default() -> Self {
        Self {
            frequencies: Array1::zeros(0),
            sample_period: 7.8125,
            q_ratio: 5.0,
            array_re: empty(),
            array_im: empty(),
            amplitude: empty(),
            phase: empty(),
            power: empty(),
        }
    }
}

impl ScientificCapability for WaveletCoefficientsScientific {
    fn configure(&mut self) -> Result<(), DataTypeError> {
        require_matching_shapes(&self.array_re, &self.array_im)?;
        self.amplitude = amplitude_of(&self.array_re, &self.array_im);
        self.phase = phase_of(&self.array_re, &self.array_im);
        self.power = power_of(&self.array_re, &self.array_im);
        Ok(())
    }
}

/// Scientific half of the (real-valued) coherence spectrum datatype.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoherenceSpectrumScientific {
    /// Frequencies the coherence was estimated at.
    pub frequency: Array1<f64>,
    /// Coherence values in `[0, 1]`, frequency axis first.
    pub array_data: ArrayD<f64>,
    /// Derived: number of points along the frequency axis.
    #[serde(default)]
    pub number_of_frequencies: u64,
}

impl Default for CoherenceSpectrumScientific {
    fn default() -> Self {
        Self {
            frequency: Array1::zeros(0),
            array_data: empty(),
            number_of_frequencies: 0,
        }
    }
}

impl CoherenceSpectrumScientific {
    /// Count of stored values outside the unit interval.
    pub fn out_of_unit_interval(&self) -> usize {
        self.array_data
            .iter()
            .filter(|&&v| !(0.0..=1.0).contains(&v))
            .count()
    }
}

impl ScientificCapability for CoherenceSpectrumScientific {
    fn configure(&mut self) -> Result<(), DataTypeError> {
        self.number_of_frequencies = self.array_data.shape().first().copied().unwrap_or(0) as u64;
        Ok(())
    }
}

/// Scientific half of the complex coherence spectrum datatype.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexCoherenceSpectrumScientific {
    pub segment_length: f64,
    pub windowing_function: Option<String>,
    /// Cross-spectrum coefficients, as separate real/imaginary arrays.
    pub cross_spectrum_re: ArrayD<f64>,
    pub cross_spectrum_im: ArrayD<f64>,
    #[serde(default = "empty")]
    pub amplitude: ArrayD<f64>,
    #[serde(default = "empty")]
    pub phase: ArrayD<f64>,
}

impl Default for ComplexCoherenceSpectrumScientific {
    fn default() -> Self {
        Self {
            segment_length: 1.0,
            windowing_function: None,
            cross_spectrum_re: empty(),
            cross_spectrum_im: empty(),
            amplitude: empty(),
            phase: empty(),
        }
    }
}

impl ScientificCapability for ComplexCoherenceSpectrumScientific {
    fn configure(&mut self) -> Result<(), DataTypeError> {
        require_matching_shapes(&self.cross_spectrum_re, &self.cross_spectrum_im)?;
        self.amplitude = amplitude_of(&self.cross_spectrum_re, &self.cross_spectrum_im);
        self.phase = phase_of(&self.cross_spectrum_re, &self.cross_spectrum_im);
        Ok(())
    }
}

/// Persistence/metadata half shared by the spectral datatypes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpectralFramework {
    pub info: EntityInfo,
}

impl FrameworkCapability<FourierSpectrumScientific> for SpectralFramework {
    fn configure(&mut self, scientific: &FourierSpectrumScientific) -> Result<(), DataTypeError> {
        self.info.record("Spectral type", "Fourier");
        self.info
            .record("Number of frequencies", scientific.number_of_frequencies());
        self.info.record("Segment length", scientific.segment_length);
        if let Some(window) = &scientific.windowing_function {
            self.info.record("Windowing function", window);
        }
        Ok(())
    }
}

impl FrameworkCapability<WaveletCoefficientsScientific> for SpectralFramework {
    fn configure(
        &mut self,
        scientific: &WaveletCoefficientsScientific,
    ) -> Result<(), DataTypeError> {
        self.info.record("Spectral type", "Wavelet");
        self.info
            .record("Number of scales", scientific.frequencies.len());
        self.info.record("Sample period", scientific.sample_period);
        self.info.record("Q ratio", scientific.q_ratio);
        Ok(())
    }
}

impl FrameworkCapability<CoherenceSpectrumScientific> for SpectralFramework {
    fn configure(
        &mut self,
        scientific: &CoherenceSpectrumScientific,
    ) -> Result<(), DataTypeError> {
        self.info.record("Spectral type", "Coherence");
        self.info
            .record("Number of frequencies", scientific.number_of_frequencies);
        Ok(())
    }
}

impl FrameworkCapability<ComplexCoherenceSpectrumScientific> for SpectralFramework {
    fn configure(
        &mut self,
        scientific: &ComplexCoherenceSpectrumScientific,
    ) -> Result<(), DataTypeError> {
        self.info.record("Spectral type", "Complex coherence");
        self.info.record("Segment length", scientific.segment_length);
        Ok(())
    }
}

/// Fourier spectrum of a time series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FourierSpectrum {
    pub scientific: FourierSpectrumScientific,
    pub framework: SpectralFramework,
}

impl DataType for FourierSpectrum {
    fn kind(&self) -> EntityKind {
        EntityKind::FourierSpectrum
    }

    fn configure(&mut self) -> Result<(), DataTypeError> {
        self.scientific.configure()?;
        self.framework.configure(&self.scientific)
    }

    fn validate(&self, _rules: &ValidationRules) -> Result<(), DataTypeError> {
        if self.scientific.segment_length <= 0.0 {
            return Err(ValidationError::InvalidParameter {
                field: "segment_length",
                reason: format!(
                    "must be positive, found {}",
                    self.scientific.segment_length
                ),
            }
            .into());
        }
        require_matching_shapes(&self.scientific.array_re, &self.scientific.array_im)
    }
}

/// Wavelet decomposition of a time series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveletCoefficients {
    pub scientific: WaveletCoefficientsScientific,
    pub framework: SpectralFramework,
}

impl DataType for WaveletCoefficients {
    fn kind(&self) -> EntityKind {
        EntityKind::WaveletCoefficients
    }

    fn configure(&mut self) -> Result<(), DataTypeError> {
        self.scientific.configure()?;
        self.framework.configure(&self.scientific)
    }

    fn validate(&self, _rules: &ValidationRules) -> Result<(), DataTypeError> {
        if self.scientific.sample_period <= 0.0 {
            return Err(ValidationError::InvalidParameter {
                field: "sample_period",
                reason: format!("must be positive, found {}", self.scientific.sample_period),
            }
            .into());
        }
        if self.scientific.q_ratio <= 0.0 {
            return Err(ValidationError::InvalidParameter {
                field: "q_ratio",
                reason: format!("must be positive, found {}", self.scientific.q_ratio),
            }
            .into());
        }
        require_matching_shapes(&self.scientific.array_re, &self.scientific.array_im)?;
        let rows = self.scientific.array_re.shape().first().copied().unwrap_or(0);
        if rows != self.scientific.frequencies.len() {
            return Err(ValidationError::StructurallyUnsound(format!(
                "Could not process these wavelet coefficients because {} scales were analysed \
                 but the coefficient array has {} rows.",
                self.scientific.frequencies.len(),
                rows
            ))
            .into());
        }
        Ok(())
    }
}

/// Coherence of a pair of signals across frequencies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoherenceSpectrum {
    pub scientific: CoherenceSpectrumScientific,
    pub framework: SpectralFramework,
}

impl DataType for CoherenceSpectrum {
    fn kind(&self) -> EntityKind {
        EntityKind::CoherenceSpectrum
    }

    fn configure(&mut self) -> Result<(), DataTypeError> {
        self.scientific.configure()?;
        self.framework.configure(&self.scientific)
    }

    fn validate(&self, _rules: &ValidationRules) -> Result<(), DataTypeError> {
        let rows = self.scientific.array_data.shape().first().copied().unwrap_or(0);
        if rows != self.scientific.frequency.len() {
            return Err(ValidationError::StructurallyUnsound(format!(
                "Could not process this coherence spectrum because it stores {} frequency \
                 points but the value array has {} rows.",
                self.scientific.frequency.len(),
                rows
            ))
            .into());
        }
        let outliers = self.scientific.out_of_unit_interval();
        if outliers > 0 {
            return Err(ValidationError::StructurallyUnsound(format!(
                "Could not process this coherence spectrum because {} values fall outside \
                 the [0, 1] interval.",
                outliers
            ))
            .into());
        }
        Ok(())
    }
}

/// Complex (cross-spectrum) coherence of a set of signals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComplexCoherenceSpectrum {
    pub scientific: ComplexCoherenceSpectrumScientific,
    pub framework: SpectralFramework,
}

impl DataType for ComplexCoherenceSpectrum {
    fn kind(&self) -> EntityKind {
        EntityKind::ComplexCoherenceSpectrum
    }

    fn configure(&mut self) -> Result<(), DataTypeError> {
        self.scientific.configure()?;
        self.framework.configure(&self.scientific)
    }

    fn validate(&self, _rules: &ValidationRules) -> Result<(), DataTypeError> {
        if self.scientific.segment_length <= 0.0 {
            return Err(ValidationError::InvalidParameter {
                field: "segment_length",
                reason: format!(
                    "must be positive, found {}",
                    self.scientific.segment_length
                ),
            }
            .into());
        }
        require_matching_shapes(
            &self.scientific.cross_spectrum_re,
            &self.scientific.cross_spectrum_im,
        )
    }
}
