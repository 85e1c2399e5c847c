//! Tests for the spectral and temporal-correlation datatypes.

use cerebra_datatypes::spectral::*;
use cerebra_datatypes::{DataType, DataTypeError, ValidationError, ValidationRules};
use ndarray::{Array1, ArrayD, IxDyn};

fn rules() -> ValidationRules {
    ValidationRules::default()
}

mod fourier_tests {
    use super::*;

    fn sample_spectrum() -> FourierSpectrum {
        let mut entity = FourierSpectrum::default();
        entity.scientific.segment_length = 0.5;
        entity.scientific.array_re = ArrayD::from_elem(IxDyn(&[4, 2]), 3.0);
        entity.scientific.array_im = ArrayD::from_elem(IxDyn(&[4, 2]), 4.0);
        entity.configure().unwrap();
        entity
    }

    #[test]
    fn configure_derives_frequency_and_polar_fields() {
        let entity = sample_spectrum();
        assert_eq!(
            entity.scientific.frequency,
            Array1::from(vec![0.0, 2.0, 4.0, 6.0])
        );
        assert!(entity
            .scientific
            .amplitude
            .iter()
            .all(|&a| (a - 5.0).abs() < 1e-12));
        assert!(entity
            .scientific
            .power
            .iter()
            .all(|&p| (p - 25.0).abs() < 1e-12));
    }

    #[test]
    fn configure_is_idempotent() {
        let mut entity = sample_spectrum();
        let frequency = entity.scientific.frequency.clone();
        let amplitude = entity.scientific.amplitude.clone();
        entity.configure().unwrap();
        assert_eq!(frequency, entity.scientific.frequency);
        assert_eq!(amplitude, entity.scientific.amplitude);
    }

    #[test]
    fn mismatched_coefficient_shapes_fail_structurally() {
        let mut entity = sample_spectrum();
        entity.scientific.array_im = ArrayD::zeros(IxDyn(&[4, 3]));
        assert!(matches!(
            entity.validate(&rules()),
            Err(DataTypeError::Validation(
                ValidationError::StructurallyUnsound(_)
            ))
        ));
    }

    #[test]
    fn non_positive_segment_length_is_invalid() {
        let mut entity = sample_spectrum();
        entity.scientific.segment_length = 0.0;
        assert!(matches!(
            entity.validate(&rules()),
            Err(DataTypeError::Validation(
                ValidationError::InvalidParameter { .. }
            ))
        ));
    }
}

mod wavelet_tests {
    use super::*;

    #[test]
    fn scale_count_must_match_the_coefficient_rows() {
        let mut entity = WaveletCoefficients::default();
        entity.scientific.frequencies = Array1::from(vec![4.0, 8.0, 16.0]);
        entity.scientific.array_re = ArrayD::zeros(IxDyn(&[2, 10]));
        entity.scientific.array_im = ArrayD::zeros(IxDyn(&[2, 10]));
        entity.configure().unwrap();
        assert!(matches!(
            entity.validate(&rules()),
            Err(DataTypeError::Validation(
                ValidationError::StructurallyUnsound(_)
            ))
        ));
    }

    #[test]
    fn well_formed_coefficients_validate() {
        let mut entity = WaveletCoefficients::default();
        entity.scientific.frequencies = Array1::from(vec![4.0, 8.0]);
        entity.scientific.array_re = ArrayD::zeros(IxDyn(&[2, 10]));
        entity.scientific.array_im = ArrayD::zeros(IxDyn(&[2, 10]));
        entity.configure().unwrap();
        assert!(entity.validate(&rules()).is_ok());
    }
}

mod coherence_tests {
    use super::*;

    fn sample_coherence(values: f64) -> CoherenceSpectrum {
        let mut entity = CoherenceSpectrum::default();
        entity.scientific.frequency = Array1::from(vec![1.0, 2.0, 3.0]);
        entity.scientific.array_data = ArrayD::from_elem(IxDyn(&[3, 2, 2]), values);
        entity.configure().unwrap();
        entity
    }

    #[test]
    fn unit_interval_values_validate() {
        let entity = sample_coherence(0.75);
        assert_eq!(entity.scientific.number_of_frequencies, 3);
        assert!(entity.validate(&rules()).is_ok());
    }

    #[test]
    fn values_above_one_fail_structurally() {
        let entity = sample_coherence(1.5);
        let err = entity.validate(&rules()).unwrap_err();
        assert!(err.to_string().contains("[0, 1]"));
    }

    #[test]
    fn frequency_axis_mismatch_fails_structurally() {
        let mut entity = sample_coherence(0.5);
        entity.scientific.frequency = Array1::from(vec![1.0, 2.0]);
        assert!(matches!(
            entity.validate(&rules()),
            Err(DataTypeError::Validation(
                ValidationError::StructurallyUnsound(_)
            ))
        ));
    }
}

mod complex_coherence_tests {
    use super::*;

    #[test]
    fn amplitude_and_phase_follow_the_cross_spectrum() {
        let mut entity = ComplexCoherenceSpectrum::default();
        entity.scientific.cross_spectrum_re = ArrayD::from_elem(IxDyn(&[2, 2]), 0.0);
        entity.scientific.cross_spectrum_im = ArrayD::from_elem(IxDyn(&[2, 2]), 2.0);
        entity.configure().unwrap();
        assert!(entity
            .scientific
            .amplitude
            .iter()
            .all(|&a| (a - 2.0).abs() < 1e-12));
        assert!(entity
            .scientific
            .phase
            .iter()
            .all(|&p| (p - std::f64::consts::FRAC_PI_2).abs() < 1e-12));
        assert!(entity.validate(&rules()).is_ok());
    }
}
