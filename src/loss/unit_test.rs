use super::*;
use ndarray::{array, Array, Array4};

fn dataset() -> Array4<f64> {
    // sample n has a ramp of slope n + 1
    Array::from_shape_fn((3, 2, 3, 3), |(n, _, i, j)| ((n + 1) * (i + j)) as f64)
}

fn loss(norm: Norm, reduction: Reduction) -> TotalVariationLoss {
    TotalVariationLoss::new(TotalVariationSettings { norm, reduction })
}

#[test]
fn default_settings() {
    let loss = TotalVariationLoss::default();
    assert_eq!(loss.norm(), Norm::L2);
    assert_eq!(loss.reduction(), Reduction::Mean);
}

#[test]
fn reductions() {
    let x = dataset();
    // 2 channels * (3 * 2 + 2 * 3) differences of n + 1
    let scores = array![24., 48., 72.];
    assert_eq!(tv(&x, Norm::L1).unwrap(), scores);

    let mean = loss(Norm::L1, Reduction::Mean).apply(&x).unwrap();
    assert_eq!(mean.ndim(), 0);
    assert_eq!(mean.into_raw_vec(), vec![48.]);

    let sum = loss(Norm::L1, Reduction::Sum).apply(&x).unwrap();
    assert_eq!(sum.into_raw_vec(), vec![144.]);

    let none = loss(Norm::L1, Reduction::None).apply(&x).unwrap();
    assert_eq!(none, scores.into_dyn());
}

#[test]
fn mean_of_l2_scores() {
    let x = dataset();
    let scores = tv(&x, Norm::L2).unwrap();
    let mean = loss(Norm::L2, Reduction::Mean).apply(&x).unwrap();
    assert!((mean.into_raw_vec()[0] - scores.sum() / 3.).abs() < 1e-10);
}

#[test]
fn repeated_calls_agree() {
    let x = dataset();
    let unit = loss(Norm::L2Squared, Reduction::Sum);
    let first = unit.apply(&x).unwrap();
    // the ramps are symmetric, swapping height and width keeps the score
    let transposed = unit.apply(&x.view().permuted_axes([0, 1, 3, 2])).unwrap();
    assert_eq!(transposed, first);
    assert_eq!(unit.apply(&x).unwrap(), first);
}

#[test]
fn empty_batch() {
    let x = Array4::<f32>::zeros((0, 1, 2, 2));
    assert!(matches!(
        loss(Norm::L1, Reduction::Mean).apply(&x),
        Err(TvError::EmptyReduction)
    ));
    let sum = loss(Norm::L1, Reduction::Sum).apply(&x).unwrap();
    assert_eq!(sum.into_raw_vec(), vec![0.]);
    let none = loss(Norm::L1, Reduction::None).apply(&x).unwrap();
    assert_eq!(none.shape(), &[0]);
}

#[test]
fn errors_propagate() {
    let x = array![[1f64, 2.], [3., 4.]];
    assert!(matches!(
        TotalVariationLoss::default().apply(&x),
        Err(TvError::Rank { .. })
    ));
}

#[test]
fn reduction_names() {
    assert_eq!("mean".parse::<Reduction>().unwrap(), Reduction::Mean);
    assert_eq!("SUM".parse::<Reduction>().unwrap(), Reduction::Sum);
    assert_eq!("none".parse::<Reduction>().unwrap(), Reduction::None);
    assert_eq!(Reduction::None.to_string(), "none");
    assert!(matches!(
        "max".parse::<Reduction>(),
        Err(TvError::UnknownSelector { kind: "reduction", .. })
    ));
}

#[cfg(feature = "serde")]
mod serde_names {
    use super::*;

    #[test]
    fn selectors_use_canonical_names() {
        assert_eq!(serde_json::to_string(&Norm::L2Squared).unwrap(), "\"L2_squared\"");
        assert_eq!(serde_json::to_string(&Norm::L1).unwrap(), "\"L1\"");
        assert_eq!(serde_json::to_string(&Reduction::None).unwrap(), "\"none\"");
        assert_eq!(
            serde_json::from_str::<Reduction>("\"sum\"").unwrap(),
            Reduction::Sum
        );
        assert!(serde_json::from_str::<Norm>("\"L3\"").is_err());
    }

    #[test]
    fn settings_round_trip() {
        let settings = TotalVariationSettings {
            norm: Norm::L2Squared,
            reduction: Reduction::Sum,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(json, r#"{"norm":"L2_squared","reduction":"sum"}"#);
        assert_eq!(
            serde_json::from_str::<TotalVariationSettings>(&json).unwrap(),
            settings
        );
    }

    #[test]
    fn missing_fields_take_defaults() {
        let settings = serde_json::from_str::<TotalVariationSettings>("{}").unwrap();
        assert_eq!(settings, TotalVariationSettings::default());
        assert_eq!((settings.norm, settings.reduction), (Norm::L2, Reduction::Mean));
        let settings = serde_json::from_str::<TotalVariationSettings>(r#"{"norm":"L1"}"#).unwrap();
        assert_eq!((settings.norm, settings.reduction), (Norm::L1, Reduction::Mean));
    }
}
