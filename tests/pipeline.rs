use approx::assert_relative_eq;
use deboor::prelude::*;
use nalgebra::DVector;

/// Stations along a wing spar, (span position, chord offset, thickness)
fn stations() -> Vec<DVector<f64>> {
    vec![
        DVector::from_vec(vec![0.0, 0.0, 0.12]),
        DVector::from_vec(vec![1.0, 0.05, 0.11]),
        DVector::from_vec(vec![2.0, 0.15, 0.095]),
        DVector::from_vec(vec![3.0, 0.3, 0.08]),
        DVector::from_vec(vec![4.0, 0.5, 0.06]),
        DVector::from_vec(vec![4.5, 0.62, 0.05]),
    ]
}

#[test]
fn interpolate_clean_derive_evaluate() {
    let stations = stations();
    let curve = BSplineCurve::try_interpolate_cubic_beziers(&stations).unwrap();
    assert!(curve.try_derive().is_err());

    let cleaned = curve.clean();
    let tangent = cleaned.try_derive().unwrap();
    // the joints of the tangent are full-multiplicity knots again
    assert!(tangent.try_derive().is_err());
    let curvature = tangent.clean().try_derive().unwrap();
    assert_eq!(curvature.degree(), 1);

    let segments = (stations.len() - 1) as f64;
    for (i, station) in stations.iter().enumerate() {
        let u = i as f64 / segments;
        assert_relative_eq!(
            cleaned.try_point_at(u).unwrap(),
            station.clone(),
            epsilon = 1e-10
        );
    }

    // the spline is twice continuously differentiable across the joints
    let h = 1e-9;
    for i in 1..(stations.len() - 1) {
        let u = i as f64 / segments;
        assert_relative_eq!(
            tangent.try_point_at(u - h).unwrap(),
            tangent.try_point_at(u + h).unwrap(),
            epsilon = 1e-6
        );
    }

    // natural end conditions
    let (min, max) = curvature.knots_domain();
    assert_relative_eq!(curvature.try_point_at(min).unwrap().norm(), 0.0, epsilon = 1e-9);
    assert_relative_eq!(curvature.try_point_at(max).unwrap().norm(), 0.0, epsilon = 1e-9);
}

#[test]
fn smooth_interpolation_matches_bezier_segments() {
    let stations = stations();
    let smooth = BSplineCurve::try_interpolate_cubic(&stations).unwrap();
    let cleaned = BSplineCurve::try_interpolate_cubic_beziers(&stations)
        .unwrap()
        .clean();

    let a = smooth.try_derive().unwrap();
    let b = cleaned.try_derive().unwrap();
    for (p, q) in a
        .try_sample_domain(64)
        .unwrap()
        .into_iter()
        .zip(b.try_sample_domain(64).unwrap())
    {
        assert_relative_eq!(p, q, epsilon = 1e-8);
    }
}

#[test]
fn refine_then_split() {
    let curve = BSplineCurve::try_interpolate_cubic_with_style(&stations(), KnotStyle::Chordal)
        .unwrap();
    let refined = curve.try_refine_knots(&[0.1, 0.2, 0.2, 0.9]).unwrap();
    assert_eq!(
        refined.control_points().len(),
        curve.control_points().len() + 4
    );

    let (left, right) = refined.try_split(0.5).unwrap();
    for u in [0.0, 0.2, 0.45, 0.5] {
        assert_relative_eq!(
            left.try_point_at(u).unwrap(),
            curve.try_point_at(u).unwrap(),
            epsilon = 1e-10
        );
    }
    for u in [0.5, 0.66, 0.9, 1.0] {
        assert_relative_eq!(
            right.try_point_at(u).unwrap(),
            curve.try_point_at(u).unwrap(),
            epsilon = 1e-10
        );
    }
}

#[test]
fn de_boor_net_of_interpolated_curve() {
    let curve = BSplineCurve::try_interpolate_cubic(&stations()).unwrap();
    let net = curve.try_evaluate(0.5).unwrap();
    assert_eq!(net.multiplicity(), 0);
    assert_eq!(net.insertions(), 3);
    assert_eq!(net.points().len(), 10);
    assert_eq!(net.dimension(), 3);
    assert_eq!(net.result().len(), 1);

    let out_of_domain = curve.try_evaluate(1.5);
    assert_eq!(out_of_domain, Err(CurveError::ParameterOutOfDomain));
}
