mod support;

use approx::assert_relative_eq;
use nalgebra::{Point3, Vector4};
use ostomachion::{
    float_types::{FRAC_PI_2, Real},
    r3::{HomogeneousVector4R3, LinearTransform4R3},
    traits::Vector,
};
use std::collections::HashMap;
use support::{exact_scalars, h, sample_points, sample_vectors};

fn scale_all(v: HomogeneousVector4R3, lambda: Real) -> HomogeneousVector4R3 {
    h(v.x * lambda, v.y * lambda, v.z * lambda, v.w * lambda)
}

fn sum<S, V: Vector<S>>(vectors: &[V]) -> V {
    vectors
        .iter()
        .fold(V::additive_identity(), |acc, &v| acc + v)
}

#[test]
fn canonical_form_is_invariant_under_scaling() {
    for v in sample_vectors() {
        for lambda in exact_scalars() {
            let scaled = scale_all(v, lambda);
            assert_eq!(
                scaled.canonicalize().to_array(),
                v.canonicalize().to_array(),
                "{v:?} scaled by {lambda}"
            );
            assert_eq!(scaled, v);
        }
    }
}

#[test]
fn canonicalize_is_idempotent() {
    for v in sample_vectors() {
        let once = v.canonicalize();
        assert_eq!(once.canonicalize().to_array(), once.to_array(), "{v:?}");
    }
}

#[test]
fn equivalent_tuples_are_equal() {
    assert_eq!(h(2.0, 4.0, 6.0, 2.0), h(1.0, 2.0, 3.0, 1.0));
    assert_eq!(h(2.0, 4.0, 6.0, 2.0).canonicalize().to_array(), [1.0, 2.0, 3.0, 1.0]);
    assert_ne!(h(1.0, 2.0, 3.0, 1.0), h(1.0, 2.0, 3.0, 2.0));
}

#[test]
fn undefined_is_isolated() {
    let undefined = HomogeneousVector4R3::UNDEFINED;
    assert_eq!(undefined, undefined);
    assert_ne!(undefined, HomogeneousVector4R3::ADDITIVE_IDENTITY);
    for v in sample_vectors().into_iter().filter(|v| !v.is_undefined()) {
        assert_ne!(undefined, v);
    }
    assert_eq!(undefined.canonicalize().to_array(), [0.0; 4]);
}

#[test]
fn additive_identity_law() {
    let zero = HomogeneousVector4R3::additive_identity();
    for p in sample_points() {
        assert_eq!((p + zero).canonicalize().to_array(), p.canonicalize().to_array());
        assert_eq!((zero + p).canonicalize().to_array(), p.canonicalize().to_array());
    }
}

#[test]
fn multiplicative_identity_law() {
    let one = HomogeneousVector4R3::multiplicative_identity();
    for v in sample_vectors() {
        assert_eq!((v * one).to_array(), v.to_array());
        assert_eq!((v / one).to_array(), v.to_array());
    }
}

#[test]
fn division_by_zero_goes_to_infinity() {
    let v = h(1.0, 2.0, 3.0, 1.0) / 0.0;
    assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 0.0]);
    assert_eq!(v.canonicalize().w, 0.0);
    assert!(v.is_at_infinity());
    assert!(v.to_point().is_err());
}

#[test]
fn scalar_operations_act_on_the_affine_point() {
    let p = HomogeneousVector4R3::point(1.0, 2.0, 3.0);
    assert_eq!((p * 2.0).to_point(), Ok(Point3::new(2.0, 4.0, 6.0)));
    assert_eq!((p / 2.0).to_point(), Ok(Point3::new(0.5, 1.0, 1.5)));
    assert_eq!(-p, HomogeneousVector4R3::point(-1.0, -2.0, -3.0));
}

#[test]
fn addition_and_subtraction_match_affine_arithmetic() {
    let a = h(2.0, 4.0, 6.0, 2.0); // (1, 2, 3)
    let b = h(12.0, 3.0, 0.0, 3.0); // (4, 1, 0)
    assert_eq!((a + b).to_point(), Ok(Point3::new(5.0, 3.0, 3.0)));
    assert_eq!((a - b).to_point(), Ok(Point3::new(-3.0, 1.0, 3.0)));
    assert_eq!(a + b - b, a);
}

#[test]
fn generic_sum_over_vector_trait() {
    let points = [
        HomogeneousVector4R3::point(1.0, 0.0, 0.0),
        HomogeneousVector4R3::point(0.0, 1.0, 0.0),
        HomogeneousVector4R3::point(0.0, 0.0, 1.0),
    ];
    assert_eq!(sum::<Real, _>(&points).to_array(), [1.0, 1.0, 1.0, 1.0]);
    assert_eq!(sum::<Real, HomogeneousVector4R3>(&[]).to_array(), [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn hashing_follows_equality() {
    let mut labels = HashMap::new();
    labels.insert(h(1.0, 2.0, 3.0, 1.0), "corner");
    labels.insert(h(0.0, 0.0, 1.0, 0.0), "up");

    assert_eq!(labels.get(&h(-2.0, -4.0, -6.0, -2.0)), Some(&"corner"));
    assert_eq!(labels.get(&h(0.0, 0.0, 5.0, 0.0)), Some(&"up"));
    assert_eq!(labels.get(&h(0.0, 0.0, 5.0, 1.0)), None);
}

#[test]
fn display_is_projective() {
    assert_eq!(h(2.0, 4.0, 6.0, 2.0).to_string(), h(1.0, 2.0, 3.0, 1.0).to_string());
    assert_eq!(HomogeneousVector4R3::UNDEFINED.to_string(), "[0 : 0 : 0 : 0]");
}

/// Equality is exact, so values that only agree up to rounding compare unequal.
#[test]
fn exact_equality_is_sensitive_to_rounding() {
    let rotated = HomogeneousVector4R3::point(1.0, 0.0, 0.0) * LinearTransform4R3::rotation_z(FRAC_PI_2);

    assert_ne!(rotated, HomogeneousVector4R3::point(0.0, 1.0, 0.0));
    assert_relative_eq!(
        Vector4::from(rotated.canonicalize()),
        Vector4::new(0.0, 1.0, 0.0, 1.0),
        epsilon = 1e-6
    );
}
