use core_types::{SCALE_MAX, SCALE_MIN, TraitVector, similarity_percentage};
use proptest::prelude::*;

fn scale_vector() -> impl Strategy<Value = [f64; 5]> {
    prop::array::uniform5(SCALE_MIN..=SCALE_MAX)
}

proptest! {
    #[test]
    fn self_similarity_is_maximal(v in scale_vector()) {
        prop_assert_eq!(similarity_percentage(&v, &v), 100.0);
        let tv = TraitVector::new(v);
        prop_assert_eq!(tv.similarity(&tv), 100.0);
    }

    #[test]
    fn similarity_is_bounded_and_symmetric(a in scale_vector(), b in scale_vector()) {
        let ab = similarity_percentage(&a, &b);
        let ba = similarity_percentage(&b, &a);
        prop_assert!((0.0..=100.0).contains(&ab));
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn out_of_scale_inputs_stay_bounded(
        a in prop::array::uniform5(-50.0f64..50.0),
        b in prop::array::uniform5(-50.0f64..50.0),
    ) {
        let s = similarity_percentage(&a, &b);
        prop_assert!((0.0..=100.0).contains(&s));
    }
}
