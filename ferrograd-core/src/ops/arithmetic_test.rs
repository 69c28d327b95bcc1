// ferrograd-core/src/ops/arithmetic_test.rs

#[cfg(test)]
mod tests {
    use crate::ops::arithmetic::{add, id, mul, neg};
    use rand::Rng;

    #[test]
    fn test_mul_basic() {
        assert_eq!(mul(3.0_f64, 4.0), 12.0);
        assert_eq!(mul(-2.0_f64, 5.0), -10.0);
        assert_eq!(mul(0.0_f32, 7.5), 0.0);
    }

    #[test]
    fn test_add_basic() {
        assert_eq!(add(1.5_f64, 2.5), 4.0);
        assert_eq!(add(-1.0_f32, 1.0), 0.0);
    }

    #[test]
    fn test_id_returns_input() {
        assert_eq!(id(42.0_f64), 42.0);
        assert_eq!(id(-0.5_f32), -0.5);
    }

    #[test]
    fn test_neg_basic() {
        assert_eq!(neg(3.0_f64), -3.0);
        assert_eq!(neg(-3.0_f64), 3.0);
        assert_eq!(neg(0.0_f32), 0.0);
    }

    #[test]
    fn test_commutativity_sampled() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let x: f64 = rng.gen_range(-100.0..100.0);
            let y: f64 = rng.gen_range(-100.0..100.0);
            // IEEE addition and multiplication are exactly commutative
            assert_eq!(add(x, y), add(y, x));
            assert_eq!(mul(x, y), mul(y, x));
        }
    }

    #[test]
    fn test_neg_involution_sampled() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let x: f64 = rng.gen_range(-1e6..1e6);
            assert_eq!(neg(neg(x)), x);
        }
    }
}
