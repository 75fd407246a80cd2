use soroban_sdk::{Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns floor((a * b) / denominator), or `None` when the denominator is
/// zero or the quotient does not fit in u128
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Option<u128> {
    if denominator == 0 {
        return None;
    }

    // u128 * u128 always fits in 256 bits, so only the quotient can overflow
    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let result = product.div(&U256::from_u128(env, denominator));

    result.to_u128()
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    // === mul_div tests ===

    #[test]
    fn test_mul_div_basic() {
        let env = Env::default();
        // (10 * 20) / 5 = 40
        assert_eq!(mul_div(&env, 10, 20, 5), Some(40));
    }

    #[test]
    fn test_mul_div_large_numbers() {
        let env = Env::default();
        // (2^100 * 2^100) / 2^100 = 2^100, product overflows u128
        let large = 1u128 << 100;
        assert_eq!(mul_div(&env, large, large, large), Some(large));
    }

    #[test]
    fn test_mul_div_max_values() {
        let env = Env::default();
        let max = u128::MAX;
        assert_eq!(mul_div(&env, max, max, max), Some(max));
    }

    #[test]
    fn test_mul_div_zero_numerator() {
        let env = Env::default();
        assert_eq!(mul_div(&env, 0, 100, 50), Some(0));
        assert_eq!(mul_div(&env, 100, 0, 50), Some(0));
    }

    #[test]
    fn test_mul_div_rounds_down() {
        let env = Env::default();
        assert_eq!(mul_div(&env, 1, 1, 2), Some(0));
        assert_eq!(mul_div(&env, 3, 1, 2), Some(1));
        assert_eq!(mul_div(&env, 5, 1, 3), Some(1));
        // 10 * 30 / 50 = 6, 5 * 60 / 36 = 8.33
        assert_eq!(mul_div(&env, 10, 30, 50), Some(6));
        assert_eq!(mul_div(&env, 5, 60, 36), Some(8));
    }

    #[test]
    fn test_mul_div_zero_denominator() {
        let env = Env::default();
        assert_eq!(mul_div(&env, 10, 20, 0), None);
    }

    #[test]
    fn test_mul_div_quotient_overflow() {
        let env = Env::default();
        // MAX * 2 / 1 does not fit in u128
        assert_eq!(mul_div(&env, u128::MAX, 2, 1), None);
    }

    #[test]
    fn test_phantom_overflow_scenario() {
        let env = Env::default();
        // a * b overflows u128 but the result fits
        let q64 = 1u128 << 64;
        let result = mul_div(&env, q64 * 3, q64 * 2, q64);
        assert_eq!(result, Some(q64 * 6));
    }
}
