use rust_decimal::Decimal;

/// Final score of a routine: difficulty + execution - neutral deductions,
/// floored at zero. Deductions can exceed the earned score; the result never
/// goes negative.
pub fn final_score(difficulty: Decimal, execution: Decimal, deductions: Decimal) -> Decimal {
    (difficulty + execution - deductions).max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_final_score_sums_components() {
        assert_eq!(final_score(dec("6.0"), dec("8.5"), dec("1.2")), dec("13.3"));
    }

    #[test]
    fn test_final_score_floors_at_zero() {
        assert_eq!(final_score(dec("1.0"), dec("1.0"), dec("5.0")), Decimal::ZERO);
    }

    #[test]
    fn test_final_score_with_no_deductions() {
        assert_eq!(final_score(dec("5.400"), dec("9.125"), Decimal::ZERO), dec("14.525"));
    }

    #[test]
    fn test_final_score_keeps_three_decimal_precision() {
        assert_eq!(final_score(dec("5.123"), dec("8.456"), dec("0.001")), dec("13.578"));
    }
}
