//! Additive fraud rules
//!
//! Every rule looks at the transaction on its own; none depends on whether
//! another rule fired. The scorer evaluates all of them and sums the weights.

use crate::TransactionInput;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Amount above which a transaction counts as large
const LARGE_AMOUNT: Decimal = dec!(100000);

/// Allowed gap between reported and expected origin balance
const BALANCE_TOLERANCE: Decimal = dec!(1000);

/// Round-amount pattern: multiples of this step ...
const ROUND_STEP: Decimal = dec!(10000);

/// ... above this amount
const ROUND_FLOOR: Decimal = dec!(50000);

/// Scoring rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskRule {
    /// Amount over 100,000
    LargeAmount,
    /// Origin balance after the transaction is off by more than 1,000
    BalanceInconsistency,
    /// TRANSFER or CASH_OUT
    HighRiskType,
    /// Money leaves an account that started at zero
    ZeroBalanceOrigin,
    /// Multiple of 10,000 above 50,000
    RoundAmount,
}

impl RiskRule {
    /// Rules in evaluation order
    pub const ALL: [RiskRule; 5] = [
        RiskRule::LargeAmount,
        RiskRule::BalanceInconsistency,
        RiskRule::HighRiskType,
        RiskRule::ZeroBalanceOrigin,
        RiskRule::RoundAmount,
    ];

    /// Points added when the rule fires
    pub fn weight(&self) -> u8 {
        match self {
            RiskRule::LargeAmount => 30,
            RiskRule::BalanceInconsistency => 25,
            RiskRule::HighRiskType => 20,
            RiskRule::ZeroBalanceOrigin => 35,
            RiskRule::RoundAmount => 15,
        }
    }

    /// Check the rule's predicate
    pub fn fires(&self, input: &TransactionInput) -> bool {
        match self {
            RiskRule::LargeAmount => input.amount > LARGE_AMOUNT,
            // a gap too large for Decimal is far past the tolerance
            RiskRule::BalanceInconsistency => input
                .origin_balance_gap()
                .map_or(true, |gap| gap > BALANCE_TOLERANCE),
            RiskRule::HighRiskType => input.tx_type.is_high_risk(),
            RiskRule::ZeroBalanceOrigin => {
                input.origin_old_balance.is_zero() && input.amount > Decimal::ZERO
            }
            RiskRule::RoundAmount => {
                (input.amount % ROUND_STEP).is_zero() && input.amount > ROUND_FLOOR
            }
        }
    }

    /// Explanation shown when the rule fires
    pub fn factor(&self, input: &TransactionInput) -> String {
        match self {
            RiskRule::LargeAmount => "High transaction amount".to_string(),
            RiskRule::BalanceInconsistency => "Balance inconsistency detected".to_string(),
            RiskRule::HighRiskType => {
                format!("{} transactions have higher fraud risk", input.tx_type)
            }
            RiskRule::ZeroBalanceOrigin => "Transaction from zero balance account".to_string(),
            RiskRule::RoundAmount => "Round number amount pattern".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransactionType;

    /// Payment that trips nothing; tests flip one predicate at a time
    fn quiet() -> TransactionInput {
        TransactionInput::new(TransactionType::Payment, dec!(500), dec!(1000), dec!(500))
    }

    fn fired(input: &TransactionInput) -> Vec<RiskRule> {
        RiskRule::ALL
            .into_iter()
            .filter(|r| r.fires(input))
            .collect()
    }

    #[test]
    fn test_quiet_input_fires_nothing() {
        assert!(fired(&quiet()).is_empty());
    }

    #[test]
    fn test_large_amount_alone() {
        // balances kept consistent, amount not round
        let input = TransactionInput::new(
            TransactionType::Payment,
            dec!(100001),
            dec!(200000),
            dec!(99999),
        );
        assert_eq!(fired(&input), vec![RiskRule::LargeAmount]);
        assert_eq!(
            RiskRule::LargeAmount.factor(&input),
            "High transaction amount"
        );
    }

    #[test]
    fn test_large_amount_boundary() {
        let input = TransactionInput::new(
            TransactionType::Payment,
            dec!(100000),
            dec!(200000),
            dec!(100000),
        );
        assert!(!RiskRule::LargeAmount.fires(&input));
    }

    #[test]
    fn test_balance_inconsistency_alone() {
        let mut input = quiet();
        input.origin_new_balance = dec!(1500.01);
        assert_eq!(fired(&input), vec![RiskRule::BalanceInconsistency]);
        assert_eq!(
            RiskRule::BalanceInconsistency.factor(&input),
            "Balance inconsistency detected"
        );

        // exactly 1000 off is tolerated
        input.origin_new_balance = dec!(1500);
        assert!(fired(&input).is_empty());

        // the gap is absolute
        input.origin_new_balance = dec!(-500.01);
        assert_eq!(fired(&input), vec![RiskRule::BalanceInconsistency]);
    }

    #[test]
    fn test_high_risk_type_alone() {
        let mut input = quiet();
        input.tx_type = TransactionType::CashOut;
        assert_eq!(fired(&input), vec![RiskRule::HighRiskType]);
        assert_eq!(
            RiskRule::HighRiskType.factor(&input),
            "CASH_OUT transactions have higher fraud risk"
        );
    }

    #[test]
    fn test_zero_balance_origin_alone() {
        // origin starts at zero and the reported balance matches -amount
        let input =
            TransactionInput::new(TransactionType::Payment, dec!(500), dec!(0), dec!(-500));
        assert_eq!(fired(&input), vec![RiskRule::ZeroBalanceOrigin]);
        assert_eq!(
            RiskRule::ZeroBalanceOrigin.factor(&input),
            "Transaction from zero balance account"
        );
    }

    #[test]
    fn test_zero_balance_needs_positive_amount() {
        let input = TransactionInput::new(TransactionType::Payment, dec!(0), dec!(0), dec!(0));
        assert!(!RiskRule::ZeroBalanceOrigin.fires(&input));
    }

    #[test]
    fn test_round_amount_alone() {
        let input = TransactionInput::new(
            TransactionType::Payment,
            dec!(60000),
            dec!(100000),
            dec!(40000),
        );
        assert_eq!(fired(&input), vec![RiskRule::RoundAmount]);
        assert_eq!(
            RiskRule::RoundAmount.factor(&input),
            "Round number amount pattern"
        );

        // 50,000 itself is not above the floor
        let input = TransactionInput::new(
            TransactionType::Payment,
            dec!(50000),
            dec!(100000),
            dec!(50000),
        );
        assert!(fired(&input).is_empty());
    }

    #[test]
    fn test_round_amount_ignores_trailing_zero_scale() {
        let input = TransactionInput::new(
            TransactionType::Payment,
            dec!(70000.00),
            dec!(100000),
            dec!(30000),
        );
        assert!(RiskRule::RoundAmount.fires(&input));

        let input = TransactionInput::new(
            TransactionType::Payment,
            dec!(70000.50),
            dec!(100000),
            dec!(29999.50),
        );
        assert!(!RiskRule::RoundAmount.fires(&input));
    }

    #[test]
    fn test_balance_gap_overflow_counts_as_inconsistent() {
        // amount and new balance both at the Decimal ceiling
        let input =
            TransactionInput::new(TransactionType::Payment, Decimal::MAX, dec!(0), Decimal::MAX);
        assert!(RiskRule::BalanceInconsistency.fires(&input));

        // old balance at the floor, so old - amount underflows
        let input =
            TransactionInput::new(TransactionType::Payment, dec!(1), Decimal::MIN, dec!(0));
        assert!(RiskRule::BalanceInconsistency.fires(&input));
    }

    #[test]
    fn test_weights_sum() {
        let total: u32 = RiskRule::ALL.iter().map(|r| r.weight() as u32).sum();
        assert_eq!(total, 125);
    }
}
