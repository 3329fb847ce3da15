#[cfg(test)]
mod tests {
    extern crate std;
    use crate::{ContractError, ErrorCategory, ErrorExt};
    use std::collections::BTreeSet;
    use std::vec::Vec;

    fn all_variants() -> Vec<ContractError> {
        std::vec![
            ContractError::NotInitialized,
            ContractError::AlreadyInitialized,
            ContractError::Unauthorized,
            ContractError::NotAllowed,
            ContractError::GateFailed,
            ContractError::InvalidAmount,
            ContractError::AlreadyExists,
            ContractError::InvalidDeadline,
            ContractError::InvalidFee,
            ContractError::InsufficientAllowance,
            ContractError::AssetNotFound,
            ContractError::SupplyCapExceeded,
            ContractError::InsufficientBalance,
            ContractError::CampaignNotFound,
            ContractError::NotFunding,
            ContractError::DeadlinePassed,
            ContractError::RefundNotAvailable,
            ContractError::NothingToRefund,
            ContractError::TargetNotReached,
            ContractError::NoSupply,
            ContractError::ClaimExceedsDeposits,
            ContractError::PoolNotFound,
            ContractError::SlippageExceeded,
            ContractError::InsufficientOutput,
            ContractError::Overflow,
            ContractError::Underflow,
            ContractError::DivisionByZero,
        ]
    }

    // --- Wire code tests ---

    #[test]
    fn test_codes_initialization() {
        assert_eq!(ContractError::NotInitialized as u32, 1);
        assert_eq!(ContractError::AlreadyInitialized as u32, 2);
    }

    #[test]
    fn test_codes_authorization() {
        assert_eq!(ContractError::Unauthorized as u32, 100);
        assert_eq!(ContractError::NotAllowed as u32, 101);
        assert_eq!(ContractError::GateFailed as u32, 102);
    }

    #[test]
    fn test_codes_validation() {
        assert_eq!(ContractError::InvalidAmount as u32, 200);
        assert_eq!(ContractError::AlreadyExists as u32, 201);
        assert_eq!(ContractError::InvalidDeadline as u32, 202);
        assert_eq!(ContractError::InvalidFee as u32, 203);
        assert_eq!(ContractError::InsufficientAllowance as u32, 204);
    }

    #[test]
    fn test_codes_ledger() {
        assert_eq!(ContractError::AssetNotFound as u32, 300);
        assert_eq!(ContractError::SupplyCapExceeded as u32, 301);
        assert_eq!(ContractError::InsufficientBalance as u32, 302);
    }

    #[test]
    fn test_codes_escrow() {
        assert_eq!(ContractError::CampaignNotFound as u32, 400);
        assert_eq!(ContractError::NotFunding as u32, 401);
        assert_eq!(ContractError::DeadlinePassed as u32, 402);
        assert_eq!(ContractError::RefundNotAvailable as u32, 403);
        assert_eq!(ContractError::NothingToRefund as u32, 404);
        assert_eq!(ContractError::TargetNotReached as u32, 405);
    }

    #[test]
    fn test_codes_distribution_and_exchange() {
        assert_eq!(ContractError::NoSupply as u32, 500);
        assert_eq!(ContractError::ClaimExceedsDeposits as u32, 501);
        assert_eq!(ContractError::PoolNotFound as u32, 600);
        assert_eq!(ContractError::SlippageExceeded as u32, 601);
        assert_eq!(ContractError::InsufficientOutput as u32, 602);
    }

    #[test]
    fn test_codes_arithmetic() {
        assert_eq!(ContractError::Overflow as u32, 700);
        assert_eq!(ContractError::Underflow as u32, 701);
        assert_eq!(ContractError::DivisionByZero as u32, 702);
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: BTreeSet<u32> = all_variants().iter().map(|e| *e as u32).collect();
        assert_eq!(codes.len(), all_variants().len());
    }

    // --- Category mapping tests ---

    #[test]
    fn test_code_block_matches_category() {
        for err in all_variants() {
            let expected = match err as u32 {
                1..=99 => ErrorCategory::Initialization,
                100..=199 => ErrorCategory::Authorization,
                200..=299 => ErrorCategory::Validation,
                300..=399 => ErrorCategory::Ledger,
                400..=499 => ErrorCategory::Escrow,
                500..=599 => ErrorCategory::Distribution,
                600..=699 => ErrorCategory::Exchange,
                _ => ErrorCategory::Arithmetic,
            };
            assert_eq!(err.category(), expected, "{err:?}");
        }
    }

    #[test]
    fn test_only_arithmetic_errors_are_not_preconditions() {
        for err in all_variants() {
            let arithmetic = matches!(
                err,
                ContractError::Overflow | ContractError::Underflow | ContractError::DivisionByZero
            );
            assert_eq!(err.is_precondition(), !arithmetic, "{err:?}");
        }
    }

    // --- Description tests ---

    #[test]
    fn test_descriptions_non_empty_and_distinct() {
        let mut seen = BTreeSet::new();
        for err in all_variants() {
            let d = err.description();
            assert!(!d.is_empty());
            assert!(seen.insert(d), "duplicate description: {d}");
        }
    }

    #[test]
    fn test_description_samples() {
        assert_eq!(
            ContractError::SupplyCapExceeded.description(),
            "Mint would exceed the asset's max shares"
        );
        assert_eq!(
            ContractError::NothingToRefund.description(),
            "No locked amount to refund"
        );
    }

    // arithmetic
    #[test]
    fn test_overflow() {
        let result: Result<i128, ContractError> =
            i128::MAX.checked_add(1).ok_or(ContractError::Overflow);
        assert_eq!(result, Err(ContractError::Overflow));
    }

    #[test]
    fn test_error_category_equality() {
        assert_eq!(ErrorCategory::Escrow, ErrorCategory::Escrow);
        assert_ne!(ErrorCategory::Escrow, ErrorCategory::Exchange);
    }
}
