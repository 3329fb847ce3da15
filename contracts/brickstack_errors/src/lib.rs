#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring, alerting, and dashboards.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `ContractError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup and initialization errors (codes 1-99).
    Initialization,
    /// Caller identity, permission and eligibility errors (codes 100-199).
    Authorization,
    /// Malformed arguments and duplicate records (codes 200-299).
    Validation,
    /// Share ledger errors (codes 300-399).
    Ledger,
    /// Crowdfunding campaign errors (codes 400-499).
    Escrow,
    /// Yield distribution errors (codes 500-599).
    Distribution,
    /// Exchange pool errors (codes 600-699).
    Exchange,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  ContractError
/// @notice Canonical error enum shared by all BrickStack contracts.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///         Use the ErrorExt trait to retrieve the category and description.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Validation
///   300 - 399 : Ledger
///   400 - 499 : Escrow
///   500 - 599 : Distribution
///   600 - 699 : Exchange
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    /// Contracts: all
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    /// Contracts: all
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller lacks the admin, operator or minter right for this operation.
    /// Contracts: all
    Unauthorized = 100,

    /// The transfer policy rejected the receiving holder.
    /// Contracts: ledger, exchange
    NotAllowed = 101,

    /// The contribution gate rejected the investor.
    /// Contracts: escrow
    GateFailed = 102,

    // --- Validation (200-299) ---
    /// Amount argument must be strictly positive (> 0).
    /// Contracts: all
    InvalidAmount = 200,

    /// A record for this asset id already exists.
    /// Contracts: ledger, escrow, exchange
    AlreadyExists = 201,

    /// Campaign deadline must be in the future.
    /// Contracts: escrow
    InvalidDeadline = 202,

    /// Basis-point value is out of range.
    /// Contracts: ledger, exchange
    InvalidFee = 203,

    /// Token allowance granted to the contract is below the amount pulled.
    /// Contracts: escrow, vault, exchange
    InsufficientAllowance = 204,

    // --- Ledger (300-399) ---
    /// No asset config exists for the given asset id.
    /// Contracts: ledger, escrow
    AssetNotFound = 300,

    /// Minting would push total supply above the asset's max shares.
    /// Contracts: ledger, escrow
    SupplyCapExceeded = 301,

    /// Holder balance is lower than the amount being moved.
    /// Contracts: ledger, exchange
    InsufficientBalance = 302,

    // --- Escrow (400-499) ---
    /// No campaign exists for the given asset id.
    /// Contracts: escrow
    CampaignNotFound = 400,

    /// Campaign is finalized and no longer accepts this operation.
    /// Contracts: escrow
    NotFunding = 401,

    /// Campaign deadline has passed.
    /// Contracts: escrow
    DeadlinePassed = 402,

    /// Refunds are only available on cancelled campaigns.
    /// Contracts: escrow
    RefundNotAvailable = 403,

    /// Caller has no outstanding lock to reclaim.
    /// Contracts: escrow
    NothingToRefund = 404,

    /// Success was requested below target while the target is enforced.
    /// Contracts: escrow
    TargetNotReached = 405,

    // --- Distribution (500-599) ---
    /// Asset has no circulating supply to distribute against.
    /// Contracts: vault
    NoSupply = 500,

    /// Paying the claim would take the asset's payouts above its deposits.
    /// Contracts: vault
    ClaimExceedsDeposits = 501,

    // --- Exchange (600-699) ---
    /// No pool exists for the given asset id.
    /// Contracts: exchange
    PoolNotFound = 600,

    /// Swap output is below the caller's minimum.
    /// Contracts: exchange
    SlippageExceeded = 601,

    /// Swap output rounds down to zero.
    /// Contracts: exchange
    InsufficientOutput = 602,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    /// Contracts: all
    Overflow = 700,

    /// Integer underflow detected during a checked arithmetic operation.
    /// Contracts: all
    Underflow = 701,

    /// Division by zero in a checked arithmetic operation.
    /// Contracts: all
    DivisionByZero = 702,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
/// @dev    Use this for structured logging, monitoring, and off-chain display.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;

    /// @return true for precondition violations, false for arithmetic faults.
    fn is_precondition(&self) -> bool {
        self.category() != ErrorCategory::Arithmetic
    }
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }

            ContractError::Unauthorized
            | ContractError::NotAllowed
            | ContractError::GateFailed => ErrorCategory::Authorization,

            ContractError::InvalidAmount
            | ContractError::AlreadyExists
            | ContractError::InvalidDeadline
            | ContractError::InvalidFee
            | ContractError::InsufficientAllowance => ErrorCategory::Validation,

            ContractError::AssetNotFound
            | ContractError::SupplyCapExceeded
            | ContractError::InsufficientBalance => ErrorCategory::Ledger,

            ContractError::CampaignNotFound
            | ContractError::NotFunding
            | ContractError::DeadlinePassed
            | ContractError::RefundNotAvailable
            | ContractError::NothingToRefund
            | ContractError::TargetNotReached => ErrorCategory::Escrow,

            ContractError::NoSupply | ContractError::ClaimExceedsDeposits => {
                ErrorCategory::Distribution
            }

            ContractError::PoolNotFound
            | ContractError::SlippageExceeded
            | ContractError::InsufficientOutput => ErrorCategory::Exchange,

            ContractError::Overflow | ContractError::Underflow | ContractError::DivisionByZero => {
                ErrorCategory::Arithmetic
            }
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract has already been initialized",
            ContractError::Unauthorized => "Caller is not authorized for this operation",
            ContractError::NotAllowed => "Receiving holder is not on the allow-list",
            ContractError::GateFailed => "Investor does not meet the contribution gate",
            ContractError::InvalidAmount => "Amount must be strictly positive (> 0)",
            ContractError::AlreadyExists => "A record already exists for this asset",
            ContractError::InvalidDeadline => "Deadline must be in the future",
            ContractError::InvalidFee => "Basis-point value is out of range",
            ContractError::InsufficientAllowance => "Token allowance is below the amount",
            ContractError::AssetNotFound => "No asset found for the given id",
            ContractError::SupplyCapExceeded => "Mint would exceed the asset's max shares",
            ContractError::InsufficientBalance => "Insufficient share balance",
            ContractError::CampaignNotFound => "No campaign found for the given asset",
            ContractError::NotFunding => "Campaign is already finalized",
            ContractError::DeadlinePassed => "Campaign deadline has passed",
            ContractError::RefundNotAvailable => "Refunds are only available after cancellation",
            ContractError::NothingToRefund => "No locked amount to refund",
            ContractError::TargetNotReached => "Funding target has not been reached",
            ContractError::NoSupply => "Asset has no supply to distribute against",
            ContractError::ClaimExceedsDeposits => "Claim exceeds the yield deposited for the asset",
            ContractError::PoolNotFound => "No pool found for the given asset",
            ContractError::SlippageExceeded => "Swap output is below the requested minimum",
            ContractError::InsufficientOutput => "Swap output rounds down to zero",
            ContractError::Overflow => "Integer overflow in checked arithmetic",
            ContractError::Underflow => "Integer underflow in checked arithmetic",
            ContractError::DivisionByZero => "Division by zero in checked arithmetic",
        }
    }
}

#[cfg(test)]
mod test_errors;
