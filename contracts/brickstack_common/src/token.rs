//! Token movement helpers for contracts that custody a Soroban token.
//!
//! Value enters a contract through `transfer_from` against an allowance the
//! owner granted beforehand, and leaves through a plain `transfer` signed by
//! the contract itself. Callers write their own state before calling either.

use brickstack_errors::ContractError;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};

/// Fails with `InsufficientAllowance` unless `owner` approved this contract
/// for at least `amount` of `token`.
pub fn require_allowance(
    e: &Env,
    token: &Address,
    owner: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let allowance = TokenClient::new(e, token).allowance(owner, &e.current_contract_address());
    if allowance < amount {
        return Err(ContractError::InsufficientAllowance);
    }
    Ok(())
}

/// Pull `amount` of `token` from `owner` into this contract.
pub fn pull(e: &Env, token: &Address, owner: &Address, amount: i128) -> Result<(), ContractError> {
    if amount < 0 {
        return Err(ContractError::InvalidAmount);
    }
    if amount == 0 {
        return Ok(());
    }
    require_allowance(e, token, owner, amount)?;
    let contract = e.current_contract_address();
    TokenClient::new(e, token).transfer_from(&contract, owner, &contract, &amount);
    Ok(())
}

/// Pay `amount` of `token` from this contract to `recipient`.
pub fn pay(e: &Env, token: &Address, recipient: &Address, amount: i128) -> Result<(), ContractError> {
    if amount < 0 {
        return Err(ContractError::InvalidAmount);
    }
    if amount == 0 {
        return Ok(());
    }
    TokenClient::new(e, token).transfer(&e.current_contract_address(), recipient, &amount);
    Ok(())
}
