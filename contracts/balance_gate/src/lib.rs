//! # Balance Gate Policy
//!
//! Passes a holder when their balance of a separate gating token is at least
//! `min_balance`. The crowdfunding escrow uses it as its contribution gate.
//! A `min_balance` of zero lets everyone through.

#![no_std]

use brickstack_common::validation::require_positive;
use brickstack_common::ContractError;
use soroban_sdk::{contract, contractimpl, contracttype, token::TokenClient, Address, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GateConfig {
    pub admin: Address,
    /// Token whose balance is inspected.
    pub token: Address,
    /// Inclusive lower bound on the holder's token balance.
    pub min_balance: i128,
}

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Config,
}

fn read_config(e: &Env) -> Result<GateConfig, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

#[contract]
pub struct BalanceGate;

#[contractimpl]
impl BalanceGate {
    pub fn initialize(
        e: Env,
        admin: Address,
        token: Address,
        min_balance: i128,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Config) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();
        if min_balance != 0 {
            require_positive(min_balance)?;
        }
        let config = GateConfig {
            admin,
            token,
            min_balance,
        };
        e.storage().instance().set(&DataKey::Config, &config);
        Ok(())
    }

    pub fn set_min_balance(e: Env, admin: Address, min_balance: i128) -> Result<(), ContractError> {
        admin.require_auth();
        let mut config = read_config(&e)?;
        if config.admin != admin {
            return Err(ContractError::Unauthorized);
        }
        if min_balance < 0 {
            return Err(ContractError::InvalidAmount);
        }
        config.min_balance = min_balance;
        e.storage().instance().set(&DataKey::Config, &config);
        e.events()
            .publish((Symbol::new(&e, "min_balance_set"),), min_balance);
        Ok(())
    }

    /// An uninitialized gate rejects everyone.
    pub fn check(e: Env, holder: Address) -> bool {
        match read_config(&e) {
            Ok(config) if config.min_balance == 0 => true,
            Ok(config) => TokenClient::new(&e, &config.token).balance(&holder) >= config.min_balance,
            Err(_) => false,
        }
    }

    pub fn get_config(e: Env) -> Result<GateConfig, ContractError> {
        read_config(&e)
    }
}
