//! # Allow-List Policy
//!
//! Binary holder eligibility behind the shared `check(holder) -> bool`
//! interface. The share ledger consults it before crediting a transfer
//! recipient; swapping in a different policy contract (jurisdiction rules,
//! KYC attestations) needs no change to the ledger.

#![no_std]

use brickstack_common::ttl::{BUMP_TARGET, BUMP_THRESHOLD};
use brickstack_common::ContractError;
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Symbol, Vec};

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Admin,
    /// Holder -> allowed flag. Absent means not allowed. `persistent()`.
    Allowed(Address),
}

fn require_admin(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    let stored: Address = e
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NotInitialized)?;
    if stored != *caller {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

fn write_allowed(e: &Env, holder: &Address, allowed: bool) {
    let key = DataKey::Allowed(holder.clone());
    let storage = e.storage().persistent();
    if allowed {
        storage.set(&key, &true);
        storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    } else {
        storage.remove(&key);
    }
    e.events()
        .publish((Symbol::new(e, "allowed_set"), holder.clone()), allowed);
}

#[contract]
pub struct AllowList;

#[contractimpl]
impl AllowList {
    pub fn initialize(e: Env, admin: Address) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();
        e.storage().instance().set(&DataKey::Admin, &admin);
        Ok(())
    }

    pub fn set_allowed(
        e: Env,
        admin: Address,
        holder: Address,
        allowed: bool,
    ) -> Result<(), ContractError> {
        require_admin(&e, &admin)?;
        write_allowed(&e, &holder, allowed);
        Ok(())
    }

    /// Apply the same flag to every holder in `holders`.
    pub fn set_allowed_batch(
        e: Env,
        admin: Address,
        holders: Vec<Address>,
        allowed: bool,
    ) -> Result<(), ContractError> {
        require_admin(&e, &admin)?;
        for holder in holders.iter() {
            write_allowed(&e, &holder, allowed);
        }
        Ok(())
    }

    pub fn check(e: Env, holder: Address) -> bool {
        let key = DataKey::Allowed(holder);
        let storage = e.storage().persistent();
        match storage.get::<_, bool>(&key) {
            Some(allowed) => {
                storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
                allowed
            }
            None => false,
        }
    }

    pub fn get_admin(e: Env) -> Result<Address, ContractError> {
        e.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(ContractError::NotInitialized)
    }
}

#[cfg(test)]
mod test;
