//! Time-Locked Vault Contract

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, token, Address, Env, Symbol, log,
};

// ============================================================
// Errors
// ============================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum VaultError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidSchedule = 3,
    InvalidAmount = 4,
    TooEarly = 5,
    NotOwner = 6,
    NothingToWithdraw = 7,
}

impl VaultError {
    /// Rejection message for client display.
    pub fn message(&self) -> &'static str {
        match self {
            VaultError::NotInitialized => "Vault not initialized",
            VaultError::AlreadyInitialized => "Vault already initialized",
            VaultError::InvalidSchedule => "Unlock time must be in the future",
            VaultError::InvalidAmount => "Amount must be positive",
            VaultError::TooEarly => "You can't withdraw yet",
            VaultError::NotOwner => "You are not the owner",
            VaultError::NothingToWithdraw => "Nothing to withdraw",
        }
    }
}

// ============================================================
// Storage Keys
// ============================================================

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// The vault record (one per deployment)
    Vault,
}

// ============================================================
// Data Structures
// ============================================================

/// Lifecycle of the vault
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum VaultStatus {
    Locked,
    Released,
}

/// The single vault held by this contract
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vault {
    /// Account entitled to withdraw once the deadline passes
    pub owner: Address,
    /// Token the vault holds
    pub token: Address,
    /// Ledger timestamp (seconds) before which withdrawal is refused
    pub unlock_time: u64,
    /// Locked amount still held; zeroed by the withdrawal
    pub balance: i128,
}

// ============================================================
// Events
// ============================================================
mod events {
    pub const LOCKED: &str = "locked";
    pub const WITHDRAWN: &str = "withdrawn";
}

// ============================================================
// Contract
// ============================================================

#[contract]
pub struct TimeLockedVaultContract;

#[contractimpl]
impl TimeLockedVaultContract {
    // ----------------------------------------------------------
    // Lifecycle
    // ----------------------------------------------------------

    /// Create the vault: record the owner and deadline, and move `amount`
    /// of `token` from the owner into the contract.
    /// `unlock_time` must be strictly in the future.
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        amount: i128,
        unlock_time: u64,
    ) -> Result<(), VaultError> {
        if env.storage().instance().has(&DataKey::Vault) {
            return Err(VaultError::AlreadyInitialized);
        }
        owner.require_auth();

        if unlock_time <= env.ledger().timestamp() {
            return Err(VaultError::InvalidSchedule);
        }
        if amount <= 0 {
            return Err(VaultError::InvalidAmount);
        }

        // Escrow the locked amount in the contract until release.
        let token_client = token::Client::new(&env, &token);
        token_client.transfer(&owner, &env.current_contract_address(), &amount);

        let vault = Vault {
            owner: owner.clone(),
            token,
            unlock_time,
            balance: amount,
        };
        env.storage().instance().set(&DataKey::Vault, &vault);

        env.events().publish(
            (Symbol::new(&env, events::LOCKED),),
            (owner, amount, unlock_time),
        );

        log!(&env, "Vault locked: amount={} until={}", amount, unlock_time);
        Ok(())
    }

    /// Withdraw the entire vault balance to the owner.
    /// Refused before the unlock time and for any caller other than the
    /// owner. Fails once the balance has already been released.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, VaultError> {
        caller.require_auth();

        let mut vault = Self::load_vault(&env)?;

        // Guard order: deadline, then ownership, then remaining balance.
        if env.ledger().timestamp() < vault.unlock_time {
            return Err(VaultError::TooEarly);
        }
        if caller != vault.owner {
            return Err(VaultError::NotOwner);
        }
        if vault.balance == 0 {
            return Err(VaultError::NothingToWithdraw);
        }

        let amount = vault.balance;
        vault.balance = 0;
        env.storage().instance().set(&DataKey::Vault, &vault);

        let token_client = token::Client::new(&env, &vault.token);
        token_client.transfer(&env.current_contract_address(), &vault.owner, &amount);

        env.events().publish(
            (Symbol::new(&env, events::WITHDRAWN),),
            (amount, vault.owner.clone()),
        );

        log!(&env, "Vault released: amount={}", amount);
        Ok(amount)
    }

    // ----------------------------------------------------------
    // Queries
    // ----------------------------------------------------------

    /// Get the account entitled to withdraw.
    pub fn owner(env: Env) -> Result<Address, VaultError> {
        Ok(Self::load_vault(&env)?.owner)
    }

    /// Get the deadline before which withdrawal is refused.
    pub fn unlock_time(env: Env) -> Result<u64, VaultError> {
        Ok(Self::load_vault(&env)?.unlock_time)
    }

    /// Get the locked amount still held by the vault.
    pub fn balance(env: Env) -> Result<i128, VaultError> {
        Ok(Self::load_vault(&env)?.balance)
    }

    /// Locked while funds are held; Released after the withdrawal.
    pub fn status(env: Env) -> Result<VaultStatus, VaultError> {
        let vault = Self::load_vault(&env)?;
        if vault.balance > 0 {
            Ok(VaultStatus::Locked)
        } else {
            Ok(VaultStatus::Released)
        }
    }

    /// Get the whole vault record.
    pub fn get_vault(env: Env) -> Result<Vault, VaultError> {
        Self::load_vault(&env)
    }

    // ----------------------------------------------------------
    // Internal Helpers
    // ----------------------------------------------------------

    fn load_vault(env: &Env) -> Result<Vault, VaultError> {
        env.storage()
            .instance()
            .get(&DataKey::Vault)
            .ok_or(VaultError::NotInitialized)
    }
}

// ============================================================
// Tests
// ============================================================
