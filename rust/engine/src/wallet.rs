//! External ledger the table settles against at hand boundaries.
//!
//! Chip stacks inside the engine are authoritative; a wallet only mirrors
//! buy-ins and cash-outs. Failures are reported, never fatal.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::player::PlayerId;

/// Opaque reference to a completed wallet transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxRef(pub String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("wallet unavailable: {0}")]
    Unavailable(String),
    #[error("no wallet account for {0}")]
    UnknownAccount(PlayerId),
    #[error("insufficient wallet funds: requested {requested}, balance {balance}")]
    InsufficientFunds { requested: u64, balance: u64 },
}

pub trait WalletService {
    fn deposit(&mut self, player: PlayerId, amount: u64) -> Result<TxRef, WalletError>;
    fn withdraw(&mut self, player: PlayerId, amount: u64) -> Result<TxRef, WalletError>;
    fn balance(&self, player: PlayerId) -> u64;
}

/// Wallet for tables that settle nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoWallet;

impl WalletService for NoWallet {
    fn deposit(&mut self, _player: PlayerId, _amount: u64) -> Result<TxRef, WalletError> {
        Ok(TxRef("noop".to_string()))
    }

    fn withdraw(&mut self, _player: PlayerId, _amount: u64) -> Result<TxRef, WalletError> {
        Ok(TxRef("noop".to_string()))
    }

    fn balance(&self, _player: PlayerId) -> u64 {
        0
    }
}

/// In-memory ledger. Accounts are opened on first deposit. Setting
/// `offline` makes every call fail with [`WalletError::Unavailable`].
#[derive(Debug, Default, Clone)]
pub struct LedgerWallet {
    balances: HashMap<PlayerId, u64>,
    seq: u64,
    offline: bool,
}

impl LedgerWallet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    fn next_ref(&mut self, kind: &str, player: PlayerId) -> TxRef {
        self.seq += 1;
        TxRef(format!("{}-{}-{:06}", kind, player.0, self.seq))
    }

    fn ensure_online(&self) -> Result<(), WalletError> {
        if self.offline {
            Err(WalletError::Unavailable("ledger offline".to_string()))
        } else {
            Ok(())
        }
    }
}

impl WalletService for LedgerWallet {
    fn deposit(&mut self, player: PlayerId, amount: u64) -> Result<TxRef, WalletError> {
        self.ensure_online()?;
        *self.balances.entry(player).or_insert(0) += amount;
        Ok(self.next_ref("dep", player))
    }

    fn withdraw(&mut self, player: PlayerId, amount: u64) -> Result<TxRef, WalletError> {
        self.ensure_online()?;
        let balance = self
            .balances
            .get_mut(&player)
            .ok_or(WalletError::UnknownAccount(player))?;
        if amount > *balance {
            return Err(WalletError::InsufficientFunds {
                requested: amount,
                balance: *balance,
            });
        }
        *balance -= amount;
        Ok(self.next_ref("wd", player))
    }

    fn balance(&self, player: PlayerId) -> u64 {
        self.balances.get(&player).copied().unwrap_or(0)
    }
}
