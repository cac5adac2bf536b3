// File: farmledger-core/src/repositories/json/credits.rs

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use farmledger_common::error::Error;
use farmledger_common::models::credit::CreditTransaction;
use farmledger_common::traits::repository_traits::CreditLedgerRepository;

use crate::storage::JsonStore;

const TRANSACTIONS: &str = "credit_transactions";
const BALANCES: &str = "credit_balances";

/// Ledger storage: the append-only transaction log plus the per-user cached
/// balance map. Balances are keyed by user id; the log is the source of
/// truth and the map is recomputable from it.
pub struct JsonCreditLedgerRepository {
    store: Arc<JsonStore>,
    transactions: RwLock<Vec<CreditTransaction>>,
    balances: RwLock<HashMap<Uuid, i64>>,
}

impl JsonCreditLedgerRepository {
    pub async fn load(store: Arc<JsonStore>) -> Result<Self, Error> {
        let transactions = store.load(TRANSACTIONS).await?.unwrap_or_default();
        let balances = store.load(BALANCES).await?.unwrap_or_default();
        Ok(Self {
            store,
            transactions: RwLock::new(transactions),
            balances: RwLock::new(balances),
        })
    }
}

#[async_trait]
impl CreditLedgerRepository for JsonCreditLedgerRepository {
    async fn append_transaction(&self, tx: &CreditTransaction) -> Result<(), Error> {
        let mut transactions = self.transactions.write().await;
        transactions.push(tx.clone());
        self.store.save(TRANSACTIONS, &*transactions).await
    }

    async fn transactions_for_user(&self, user_id: Uuid) -> Result<Vec<CreditTransaction>, Error> {
        let transactions = self.transactions.read().await;
        let mut out: Vec<CreditTransaction> = transactions
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        // Most recent first: the only ordering guarantee in the model.
        out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(out)
    }

    async fn balance(&self, user_id: Uuid) -> Result<i64, Error> {
        let balances = self.balances.read().await;
        Ok(balances.get(&user_id).copied().unwrap_or(0))
    }

    async fn adjust_balance(&self, user_id: Uuid, delta: i64) -> Result<i64, Error> {
        let mut balances = self.balances.write().await;
        let entry = balances.entry(user_id).or_insert(0);
        *entry += delta;
        let new_balance = *entry;
        self.store.save(BALANCES, &*balances).await?;
        Ok(new_balance)
    }

    async fn set_balance(&self, user_id: Uuid, balance: i64) -> Result<(), Error> {
        let mut balances = self.balances.write().await;
        balances.insert(user_id, balance);
        self.store.save(BALANCES, &*balances).await
    }
}
