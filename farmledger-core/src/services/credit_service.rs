// File: farmledger-core/src/services/credit_service.rs

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use farmledger_common::error::Error;
use farmledger_common::models::credit::{CreditTransaction, CreditTransactionKind};
use farmledger_common::traits::repository_traits::CreditLedgerRepository;

use crate::catalog::RedemptionCatalog;

/// Earned credits expire one year after issue.
pub const CREDIT_EXPIRY_DAYS: i64 = 365;

/// The Farm Credits ledger: an auditable append-only transaction log plus a
/// per-user derived balance.
pub struct CreditService {
    ledger: Arc<dyn CreditLedgerRepository + Send + Sync>,
    redemptions: Arc<RedemptionCatalog>,
}

impl CreditService {
    pub fn new(
        ledger: Arc<dyn CreditLedgerRepository + Send + Sync>,
        redemptions: Arc<RedemptionCatalog>,
    ) -> Self {
        Self { ledger, redemptions }
    }

    /// Appends an `earned` transaction stamped with a one-year expiry and
    /// raises the balance. There is no upper bound and no duplicate-return
    /// guard: crediting the same return id twice double-credits.
    pub async fn earn_credits(
        &self,
        user_id: Uuid,
        amount: u32,
        description: &str,
        return_request_id: Option<Uuid>,
    ) -> Result<CreditTransaction, Error> {
        let now = Utc::now();
        let tx = CreditTransaction {
            transaction_id: Uuid::new_v4(),
            user_id,
            kind: CreditTransactionKind::Earned,
            amount,
            description: description.to_string(),
            timestamp: now,
            return_request_id,
            expires_at: Some(now + Duration::days(CREDIT_EXPIRY_DAYS)),
        };
        self.ledger.append_transaction(&tx).await?;
        let balance = self.ledger.adjust_balance(user_id, i64::from(amount)).await?;
        info!(
            "earned {} credits for user {} ({}), balance now {}",
            amount, user_id, description, balance
        );
        Ok(tx)
    }

    /// Manual grant outside the return flow. Bonus credits do not expire.
    pub async fn grant_bonus(
        &self,
        user_id: Uuid,
        amount: u32,
        description: &str,
    ) -> Result<CreditTransaction, Error> {
        let tx = CreditTransaction {
            transaction_id: Uuid::new_v4(),
            user_id,
            kind: CreditTransactionKind::Bonus,
            amount,
            description: description.to_string(),
            timestamp: Utc::now(),
            return_request_id: None,
            expires_at: None,
        };
        self.ledger.append_transaction(&tx).await?;
        let balance = self.ledger.adjust_balance(user_id, i64::from(amount)).await?;
        info!(
            "bonus of {} credits for user {}, balance now {}",
            amount, user_id, balance
        );
        Ok(tx)
    }

    /// The only guarded mutation in the ledger: returns `false` with no
    /// mutation when the balance cannot cover `amount`.
    pub async fn redeem_credits(
        &self,
        user_id: Uuid,
        amount: u32,
        description: &str,
    ) -> Result<bool, Error> {
        let balance = self.ledger.balance(user_id).await?;
        if i64::from(amount) > balance {
            warn!(
                "redemption of {} rejected for user {}: balance is {}",
                amount, user_id, balance
            );
            return Ok(false);
        }
        let tx = CreditTransaction {
            transaction_id: Uuid::new_v4(),
            user_id,
            kind: CreditTransactionKind::Redeemed,
            amount,
            description: description.to_string(),
            timestamp: Utc::now(),
            return_request_id: None,
            expires_at: None,
        };
        self.ledger.append_transaction(&tx).await?;
        let balance = self.ledger.adjust_balance(user_id, -i64::from(amount)).await?;
        info!(
            "redeemed {} credits for user {}, balance now {}",
            amount, user_id, balance
        );
        Ok(true)
    }

    /// Redeems against a catalog entry. Unknown ids are a not-found error;
    /// an unavailable entry or an insufficient balance both come back as
    /// `false`.
    pub async fn redeem_for(&self, user_id: Uuid, redemption_id: &str) -> Result<bool, Error> {
        let entry = self
            .redemptions
            .get(redemption_id)
            .ok_or_else(|| Error::NotFound(format!("redemption {redemption_id}")))?;
        if !entry.available {
            debug!("redemption {} is not available", redemption_id);
            return Ok(false);
        }
        self.redeem_credits(user_id, entry.credit_cost, &entry.title)
            .await
    }

    pub async fn balance(&self, user_id: Uuid) -> Result<i64, Error> {
        self.ledger.balance(user_id).await
    }

    /// Most-recent-first transaction history.
    pub async fn transactions(&self, user_id: Uuid) -> Result<Vec<CreditTransaction>, Error> {
        self.ledger.transactions_for_user(user_id).await
    }

    /// Rederives the cached balance from the transaction log and stores it.
    /// Earned and bonus amounts add; redeemed and expired amounts subtract.
    pub async fn recompute_balance(&self, user_id: Uuid) -> Result<i64, Error> {
        let transactions = self.ledger.transactions_for_user(user_id).await?;
        let balance = transactions
            .iter()
            .map(|t| match t.kind {
                CreditTransactionKind::Earned | CreditTransactionKind::Bonus => {
                    i64::from(t.amount)
                }
                CreditTransactionKind::Redeemed | CreditTransactionKind::Expired => {
                    -i64::from(t.amount)
                }
            })
            .sum();
        self.ledger.set_balance(user_id, balance).await?;
        Ok(balance)
    }
}
