use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::{Dated, Monetary};
use super::expense::PaymentSource;

/// Category markers for revenues that are transfers into a balance pool
/// rather than ordinary income.
pub const TRANSFER_TO_COFRE: &str = "EM_COFRE";
pub const TRANSFER_TO_CONTA: &str = "EM_CONTA";

/// A single revenue ("receita") row as persisted by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Revenue {
    pub id: i64,
    #[serde(default, rename = "data")]
    pub date: Option<NaiveDate>,
    #[serde(default, rename = "data_recebimento", skip_serializing_if = "Option::is_none")]
    pub received_date: Option<NaiveDate>,
    #[serde(default, rename = "valor")]
    pub amount: Option<f64>,
    #[serde(rename = "empresa")]
    pub company: String,
    #[serde(default, rename = "categoria")]
    pub category: Option<String>,
    #[serde(default, rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "user_id")]
    pub owner_id: Uuid,
}

impl Revenue {
    pub fn new(
        company: impl Into<String>,
        date: NaiveDate,
        amount: f64,
        description: impl Into<String>,
        owner_id: Uuid,
    ) -> Self {
        Self {
            id: 0,
            date: Some(date),
            received_date: None,
            amount: Some(amount),
            company: company.into(),
            category: None,
            description: Some(description.into()),
            owner_id,
        }
    }

    /// Whether this record routes money into a balance pool instead of
    /// counting as ordinary income.
    pub fn is_balance_transfer(&self) -> bool {
        self.transfer_pool().is_some()
    }

    /// The pool this revenue transfers into, if it is a transfer at all.
    pub fn transfer_pool(&self) -> Option<PaymentSource> {
        match self.category.as_deref().map(str::trim) {
            Some(TRANSFER_TO_COFRE) => Some(PaymentSource::Cofre),
            Some(TRANSFER_TO_CONTA) => Some(PaymentSource::Conta),
            _ => None,
        }
    }
}

impl Monetary for Revenue {
    fn base_amount(&self) -> Option<f64> {
        self.amount
    }
}

impl Dated for Revenue {
    fn filter_date(&self) -> Option<NaiveDate> {
        self.date
    }
}
