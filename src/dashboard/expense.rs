use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::{Dated, Monetary};

/// Which balance pool funded an expense payment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentSource {
    Conta,
    Cofre,
}

/// A single expense ("despesa") row as persisted by the backend.
///
/// Field names on the wire follow the backend's Portuguese columns. Most
/// columns are nullable in historical data, so nearly everything is
/// optional here and downstream logic degrades instead of erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    #[serde(default, rename = "data")]
    pub date: Option<NaiveDate>,
    #[serde(default, rename = "vencimento")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, rename = "valor")]
    pub amount: Option<f64>,
    #[serde(default, rename = "juros", skip_serializing_if = "Option::is_none")]
    pub interest_amount: Option<f64>,
    #[serde(default, rename = "valor_total")]
    pub total_amount: Option<f64>,
    #[serde(rename = "empresa")]
    pub company: String,
    #[serde(default, rename = "categoria")]
    pub category: Option<String>,
    #[serde(default, rename = "subcategoria", skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "fonte_pagamento")]
    pub payment_source: Option<PaymentSource>,
    #[serde(default, rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "user_id")]
    pub owner_id: Uuid,
}

impl Expense {
    pub fn new(
        company: impl Into<String>,
        date: NaiveDate,
        amount: f64,
        owner_id: Uuid,
    ) -> Self {
        Self {
            id: 0,
            date: Some(date),
            due_date: None,
            amount: Some(amount),
            interest_amount: None,
            total_amount: None,
            company: company.into(),
            category: None,
            subcategory: None,
            status: None,
            payment_source: None,
            description: None,
            owner_id,
        }
    }

    /// Whether the record carries the explicit paid marker.
    pub fn is_paid(&self) -> bool {
        self.status
            .as_deref()
            .map(|status| status.trim() == "PAGO")
            .unwrap_or(false)
    }

    pub fn mark_paid(&mut self, source: PaymentSource) {
        self.status = Some("PAGO".into());
        self.payment_source = Some(source);
    }
}

impl Monetary for Expense {
    fn base_amount(&self) -> Option<f64> {
        self.amount
    }

    fn total_amount(&self) -> Option<f64> {
        self.total_amount
    }
}

impl Dated for Expense {
    fn filter_date(&self) -> Option<NaiveDate> {
        self.due_date.or(self.date)
    }
}
