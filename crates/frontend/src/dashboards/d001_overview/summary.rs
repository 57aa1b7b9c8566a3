use contracts::domain::a001_bank::aggregate::Bank;
use contracts::domain::a004_fraud_alert::aggregate::FraudAlert;
use contracts::domain::a005_transaction_history::aggregate::TransactionHistory;
use contracts::enums::{AlertStatus, RecordStatus, TransactionStatus};
use std::collections::BTreeMap;

/// Подпись для транзакций без банка
pub const UNKNOWN_BANK: &str = "Sin banco";

/// Показатели обзорной панели, считаются из уже загруженных списков
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSummary {
    pub active_banks: usize,
    pub pending_alerts: usize,
    pub high_risk_alerts: usize,
    pub transaction_count: usize,
    pub approved_count: usize,
    pub rejected_count: usize,
    pub total_amount: f64,
    /// По убыванию суммы
    pub amount_by_bank: Vec<(String, f64)>,
}

impl DashboardSummary {
    /// Доля одобренных, % (0 при пустом списке)
    pub fn approval_rate(&self) -> f64 {
        if self.transaction_count == 0 {
            0.0
        } else {
            self.approved_count as f64 * 100.0 / self.transaction_count as f64
        }
    }
}

pub fn summarize(
    banks: &[Bank],
    alerts: &[FraudAlert],
    transactions: &[TransactionHistory],
) -> DashboardSummary {
    let pending: Vec<&FraudAlert> = alerts
        .iter()
        .filter(|a| a.status == AlertStatus::Pending)
        .collect();

    let mut by_bank: BTreeMap<String, f64> = BTreeMap::new();
    for row in transactions {
        let bank = row.bank_name().unwrap_or(UNKNOWN_BANK).to_string();
        *by_bank.entry(bank).or_insert(0.0) += row.amount();
    }
    let mut amount_by_bank: Vec<(String, f64)> = by_bank.into_iter().collect();
    amount_by_bank.sort_by(|a, b| b.1.total_cmp(&a.1));

    DashboardSummary {
        active_banks: banks
            .iter()
            .filter(|b| b.status == RecordStatus::Active)
            .count(),
        pending_alerts: pending.len(),
        high_risk_alerts: pending.iter().filter(|a| a.is_high_risk()).count(),
        transaction_count: transactions.len(),
        approved_count: transactions
            .iter()
            .filter(|t| t.status == TransactionStatus::Approved)
            .count(),
        rejected_count: transactions
            .iter()
            .filter(|t| t.status == TransactionStatus::Rejected)
            .count(),
        total_amount: transactions.iter().map(|t| t.amount()).sum(),
        amount_by_bank,
    }
}
