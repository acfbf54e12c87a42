use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::AppState;

/// One day of aggregated takings for the manager dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaleData {
    pub date: NaiveDate,
    pub amount: u64,
    pub orders: u32,
}

impl SaleData {
    pub(crate) fn seed(date: NaiveDate, amount: u64, orders: u32) -> Self {
        Self {
            date,
            amount,
            orders,
        }
    }
}

/// AI report round trip: `pending` goes up before the analyst is called
/// and comes down when the text lands, success or not.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ReportState {
    pub pending: bool,
    pub text: Option<String>,
}

impl AppState {
    pub fn begin_report(&mut self) {
        self.report.pending = true;
    }

    pub fn finish_report(&mut self, text: String) {
        self.report.text = Some(text);
        self.report.pending = false;
    }
}
