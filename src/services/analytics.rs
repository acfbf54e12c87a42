use async_trait::async_trait;

use crate::store::sales::SaleData;

/// Shown whenever the analyst cannot produce a report.
pub const FALLBACK_REPORT: &str = "Xatolik yuz berdi. Iltimos qaytadan urinib ko'ring.";

/// Opaque sales-summary collaborator: records in, localized text out.
/// Implementations never fail from the caller's point of view; they hand
/// back [`FALLBACK_REPORT`] instead.
#[async_trait]
pub trait SalesAnalyst: Send + Sync {
    async fn weekly_report(&self, sales: &[SaleData]) -> String;
}

/// Offline analyst: builds the weekly summary straight from the numbers,
/// covering the same three sections the dashboard asks for (peak days,
/// slow days, advice).
pub struct CannedAnalyst;

#[async_trait]
impl SalesAnalyst for CannedAnalyst {
    async fn weekly_report(&self, sales: &[SaleData]) -> String {
        let Some(peak) = sales.iter().max_by_key(|s| s.orders) else {
            return FALLBACK_REPORT.to_string();
        };
        let Some(slow) = sales.iter().min_by_key(|s| s.orders) else {
            return FALLBACK_REPORT.to_string();
        };
        let amount: u64 = sales.iter().map(|s| s.amount).sum();
        let orders: u32 = sales.iter().map(|s| s.orders).sum();

        format!(
            "Haftalik hisobot: {} kunda jami {} ta buyurtma, {} so'm tushum.\n\
             1. Eng gavjum kun {} bo'ldi ({} ta buyurtma, {} so'm).\n\
             2. Eng sokin kun {} ({} ta buyurtma) — odatda hafta o'rtasida \
             talab pasayadi.\n\
             3. Maslahat: gavjum kunlarga qo'shimcha kuryer ajrating va sokin \
             kunlar uchun chegirma e'lon qiling.",
            sales.len(),
            orders,
            amount,
            peak.date,
            peak.orders,
            peak.amount,
            slow.date,
            slow.orders,
        )
    }
}
