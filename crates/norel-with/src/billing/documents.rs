use serde::Serialize;

/// Consumption tax rate applied to invoice totals, in percent.
pub const CONSUMPTION_TAX_PERCENT: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Receipt,
    Invoice,
}

impl DocumentKind {
    const fn number_prefix(self) -> &'static str {
        match self {
            Self::Receipt => "RCP",
            Self::Invoice => "INV",
        }
    }

    const fn file_prefix(self) -> &'static str {
        match self {
            Self::Receipt => "領収書",
            Self::Invoice => "請求書",
        }
    }
}

/// A month listed in the documents section of the menu.
#[derive(Debug, Clone, Serialize)]
pub struct BillingItem {
    pub id: &'static str,
    pub period: &'static str,
    pub amount: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyInfo {
    pub name: &'static str,
    pub zip_code: &'static str,
    pub address: &'static str,
    pub tel: &'static str,
}

pub const ISSUER: CompanyInfo = CompanyInfo {
    name: "株式会社IDOM CaaS Technology",
    zip_code: "150-0041",
    address: "東京都渋谷区神南一丁目19番4号",
    tel: "03-XXXX-XXXX",
};

pub const INVOICE_DUE_NOTE: &str = "毎月5日";

static RECEIPTS: [BillingItem; 3] = [
    BillingItem {
        id: "1",
        period: "2024年12月",
        amount: 39_800,
    },
    BillingItem {
        id: "2",
        period: "2024年11月",
        amount: 39_800,
    },
    BillingItem {
        id: "3",
        period: "2024年10月",
        amount: 39_800,
    },
];

static INVOICES: [BillingItem; 3] = [
    BillingItem {
        id: "1",
        period: "2025年1月",
        amount: 39_800,
    },
    BillingItem {
        id: "2",
        period: "2024年12月",
        amount: 39_800,
    },
    BillingItem {
        id: "3",
        period: "2024年11月",
        amount: 39_800,
    },
];

pub fn receipts() -> &'static [BillingItem] {
    &RECEIPTS
}

pub fn invoices() -> &'static [BillingItem] {
    &INVOICES
}

/// `RCP-2025-00001` style identifier; `year` is the issuing year.
pub fn document_number(kind: DocumentKind, year: i32, index: u32) -> String {
    format!("{}-{year}-{index:05}", kind.number_prefix())
}

/// Download file stem, e.g. `領収書_202412` for the period `2024年12月`.
pub fn document_stem(kind: DocumentKind, period: &str) -> String {
    let compact: String = period.chars().filter(|c| !matches!(c, '年' | '月')).collect();
    format!("{}_{compact}", kind.file_prefix())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvoiceBreakdown {
    pub subtotal: u64,
    pub tax: u64,
    pub total: u64,
}

impl InvoiceBreakdown {
    /// Splits a tax-inclusive amount. Tax is floored; the subtotal absorbs
    /// the remainder so the parts always sum to the total.
    pub fn from_total(total: u64) -> Self {
        let tax =
            total / 100 * CONSUMPTION_TAX_PERCENT + total % 100 * CONSUMPTION_TAX_PERCENT / 100;
        Self {
            subtotal: total - tax,
            tax,
            total,
        }
    }
}
