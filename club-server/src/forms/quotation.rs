//! Quotation → membership agreement copy
//!
//! Builds an unsaved agreement draft from an in-memory quotation: header
//! fields are copied directly, line items are mapped one-to-one. Nothing is
//! persisted until the client explicitly saves the draft.

use shared::models::{
    MembershipAgreementDraft, MembershipAgreementItemDraft, Quotation, QuotationItem,
};

pub fn agreement_draft_from(
    quotation: &Quotation,
    items: &[QuotationItem],
) -> MembershipAgreementDraft {
    MembershipAgreementDraft {
        quotation_id: Some(quotation.id),
        customer_id: quotation.customer_id,
        customer_name: quotation.customer_name.clone(),
        agreement_date: quotation.transaction_date.clone(),
        valid_till: quotation.valid_till.clone(),
        grand_total: quotation.grand_total,
        items: items
            .iter()
            .map(|item| MembershipAgreementItemDraft {
                item_code: item.item_code.clone(),
                item_name: item.item_name.clone(),
                description: item.description.clone(),
                qty: item.qty,
                rate: item.rate,
                amount: item.amount,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quotation() -> Quotation {
        Quotation {
            id: 7,
            name: "QTN-7".to_string(),
            customer_id: Some(3),
            customer_name: "Rahul Mehta".to_string(),
            transaction_date: Some("2026-08-01".to_string()),
            valid_till: Some("2026-09-01".to_string()),
            grand_total: 1500.0,
            status: "Draft".to_string(),
            created_at: 0,
            updated_at: 0,
        }
    }

    fn items() -> Vec<QuotationItem> {
        vec![
            QuotationItem {
                id: 1,
                quotation_id: 7,
                item_code: "GOLD-MEMBERSHIP".to_string(),
                item_name: "Gold Membership".to_string(),
                description: Some("Annual gold tier".to_string()),
                qty: 1.0,
                rate: 1200.0,
                amount: 1200.0,
                idx: 1,
            },
            QuotationItem {
                id: 2,
                quotation_id: 7,
                item_code: "SPA-PACK".to_string(),
                item_name: "Spa Package".to_string(),
                description: None,
                qty: 3.0,
                rate: 100.0,
                amount: 300.0,
                idx: 2,
            },
        ]
    }

    #[test]
    fn copies_header_fields() {
        let draft = agreement_draft_from(&quotation(), &items());
        assert_eq!(draft.quotation_id, Some(7));
        assert_eq!(draft.customer_name, "Rahul Mehta");
        assert_eq!(draft.agreement_date.as_deref(), Some("2026-08-01"));
        assert_eq!(draft.valid_till.as_deref(), Some("2026-09-01"));
        assert_eq!(draft.grand_total, 1500.0);
    }

    #[test]
    fn copies_all_line_items_in_order() {
        let draft = agreement_draft_from(&quotation(), &items());
        assert_eq!(draft.items.len(), 2);
        assert_eq!(draft.items[0].item_code, "GOLD-MEMBERSHIP");
        assert_eq!(draft.items[0].amount, 1200.0);
        assert_eq!(draft.items[1].item_code, "SPA-PACK");
        assert_eq!(draft.items[1].qty, 3.0);
    }

    #[test]
    fn empty_quotation_yields_empty_draft_items() {
        let draft = agreement_draft_from(&quotation(), &[]);
        assert!(draft.items.is_empty());
    }
}
