//! End-to-end flow tests across the fixture-seeded stores.
//!
//! Seeds each store from a JSON fixture, then drives the invoice, schedule,
//! and budget flows the way the dashboard does: mutate through the store,
//! read back through the calculators.

use abacus_core::budget::VarianceStatus;
use abacus_core::receivables::{InvoiceStatus, LineItem};
use abacus_core::recurring::{BatchPolicy, Frequency};
use abacus_shared::types::Currency;
use abacus_store::{BudgetStore, InvoiceStore, NewInvoice, NewSchedule, ScheduleStore};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;

const INVOICE_FIXTURE: &str = r#"[
    {
        "id": "01890000-0000-7000-8000-000000000001",
        "number": "INV-2024-001",
        "customer": "Acme Corp",
        "issue_date": "2024-01-01",
        "due_date": "2024-01-31",
        "line_items": [
            {"description": "Consulting", "quantity": "10", "rate": "150", "amount": "1500"}
        ],
        "tax_rate": "0.1",
        "subtotal": "1500",
        "tax_amount": "150.00",
        "total": "1650.00",
        "currency": "USD",
        "status": "sent"
    },
    {
        "id": "01890000-0000-7000-8000-000000000002",
        "number": "INV-2024-002",
        "customer": "Globex",
        "issue_date": "2024-02-01",
        "due_date": "2024-03-15",
        "line_items": [],
        "tax_rate": "0",
        "subtotal": "800",
        "tax_amount": "0",
        "total": "800",
        "status": "sent"
    }
]"#;

const SCHEDULE_FIXTURE: &str = r#"[
    {
        "id": "01890000-0000-7000-8000-000000000010",
        "name": "Monthly retainer - Acme",
        "amount": "2500",
        "currency": "USD",
        "start_date": "2024-01-15",
        "frequency": "monthly",
        "next_date": "2024-03-15",
        "last_generated": null,
        "total_generated": 2,
        "is_active": true
    },
    {
        "id": "01890000-0000-7000-8000-000000000011",
        "name": "Quarterly audit - Globex",
        "amount": "6000",
        "start_date": "2024-01-01",
        "frequency": "quarterly",
        "next_date": "2024-07-01",
        "last_generated": null,
        "total_generated": 1,
        "is_active": false
    }
]"#;

const BUDGET_FIXTURE: &str = r#"[
    {
        "id": "01890000-0000-7000-8000-000000000020",
        "category": "Marketing",
        "period": "2024-Q1",
        "budget_amount": "10000",
        "actual_amount": "8000"
    },
    {
        "id": "01890000-0000-7000-8000-000000000021",
        "category": "Sales",
        "period": "2024-Q1",
        "budget_amount": "20000",
        "actual_amount": "21000"
    }
]"#;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap()
}

#[test]
fn test_invoice_lifecycle_flows_into_aging() {
    let mut store = InvoiceStore::from_json(INVOICE_FIXTURE).unwrap();
    let today = date(2024, 4, 1);

    // Fixture totals: 1650.00 overdue 61 days, 800 overdue 17 days.
    let report = store.aging_report(today);
    assert_eq!(report.overdue_61_90.amount, dec!(1650.00));
    assert_eq!(report.overdue_1_30.amount, dec!(800));
    assert_eq!(report.total_outstanding(), dec!(2450.00));

    // A new draft is not yet due, so it lands in the current bucket.
    let id = store
        .create(NewInvoice {
            customer: "Initech".to_string(),
            issue_date: date(2024, 3, 20),
            due_date: date(2024, 4, 20),
            line_items: vec![LineItem {
                description: "Support".to_string(),
                quantity: dec!(4),
                rate: dec!(125),
                amount: dec!(500),
            }],
            tax_rate: dec!(0),
            currency: Currency::Usd,
        })
        .id;
    let report = store.aging_report(today);
    assert_eq!(report.current.amount, dec!(500.00));
    assert!(!report.current.invoices[0].is_overdue);

    assert_eq!(store.send(id).unwrap().status, InvoiceStatus::Sent);

    // Payment removes the invoice from aging without deleting it.
    store.mark_paid(id).unwrap();
    let report = store.aging_report(today);
    assert_eq!(report.current.amount, dec!(0));
    assert_eq!(report.total_outstanding(), dec!(2450.00));
    assert_eq!(store.snapshot().len(), 3);
}

#[test]
fn test_schedule_batch_run_from_fixture() {
    let mut store = ScheduleStore::from_json(SCHEDULE_FIXTURE).unwrap();

    let outcome = store
        .process_due(date(2024, 4, 1), now(), &BatchPolicy::default())
        .unwrap();

    // Only the active schedule is due; the paused one never joins a batch.
    assert_eq!(outcome.total_due, 1);
    assert_eq!(outcome.processed, 1);

    let snapshot = store.snapshot();
    let retainer = snapshot
        .iter()
        .find(|s| s.name == "Monthly retainer - Acme")
        .unwrap();
    assert_eq!(retainer.next_date, date(2024, 4, 15));
    assert_eq!(retainer.total_generated, 3);
    assert_eq!(retainer.last_generated, Some(now()));

    let audit = snapshot
        .iter()
        .find(|s| s.name == "Quarterly audit - Globex")
        .unwrap();
    assert_eq!(audit.total_generated, 1);

    // Fixture omits the audit currency key, so it defaults to USD.
    assert_eq!(audit.currency, Currency::Usd);
}

#[test]
fn test_new_schedule_joins_statistics() {
    let mut store = ScheduleStore::from_json(SCHEDULE_FIXTURE).unwrap();
    store
        .create(NewSchedule {
            name: "Weekly cleanup - Initech".to_string(),
            amount: dec!(300),
            currency: Currency::Usd,
            start_date: date(2024, 4, 1),
            frequency: Frequency::Weekly,
        })
        .unwrap();

    let stats = store.statistics();
    assert_eq!(stats.total_schedules, 3);
    assert_eq!(stats.active_schedules, 2);
    assert_eq!(stats.paused_schedules, 1);
    // Active amounts only: 2500 + 300.
    assert_eq!(stats.estimated_monthly_revenue, dec!(2800));
}

#[test]
fn test_budget_comparison_from_fixture() {
    let store = BudgetStore::from_json(BUDGET_FIXTURE).unwrap();

    let comparison = store.comparison("2024-Q1");
    assert_eq!(comparison.total_budget, dec!(30000));
    assert_eq!(comparison.total_actual, dec!(29000));
    assert_eq!(comparison.total_variance, dec!(-1000));
    assert_eq!(comparison.total_variance_percent, dec!(-3.33));

    let marketing = comparison
        .categories
        .iter()
        .find(|c| c.category == "Marketing")
        .unwrap();
    assert_eq!(marketing.variance_percent, dec!(-20.00));
    assert_eq!(marketing.status, VarianceStatus::Unfavorable);

    let sales = comparison
        .categories
        .iter()
        .find(|c| c.category == "Sales")
        .unwrap();
    assert_eq!(sales.status, VarianceStatus::Favorable);
}
