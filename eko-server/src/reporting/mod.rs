//! Reporting Aggregator
//!
//! Pure read-side aggregation for the admin dashboard: tickets grouped
//! per site over one calendar month, garment quantities and spend
//! summed, budget remaining derived from the full window ledger.

use std::collections::HashMap;

use rust_decimal::Decimal;
use shared::models::SiteMonthlyReport;

use crate::budget::calculator::{to_decimal, to_f64};
use crate::budget::remaining_budget;
use crate::db::models::{Company, Site, Ticket};
use crate::utils::AppResult;
use crate::utils::time::{in_window, month_millis};

/// Build the monthly report rows, one per site.
///
/// `budget_remaining` deliberately spans the budget's own window, not
/// the report month - it answers "what is left on this site's
/// allocation", the same number the evaluator would use. Rows are
/// sorted by (company, site) so output order is stable.
pub fn monthly_report(
    month: u32,
    year: i32,
    companies: &[Company],
    sites: &[Site],
    tickets: &[Ticket],
) -> AppResult<Vec<SiteMonthlyReport>> {
    let (start, end) = month_millis(month, year)?;

    let company_names: HashMap<String, &str> = companies
        .iter()
        .filter_map(|c| c.id.as_ref().map(|id| (id.to_string(), c.name.as_str())))
        .collect();

    let mut rows: Vec<SiteMonthlyReport> = sites
        .iter()
        .map(|site| {
            let site_id = site.id.as_ref().map(|id| id.to_string());
            let site_tickets: Vec<&Ticket> = tickets
                .iter()
                .filter(|t| Some(t.site_id.to_string()) == site_id)
                .collect();

            let month_tickets: Vec<&Ticket> = site_tickets
                .iter()
                .copied()
                .filter(|t| in_window(t.created_at, start, end))
                .collect();

            let mut garments: HashMap<String, u32> = HashMap::new();
            for ticket in &month_tickets {
                for (key, qty) in &ticket.items {
                    if *qty > 0 {
                        *garments.entry(key.clone()).or_insert(0) += qty;
                    }
                }
            }

            let total_amount = to_f64(
                month_tickets
                    .iter()
                    .map(|t| to_decimal(t.total_cost))
                    .sum::<Decimal>(),
            );

            // Full window, not the report month: owned copies because
            // remaining_budget wants a ticket slice
            let window_ledger: Vec<Ticket> =
                site_tickets.iter().map(|t| (*t).clone()).collect();
            let budget_remaining = remaining_budget(site.budget.as_ref(), &window_ledger);

            let company = site.company.to_string();
            SiteMonthlyReport {
                company: company_names
                    .get(&company)
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "Unknown".to_string()),
                site: site.site_name.clone(),
                ticket_count: month_tickets.len(),
                garments,
                total_amount,
                budget: site.budget.clone(),
                budget_remaining,
            }
        })
        .collect();

    rows.sort_by(|a, b| (a.company.as_str(), a.site.as_str()).cmp(&(b.company.as_str(), b.site.as_str())));
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use shared::models::Budget;
    use surrealdb::RecordId;

    fn millis(y: i32, mo: u32, d: u32) -> i64 {
        Utc.with_ymd_and_hms(y, mo, d, 12, 0, 0)
            .unwrap()
            .timestamp_millis()
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn company(key: &str, name: &str) -> Company {
        Company {
            id: Some(RecordId::from_table_key("company", key)),
            name: name.to_string(),
        }
    }

    fn site(key: &str, company_key: &str, name: &str, budget: Option<Budget>) -> Site {
        Site {
            id: Some(RecordId::from_table_key("site", key)),
            company: RecordId::from_table_key("company", company_key),
            site_name: name.to_string(),
            site_address: String::new(),
            pin: format!("pin-{key}"),
            pricing: HashMap::from([("jacket".to_string(), 10.0)]),
            budget,
        }
    }

    fn ticket(site_key: &str, created_at: i64, jackets: u32, cost: f64) -> Ticket {
        Ticket {
            id: None,
            ref_code: "0001".to_string(),
            created_at,
            company_id: RecordId::from_table_key("company", "c1"),
            company_name: "Acme".to_string(),
            site_id: RecordId::from_table_key("site", site_key),
            site_name: "Depot".to_string(),
            guard_name: "Sam".to_string(),
            phone: "07".to_string(),
            email: "sam@example.com".to_string(),
            items: HashMap::from([("jacket".to_string(), jackets)]),
            notes: None,
            total_cost: cost,
        }
    }

    #[test]
    fn test_same_site_tickets_aggregate() {
        let companies = vec![company("c1", "Acme")];
        let sites = vec![site("s1", "c1", "Depot", None)];
        let tickets = vec![
            ticket("s1", millis(2024, 1, 10), 1, 10.0),
            ticket("s1", millis(2024, 1, 20), 2, 20.0),
        ];

        let rows = monthly_report(1, 2024, &companies, &sites, &tickets).unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.company, "Acme");
        assert_eq!(row.ticket_count, 2);
        assert_eq!(row.garments.get("jacket"), Some(&3));
        assert_eq!(row.total_amount, 30.0);
    }

    #[test]
    fn test_total_amount_is_free_of_float_artifacts() {
        let companies = vec![company("c1", "Acme")];
        let sites = vec![site("s1", "c1", "Depot", None)];
        // Naive f64 summation yields 0.30000000000000004 here
        let tickets = vec![
            ticket("s1", millis(2024, 1, 10), 1, 0.1),
            ticket("s1", millis(2024, 1, 20), 1, 0.2),
        ];

        let rows = monthly_report(1, 2024, &companies, &sites, &tickets).unwrap();
        assert_eq!(rows[0].total_amount, 0.3);
    }

    #[test]
    fn test_other_months_excluded() {
        let companies = vec![company("c1", "Acme")];
        let sites = vec![site("s1", "c1", "Depot", None)];
        let tickets = vec![
            ticket("s1", millis(2024, 1, 10), 1, 10.0),
            ticket("s1", millis(2024, 2, 10), 5, 50.0),
        ];

        let rows = monthly_report(1, 2024, &companies, &sites, &tickets).unwrap();
        assert_eq!(rows[0].ticket_count, 1);
        assert_eq!(rows[0].total_amount, 10.0);
    }

    #[test]
    fn test_budget_remaining_spans_whole_window() {
        let budget = Budget {
            is_active: true,
            amount: 100.0,
            start_date: date("2024-01-01"),
            end_date: date("2024-03-31"),
        };
        let companies = vec![company("c1", "Acme")];
        let sites = vec![site("s1", "c1", "Depot", Some(budget))];
        // February spend counts against the window even in the
        // January report
        let tickets = vec![
            ticket("s1", millis(2024, 1, 10), 1, 10.0),
            ticket("s1", millis(2024, 2, 10), 2, 20.0),
        ];

        let rows = monthly_report(1, 2024, &companies, &sites, &tickets).unwrap();
        assert_eq!(rows[0].budget_remaining, Some(70.0));
        assert_eq!(rows[0].total_amount, 10.0);
    }

    #[test]
    fn test_sites_without_tickets_still_listed() {
        let companies = vec![company("c1", "Acme")];
        let sites = vec![site("s1", "c1", "Depot", None)];
        let rows = monthly_report(1, 2024, &companies, &sites, &[]).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].ticket_count, 0);
        assert!(rows[0].garments.is_empty());
    }

    #[test]
    fn test_rows_sorted_by_company_then_site() {
        let companies = vec![company("c1", "Zulu"), company("c2", "Acme")];
        let sites = vec![
            site("s1", "c1", "Depot", None),
            site("s2", "c2", "Beta", None),
            site("s3", "c2", "Alpha", None),
        ];
        let rows = monthly_report(1, 2024, &companies, &sites, &[]).unwrap();
        let order: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.company.as_str(), r.site.as_str()))
            .collect();
        assert_eq!(order, vec![("Acme", "Alpha"), ("Acme", "Beta"), ("Zulu", "Depot")]);
    }
}
