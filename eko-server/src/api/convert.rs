//! Type conversions
//!
//! Maps database models (`db::models`, RecordId ids, millis
//! timestamps) to API response models (`shared::models`, string ids,
//! RFC 3339 timestamps).

use chrono::{DateTime, TimeZone, Utc};
use surrealdb::RecordId;

use crate::db::models as db;
use shared::models as api;

// ============ Helpers ============

pub fn record_id_to_string(id: &RecordId) -> String {
    id.to_string()
}

pub fn option_record_id_to_string(id: &Option<RecordId>) -> Option<String> {
    id.as_ref().map(record_id_to_string)
}

/// Millis-since-epoch to a UTC datetime. Stored values come from
/// `Utc::now()`, so they are always in range.
pub fn millis_to_datetime(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

// ============ Company ============

impl From<db::Company> for api::Company {
    fn from(c: db::Company) -> Self {
        Self {
            id: option_record_id_to_string(&c.id),
            name: c.name,
        }
    }
}

// ============ Site ============

impl From<db::Site> for api::Site {
    fn from(s: db::Site) -> Self {
        Self {
            id: option_record_id_to_string(&s.id),
            company_id: record_id_to_string(&s.company),
            site_name: s.site_name,
            site_address: s.site_address,
            pin: s.pin,
            pricing: s.pricing,
            budget: s.budget,
        }
    }
}

// ============ Ticket ============

impl From<db::Ticket> for api::Ticket {
    fn from(t: db::Ticket) -> Self {
        Self {
            id: option_record_id_to_string(&t.id),
            ref_code: t.ref_code,
            created_at: millis_to_datetime(t.created_at),
            company_id: record_id_to_string(&t.company_id),
            company_name: t.company_name,
            site_id: record_id_to_string(&t.site_id),
            site_name: t.site_name,
            guard_name: t.guard_name,
            phone: t.phone,
            email: t.email,
            items: t.items,
            notes: t.notes,
            total_cost: t.total_cost,
        }
    }
}
