//! Reshapes raw requisitions into openings grouped by department.
//!
//! Records are taken in input order. Department "All" is dropped, as is any
//! record whose first posting instruction expired before `today`. Missing
//! nested fields default instead of failing the batch:
//! - department → "Others"
//! - application link, job title, city, region, country, worker type → ""
//! - expire date → none, which never expires

use chrono::{DateTime, NaiveDate};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::careers::adp::model::{Address, CodeValue, Requisition};

pub const EXCLUDED_DEPARTMENT: &str = "All";
pub const DEFAULT_DEPARTMENT: &str = "Others";
pub const CAREER_CENTER_LINK_TITLE: &str = "HL External Career Center";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Opening {
    pub job_title: String,
    pub opening_link: String,
    pub city: String,
    pub region_code: String,
    pub country_code: String,
    pub worker_type: String,
    pub expire_date: Option<String>,
}

/// Department name to openings, in first-encounter order.
pub type OpeningsByDepartment = IndexMap<String, Vec<Opening>>;

#[must_use]
pub fn group_by_department(requisitions: &[Requisition], today: NaiveDate) -> OpeningsByDepartment {
    let mut grouped = OpeningsByDepartment::new();

    for requisition in requisitions {
        let department = department_of(requisition);
        if department == EXCLUDED_DEPARTMENT {
            continue;
        }

        let expire_date = requisition
            .posting_instructions
            .first()
            .and_then(|posting| posting.expire_date.clone());
        if expire_date
            .as_deref()
            .and_then(parse_expire_date)
            .is_some_and(|date| date < today)
        {
            continue;
        }

        grouped
            .entry(department.to_string())
            .or_default()
            .push(to_opening(requisition, expire_date));
    }

    grouped
}

fn department_of(requisition: &Requisition) -> &str {
    requisition
        .organizational_units
        .first()
        .and_then(|unit| unit.name_code.as_ref())
        .and_then(|code| code.short_name.as_deref())
        .unwrap_or(DEFAULT_DEPARTMENT)
}

fn to_opening(requisition: &Requisition, expire_date: Option<String>) -> Opening {
    let address = requisition
        .requisition_locations
        .first()
        .and_then(|location| location.address.as_ref());
    let address_field = |pick: fn(&Address) -> Option<&str>| {
        address.and_then(pick).unwrap_or_default().to_string()
    };

    Opening {
        job_title: code_field(
            requisition
                .posting_instructions
                .first()
                .and_then(|posting| posting.name_code.as_ref()),
            |code| code.code_value.as_deref(),
        ),
        opening_link: career_center_link(requisition),
        city: address_field(|a| a.city_name.as_deref()),
        region_code: address_field(|a| {
            a.country_subdivision_level1
                .as_ref()
                .and_then(|code| code.code_value.as_deref())
        }),
        country_code: address_field(|a| a.country_code.as_deref()),
        worker_type: code_field(requisition.worker_type_code.as_ref(), |code| {
            code.short_name.as_deref()
        }),
        expire_date,
    }
}

fn code_field(code: Option<&CodeValue>, pick: fn(&CodeValue) -> Option<&str>) -> String {
    code.and_then(pick).unwrap_or_default().to_string()
}

fn career_center_link(requisition: &Requisition) -> String {
    requisition
        .links
        .iter()
        .find(|link| link.title.as_deref() == Some(CAREER_CENTER_LINK_TITLE))
        .and_then(|link| link.href.clone())
        .unwrap_or_default()
}

// Accepts plain dates and RFC 3339 timestamps; anything else counts as no date.
fn parse_expire_date(raw: &str) -> Option<NaiveDate> {
    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()));
    if parsed.is_none() {
        debug!(expire_date = raw, "ignoring unparseable expire date");
    }
    parsed
}
