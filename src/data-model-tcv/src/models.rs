use chrono::NaiveDate;
use diesel::prelude::*;

/// One job posting, normalized from a detail page.
///
/// `job_id` is stable across re-crawls and is the upsert conflict key.
/// Optional fields are stored as NULL when absent.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::jobs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct JobRecord {
    pub job_id: i64,
    pub job_title: String,
    pub company: String,
    /// Millions of VND.
    pub salary_min: Option<f64>,
    /// Millions of VND.
    pub salary_max: Option<f64>,
    pub yrs_of_exp_min: Option<i32>,
    pub yrs_of_exp_max: Option<i32>,
    pub job_city: String,
    pub due_date: NaiveDate,
    pub jd: String,
}
