//! Detail pages under `/brand/`: company-branded templates.
//!
//! Two layouts share this path. Pages carrying a `div#premium-job` use the
//! premium layout; every other page is read as the diamond layout.

use chrono::NaiveDate;
use scraper::ElementRef;
use url::Url;

use crate::JobRecord;
use crate::errors::Result;
use crate::extract::dom::{find, find_all, last, nth, raw_text, text};
use crate::extract::fields::{brand_job_id, diamond_city, due_in_days, parse_deadline, parse_experience, parse_salary};

/// Sub-templates of the brand pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandLayout {
    /// Nested box/item layout with a remaining-days deadline
    Diamond,
    /// Premium layout with an absolute deadline
    Premium,
}

impl BrandLayout {
    /// Probes the page for the premium marker. Absent marker means diamond,
    /// including pages that match neither layout.
    pub fn detect(root: ElementRef<'_>) -> Result<Self> {
        if find_all(root, "div#premium-job")?.is_empty() {
            Ok(Self::Diamond)
        } else {
            Ok(Self::Premium)
        }
    }
}

pub(crate) fn extract(root: ElementRef<'_>, url: &Url, today: NaiveDate) -> Result<JobRecord> {
    let layout = BrandLayout::detect(root)?;
    tracing::debug!("Brand page {} uses the {:?} layout", url, layout);
    match layout {
        BrandLayout::Diamond => extract_diamond(root, url, today),
        BrandLayout::Premium => extract_premium(root, url),
    }
}

const BOX_INFO: &str = "div.box-info";
const BOX_ITEM: &str = "div.box-item";

fn extract_diamond(root: ElementRef<'_>, url: &Url, today: NaiveDate) -> Result<JobRecord> {
    // [summary box, description box]
    let box_infos = find_all(root, BOX_INFO)?;
    let summary = nth(&box_infos, 0, BOX_INFO)?;
    let description = nth(&box_infos, 1, BOX_INFO)?;
    let items = find_all(find(summary, "div.box-main")?, BOX_ITEM)?;

    let job_title = text(find(find(root, "div.box-header")?, "h2.title")?);
    let company = text(find(root, "div.footer-info-company-name")?);
    let (salary_min, salary_max) = parse_salary(&text(find(nth(&items, 0, BOX_ITEM)?, "span")?))?;
    let (yrs_of_exp_min, yrs_of_exp_max) = parse_experience(&text(find(last(&items, BOX_ITEM)?, "span")?));
    let job_city = diamond_city(&raw_text(find(find(root, "div.box-address")?, "div")?))?;
    let due_date = due_in_days(&text(find(find(root, "span.deadline")?, "strong")?), today)?;
    let jd = text(find(description, "div.content-tab")?);

    Ok(JobRecord {
        job_id: brand_job_id(url)?,
        job_title,
        company,
        salary_min,
        salary_max,
        yrs_of_exp_min,
        yrs_of_exp_max,
        job_city,
        due_date,
        jd,
    })
}

const BASIC_INFO_VALUE: &str = "div.basic-information-item__data--value";
const GENERAL_INFO_VALUE: &str = "div.general-information-data__value";

fn extract_premium(root: ElementRef<'_>, url: &Url) -> Result<JobRecord> {
    // [salary, city, ..., experience]
    let info_values = find_all(root, BASIC_INFO_VALUE)?;

    let job_title = text(find(root, "h2.premium-job-basic-information__content--title")?);
    let company = text(find(root, "h1.company-content__title--name")?);
    let (salary_min, salary_max) = parse_salary(&text(nth(&info_values, 0, BASIC_INFO_VALUE)?))?;
    let job_city = text(nth(&info_values, 1, BASIC_INFO_VALUE)?);
    let (yrs_of_exp_min, yrs_of_exp_max) = parse_experience(&text(last(&info_values, BASIC_INFO_VALUE)?));
    let general_values = find_all(root, GENERAL_INFO_VALUE)?;
    let due_date = parse_deadline(&text(last(&general_values, GENERAL_INFO_VALUE)?))?;
    let jd = text(find(root, "div.premium-job-description__box--content")?);

    Ok(JobRecord {
        job_id: brand_job_id(url)?,
        job_title,
        company,
        salary_min,
        salary_max,
        yrs_of_exp_min,
        yrs_of_exp_max,
        job_city,
        due_date,
        jd,
    })
}
