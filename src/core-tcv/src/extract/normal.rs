//! Detail pages under `/viec-lam/`: the site's standard job template.

use scraper::ElementRef;
use url::Url;

use crate::JobRecord;
use crate::errors::Result;
use crate::extract::dom::{find, find_all, nth, text};
use crate::extract::fields::{normal_job_id, parse_deadline, parse_experience, parse_salary};

const INFO_VALUE: &str = "div.job-detail__info--section-content-value";

pub(crate) fn extract(root: ElementRef<'_>, url: &Url) -> Result<JobRecord> {
    // [salary, city, experience]
    let info_values = find_all(root, INFO_VALUE)?;

    let job_title = text(find(root, "h1.job-detail__info--title")?);
    let company = text(find(root, "h2.company-name-label a")?);
    let (salary_min, salary_max) = parse_salary(&text(nth(&info_values, 0, INFO_VALUE)?))?;
    let job_city = text(nth(&info_values, 1, INFO_VALUE)?);
    let (yrs_of_exp_min, yrs_of_exp_max) = parse_experience(&text(nth(&info_values, 2, INFO_VALUE)?));
    let due_date = parse_deadline(&text(find(root, "div.job-detail__info--deadline")?))?;
    let jd = text(find(root, "div.job-description__item--content")?);

    Ok(JobRecord {
        job_id: normal_job_id(url)?,
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
