//! Tests for detail-page extraction
//!
//! One fixture per template, trimmed down to the markup each extractor reads.

use chrono::NaiveDate;
use core_tcv::{CrawlError, Extractor, JobRecord, select_extractor};

const NORMAL_URL: &str = "https://www.topcv.vn/viec-lam/senior-rust-engineer/1234567.html?ta_source=JobSearchList";
const DIAMOND_URL: &str = "https://www.topcv.vn/brand/acme/tuyen-dung/senior-rust-engineer-j7654321.html";
const PREMIUM_URL: &str = "https://www.topcv.vn/brand/globex/tuyen-dung/data-engineer-j1112223.html";

const NORMAL_PAGE: &str = r#"
<html><body>
  <div class="job-detail__info">
    <h1 class="job-detail__info--title">
Senior Rust Engineer
</h1>
    <div class="job-detail__info--sections">
      <div class="job-detail__info--section">
        <div class="job-detail__info--section-content-title">Mức lương</div>
        <div class="job-detail__info--section-content-value">
15 - 20 triệu
</div>
      </div>
      <div class="job-detail__info--section">
        <div class="job-detail__info--section-content-title">Địa điểm</div>
        <div class="job-detail__info--section-content-value">
Hà Nội
</div>
      </div>
      <div class="job-detail__info--section">
        <div class="job-detail__info--section-content-title">Kinh nghiệm</div>
        <div class="job-detail__info--section-content-value">
3 năm
</div>
      </div>
    </div>
    <div class="job-detail__info--deadline">Hạn nộp hồ sơ: 30/11/2024</div>
  </div>
  <div class="job-detail__company">
    <h2 class="company-name-label"><a href="https://www.topcv.vn/cong-ty/acme/1.html">
ACME Software
</a></h2>
  </div>
  <div class="job-description">
    <div class="job-description__item">
      <h3>Mô tả công việc</h3>
      <div class="job-description__item--content">
<p>Build and operate crawlers.</p>
</div>
    </div>
  </div>
</body></html>
"#;

const DIAMOND_PAGE: &str = r#"
<html><body>
  <div class="box-header"><h2 class="title">
Senior Rust Engineer (Remote)
</h2></div>
  <div class="box-info">
    <div class="box-main">
      <div class="box-item"><strong>Mức lương</strong><span>
1,000 - 2,000 USD
</span></div>
      <div class="box-item"><strong>Hình thức</strong><span>Toàn thời gian</span></div>
      <div class="box-item"><strong>Kinh nghiệm</strong><span>
Trên 5 năm
</span></div>
    </div>
    <div class="box-address"><div>- Hồ Chí Minh : Tầng 3, Tòa nhà B, Quận 1</div></div>
  </div>
  <div class="box-info">
    <div class="content-tab">
Own the data pipeline.
</div>
  </div>
  <span class="deadline">Còn <strong>12</strong> ngày để ứng tuyển</span>
  <div class="footer-info-company-name">
ACME Diamond
</div>
</body></html>
"#;

const PREMIUM_PAGE: &str = r#"
<html><body>
  <div id="premium-job">
    <h1 class="company-content__title--name">
Globex Corporation
</h1>
    <h2 class="premium-job-basic-information__content--title">
Data Engineer
</h2>
    <div class="basic-information-item">
      <div class="basic-information-item__data--value">Tới 1,500 USD</div>
    </div>
    <div class="basic-information-item">
      <div class="basic-information-item__data--value">Đà Nẵng</div>
    </div>
    <div class="basic-information-item">
      <div class="basic-information-item__data--value">Không yêu cầu kinh nghiệm</div>
    </div>
    <div class="general-information-data">
      <div class="general-information-data__value">Nhân viên</div>
      <div class="general-information-data__value">Hạn nộp: 05/01/2025</div>
    </div>
    <div class="premium-job-description__box--content">
Design warehouse models.
</div>
  </div>
</body></html>
"#;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, 20).unwrap()
}

fn extract(url: &str, html: &str) -> Result<JobRecord, CrawlError> {
    select_extractor(url)?.extract_job_on(html, url, today())
}

#[test]
fn test_normal_template() {
    let record = extract(NORMAL_URL, NORMAL_PAGE).unwrap();

    assert_eq!(
        record,
        JobRecord {
            job_id: 1234567,
            job_title: "Senior Rust Engineer".to_string(),
            company: "ACME Software".to_string(),
            salary_min: Some(15.0),
            salary_max: Some(20.0),
            yrs_of_exp_min: Some(3),
            yrs_of_exp_max: Some(3),
            job_city: "Hà Nội".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 11, 30).unwrap(),
            jd: "Build and operate crawlers.".to_string(),
        }
    );
}

#[test]
fn test_diamond_template() {
    let record = extract(DIAMOND_URL, DIAMOND_PAGE).unwrap();

    assert_eq!(
        record,
        JobRecord {
            job_id: 7654321,
            job_title: "Senior Rust Engineer (Remote)".to_string(),
            company: "ACME Diamond".to_string(),
            salary_min: Some(24.0),
            salary_max: Some(48.0),
            yrs_of_exp_min: Some(5),
            yrs_of_exp_max: None,
            job_city: "Hồ Chí Minh".to_string(),
            // today + 12 days
            due_date: NaiveDate::from_ymd_opt(2024, 12, 2).unwrap(),
            jd: "Own the data pipeline.".to_string(),
        }
    );
}

#[test]
fn test_premium_template() {
    let record = extract(PREMIUM_URL, PREMIUM_PAGE).unwrap();

    assert_eq!(
        record,
        JobRecord {
            job_id: 1112223,
            job_title: "Data Engineer".to_string(),
            company: "Globex Corporation".to_string(),
            salary_min: None,
            salary_max: Some(36.0),
            yrs_of_exp_min: Some(0),
            yrs_of_exp_max: Some(0),
            job_city: "Đà Nẵng".to_string(),
            due_date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            jd: "Design warehouse models.".to_string(),
        }
    );
}

#[test]
fn test_brand_page_without_known_markup_falls_through_to_diamond() {
    let html = "<html><body><p>Nothing to see</p></body></html>";
    match extract(DIAMOND_URL, html) {
        Err(CrawlError::StructuralParse(selector)) => assert!(selector.starts_with("div.box-info")),
        other => panic!("Expected diamond-layout StructuralParse, got {:?}", other),
    }
}

#[test]
fn test_missing_element_aborts_the_page() {
    let html = NORMAL_PAGE.replace("job-detail__info--deadline", "something-else");
    match extract(NORMAL_URL, &html) {
        Err(CrawlError::StructuralParse(selector)) => assert_eq!(selector, "div.job-detail__info--deadline"),
        other => panic!("Expected StructuralParse, got {:?}", other),
    }
}

#[test]
fn test_missing_positional_value() {
    // only the salary value remains
    let html = NORMAL_PAGE
        .replacen(
            r#"<div class="job-detail__info--section-content-value">
Hà Nội"#,
            "<div>\nHà Nội",
            1,
        )
        .replacen(
            r#"<div class="job-detail__info--section-content-value">
3 năm"#,
            "<div>\n3 năm",
            1,
        );
    assert!(matches!(extract(NORMAL_URL, &html), Err(CrawlError::StructuralParse(_))));
}

#[test]
fn test_non_numeric_job_id() {
    let url = "https://www.topcv.vn/viec-lam/senior-rust-engineer/not-a-number.html";
    assert!(matches!(
        Extractor::Normal.extract_job_on(NORMAL_PAGE, url, today()),
        Err(CrawlError::InvalidField { field: "job_id", .. })
    ));
}

#[test]
fn test_diamond_expired_deadline_is_invalid() {
    // "-1 days left" is not a due date; the page is rejected rather than dated in the past
    let html = DIAMOND_PAGE.replace("<strong>12</strong>", "<strong>-1</strong>");
    match extract(DIAMOND_URL, &html) {
        Err(CrawlError::InvalidField { field, value }) => {
            assert_eq!(field, "due_date");
            assert_eq!(value, "-1");
        }
        other => panic!("Expected InvalidField, got {:?}", other),
    }
}

#[test]
fn test_non_numeric_salary_amount_is_invalid() {
    let html = NORMAL_PAGE.replace("15 - 20 triệu", "NaN - inf triệu");
    assert!(matches!(
        extract(NORMAL_URL, &html),
        Err(CrawlError::InvalidField { field: "salary", .. })
    ));
}
