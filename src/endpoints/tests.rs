//! Tests for endpoint models

use super::*;
use crate::pagination::{OffsetPage, OffsetParams, Page, TokenPage, TokenParams};
use crate::params::ToQueryParams;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::collections::HashMap;

fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn job_summary_payload() -> Value {
    json!({
        "MatchedObjectId": "1",
        "PositionID": "24-123456",
        "PositionTitle": "Engineer",
        "OrganizationName": "NASA",
        "DepartmentName": "National Aeronautics and Space Administration",
        "PositionURI": "https://example.com/job/1",
        "ApplyURI": ["https://example.com/apply/1"],
        "PositionLocationDisplay": "Houston, TX",
        "PositionLocation": [{
            "LocationName": "Houston, Texas",
            "LocationCode": "TX1234",
            "CountryCode": "US",
            "CountrySubDivisionCode": "TX",
            "CityName": "Houston",
            "Latitude": "29.7604",
            "Longitude": "-95.3698"
        }],
        "JobCategory": [{"Code": "0801", "Name": "General Engineering"}],
        "JobGrade": [{"Code": "GS", "CurrentGrade": "12"}],
        "PositionSchedule": [{"Code": "1", "Name": "Full-time"}],
        "PositionOfferingType": [{"Code": "15317", "Name": "Permanent"}],
        "MinimumRange": 50000.0,
        "MaximumRange": 100000.0,
        "PositionRemuneration": [{
            "MinimumRange": "50000",
            "MaximumRange": "100000",
            "RateIntervalCode": "PA",
            "Description": "Per Year"
        }],
        "ApplicationCloseDate": "2024-01-01",
        "UserArea": {
            "Details": {
                "JobSummary": "Design and build spacecraft components.",
                "HiringPath": "public;vet",
                "WhoMayApply": {"Name": "Open to the public", "Code": "public"}
            }
        }
    })
}

fn search_result_item() -> Value {
    json!({ "MatchedObjectDescriptor": job_summary_payload() })
}

fn historic_joa_payload() -> Value {
    json!({
        "paging": {
            "metadata": {
                "totalCount": 2,
                "pageSize": 2,
                "continuationToken": "NEXTTOKEN"
            },
            "next": "https://example.invalid/historicjoa?page=2"
        },
        "data": [
            {
                "usajobsControlNumber": 123_456_789,
                "hiringAgencyCode": "NASA",
                "hiringAgencyName": "National Aeronautics and Space Administration",
                "hiringDepartmentCode": "NAT",
                "agencyLevel": 2,
                "appointmentType": "Permanent",
                "teleworkEligible": "Y",
                "securityClearanceRequired": "Y",
                "positionOpenDate": "2020-01-01",
                "positionExpireDate": null,
                "announcementNumber": "NASA-20-001",
                "positionTitle": "Data Scientist",
                "minimumSalary": 90000.0,
                "maximumSalary": 120000.0,
                "supervisoryStatus": "N",
                "totalOpenings": "3",
                "hiringPaths": [{"hiringPath": "The public"}],
                "jobCategories": [{"series": "1550"}],
                "positionLocations": [{
                    "positionLocationCity": "Houston",
                    "positionLocationState": "Texas",
                    "positionLocationCountry": "United States"
                }]
            },
            {
                "usajobsControlNumber": 987_654_321,
                "hiringAgencyCode": "DOE",
                "serviceType": null,
                "teleworkEligible": "N",
                "promotionPotential": null,
                "positionTitle": "Backend Engineer",
                "disableApplyOnline": "Y",
                "jobCategories": [{"series": "2210"}]
            }
        ]
    })
}

// ============================================================================
// Search params
// ============================================================================

fn fixture_query() -> SearchQuery {
    SearchQuery {
        keyword: Some("developer".to_string()),
        location_names: vec!["City, ST".to_string(), "Town, ST2".to_string()],
        radius: Some(25),
        relocation: Some(true),
        job_category_codes: vec!["001".to_string(), "002".to_string()],
        hiring_paths: vec![HiringPath::Public, HiringPath::Vet],
        ..Default::default()
    }
}

#[test]
fn test_search_params_serialization() {
    let params = fixture_query().validate().unwrap();
    assert_eq!(
        params.to_params(),
        map(&[
            ("Keyword", "developer"),
            ("LocationName", "City, ST;Town, ST2"),
            ("Radius", "25"),
            ("RelocationIndicator", "True"),
            ("JobCategoryCode", "001;002"),
            ("HiringPath", "public;vet"),
        ])
    );
}

#[test]
fn test_search_params_from_json() {
    let params: SearchParams = serde_json::from_value(json!({
        "keyword": "developer",
        "location_names": ["City, ST", "Town, ST2"],
        "radius": 25,
        "relocation": true,
        "job_category_codes": ["001", "002"],
        "hiring_paths": ["public", "vet"]
    }))
    .unwrap();
    assert_eq!(params, fixture_query().validate().unwrap());
}

#[test]
fn test_search_params_enum_wire_values() {
    let params = SearchQuery {
        sort_field: Some(SortField::OpenDate),
        sort_direction: Some(SortDirection::Desc),
        who_may_apply: Some(WhoMayApply::Public),
        fields: Some(Fields::Full),
        hiring_paths: vec![HiringPath::FedInternalSearch, HiringPath::NGuard],
        remote_indicator: Some(false),
        date_posted_days: Some(0),
        ..Default::default()
    }
    .validate()
    .unwrap();

    assert_eq!(
        params.to_params(),
        map(&[
            ("SortField", "opendate"),
            ("SortDirection", "Desc"),
            ("WhoMayApply", "Public"),
            ("Fields", "Full"),
            ("HiringPath", "fed-internal-search;nguard"),
            ("RemoteIndicator", "False"),
            ("DatePosted", "0"),
        ])
    );
}

#[test]
fn test_search_params_rejects_unknown_fields() {
    let result: std::result::Result<SearchParams, _> =
        serde_json::from_value(json!({"keyword": "x", "not_a_field": 1}));
    assert!(result.is_err());
}

#[test]
fn test_radius_requires_location() {
    let err = SearchQuery {
        radius: Some(10),
        ..Default::default()
    }
    .validate()
    .unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("Radius"));

    let result: std::result::Result<SearchParams, _> =
        serde_json::from_value(json!({"radius": 10}));
    assert!(result.is_err());
}

#[test]
fn test_radius_must_be_positive() {
    let err = SearchQuery {
        radius: Some(0),
        location_names: vec!["Anywhere".to_string()],
        ..Default::default()
    }
    .validate()
    .unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_remuneration_max_less_than_min() {
    let err = SearchQuery {
        remuneration_min: Some(100),
        remuneration_max: Some(50),
        ..Default::default()
    }
    .validate()
    .unwrap_err();
    assert!(err.to_string().contains("RemunerationMaximumAmount"));

    let ok = SearchQuery {
        remuneration_min: Some(50),
        remuneration_max: Some(50),
        ..Default::default()
    }
    .validate();
    assert!(ok.is_ok());
}

#[test]
fn test_paging_field_ranges() {
    for query in [
        SearchQuery {
            page: Some(0),
            ..Default::default()
        },
        SearchQuery {
            results_per_page: Some(0),
            ..Default::default()
        },
        SearchQuery {
            results_per_page: Some(501),
            ..Default::default()
        },
        SearchQuery {
            date_posted_days: Some(61),
            ..Default::default()
        },
    ] {
        assert!(query.validate().unwrap_err().is_validation());
    }
}

#[test]
fn test_search_params_with_paging_leaves_original_untouched() {
    let params = fixture_query().validate().unwrap();
    let next = params.with_paging(3, Some(50));

    assert_eq!(next.page, Some(3));
    assert_eq!(next.results_per_page, Some(50));
    assert_eq!(next.keyword.as_deref(), Some("developer"));
    assert_eq!(params.page, None);
    assert_eq!(params.results_per_page, None);
}

// ============================================================================
// Search responses
// ============================================================================

#[test]
fn test_job_summary_parses_nested_fields() {
    let summary: JobSummary = serde_json::from_value(job_summary_payload()).unwrap();

    assert_eq!(summary.position_id.as_deref(), Some("24-123456"));
    assert_eq!(
        summary.position_uri.as_deref(),
        Some("https://example.com/job/1")
    );
    assert_eq!(summary.apply_uri, vec!["https://example.com/apply/1"]);
    assert_eq!(
        summary.department_name.as_deref(),
        Some("National Aeronautics and Space Administration")
    );
    assert_eq!(summary.locations_display.as_deref(), Some("Houston, TX"));

    assert_eq!(summary.locations.len(), 1);
    let location = &summary.locations[0];
    assert_eq!(location.city_name.as_deref(), Some("Houston"));
    assert_eq!(location.state_code.as_deref(), Some("TX"));
    assert!((location.latitude.unwrap() - 29.7604).abs() < 1e-9);
    assert!((location.longitude.unwrap() + 95.3698).abs() < 1e-9);

    assert_eq!(summary.job_categories[0].code.as_deref(), Some("0801"));
    assert_eq!(summary.job_grades[0].current_grade.as_deref(), Some("12"));
    assert_eq!(summary.position_schedules[0].name.as_deref(), Some("Full-time"));
    assert_eq!(summary.position_offerings[0].code.as_deref(), Some("15317"));

    assert_eq!(summary.salary_range(), (Some(50000.0), Some(100_000.0)));
    assert_eq!(summary.hiring_paths(), vec!["public", "vet"]);
    assert_eq!(
        summary.summary(),
        Some("Design and build spacecraft components.")
    );

    let who = summary
        .user_area
        .as_ref()
        .and_then(|area| area.details.as_ref())
        .and_then(|details| details.who_may_apply.as_ref())
        .unwrap();
    assert_eq!(who.name.as_deref(), Some("Open to the public"));
}

#[test]
fn test_job_summary_helper_fallbacks() {
    let summary: JobSummary = serde_json::from_value(json!({
        "MatchedObjectId": "9",
        "PositionTitle": "Clerk",
        "QualificationSummary": "Filing",
        "MinimumRange": "$40,000",
        "MaximumRange": "",
        "PositionRemuneration": [{"MinimumRange": "", "MaximumRange": null}]
    }))
    .unwrap();

    assert_eq!(summary.summary(), Some("Filing"));
    assert_eq!(summary.salary_range(), (Some(40000.0), None));
    assert!(summary.hiring_paths().is_empty());
}

#[test]
fn test_search_result_jobs_skips_malformed() {
    let result: SearchResult = serde_json::from_value(json!({
        "SearchResultCount": 3,
        "SearchResultCountAll": 3,
        "SearchResultItems": [
            search_result_item(),
            {"MatchedObjectId": "2", "PositionTitle": "Analyst"},
            {"MatchedObjectDescriptor": {"MatchedObjectId": "3"}}
        ]
    }))
    .unwrap();

    let jobs = result.jobs();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].id, "1");
    assert_eq!(jobs[1].id, "2");
    assert_eq!(result.item_count(), 3);
}

#[test]
fn test_search_response_parsing() {
    let response: SearchResponse = serde_json::from_value(json!({
        "LanguageCode": "EN",
        "SearchParameters": {"Keyword": "python"},
        "SearchResult": {
            "SearchResultCount": 1,
            "SearchResultCountAll": 7,
            "SearchResultItems": [search_result_item()]
        }
    }))
    .unwrap();

    assert_eq!(response.language.as_deref(), Some("EN"));
    assert_eq!(
        response.search_parameters.as_ref().unwrap()["Keyword"],
        "python"
    );
    assert_eq!(response.item_count(), 1);
    assert_eq!(response.total_count(), Some(7));

    let jobs = response.into_items();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id, "1");
}

#[test]
fn test_empty_search_response() {
    let response: SearchResponse = serde_json::from_value(json!({})).unwrap();
    assert!(response.jobs().is_empty());
    assert_eq!(response.item_count(), 0);
    assert_eq!(response.total_count(), None);
}

#[test]
fn test_item_count_falls_back_to_items() {
    let response: SearchResponse = serde_json::from_value(json!({
        "SearchResult": {"SearchResultItems": [search_result_item(), search_result_item()]}
    }))
    .unwrap();
    assert_eq!(response.item_count(), 2);
}

// ============================================================================
// Historic JOA
// ============================================================================

#[test]
fn test_historic_params_serialization() {
    let params: HistoricJoaParams = serde_json::from_value(json!({
        "hiring_agency_codes": "AGENCY1",
        "hiring_department_codes": "DEPT1",
        "position_series": "2210",
        "announcement_numbers": "23-ABC",
        "usajobs_control_numbers": ["1234567", "7654321"],
        "start_position_open_date": "2020-01-01",
        "end_position_open_date": "2020-12-31",
        "start_position_close_date": "2021-01-01",
        "end_position_close_date": "2021-12-31",
        "continuation_token": "token123"
    }))
    .unwrap();

    assert_eq!(
        params.to_params(),
        map(&[
            ("HiringAgencyCodes", "AGENCY1"),
            ("HiringDepartmentCodes", "DEPT1"),
            ("PositionSeries", "2210"),
            ("AnnouncementNumbers", "23-ABC"),
            ("USAJOBSControlNumbers", "1234567;7654321"),
            ("StartPositionOpenDate", "2020-01-01"),
            ("EndPositionOpenDate", "2020-12-31"),
            ("StartPositionCloseDate", "2021-01-01"),
            ("EndPositionCloseDate", "2021-12-31"),
            ("continuationtoken", "token123"),
        ])
    );
}

#[test]
fn test_historic_params_omit_unset_fields() {
    let params = HistoricJoaParams::default();
    assert!(params.to_params().is_empty());
    assert_eq!(params.continuation_token(), None);
}

#[test]
fn test_historic_params_date_ranges() {
    let err = HistoricJoaQuery {
        start_position_open_date: NaiveDate::from_ymd_opt(2021, 1, 1),
        end_position_open_date: NaiveDate::from_ymd_opt(2020, 1, 1),
        ..Default::default()
    }
    .validate()
    .unwrap_err();
    assert!(err.to_string().contains("EndPositionOpenDate"));

    let err = HistoricJoaQuery {
        start_position_close_date: NaiveDate::from_ymd_opt(2021, 6, 1),
        end_position_close_date: NaiveDate::from_ymd_opt(2021, 5, 1),
        ..Default::default()
    }
    .validate()
    .unwrap_err();
    assert!(err.to_string().contains("EndPositionCloseDate"));
}

#[test]
fn test_historic_params_with_token() {
    let params = HistoricJoaQuery {
        hiring_agency_codes: vec!["NASA".to_string()],
        ..Default::default()
    }
    .validate()
    .unwrap();
    let next = params.with_continuation_token("abc");

    assert_eq!(next.continuation_token(), Some("abc"));
    assert_eq!(next.hiring_agency_codes, vec!["NASA"]);
    assert_eq!(params.continuation_token(), None);
}

#[test]
fn test_historic_item_parses_payload() {
    let response: HistoricJoaResponse = serde_json::from_value(historic_joa_payload()).unwrap();

    assert_eq!(response.data.len(), 2);
    let first = &response.data[0];
    assert_eq!(first.usajobs_control_number, 123_456_789);
    assert_eq!(first.hiring_agency_code.as_deref(), Some("NASA"));
    assert_eq!(first.agency_level, Some(2));
    assert_eq!(first.telework_eligible, Some(true));
    assert_eq!(first.supervisory_status, Some(false));
    assert_eq!(first.minimum_salary, Some(90000.0));
    assert_eq!(first.total_openings.as_deref(), Some("3"));
    assert_eq!(first.position_expire_date, None);
    assert_eq!(
        first.hiring_paths[0].hiring_path.as_deref(),
        Some("The public")
    );
    assert_eq!(
        first.position_locations[0].position_location_city.as_deref(),
        Some("Houston")
    );

    let second = &response.data[1];
    assert_eq!(second.telework_eligible, Some(false));
    assert_eq!(second.disable_apply_online, Some(true));
    assert_eq!(second.service_type, None);
    assert_eq!(second.job_categories[0].series.as_deref(), Some("2210"));
}

#[test]
fn test_response_next_token_returns_continuation() {
    let response: HistoricJoaResponse = serde_json::from_value(historic_joa_payload()).unwrap();
    assert_eq!(response.next_token(), Some("NEXTTOKEN"));
    assert_eq!(response.total_count(), Some(2));
    assert_eq!(
        response.next_link(),
        Some("https://example.invalid/historicjoa?page=2")
    );
}

#[test]
fn test_response_next_token_when_paging_missing() {
    let response: HistoricJoaResponse = serde_json::from_value(json!({"data": []})).unwrap();
    assert_eq!(response.next_token(), None);

    let response: HistoricJoaResponse =
        serde_json::from_value(json!({"paging": {"next": null}})).unwrap();
    assert_eq!(TokenPage::next_token(&response), None);
    assert!(response.into_items().is_empty());
}

#[test]
fn test_announcement_text_params_share_historic_filters() {
    let params: AnnouncementTextParams = serde_json::from_value(json!({
        "announcement_numbers": ["A-1", "A-2"],
        "continuation_token": "T"
    }))
    .unwrap();

    assert_eq!(
        params.to_params(),
        map(&[("AnnouncementNumbers", "A-1;A-2"), ("continuationtoken", "T")])
    );
    assert_eq!(
        params.with_continuation_token("U").continuation_token(),
        Some("U")
    );
}

#[test]
fn test_announcement_text_item_parses() {
    let response: AnnouncementTextResponse = serde_json::from_value(json!({
        "paging": {"metadata": {"continuationToken": null}},
        "data": [{
            "usajobsControlNumber": 42,
            "summary": "Lead the team",
            "howToApply": "Online",
            "unknownSection": "ignored"
        }]
    }))
    .unwrap();

    assert_eq!(response.next_token(), None);
    assert_eq!(response.data[0].usajobs_control_number, 42);
    assert_eq!(response.data[0].summary.as_deref(), Some("Lead the team"));
    assert_eq!(response.data[0].how_to_apply.as_deref(), Some("Online"));
}

#[test]
fn test_endpoint_paths() {
    assert_eq!(<SearchParams as Endpoint>::PATH, "/api/search");
    assert_eq!(<HistoricJoaParams as Endpoint>::PATH, "/api/historicjoa");
    assert_eq!(
        <AnnouncementTextParams as Endpoint>::PATH,
        "/api/historicjoa/announcementtext"
    );
}
