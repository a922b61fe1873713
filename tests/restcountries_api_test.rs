//! Integration tests for the REST Countries client against a mock server.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use terra::api::{ApiError, RestCountriesClient};
use terra::models::DetailResolution;

fn belgium_json() -> serde_json::Value {
    json!({
        "name": {
            "common": "Belgium",
            "nativeName": {
                "deu": { "official": "Königreich Belgien", "common": "Belgien" },
                "fra": { "official": "Royaume de Belgique", "common": "Belgique" },
                "nld": { "official": "Koninkrijk België", "common": "België" }
            }
        },
        "cca2": "BE",
        "capital": ["Brussels"],
        "region": "Europe",
        "subregion": "Western Europe",
        "population": 11555997u64,
        "flags": {
            "png": "https://flagcdn.com/w320/be.png",
            "alt": "The flag of Belgium has three vertical bands."
        },
        "tld": [".be"],
        "currencies": { "EUR": { "name": "Euro", "symbol": "€" } },
        "languages": { "deu": "German", "fra": "French", "nld": "Dutch" },
        "borders": ["FRA", "DEU", "LUX", "NLD"]
    })
}

fn japan_json() -> serde_json::Value {
    json!({
        "name": { "common": "Japan", "nativeName": {} },
        "cca2": "JP",
        "capital": ["Tokyo"],
        "region": "Asia",
        "subregion": "Eastern Asia",
        "population": 125836021u64,
        "flags": { "png": "https://flagcdn.com/w320/jp.png", "alt": null },
        "tld": [".jp"],
        "currencies": {},
        "languages": {},
        "borders": []
    })
}

#[tokio::test]
async fn fetch_all_returns_normalized_summaries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([belgium_json(), japan_json()])))
        .mount(&mock_server)
        .await;

    let client = RestCountriesClient::with_base_url(mock_server.uri());
    let countries = client.fetch_all().await.unwrap();

    assert_eq!(countries.len(), 2);

    let belgium = &countries[0];
    assert_eq!(belgium.id, "BE");
    assert_eq!(belgium.name, "Belgium");
    assert_eq!(belgium.capital.as_deref(), Some("Brussels"));
    assert_eq!(belgium.region, "Europe");
    assert_eq!(belgium.population, 11_555_997);
    assert_eq!(belgium.flag.url, "https://flagcdn.com/w320/be.png");
    assert_eq!(
        belgium.flag.description,
        "The flag of Belgium has three vertical bands."
    );

    // Missing alt text falls back to a generated description.
    let japan = &countries[1];
    assert_eq!(japan.flag.description, "Japan flag");
}

#[tokio::test]
async fn fetch_all_server_error_is_not_swallowed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = RestCountriesClient::with_base_url(mock_server.uri());
    let result = client.fetch_all().await;

    match result {
        Err(ApiError::ServerError { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        _ => panic!("expected ServerError"),
    }
}

#[tokio::test]
async fn fetch_all_malformed_body_is_a_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = RestCountriesClient::with_base_url(mock_server.uri());
    let result = client.fetch_all().await;

    assert!(matches!(result, Err(ApiError::Json(_))));
}

#[tokio::test]
async fn resolve_detail_returns_the_full_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/alpha/be"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([belgium_json()])))
        .mount(&mock_server)
        .await;

    let client = RestCountriesClient::with_base_url(mock_server.uri());
    let resolution = client.resolve_detail("BE").await.unwrap();

    let record = match resolution {
        DetailResolution::Found(record) => record,
        DetailResolution::NotFound => panic!("expected a record"),
    };

    assert_eq!(record.name, "Belgium");
    // Native name comes from the first language key in order.
    assert_eq!(record.native_name.as_deref(), Some("Belgien"));
    assert_eq!(record.subregion.as_deref(), Some("Western Europe"));
    assert_eq!(record.tld, ".be");
    assert_eq!(record.currencies.len(), 1);
    assert_eq!(record.currencies[0].name, "Euro");
    assert_eq!(record.languages.len(), 3);
    assert_eq!(record.borders, vec!["FRA", "DEU", "LUX", "NLD"]);
}

#[tokio::test]
async fn resolve_detail_lowercases_the_identifier_in_the_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/alpha/jp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([japan_json()])))
        .mount(&mock_server)
        .await;

    let client = RestCountriesClient::with_base_url(mock_server.uri());
    let resolution = client.resolve_detail("JP").await.unwrap();

    assert!(matches!(resolution, DetailResolution::Found(_)));
}

#[tokio::test]
async fn empty_result_set_is_the_not_found_sentinel() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/alpha/zz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = RestCountriesClient::with_base_url(mock_server.uri());
    let resolution = client.resolve_detail("ZZ").await.unwrap();

    assert_eq!(resolution, DetailResolution::NotFound);
}

#[tokio::test]
async fn resolve_detail_http_failure_is_an_error_not_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/alpha/be"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = RestCountriesClient::with_base_url(mock_server.uri());
    let result = client.resolve_detail("BE").await;

    assert!(matches!(
        result,
        Err(ApiError::ServerError { status: 404, .. })
    ));
}
