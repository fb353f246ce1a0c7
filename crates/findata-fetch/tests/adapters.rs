//! Adapter tests against a local HTTP server.

use approx::assert_relative_eq;
use findata_catalog::ConstituentSource;
use findata_fetch::{ApiKeys, DataClient, Endpoints, HttpExecutor};
use findata_types::{FindataError, Period, YearSpan};
use mockito::{Matcher, Server};

fn client(base: &str) -> DataClient {
    DataClient::new(
        HttpExecutor::with_defaults().unwrap(),
        Endpoints::uniform(base),
        ApiKeys::new("quote-key", "eod-key", "fred-key"),
    )
}

fn years(start: i32, end: i32) -> YearSpan {
    YearSpan::new(start, end).unwrap()
}

#[tokio::test]
async fn test_currency_history_returns_every_record_in_order() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/eod/EURUSD.FOREX")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("order".into(), "d".into()),
            Matcher::UrlEncoded("api_token".into(), "eod-key".into()),
            Matcher::UrlEncoded("fmt".into(), "json".into()),
        ]))
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"date": "2024-03-05", "open": 1.0851, "close": 1.0855},
                {"date": "2024-03-04", "open": 1.0838, "close": 1.0852},
                {"date": "2024-03-01", "open": 1.0804, "close": 1.0838}
            ]"#,
        )
        .create_async()
        .await;

    let points = client(&server.url())
        .currency_history("EUR", "USD", Period::OneMonth)
        .await
        .unwrap();

    mock.assert_async().await;
    let dates: Vec<String> = points.iter().map(|p| p.date.to_string()).collect();
    assert_eq!(dates, ["2024-03-05", "2024-03-04", "2024-03-01"]);
    assert_relative_eq!(points[0].close, 1.0855);
}

#[tokio::test]
async fn test_currency_history_skips_elements_without_close() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/eod/GBPJPY.FOREX")
        .match_query(Matcher::Any)
        .with_body(
            r#"[
                {"date": "2024-03-05", "close": 191.2},
                {"date": "2024-03-04"},
                {"date": "2024-03-03", "close": null},
                {"date": "2024-03-01", "close": 190.7}
            ]"#,
        )
        .create_async()
        .await;

    let points = client(&server.url())
        .currency_history("gbp", "jpy", Period::YearToDate)
        .await
        .unwrap();

    assert_eq!(points.len(), 2);
    assert_relative_eq!(points[0].close, 191.2);
    assert_relative_eq!(points[1].close, 190.7);
}

#[tokio::test]
async fn test_quote_converts_amount() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v6/finance/quote")
        .match_header("x-api-key", "quote-key")
        .match_query(Matcher::UrlEncoded("symbols".into(), "EURUSD=X".into()))
        .with_body(r#"{"quoteResponse": {"result": [{"regularMarketPrice": 1.25}], "error": null}}"#)
        .create_async()
        .await;

    let converted = client(&server.url()).quote("EUR", "USD", 80.0).await.unwrap();

    mock.assert_async().await;
    assert_relative_eq!(converted, 100.0);
}

#[tokio::test]
async fn test_quote_with_empty_result_fails() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v6/finance/quote")
        .match_query(Matcher::Any)
        .with_body(r#"{"quoteResponse": {"result": [], "error": null}}"#)
        .create_async()
        .await;

    let err = client(&server.url()).quote("EUR", "USD", 1.0).await.unwrap_err();
    assert!(matches!(err, FindataError::StructuralMissing { .. }));
}

#[tokio::test]
async fn test_unknown_labels_fail_before_any_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let client = client(&server.url());

    let err = client
        .economic_indicator("Inflation", "DE", years(2019, 2021))
        .await
        .unwrap_err();
    assert!(matches!(err, FindataError::Mapping(_)));

    let err = client
        .economic_indicator("Nominal GDP", "IT", years(2019, 2021))
        .await
        .unwrap_err();
    assert!(matches!(err, FindataError::Mapping(_)));

    assert!(client.quote("EUR", "XYZ", 1.0).await.is_err());
    assert!(client.interest_rate("BR", years(2020, 2021)).await.is_err());
    assert!(client.constituents("CAC 40").await.is_err());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_economic_indicator_reads_years_from_keys() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/NGDPD/DEU")
        .match_query(Matcher::UrlEncoded("periods".into(), "2019,2020,2021".into()))
        .with_body(r#"{"values": {"NGDPD": {"DEU": {"2019": 3889.2, "2020": 3887.7, "2021": 4259.9}}}}"#)
        .create_async()
        .await;

    let points = client(&server.url())
        .economic_indicator("Nominal GDP", "DE", years(2019, 2021))
        .await
        .unwrap();

    mock.assert_async().await;
    let labels: Vec<&str> = points.iter().map(|p| p.year.as_str()).collect();
    assert_eq!(labels, ["2019", "2020", "2021"]);
}

#[tokio::test]
async fn test_price_index_sends_accept_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/CompactData/IFS/M.GB.PCPI_IX")
        .match_header("accept", "application/json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("startPeriod".into(), "2020".into()),
            Matcher::UrlEncoded("endPeriod".into(), "2021".into()),
        ]))
        .with_body(
            r#"{"CompactData": {"DataSet": {"Series": {"Obs": [
                {"@TIME_PERIOD": "2020-01", "@OBS_VALUE": "108.2"},
                {"@TIME_PERIOD": "2020-02"},
                {"@TIME_PERIOD": "2020-03", "@OBS_VALUE": "108.6"}
            ]}}}}"#,
        )
        .create_async()
        .await;

    let points = client(&server.url())
        .price_index("GB", years(2020, 2021))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(points.len(), 2);
    assert_eq!(points[1].period.as_str(), "2020-03");
}

#[tokio::test]
async fn test_interest_rate_window_and_error_status() {
    let mut server = Server::new_async().await;
    let ok = server
        .mock("GET", "/series/observations")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("series_id".into(), "FEDFUNDS".into()),
            Matcher::UrlEncoded("api_key".into(), "fred-key".into()),
            Matcher::UrlEncoded("observation_start".into(), "2020-01-01".into()),
            Matcher::UrlEncoded("observation_end".into(), "2022-06-06".into()),
        ]))
        .with_body(r#"{"observations": [{"date": "2020-01-01", "value": "1.55"}]}"#)
        .create_async()
        .await;

    let client = client(&server.url());
    let points = client.interest_rate("US", years(2020, 2022)).await.unwrap();
    ok.assert_async().await;
    assert_eq!(points.len(), 1);
    assert_relative_eq!(points[0].value, 1.55);

    let _bad = server
        .mock("GET", "/series/observations")
        .match_query(Matcher::UrlEncoded("series_id".into(), "INTDSRJPM193N".into()))
        .with_status(400)
        .with_body(r#"{"error_code": 400, "error_message": "Bad Request."}"#)
        .create_async()
        .await;

    let err = client.interest_rate("JP", years(2020, 2022)).await.unwrap_err();
    assert!(matches!(err, FindataError::StructuralMissing { .. }));
}

#[tokio::test]
async fn test_malformed_json_is_parse_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/eod/AAPL.US")
        .match_query(Matcher::Any)
        .with_body("<html>Service Unavailable</html>")
        .create_async()
        .await;

    let err = client(&server.url())
        .equity_history("AAPL.US", Period::OneYear)
        .await
        .unwrap_err();
    assert!(matches!(err, FindataError::Parse { line: 1, .. }));
}

#[tokio::test]
async fn test_empty_equity_body_is_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/eod/MSFT.US")
        .match_query(Matcher::Any)
        .with_body("")
        .create_async()
        .await;

    let err = client(&server.url())
        .equity_history("MSFT.US", Period::OneDay)
        .await
        .unwrap_err();
    assert!(matches!(err, FindataError::EmptyBody));
}

#[tokio::test]
async fn test_equity_history_projects_bars() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/eod/MSFT.US")
        .match_query(Matcher::UrlEncoded("api_token".into(), "eod-key".into()))
        .with_body(
            r#"[
                {"date": "2024-03-01", "open": 411.3, "high": 415.9, "low": 410.1,
                 "close": 415.5, "adjusted_close": 413.6, "volume": 17800000},
                {"date": "2024-03-04", "open": 413.4, "high": 417.3, "low": 412.3,
                 "close": 414.9}
            ]"#,
        )
        .create_async()
        .await;

    let bars = client(&server.url())
        .equity_history("MSFT.US", Period::ThreeMonths)
        .await
        .unwrap();

    assert_eq!(bars.len(), 1);
    assert_relative_eq!(bars[0].range(), 5.8, epsilon = 1e-9);
}

#[tokio::test]
async fn test_constituents_from_page() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/wiki/Dow_Jones_Industrial_Average")
        .with_header("content-type", "text/html")
        .with_body(
            r#"<html><body>
               <table class="wikitable"><caption>DJIA component companies</caption>
                 <tr><th>Company</th><th>Exchange</th><th>Symbol</th></tr>
                 <tr><th scope="row"><a>3M</a></th><td>NYSE</td><td><a>MMM</a></td></tr>
                 <tr><th scope="row"><a>Amazon</a></th><td>NASDAQ</td><td><a>AMZN</a></td></tr>
               </table>
               </body></html>"#,
        )
        .create_async()
        .await;

    let source = ConstituentSource {
        url: format!("{}/wiki/Dow_Jones_Industrial_Average", server.url()),
        ticker_xpath: "//table[contains(caption, 'DJIA component companies')]/tbody/tr/td[2]/a/text()"
            .to_string(),
        name_xpath:
            "//table[contains(caption, 'DJIA component companies')]/tbody/tr/th[@scope='row']/a/text()"
                .to_string(),
        ticker_suffix: None,
    };

    let members = client(&server.url()).constituents_from(&source).await.unwrap();

    assert_eq!(members.len(), 2);
    assert_eq!(members[0].name, "3M");
    assert_eq!(members[0].ticker, "MMM");
    assert_eq!(members[1].ticker, "AMZN");
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    let err = client("http://127.0.0.1:9")
        .interest_rate("US", years(2020, 2021))
        .await
        .unwrap_err();
    assert!(matches!(err, FindataError::Transport(_)));
}
