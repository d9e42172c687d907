//! # Endpoint Façade Tests
//!
//! Every façade is driven through a recording `JsonHttpClient`, so these tests
//! pin the exact path and wire-ordered query each endpoint produces.

use async_trait::async_trait;
use lib_polygon::markets::polygon::{
    AggregatesParams, ApiCallPolygon, DividendsParams, Filter, GroupedDailyParams, IndicatorParams,
    JsonHttpClient, MacdParams, Order, RequestError, SeriesType, SnapshotAllParams, SplitsParams,
    TickParams, Timespan,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// Records requested URIs and answers with a canned body.
#[derive(Default)]
struct Recorder {
    uris: Mutex<Vec<String>>,
}

impl Recorder {
    fn last(&self) -> String {
        self.uris.lock().unwrap().last().cloned().expect("no request recorded")
    }
}

#[async_trait]
impl JsonHttpClient for Recorder {
    async fn get_json(&self, uri: &str) -> Result<Value, RequestError> {
        self.uris.lock().unwrap().push(uri.to_string());
        Ok(json!({ "status": "OK", "request": uri }))
    }
}

fn setup() -> (ApiCallPolygon, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    (ApiCallPolygon::new(recorder.clone()), recorder)
}

#[tokio::test]
async fn previous_close_forwards_adjusted() {
    let (api, rec) = setup();

    api.previous_close("AAPL", None).await.unwrap();
    assert_eq!(rec.last(), "/v2/aggs/ticker/AAPL/prev");

    api.previous_close("AAPL", Some(false)).await.unwrap();
    assert_eq!(rec.last(), "/v2/aggs/ticker/AAPL/prev?adjusted=false");
}

#[tokio::test]
async fn aggregates_interpolates_the_range_into_the_path() {
    let (api, rec) = setup();
    let options = AggregatesParams { adjusted: Some(true), sort: Some(Order::Desc), limit: Some(120) };

    api.aggregates("MSFT", 5, Timespan::Minute, "2024-03-01", "2024-03-08", &options)
        .await
        .unwrap();

    assert_eq!(
        rec.last(),
        "/v2/aggs/ticker/MSFT/range/5/minute/2024-03-01/2024-03-08?adjusted=true&sort=desc&limit=120"
    );
}

#[tokio::test]
async fn grouped_daily_and_open_close() {
    let (api, rec) = setup();

    api.grouped_daily("2024-02-14", &GroupedDailyParams { adjusted: None, include_otc: Some(true) })
        .await
        .unwrap();
    assert_eq!(rec.last(), "/v2/aggs/grouped/locale/us/market/stocks/2024-02-14?include_otc=true");

    api.daily_open_close("TSLA", "2024-02-14", Some(true)).await.unwrap();
    assert_eq!(rec.last(), "/v1/open-close/TSLA/2024-02-14?adjusted=true");
}

#[tokio::test]
async fn last_trade_and_quote_have_no_query() {
    let (api, rec) = setup();

    api.last_trade("NVDA").await.unwrap();
    assert_eq!(rec.last(), "/v2/last/trade/NVDA");

    api.last_quote("NVDA").await.unwrap();
    assert_eq!(rec.last(), "/v2/last/nbbo/NVDA");
}

#[tokio::test]
async fn trades_and_quotes_rename_range_filters() {
    let (api, rec) = setup();
    let options = TickParams {
        timestamp: Filter::between("2024-01-02".to_string(), "2024-01-03".to_string()),
        order: Some(Order::Asc),
        limit: Some(50_000),
        sort: Some("timestamp".to_string()),
    };

    api.trades("AAPL", &options).await.unwrap();
    assert_eq!(
        rec.last(),
        "/v3/trades/AAPL?timestamp.gte=2024-01-02&timestamp.lte=2024-01-03&order=asc&limit=50000&sort=timestamp"
    );

    api.quotes("AAPL", &TickParams { timestamp: Filter::exact("2024-01-02".to_string()), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(rec.last(), "/v3/quotes/AAPL?timestamp=2024-01-02");
}

#[tokio::test]
async fn single_window_indicators_share_parameters() {
    let (api, rec) = setup();
    let options = IndicatorParams {
        timespan: Some(Timespan::Day),
        adjusted: Some(true),
        window: Some(50),
        series_type: Some(SeriesType::Close),
        order: Some(Order::Desc),
        limit: Some(10),
        ..Default::default()
    };
    let query = "timespan=day&adjusted=true&window=50&series_type=close&order=desc&limit=10";

    api.sma("AAPL", &options).await.unwrap();
    assert_eq!(rec.last(), format!("/v1/indicators/sma/AAPL?{}", query));

    api.ema("AAPL", &options).await.unwrap();
    assert_eq!(rec.last(), format!("/v1/indicators/ema/AAPL?{}", query));

    api.rsi("AAPL", &options).await.unwrap();
    assert_eq!(rec.last(), format!("/v1/indicators/rsi/AAPL?{}", query));
}

#[tokio::test]
async fn indicator_timestamp_filter_leads_the_query() {
    let (api, rec) = setup();
    let options = IndicatorParams {
        timestamp: Filter::since("1704067200000".to_string()),
        window: Some(14),
        expand_underlying: Some(false),
        ..Default::default()
    };

    api.rsi("SPY", &options).await.unwrap();
    assert_eq!(
        rec.last(),
        "/v1/indicators/rsi/SPY?timestamp.gte=1704067200000&window=14&expand_underlying=false"
    );
}

#[tokio::test]
async fn macd_uses_three_windows() {
    let (api, rec) = setup();
    let options = MacdParams {
        timespan: Some(Timespan::Hour),
        short_window: Some(12),
        long_window: Some(26),
        signal_window: Some(9),
        series_type: Some(SeriesType::Close),
        ..Default::default()
    };

    api.macd("QQQ", &options).await.unwrap();
    assert_eq!(
        rec.last(),
        "/v1/indicators/macd/QQQ?timespan=hour&short_window=12&long_window=26&signal_window=9&series_type=close"
    );
}

#[tokio::test]
async fn snapshots() {
    let (api, rec) = setup();

    api.snapshot("AMD").await.unwrap();
    assert_eq!(rec.last(), "/v2/snapshot/locale/us/markets/stocks/tickers/AMD");

    let options = SnapshotAllParams {
        tickers: Some(vec!["AAPL".to_string(), "MSFT".to_string()]),
        include_otc: Some(false),
    };
    api.snapshot_all(&options).await.unwrap();
    assert_eq!(
        rec.last(),
        "/v2/snapshot/locale/us/markets/stocks/tickers?tickers=AAPL%2CMSFT&include_otc=false"
    );

    api.snapshot_all(&SnapshotAllParams { tickers: Some(vec![]), include_otc: None })
        .await
        .unwrap();
    assert_eq!(rec.last(), "/v2/snapshot/locale/us/markets/stocks/tickers");
}

#[tokio::test]
async fn gainers_and_losers() {
    let (api, rec) = setup();

    api.gainers(None).await.unwrap();
    assert_eq!(rec.last(), "/v2/snapshot/locale/us/markets/stocks/gainers");

    api.losers(Some(true)).await.unwrap();
    assert_eq!(rec.last(), "/v2/snapshot/locale/us/markets/stocks/losers?include_otc=true");
}

#[tokio::test]
async fn splits_filters_and_flags() {
    let (api, rec) = setup();
    let options = SplitsParams {
        ticker: Filter::exact("AAPL".to_string()),
        execution_date: Filter::since("2020-01-01".to_string()),
        reverse_split: Some(false),
        limit: Some(10),
        ..Default::default()
    };

    api.splits(&options).await.unwrap();
    assert_eq!(
        rec.last(),
        "/v3/reference/splits?ticker=AAPL&execution_date.gte=2020-01-01&reverse_split=false&limit=10"
    );

    api.splits(&SplitsParams::default()).await.unwrap();
    assert_eq!(rec.last(), "/v3/reference/splits");
}

#[tokio::test]
async fn dividends_filters_in_declared_order() {
    let (api, rec) = setup();
    let options = DividendsParams {
        ticker: Filter::exact("KO".to_string()),
        ex_dividend_date: Filter::before("2024-06-01".to_string()),
        pay_date: Filter::since("2023-01-01".to_string()),
        frequency: Some(4),
        dividend_type: Some("CD".to_string()),
        order: Some(Order::Desc),
        sort: Some("ex_dividend_date".to_string()),
        ..Default::default()
    };

    api.dividends(&options).await.unwrap();
    assert_eq!(
        rec.last(),
        "/v3/reference/dividends?ticker=KO&ex_dividend_date.lt=2024-06-01&pay_date.gte=2023-01-01\
         &frequency=4&dividend_type=CD&order=desc&sort=ex_dividend_date"
    );
}

#[tokio::test]
async fn ticker_details_and_market_status() {
    let (api, rec) = setup();

    api.ticker_details("GOOGL", Some("2023-06-30")).await.unwrap();
    assert_eq!(rec.last(), "/v3/reference/tickers/GOOGL?date=2023-06-30");

    api.ticker_details("GOOGL", None).await.unwrap();
    assert_eq!(rec.last(), "/v3/reference/tickers/GOOGL");

    api.market_status().await.unwrap();
    assert_eq!(rec.last(), "/v1/marketstatus/now");
}

#[tokio::test]
async fn path_segments_are_not_escaped() {
    let (api, rec) = setup();

    api.last_trade("BRK.B").await.unwrap();
    assert_eq!(rec.last(), "/v2/last/trade/BRK.B");

    api.snapshot("X:BTCUSD").await.unwrap();
    assert_eq!(rec.last(), "/v2/snapshot/locale/us/markets/stocks/tickers/X:BTCUSD");
}

#[tokio::test]
async fn responses_come_back_unmodified() {
    let (api, _rec) = setup();
    let body = api.previous_close("AAPL", Some(true)).await.unwrap();
    assert_eq!(body, json!({ "status": "OK", "request": "/v2/aggs/ticker/AAPL/prev?adjusted=true" }));
}
