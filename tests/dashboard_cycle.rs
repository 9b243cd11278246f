use std::collections::HashMap;
use std::io::{BufReader, Cursor, Read};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use arb_dashboard::adapter::{spawn_line_reader, DashboardCoordinator};
use arb_dashboard::application::service::EndpointResolver;
use arb_dashboard::application::usecase::{DashboardController, PriceFetcher, SessionState};
use arb_dashboard::domain::errors::{ArbitrageError, FetchError};
use arb_dashboard::domain::model::{Exchange, FetchResult, Pair, SentimentLabel};
use arb_dashboard::domain::repository::{QuoteTransport, RawResponse};
use arb_dashboard::domain::service::SentimentScorer;
use arb_dashboard::infrastructure::sentiment::LexiconScorer;
use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::time::Duration;

const BINANCE: &str = "http://binance.test";
const COINBASE: &str = "http://coinbase.test";

/// Serves canned replies per URL and counts requests
#[derive(Clone, Default)]
struct MockTransport {
    replies: Arc<Mutex<HashMap<String, RawResponse>>>,
    calls: Arc<AtomicUsize>,
}

impl MockTransport {
    fn reply(&self, url: &str, status: u16, body: &str) {
        self.replies.lock().unwrap().insert(
            url.to_string(),
            RawResponse {
                status,
                body: body.to_string(),
            },
        );
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuoteTransport for MockTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.replies
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Network(format!("connection refused: {}", url)))
    }
}

fn btc_urls() -> (String, String) {
    let [binance, coinbase] = EndpointResolver::new(BINANCE, COINBASE).resolve(Pair::Btc);
    (binance.url, coinbase.url)
}

fn eth_urls() -> (String, String) {
    let [binance, coinbase] = EndpointResolver::new(BINANCE, COINBASE).resolve(Pair::Eth);
    (binance.url, coinbase.url)
}

fn healthy_transport() -> MockTransport {
    let transport = MockTransport::default();
    let (b, c) = btc_urls();
    transport.reply(&b, 200, r#"{"symbol":"BTCUSDT","price":"100.00"}"#);
    transport.reply(&c, 200, r#"{"data":{"amount":"105.00","base":"BTC","currency":"USD"}}"#);
    let (b, c) = eth_urls();
    transport.reply(&b, 200, r#"{"symbol":"ETHUSDT","price":"3000.00"}"#);
    transport.reply(&c, 200, r#"{"data":{"amount":"3001.50","base":"ETH","currency":"USD"}}"#);
    transport
}

fn controller(transport: MockTransport) -> DashboardController<MockTransport, LexiconScorer> {
    DashboardController::new(
        EndpointResolver::new(BINANCE, COINBASE),
        PriceFetcher::with_ttl(transport, Duration::from_secs(60)),
        SentimentScorer::new(LexiconScorer::new()),
    )
}

#[tokio::test]
async fn cycle_reports_spread_and_headline_sentiment() {
    let transport = healthy_transport();
    let mut controller = controller(transport.clone());
    let mut session = SessionState::default();

    let outcome = controller.refresh(&mut session).await;

    assert_eq!(outcome.price(Exchange::Binance), Some(100.0));
    assert_eq!(outcome.price(Exchange::Coinbase), Some(105.0));
    let report = outcome.arbitrage.clone().unwrap();
    assert!((report.percentage_diff - 5.0).abs() < 1e-9);
    assert!(report.threshold_exceeded);
    assert_eq!(outcome.sentiment.map(|s| s.label), Some(SentimentLabel::Positive));
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn failing_exchange_does_not_affect_the_other() {
    let transport = healthy_transport();
    let (_, coinbase) = btc_urls();
    transport.reply(&coinbase, 500, "Internal Server Error");
    let mut controller = controller(transport);
    let mut session = SessionState::default();

    let outcome = controller.refresh(&mut session).await;

    assert!(outcome.quotes[0].1.is_ok());
    assert!(matches!(
        outcome.quotes[1].1,
        FetchResult::Failed(FetchError::Network(_))
    ));
    assert_eq!(
        outcome.arbitrage,
        Err(ArbitrageError::MissingPrice("Coinbase".to_string()))
    );
    assert_eq!(session.history.all(Exchange::Binance).len(), 1);
    assert!(session.history.all(Exchange::Coinbase).is_empty());
}

#[tokio::test]
async fn repeated_cycles_grow_history_in_order() {
    let transport = healthy_transport();
    let mut controller = controller(transport.clone());
    let mut session = SessionState::default();

    for _ in 0..4 {
        controller.refresh(&mut session).await;
    }

    // Cached within the TTL window: only the first cycle hits the network
    assert_eq!(transport.calls(), 2);
    let binance = session.history.all(Exchange::Binance);
    assert_eq!(binance.len(), 4);
    assert!(binance.windows(2).all(|w| w[0].recorded_at <= w[1].recorded_at));
    assert_eq!(session.history.merged().len(), 8);
}

#[tokio::test]
async fn negative_headline_is_labelled_negative() {
    let mut controller = controller(healthy_transport());
    let mut session = SessionState::new(Pair::Btc, 1.0, "Bitcoin crashes amid panic selling", false);

    let outcome = controller.refresh(&mut session).await;
    assert_eq!(outcome.sentiment.map(|s| s.label), Some(SentimentLabel::Negative));
    assert_eq!(
        controller.score_headline("Exchange opens a new office").map(|s| s.label),
        Some(SentimentLabel::Neutral)
    );
}

#[tokio::test]
async fn commands_drive_refreshes_until_quit() {
    let transport = healthy_transport();
    let (tx, rx) = mpsc::channel(8);
    for line in ["threshold 10", "pair eth", "bogus", "quit", "refresh"] {
        tx.send(line.to_string()).await.unwrap();
    }

    let mut coordinator = DashboardCoordinator::new(
        controller(transport.clone()),
        SessionState::default(),
        rx,
        Vec::new(),
        Duration::from_secs(60),
        20,
    );
    coordinator.run().await.unwrap();

    // Initial draw plus one per accepted control change
    assert_eq!(coordinator.cycles(), 3);
    assert_eq!(coordinator.session().pair, Pair::Eth);
    assert_eq!(coordinator.session().threshold_percent, 10.0);
    // BTC fetched once, threshold change served from cache, ETH fetched once
    assert_eq!(transport.calls(), 4);

    let text = String::from_utf8(coordinator.output().clone()).unwrap();
    assert!(text.contains("(ETH)"));
    assert!(text.contains("Unknown command: bogus"));
    assert!(text.contains("Arbitrage Opportunity Detected!"));
}

#[tokio::test(start_paused = true)]
async fn auto_refresh_waits_full_period_before_applying_toggle() {
    let transport = healthy_transport();
    let (tx, rx) = mpsc::channel(8);
    tx.send("auto off".to_string()).await.unwrap();
    drop(tx);

    let mut session = SessionState::default();
    session.auto_refresh = true;

    let mut coordinator = DashboardCoordinator::new(
        controller(transport.clone()),
        session,
        rx,
        Vec::new(),
        Duration::from_secs(60),
        20,
    );

    let started = tokio::time::Instant::now();
    coordinator.run().await.unwrap();

    assert!(started.elapsed() >= Duration::from_secs(60));
    assert_eq!(coordinator.cycles(), 2);
    assert!(!coordinator.session().auto_refresh);
    // Cache expired during the wait, so the second cycle refetched
    assert_eq!(transport.calls(), 4);
    assert_eq!(coordinator.session().history.all(Exchange::Coinbase).len(), 2);
}

/// Terminal-like input: serves its text, then blocks until the gate closes
struct HeldOpenInput {
    text: Cursor<Vec<u8>>,
    gate: std::sync::mpsc::Receiver<()>,
}

impl Read for HeldOpenInput {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.text.read(buf)?;
        if n > 0 {
            return Ok(n);
        }
        // Sender dropped means end of input
        let _ = self.gate.recv();
        Ok(0)
    }
}

#[tokio::test]
async fn line_reader_forwards_lines_until_eof() {
    let mut rx = spawn_line_reader(Cursor::new("pair eth\n\nquit\n"));

    assert_eq!(rx.recv().await.as_deref(), Some("pair eth"));
    assert_eq!(rx.recv().await.as_deref(), Some(""));
    assert_eq!(rx.recv().await.as_deref(), Some("quit"));
    assert_eq!(rx.recv().await, None);
}

#[tokio::test]
async fn quit_returns_while_input_is_still_open() {
    let (gate, held) = std::sync::mpsc::channel::<()>();
    let input = HeldOpenInput {
        text: Cursor::new(b"quit\n".to_vec()),
        gate: held,
    };

    let mut coordinator = DashboardCoordinator::new(
        controller(healthy_transport()),
        SessionState::default(),
        spawn_line_reader(BufReader::new(input)),
        Vec::new(),
        Duration::from_secs(60),
        20,
    );

    let finished = tokio::time::timeout(Duration::from_secs(5), coordinator.run()).await;
    assert!(matches!(finished, Ok(Ok(()))));
    assert_eq!(coordinator.cycles(), 1);
    drop(gate);
}

#[tokio::test(start_paused = true)]
async fn failing_feed_is_not_retried_within_the_cache_window() {
    let transport = healthy_transport();
    let (binance, _) = btc_urls();
    transport.reply(&binance, 503, "Service Unavailable");
    let mut controller = controller(transport.clone());
    let mut session = SessionState::default();

    for _ in 0..3 {
        let outcome = controller.refresh(&mut session).await;
        assert!(!outcome.quotes[0].1.is_ok());
        tokio::time::advance(Duration::from_secs(10)).await;
    }
    assert_eq!(transport.calls(), 2);

    tokio::time::advance(Duration::from_secs(30)).await;
    controller.refresh(&mut session).await;
    assert_eq!(transport.calls(), 4);
}
