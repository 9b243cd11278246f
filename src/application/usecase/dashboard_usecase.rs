// Dashboard refresh cycle

use chrono::Local;

use crate::application::service::EndpointResolver;
use crate::application::usecase::PriceFetcher;
use crate::domain::errors::ArbitrageResult;
use crate::domain::model::{
    ArbitrageReport, Exchange, FetchResult, HistorySample, HistoryStore, Pair, SentimentResult,
};
use crate::domain::repository::QuoteTransport;
use crate::domain::service::{ArbitrageCalculator, PolarityScorer, SentimentScorer};

pub const DEFAULT_HEADLINE: &str = "Bitcoin rallies as investors anticipate new market trends";

/// Everything that lives for one interactive session: the user's controls
/// and the accumulated price history.
#[derive(Debug)]
pub struct SessionState {
    pub pair: Pair,
    pub threshold_percent: f64,
    pub headline: String,
    pub auto_refresh: bool,
    pub history: HistoryStore,
}

impl SessionState {
    pub fn new(pair: Pair, threshold_percent: f64, headline: &str, auto_refresh: bool) -> Self {
        Self {
            pair,
            threshold_percent,
            headline: headline.to_string(),
            auto_refresh,
            history: HistoryStore::new(),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(
            Pair::Btc,
            crate::domain::service::DEFAULT_THRESHOLD_PERCENT,
            DEFAULT_HEADLINE,
            false,
        )
    }
}

/// Result of one refresh, ready for rendering
#[derive(Debug, Clone)]
pub struct CycleOutcome {
    pub pair: Pair,
    /// One entry per exchange, Binance first
    pub quotes: Vec<(Exchange, FetchResult)>,
    pub arbitrage: ArbitrageResult<ArbitrageReport>,
    pub sentiment: Option<SentimentResult>,
}

impl CycleOutcome {
    pub fn price(&self, exchange: Exchange) -> Option<f64> {
        price_of(&self.quotes, exchange)
    }
}

fn price_of(quotes: &[(Exchange, FetchResult)], exchange: Exchange) -> Option<f64> {
    quotes
        .iter()
        .find(|(e, _)| *e == exchange)
        .and_then(|(_, result)| result.price())
}

pub struct DashboardController<T: QuoteTransport, P: PolarityScorer> {
    resolver: EndpointResolver,
    fetcher: PriceFetcher<T>,
    calculator: ArbitrageCalculator,
    scorer: SentimentScorer<P>,
}

impl<T: QuoteTransport, P: PolarityScorer> DashboardController<T, P> {
    pub fn new(resolver: EndpointResolver, fetcher: PriceFetcher<T>, scorer: SentimentScorer<P>) -> Self {
        Self {
            resolver,
            fetcher,
            calculator: ArbitrageCalculator::new(),
            scorer,
        }
    }

    /// Run one full cycle: fetch both prices, record successes, evaluate the
    /// spread and score the current headline.
    pub async fn refresh(&mut self, session: &mut SessionState) -> CycleOutcome {
        let mut quotes = Vec::with_capacity(Exchange::ALL.len());

        for endpoint in self.resolver.resolve(session.pair) {
            let result = self.fetcher.fetch(&endpoint).await;

            // Stamped at append time; a cached quote still adds a new point
            if let FetchResult::Ok(quote) = &result {
                let sample = HistorySample::new(quote.exchange, quote.price, Local::now());
                session.history.append(quote.exchange, sample);
            }
            quotes.push((endpoint.exchange, result));
        }

        let arbitrage = self.calculator.evaluate_between(
            (Exchange::Binance, price_of(&quotes, Exchange::Binance)),
            (Exchange::Coinbase, price_of(&quotes, Exchange::Coinbase)),
            session.threshold_percent,
        );

        let outcome = CycleOutcome {
            pair: session.pair,
            quotes,
            arbitrage,
            sentiment: self.score_headline(&session.headline),
        };

        match &outcome.arbitrage {
            Ok(report) => log::info!(
                "{} spread {:.2} ({:.2}%){}",
                session.pair,
                report.absolute_diff,
                report.percentage_diff,
                if report.threshold_exceeded { ", above threshold" } else { "" }
            ),
            Err(e) => log::info!("{} spread unavailable: {}", session.pair, e),
        }

        outcome
    }

    /// Score a headline; blank input is not scored
    pub fn score_headline(&self, headline: &str) -> Option<SentimentResult> {
        if headline.trim().is_empty() {
            return None;
        }
        Some(self.scorer.score(headline))
    }
}
