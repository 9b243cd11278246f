// src/adapter/renderer.rs
// Plain-text dashboard output

use std::fmt;

use crate::application::usecase::CycleOutcome;
use crate::domain::model::{Exchange, FetchResult, HistoryStore};

pub const ARBITRAGE_BANNER: &str = "Arbitrage Opportunity Detected!";

/// One rendered frame of the dashboard
pub struct DashboardView<'a> {
    pub outcome: &'a CycleOutcome,
    pub history: &'a HistoryStore,
    pub threshold_percent: f64,
    pub history_rows: usize,
}

impl<'a> DashboardView<'a> {
    fn write_prices(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Live Cryptocurrency Prices")?;
        writeln!(f, "{:<10} {:>14}", "Exchange", "Price")?;
        for (exchange, result) in &self.outcome.quotes {
            match result {
                FetchResult::Ok(quote) => writeln!(f, "{:<10} {:>14.2}", exchange, quote.price)?,
                FetchResult::Failed(e) => writeln!(f, "{:<10} {:>14}  ({})", exchange, "-", e)?,
            }
        }
        Ok(())
    }

    fn write_arbitrage(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Arbitrage Opportunity")?;
        match &self.outcome.arbitrage {
            Ok(report) => {
                writeln!(
                    f,
                    "Price Difference: ${:.2} ({:.2}%)",
                    report.absolute_diff, report.percentage_diff
                )?;
                if report.threshold_exceeded {
                    writeln!(
                        f,
                        "*** {} (threshold {:.2}%) ***",
                        ARBITRAGE_BANNER, self.threshold_percent
                    )?;
                }
            }
            Err(e) => writeln!(f, "No data: {}", e)?,
        }
        Ok(())
    }

    fn write_history(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = self.history.aligned();
        let shown = rows.len().min(self.history_rows);

        writeln!(f, "Price History ({} of {} points)", shown, rows.len())?;
        writeln!(f, "{:<10} {:>14} {:>14}", "Time", Exchange::Binance, Exchange::Coinbase)?;
        for row in &rows[rows.len() - shown..] {
            writeln!(
                f,
                "{:<10} {:>14} {:>14}",
                row.time,
                cell(row.binance),
                cell(row.coinbase)
            )?;
        }
        Ok(())
    }

    fn write_sentiment(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Market Sentiment")?;
        match &self.outcome.sentiment {
            Some(result) => {
                writeln!(f, "Sentiment Score: {:.4}", result.compound_score)?;
                writeln!(f, "{}", result.label.banner())?;
            }
            None => writeln!(f, "No headline set")?,
        }
        Ok(())
    }
}

fn cell(price: Option<f64>) -> String {
    price.map_or_else(|| "-".to_string(), |p| format!("{:.2}", p))
}

impl<'a> fmt::Display for DashboardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "=== Crypto Arbitrage & Sentiment Dashboard ({}) ===", self.outcome.pair)?;
        writeln!(f)?;
        self.write_prices(f)?;
        writeln!(f)?;
        self.write_arbitrage(f)?;
        writeln!(f)?;
        self.write_history(f)?;
        writeln!(f)?;
        self.write_sentiment(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{ArbitrageError, FetchError};
    use crate::domain::model::{
        ArbitrageReport, HistorySample, Pair, PriceQuote, SentimentLabel, SentimentResult,
    };
    use chrono::{Local, TimeZone};

    fn quote(exchange: Exchange, price: f64) -> FetchResult {
        FetchResult::Ok(PriceQuote {
            exchange,
            pair: Pair::Btc,
            price,
            fetched_at: Local::now(),
        })
    }

    #[test]
    fn test_render_full_frame() {
        let outcome = CycleOutcome {
            pair: Pair::Btc,
            quotes: vec![
                (Exchange::Binance, quote(Exchange::Binance, 100.0)),
                (Exchange::Coinbase, quote(Exchange::Coinbase, 105.0)),
            ],
            arbitrage: Ok(ArbitrageReport {
                absolute_diff: 5.0,
                percentage_diff: 5.0,
                threshold_exceeded: true,
            }),
            sentiment: Some(SentimentResult {
                compound_score: 0.44,
                label: SentimentLabel::Positive,
            }),
        };
        let mut history = HistoryStore::new();
        let t = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        history.append(Exchange::Binance, HistorySample::new(Exchange::Binance, 100.0, t));

        let text = DashboardView {
            outcome: &outcome,
            history: &history,
            threshold_percent: 1.0,
            history_rows: 20,
        }
        .to_string();

        assert!(text.contains("(BTC)"));
        assert!(text.contains("Price Difference: $5.00 (5.00%)"));
        assert!(text.contains(ARBITRAGE_BANNER));
        assert!(text.contains("03:04:05"));
        assert!(text.contains("Sentiment Score: 0.4400"));
        assert!(text.contains("Overall Positive Sentiment"));
    }

    #[test]
    fn test_render_failures_and_no_data() {
        let outcome = CycleOutcome {
            pair: Pair::Eth,
            quotes: vec![
                (
                    Exchange::Binance,
                    FetchResult::Failed(FetchError::UnexpectedResponseShape("Unexpected JSON format".into())),
                ),
                (Exchange::Coinbase, quote(Exchange::Coinbase, 3000.0)),
            ],
            arbitrage: Err(ArbitrageError::MissingPrice("Binance".into())),
            sentiment: None,
        };
        let history = HistoryStore::new();

        let text = DashboardView {
            outcome: &outcome,
            history: &history,
            threshold_percent: 1.0,
            history_rows: 20,
        }
        .to_string();

        assert!(text.contains("Unexpected JSON format"));
        assert!(text.contains("3000.00"));
        assert!(text.contains("No data: Missing price for Binance"));
        assert!(!text.contains(ARBITRAGE_BANNER));
        assert!(text.contains("No headline set"));
        assert!(text.contains("0 of 0 points"));
    }

    #[test]
    fn test_history_is_truncated_to_latest_rows() {
        let outcome = CycleOutcome {
            pair: Pair::Btc,
            quotes: Vec::new(),
            arbitrage: Err(ArbitrageError::MissingPrice("Binance".into())),
            sentiment: None,
        };
        let mut history = HistoryStore::new();
        let start = Local.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap();
        for i in 0..5 {
            let at = start + chrono::Duration::minutes(i);
            history.append(Exchange::Binance, HistorySample::new(Exchange::Binance, 1.0, at));
        }

        let text = DashboardView {
            outcome: &outcome,
            history: &history,
            threshold_percent: 1.0,
            history_rows: 2,
        }
        .to_string();

        assert!(text.contains("2 of 5 points"));
        assert!(text.contains("10:04:00"));
        assert!(!text.contains("10:02:00"));
    }
}
