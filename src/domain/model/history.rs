// Session-scoped, append-only price history

use std::collections::BTreeMap;

use super::{Exchange, HistorySample};

/// One row of the time-aligned chart projection
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedRow {
    pub time: String,
    pub binance: Option<f64>,
    pub coinbase: Option<f64>,
}

impl AlignedRow {
    fn new(time: String) -> Self {
        Self {
            time,
            binance: None,
            coinbase: None,
        }
    }

    pub fn price(&self, exchange: Exchange) -> Option<f64> {
        match exchange {
            Exchange::Binance => self.binance,
            Exchange::Coinbase => self.coinbase,
        }
    }

    fn set(&mut self, exchange: Exchange, price: f64) {
        match exchange {
            Exchange::Binance => self.binance = Some(price),
            Exchange::Coinbase => self.coinbase = Some(price),
        }
    }
}

/// Per-exchange price logs. Samples are only ever appended; nothing is
/// reordered, mutated or evicted while the session lives.
#[derive(Debug, Default)]
pub struct HistoryStore {
    logs: BTreeMap<Exchange, Vec<HistorySample>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample to the exchange's log and return the updated log
    pub fn append(&mut self, exchange: Exchange, mut sample: HistorySample) -> &[HistorySample] {
        sample.exchange = exchange;
        let entries = self.logs.entry(exchange).or_default();
        entries.push(sample);

        log::debug!("{} history now holds {} samples", exchange, entries.len());
        entries
    }

    pub fn all(&self, exchange: Exchange) -> &[HistorySample] {
        self.logs.get(&exchange).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn latest(&self, exchange: Exchange) -> Option<&HistorySample> {
        self.all(exchange).last()
    }

    pub fn len(&self) -> usize {
        self.logs.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Both logs interleaved on the time axis. Ties keep Binance first and
    /// each exchange's own insertion order.
    pub fn merged(&self) -> Vec<&HistorySample> {
        let mut samples: Vec<&HistorySample> = self.logs.values().flatten().collect();
        samples.sort_by(|a, b| {
            a.recorded_at
                .cmp(&b.recorded_at)
                .then(a.exchange.cmp(&b.exchange))
        });
        samples
    }

    /// Outer union of both logs keyed by wall-clock time, one column per exchange
    pub fn aligned(&self) -> Vec<AlignedRow> {
        let mut rows: Vec<AlignedRow> = Vec::new();

        for sample in self.merged() {
            let fits_last = rows
                .last()
                .map_or(false, |row| row.time == sample.time && row.price(sample.exchange).is_none());

            if !fits_last {
                rows.push(AlignedRow::new(sample.time.clone()));
            }
            if let Some(row) = rows.last_mut() {
                row.set(sample.exchange, sample.price);
            }
        }

        rows
    }
}
