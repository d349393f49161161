use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use serde::Serialize;

/// Electricity price collaborator. The estimator itself takes a plain price
/// parameter; this module supplies one, with a time-boxed in-memory cache in
/// front of whatever source is configured and a static fallback when the
/// source fails.

/// Current Dutch consumer price level, in € per kWh, including VAT and taxes.
pub const CURRENT_ELECTRICITY_PRICE_EUR_PER_KWH: f64 = 0.34;

/// Price used when a configured source cannot be reached.
pub const FALLBACK_ELECTRICITY_PRICE_EUR_PER_KWH: f64 = 0.30;

const CACHE_VALIDITY_SECONDS: i64 = 3_600;

/// A price together with when it was retrieved.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PriceQuote {
    pub price_eur_per_kwh: f64,
    pub retrieved_at: DateTime<Utc>,
}

pub trait PriceSource {
    fn fetch(&self) -> anyhow::Result<PriceQuote>;
}

/// A source returning a fixed price level, standing in for a live market
/// feed.
#[derive(Clone, Copy, Debug)]
pub struct StaticPriceSource {
    price_eur_per_kwh: f64,
}

impl StaticPriceSource {
    pub fn new(price_eur_per_kwh: f64) -> Self {
        Self { price_eur_per_kwh }
    }
}

impl Default for StaticPriceSource {
    fn default() -> Self {
        Self::new(CURRENT_ELECTRICITY_PRICE_EUR_PER_KWH)
    }
}

impl PriceSource for StaticPriceSource {
    fn fetch(&self) -> anyhow::Result<PriceQuote> {
        Ok(PriceQuote {
            price_eur_per_kwh: self.price_eur_per_kwh,
            retrieved_at: Utc::now(),
        })
    }
}

/// Serves a cached quote while it is younger than the validity window,
/// refetches once it has aged out, and falls back to
/// [`FALLBACK_ELECTRICITY_PRICE_EUR_PER_KWH`] when the underlying source
/// fails.
#[derive(Debug)]
pub struct CachedPriceSource<S: PriceSource> {
    source: S,
    max_age: Duration,
    cached: Mutex<Option<PriceQuote>>,
}

impl<S: PriceSource> CachedPriceSource<S> {
    pub fn new(source: S) -> Self {
        Self::with_max_age(source, Duration::seconds(CACHE_VALIDITY_SECONDS))
    }

    pub fn with_max_age(source: S, max_age: Duration) -> Self {
        Self {
            source,
            max_age,
            cached: Mutex::new(None),
        }
    }

    /// The current quote, from cache when fresh enough.
    pub fn current(&self) -> PriceQuote {
        let mut cached = self.cached.lock();
        if let Some(quote) = *cached {
            if Utc::now() - quote.retrieved_at < self.max_age {
                return quote;
            }
        }

        match self.source.fetch() {
            Ok(quote) => {
                *cached = Some(quote);
                quote
            }
            Err(error) => {
                tracing::warn!("price fetch failed, using fallback price: {error}");
                PriceQuote {
                    price_eur_per_kwh: FALLBACK_ELECTRICITY_PRICE_EUR_PER_KWH,
                    retrieved_at: Utc::now(),
                }
            }
        }
    }
}
