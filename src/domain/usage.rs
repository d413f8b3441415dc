/// Usage accounting and cost estimation
///
/// Each pipeline instance owns exactly one ledger. Totals accumulate across
/// every completion call made in the session and are never reset or persisted.
use serde::Serialize;

/// Per-1K-token rates in USD
#[derive(Debug, Clone, Copy)]
struct ModelRates {
    input: f64,
    output: f64,
}

/// Static price table keyed by model id. A model missing from the table
/// prices at zero rather than failing the run.
const PRICING: &[(&str, ModelRates)] = &[
    ("gpt-3.5-turbo", ModelRates { input: 0.0015, output: 0.002 }),
    ("gpt-4", ModelRates { input: 0.03, output: 0.06 }),
    ("gpt-4-turbo", ModelRates { input: 0.01, output: 0.03 }),
    ("claude-3-5-sonnet", ModelRates { input: 0.003, output: 0.015 }),
    ("claude-3-haiku", ModelRates { input: 0.00025, output: 0.00125 }),
];

/// Running token and call totals for one session
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct UsageTotals {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub call_count: u64,
}

impl UsageTotals {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }
}

/// Priced cost estimate for a session
#[derive(Debug, Clone, Serialize)]
pub struct CostEstimate {
    pub model: String,
    pub input_cost: f64,
    pub output_cost: f64,
    pub total_cost: f64,
}

/// Accumulates usage across the completion calls of one pipeline instance
#[derive(Debug, Default)]
pub struct UsageLedger {
    totals: UsageTotals,
}

impl UsageLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one successful completion call; never fails
    pub fn record_call(&mut self, input_tokens: u64, output_tokens: u64) {
        self.totals.input_tokens += input_tokens;
        self.totals.output_tokens += output_tokens;
        self.totals.call_count += 1;
    }

    pub fn totals(&self) -> UsageTotals {
        self.totals
    }

    /// Price the accumulated usage for a model
    pub fn cost_estimate(&self, model: &str) -> CostEstimate {
        let (input_rate, output_rate) = PRICING
            .iter()
            .find(|(id, _)| *id == model)
            .map(|(_, rates)| (rates.input, rates.output))
            .unwrap_or((0.0, 0.0));

        let input_cost = self.totals.input_tokens as f64 / 1000.0 * input_rate;
        let output_cost = self.totals.output_tokens as f64 / 1000.0 * output_rate;

        CostEstimate {
            model: model.to_string(),
            input_cost,
            output_cost,
            total_cost: input_cost + output_cost,
        }
    }
}
