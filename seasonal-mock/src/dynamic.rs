use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use seasonal_core::{HistoryWindow, PriceSource, RawPriceTable, SeasonalError, Symbol};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(SeasonalError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    history_rules: HashMap<Symbol, MockBehavior<RawPriceTable>>,
    calls: HashMap<Symbol, usize>,
    windows: Vec<HistoryWindow>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `history` calls for a specific symbol.
    pub async fn set_history_behavior(
        &self,
        symbol: Symbol,
        behavior: MockBehavior<RawPriceTable>,
    ) {
        let mut guard = self.state.lock().await;
        guard.history_rules.insert(symbol, behavior);
    }

    /// Number of `history` calls received for `symbol`.
    pub async fn calls(&self, symbol: &Symbol) -> usize {
        let guard = self.state.lock().await;
        guard.calls.get(symbol).copied().unwrap_or(0)
    }

    /// Number of `history` calls received for any symbol.
    pub async fn total_calls(&self) -> usize {
        let guard = self.state.lock().await;
        guard.calls.values().sum()
    }

    /// Windows requested so far, in call order.
    pub async fn windows(&self) -> Vec<HistoryWindow> {
        let guard = self.state.lock().await;
        guard.windows.clone()
    }

    /// Clear all configured behaviors and request logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.history_rules.clear();
        guard.calls.clear();
        guard.windows.clear();
    }
}

/// A price source that defers all behavior to an external controller.
///
/// Symbols without a configured behavior are reported as not found.
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<dyn PriceSource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn PriceSource>, controller)
    }
}

#[async_trait]
impl PriceSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    async fn history(
        &self,
        symbol: &Symbol,
        window: HistoryWindow,
    ) -> Result<RawPriceTable, SeasonalError> {
        // Record the call and snapshot the behavior without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            *guard.calls.entry(symbol.clone()).or_insert(0) += 1;
            guard.windows.push(window);
            guard.history_rules.get(symbol).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(table)) => Ok(table),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Err(SeasonalError::not_found(format!("history for {symbol}"))),
        }
    }
}
