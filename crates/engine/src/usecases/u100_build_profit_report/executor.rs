use std::sync::Arc;

use contracts::domain::a001_order_line::RawOrderLine;
use contracts::enums::FetchFailurePolicy;
use contracts::usecases::u100_build_profit_report::{
    BuildReportRequest, ReportPhase, ReportSnapshot,
};
use thiserror::Error;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::record_source::OrderLineSource;
use crate::projections::p100_product_profit;
use crate::shared::config::get_config;

/// Ошибка цикла построения отчёта
#[derive(Debug, Error)]
pub enum RefreshError {
    /// Запрос не прошёл валидацию; цикл не запускался
    #[error("invalid report request: {0}")]
    InvalidRequest(anyhow::Error),
    /// Цикл отменён более новым запросом; его результат отброшен
    #[error("refresh superseded by a newer request")]
    Superseded,
    /// Загрузка магазина завершилась ошибкой при политике abort
    #[error("store {store_id} fetch failed: {cause}")]
    StoreFetch {
        store_id: String,
        cause: anyhow::Error,
    },
}

struct ExecutorState {
    phase: ReportPhase,
    /// Активный цикл: (id, токен отмены)
    current: Option<(Uuid, CancellationToken)>,
    /// Последний опубликованный снимок
    snapshot: Option<ReportSnapshot>,
}

/// Executor цикла «загрузка → агрегация → публикация»
///
/// Машина состояний: Idle → Fetching → Aggregating → Ready (Failed при
/// фатальной ошибке). Новый refresh отменяет активный цикл; до Ready
/// доходит результат не более чем одного цикла на пользовательский
/// запрос, отменённые результаты никогда не публикуются и не
/// смешиваются с более новыми.
pub struct ReportExecutor {
    source: Arc<dyn OrderLineSource>,
    state: Mutex<ExecutorState>,
}

impl ReportExecutor {
    pub fn new(source: Arc<dyn OrderLineSource>) -> Self {
        Self {
            source,
            state: Mutex::new(ExecutorState {
                phase: ReportPhase::Idle,
                current: None,
                snapshot: None,
            }),
        }
    }

    /// Текущая фаза машины состояний
    pub async fn phase(&self) -> ReportPhase {
        self.state.lock().await.phase
    }

    /// Последний опубликованный снимок (если цикл доходил до Ready/Failed)
    pub async fn snapshot(&self) -> Option<ReportSnapshot> {
        self.state.lock().await.snapshot.clone()
    }

    /// Выполнить цикл построения отчёта
    ///
    /// Загружает строки всех магазинов, затем агрегирует одним проходом —
    /// частичная/потоковая агрегация не поддерживается, группировке
    /// отправлений нужен полный состав групп. Ретраев нет; фатальная
    /// ошибка публикует пустой валидный снимок вместо устаревших данных.
    pub async fn refresh(
        &self,
        request: BuildReportRequest,
    ) -> Result<ReportSnapshot, RefreshError> {
        request.validate().map_err(RefreshError::InvalidRequest)?;

        let (cycle_id, token) = self.begin_cycle().await;
        tracing::info!(
            "Report cycle {} started: {} store(s), {} — {}",
            cycle_id,
            request.store_ids.len(),
            request.date_from,
            request.date_to
        );

        let policy = request
            .failure_policy
            .unwrap_or_else(|| get_config().failure_policy());

        let mut lines: Vec<RawOrderLine> = Vec::new();
        let mut skipped_stores: Vec<String> = Vec::new();

        for store_id in &request.store_ids {
            if token.is_cancelled() {
                tracing::debug!("Report cycle {} cancelled during fetch", cycle_id);
                return Err(RefreshError::Superseded);
            }

            match self
                .source
                .fetch_order_lines(store_id, request.date_from, request.date_to)
                .await
            {
                Ok(batch) => {
                    tracing::debug!(
                        "Store {}: fetched {} order lines",
                        store_id,
                        batch.len()
                    );
                    lines.extend(batch);
                }
                Err(e) => match policy {
                    FetchFailurePolicy::SkipStore => {
                        tracing::warn!("Store {} fetch failed, skipping: {}", store_id, e);
                        skipped_stores.push(store_id.clone());
                    }
                    FetchFailurePolicy::Abort => {
                        tracing::error!("Store {} fetch failed, aborting cycle: {}", store_id, e);
                        self.publish_failed(cycle_id, &token).await;
                        return Err(RefreshError::StoreFetch {
                            store_id: store_id.clone(),
                            cause: e,
                        });
                    }
                },
            }
        }

        // Граница загрузка → агрегация: отменённый цикл дальше не идёт
        if !self.enter_aggregating(cycle_id, &token).await {
            tracing::debug!("Report cycle {} superseded before aggregation", cycle_id);
            return Err(RefreshError::Superseded);
        }

        let rows = p100_product_profit::service::build(&lines, request.window_days());

        let snapshot = ReportSnapshot {
            cycle_id,
            generated_at: chrono::Utc::now(),
            rows,
            skipped_stores,
        };

        if !self.publish_ready(&snapshot, &token).await {
            tracing::debug!("Report cycle {} superseded before publish", cycle_id);
            return Err(RefreshError::Superseded);
        }

        tracing::info!(
            "Report cycle {} ready: {} rows, {} store(s) skipped",
            cycle_id,
            snapshot.rows.len(),
            snapshot.skipped_stores.len()
        );
        Ok(snapshot)
    }

    /// Открыть новый цикл, отменив предыдущий
    async fn begin_cycle(&self) -> (Uuid, CancellationToken) {
        let mut state = self.state.lock().await;
        if let Some((prev_id, prev_token)) = state.current.take() {
            tracing::debug!("Cancelling in-flight report cycle {}", prev_id);
            prev_token.cancel();
        }
        let cycle_id = Uuid::new_v4();
        let token = CancellationToken::new();
        state.current = Some((cycle_id, token.clone()));
        state.phase = ReportPhase::Fetching;
        (cycle_id, token)
    }

    /// Перейти в Aggregating, если цикл всё ещё актуален
    async fn enter_aggregating(&self, cycle_id: Uuid, token: &CancellationToken) -> bool {
        let mut state = self.state.lock().await;
        if token.is_cancelled() || !is_current(&state, cycle_id) {
            return false;
        }
        state.phase = ReportPhase::Aggregating;
        true
    }

    /// Опубликовать готовый снимок, если цикл всё ещё актуален
    async fn publish_ready(&self, snapshot: &ReportSnapshot, token: &CancellationToken) -> bool {
        let mut state = self.state.lock().await;
        if token.is_cancelled() || !is_current(&state, snapshot.cycle_id) {
            return false;
        }
        state.snapshot = Some(snapshot.clone());
        state.phase = ReportPhase::Ready;
        state.current = None;
        true
    }

    /// Опубликовать пустой валидный снимок при фатальной ошибке,
    /// чтобы представления не показывали устаревшие данные
    async fn publish_failed(&self, cycle_id: Uuid, token: &CancellationToken) {
        let mut state = self.state.lock().await;
        if token.is_cancelled() || !is_current(&state, cycle_id) {
            return;
        }
        state.snapshot = Some(ReportSnapshot::empty(cycle_id));
        state.phase = ReportPhase::Failed;
        state.current = None;
    }
}

fn is_current(state: &ExecutorState, cycle_id: Uuid) -> bool {
    state
        .current
        .as_ref()
        .map(|(id, _)| *id == cycle_id)
        .unwrap_or(false)
}
