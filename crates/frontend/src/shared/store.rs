//! Хранилище списка сущностей одного типа.
//!
//! Все страницы работают с сервером только через `EntityStore`: он держит список,
//! счётчик запросов в полёте и слот последней ошибки, а результаты запросов
//! вклеивает в список по ключу сущности.

use crate::shared::http::ApiError;
use contracts::domain::common::Entity;
use leptos::prelude::*;
use std::future::Future;

#[derive(Debug, Clone, PartialEq)]
pub struct StoreState<T> {
    pub items: Vec<T>,
    /// Запросы в полёте; флаг загрузки снимается только когда завершились все
    pub pending: usize,
    /// Последняя ошибка (побеждает последняя)
    pub error: Option<String>,
    /// Номер последней начатой загрузки списка
    pub generation: u64,
}

impl<T> Default for StoreState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pending: 0,
            error: None,
            generation: 0,
        }
    }
}

impl<T> StoreState<T> {
    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }
}

pub struct EntityStore<T>
where
    T: Entity + Clone + Send + Sync + 'static,
{
    state: RwSignal<StoreState<T>>,
}

impl<T> Clone for EntityStore<T>
where
    T: Entity + Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EntityStore<T> where T: Entity + Clone + Send + Sync + 'static {}

impl<T> Default for EntityStore<T>
where
    T: Entity + Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EntityStore<T>
where
    T: Entity + Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(StoreState::default()),
        }
    }

    // ------------------------------------------------------------------
    // Reactive reads (for views)
    // ------------------------------------------------------------------

    pub fn items(&self) -> Vec<T> {
        self.state.with(|s| s.items.clone())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    // ------------------------------------------------------------------
    // Untracked reads (for commands and tests)
    // ------------------------------------------------------------------

    pub fn snapshot(&self) -> StoreState<T> {
        self.state.get_untracked()
    }

    pub fn items_untracked(&self) -> Vec<T> {
        self.state.with_untracked(|s| s.items.clone())
    }

    pub fn find(&self, key: T::Key) -> Option<T> {
        self.state
            .with_untracked(|s| s.items.iter().find(|item| item.key() == key).cloned())
    }

    /// Вернуть пустое состояние (конец сессии)
    pub fn reset(&self) {
        log::debug!("{}: store reset", T::element_name());
        self.state.set(StoreState::default());
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Заменить список результатом запроса.
    ///
    /// Если пока запрос был в полёте началась другая загрузка, результат
    /// (и успех, и ошибка) отбрасывается. При ошибке прежний список остаётся.
    pub async fn load<F>(&self, request: F, fallback: &str)
    where
        F: Future<Output = Result<Vec<T>, ApiError>>,
    {
        let mut generation = 0;
        self.state.update(|s| {
            s.generation += 1;
            s.pending += 1;
            s.error = None;
            generation = s.generation;
        });
        log::debug!("{}: load #{} started", T::element_name(), generation);

        let result = request.await;

        self.state.update(|s| {
            s.pending = s.pending.saturating_sub(1);
            if s.generation != generation {
                log::warn!(
                    "{}: load #{} discarded, #{} is newer",
                    T::element_name(),
                    generation,
                    s.generation
                );
                return;
            }
            match result {
                Ok(items) => {
                    log::debug!("{}: loaded {} items", T::element_name(), items.len());
                    s.items = items;
                }
                Err(e) => {
                    log::error!("{}: load failed: {}", T::element_name(), e);
                    s.error = Some(e.user_message(fallback));
                }
            }
        });
    }

    /// Добавить созданную сервером запись в конец списка
    pub async fn insert<F>(&self, request: F, fallback: &str) -> Result<T, String>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        self.begin("create");
        let result = request.await;
        self.finish(result, fallback, |items, record: &T| items.push(record.clone()))
    }

    /// Заменить запись с ключом `key` на месте; отсутствующая запись не добавляется
    pub async fn replace<F>(&self, key: T::Key, request: F, fallback: &str) -> Result<T, String>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        self.begin("update");
        let result = request.await;
        self.finish(result, fallback, |items, record: &T| {
            match items.iter_mut().find(|item| item.key() == key) {
                Some(slot) => *slot = record.clone(),
                None => log::warn!("{}: {:?} is not in the list", T::element_name(), key),
            }
        })
    }

    /// Убрать запись с ключом `key` после успешного запроса
    pub async fn remove<F>(&self, key: T::Key, request: F, fallback: &str) -> Result<(), String>
    where
        F: Future<Output = Result<(), ApiError>>,
    {
        self.begin("remove");
        let result = request.await;
        self.finish(result, fallback, |items, _: &()| {
            items.retain(|item| item.key() != key)
        })
    }

    /// Применить ответ к записи с ключом `key`, не трогая остальные поля
    pub async fn modify<R, F, A>(
        &self,
        key: T::Key,
        request: F,
        fallback: &str,
        apply: A,
    ) -> Result<R, String>
    where
        F: Future<Output = Result<R, ApiError>>,
        A: FnOnce(&mut T, &R),
    {
        self.begin("modify");
        let result = request.await;
        self.finish(result, fallback, |items, response: &R| {
            if let Some(item) = items.iter_mut().find(|item| item.key() == key) {
                apply(item, response);
            }
        })
    }

    fn begin(&self, operation: &str) {
        log::debug!("{}: {} started", T::element_name(), operation);
        self.state.update(|s| {
            s.pending += 1;
            s.error = None;
        });
    }

    fn finish<R>(
        &self,
        result: Result<R, ApiError>,
        fallback: &str,
        apply: impl FnOnce(&mut Vec<T>, &R),
    ) -> Result<R, String> {
        let outcome = result.map_err(|e| {
            log::error!("{}: request failed: {}", T::element_name(), e);
            e.user_message(fallback)
        });
        self.state.update(|s| {
            s.pending = s.pending.saturating_sub(1);
            match &outcome {
                Ok(response) => apply(&mut s.items, response),
                Err(message) => s.error = Some(message.clone()),
            }
        });
        outcome
    }
}
