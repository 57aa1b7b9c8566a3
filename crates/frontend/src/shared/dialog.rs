//! Состояние модального диалога формы: `Closed → Open → Submitting → Closed`.

use leptos::prelude::*;
use std::future::Future;

/// Что делает открытый диалог
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode<K> {
    Create,
    Edit(K),
    /// Добавление вложенной записи к родителю с ключом `K`
    Append(K),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState<K> {
    Closed,
    Open(DialogMode<K>),
    Submitting(DialogMode<K>),
}

impl<K> Default for DialogState<K> {
    fn default() -> Self {
        DialogState::Closed
    }
}

impl<K: Copy> DialogState<K> {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, DialogState::Submitting(_))
    }

    pub fn mode(&self) -> Option<DialogMode<K>> {
        match self {
            DialogState::Closed => None,
            DialogState::Open(mode) | DialogState::Submitting(mode) => Some(*mode),
        }
    }

    /// `Open → Submitting`. Повторная отправка и отправка закрытого диалога
    /// возвращают `None`.
    pub fn begin_submit(&self) -> Option<(DialogState<K>, DialogMode<K>)> {
        match self {
            DialogState::Open(mode) => Some((DialogState::Submitting(*mode), *mode)),
            DialogState::Closed | DialogState::Submitting(_) => None,
        }
    }

    /// Итог отправки: успех закрывает диалог, ошибка возвращает его в `Open`
    pub fn finish_submit(&self, succeeded: bool) -> DialogState<K> {
        match (self, succeeded) {
            (DialogState::Submitting(_), true) => DialogState::Closed,
            (DialogState::Submitting(mode), false) => DialogState::Open(*mode),
            (other, _) => *other,
        }
    }
}

/// Диалог с формой: состояние, значения полей и ошибка формы.
///
/// Ошибка отправки остаётся в диалоге (`Open` + `error`), поля не сбрасываются.
/// Каждое открытие и закрытие начинает новую сессию: ответ на запрос,
/// отправленный из прежней сессии, диалог не трогает.
pub struct FormDialog<K, D>
where
    K: Copy + Send + Sync + 'static,
    D: Clone + Default + Send + Sync + 'static,
{
    pub state: RwSignal<DialogState<K>>,
    pub form: RwSignal<D>,
    pub error: RwSignal<Option<String>>,
    session: StoredValue<u64>,
}

impl<K, D> Clone for FormDialog<K, D>
where
    K: Copy + Send + Sync + 'static,
    D: Clone + Default + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, D> Copy for FormDialog<K, D>
where
    K: Copy + Send + Sync + 'static,
    D: Clone + Default + Send + Sync + 'static,
{
}

impl<K, D> Default for FormDialog<K, D>
where
    K: Copy + Send + Sync + 'static,
    D: Clone + Default + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, D> FormDialog<K, D>
where
    K: Copy + Send + Sync + 'static,
    D: Clone + Default + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(DialogState::Closed),
            form: RwSignal::new(D::default()),
            error: RwSignal::new(None),
            session: StoredValue::new(0),
        }
    }

    fn next_session(&self) {
        self.session.update_value(|s| *s += 1);
    }

    pub fn open(&self, mode: DialogMode<K>, form: D) {
        self.next_session();
        self.form.set(form);
        self.error.set(None);
        self.state.set(DialogState::Open(mode));
    }

    pub fn close(&self) {
        self.next_session();
        self.state.set(DialogState::Closed);
        self.form.set(D::default());
        self.error.set(None);
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.is_open())
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|s| s.is_submitting())
    }

    /// Проверить форму и отправить её через `send`.
    ///
    /// Пока запрос в полёте повторные вызовы игнорируются. Если форма не
    /// прошла проверку, запрос не отправляется.
    pub async fn submit<V, F, Fut>(&self, validate: V, send: F)
    where
        V: FnOnce(&D) -> Result<(), String>,
        F: FnOnce(DialogMode<K>, D) -> Fut,
        Fut: Future<Output = Result<(), String>>,
    {
        let Some((submitting, mode)) = self.state.get_untracked().begin_submit() else {
            return;
        };
        let form = self.form.get_untracked();
        if let Err(message) = validate(&form) {
            self.error.set(Some(message));
            return;
        }

        let session = self.session.get_value();
        self.error.set(None);
        self.state.set(submitting);
        let result = send(mode, form).await;

        if self.session.get_value() != session {
            log::debug!("dialog result dropped: dialog was closed while submitting");
            return;
        }
        let next = self.state.get_untracked().finish_submit(result.is_ok());
        match result {
            Ok(()) => {
                self.form.set(D::default());
                self.state.set(next);
            }
            Err(message) => {
                if next.is_open() {
                    self.error.set(Some(message));
                }
                self.state.set(next);
            }
        }
    }
}
