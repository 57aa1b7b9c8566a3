/// Трейт для сущностей, которые хранятся в клиентских списках
///
/// Ключ всегда назначается сервером; клиент использует его только
/// для сопоставления записей после create/update/delete.
pub trait Entity {
    /// Тип ключа (`codigo`, `codRegla`, ...)
    type Key: Copy + Eq + std::fmt::Debug;

    /// Получить ключ записи
    fn key(&self) -> Self::Key;

    /// Имя элемента для логов (единственное число)
    fn element_name() -> &'static str;
}
