//! 参加者レジストリ
//!
//! 表示名と接続の対応を管理する。
//! 1 つの表示名を同時に保持できる接続は高々 1 つ、1 つの接続が保持できる表示名も高々 1 つ。

use std::collections::HashMap;

use super::{
    entity::Participant,
    error::RegistryError,
    value_object::{ConnectionId, DisplayName, Timestamp},
};

/// 接続中の接続と、それぞれが名乗った表示名の双方向マップ
#[derive(Debug, Default)]
pub struct ParticipantRegistry {
    by_connection: HashMap<ConnectionId, Participant>,
    by_name: HashMap<DisplayName, ConnectionId>,
}

impl ParticipantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// `connection_id` に表示名 `name` を割り当てる
    ///
    /// # Errors
    ///
    /// * `RegistryError::InvalidName` - trim 後に空、または 16 文字を超える
    /// * `RegistryError::DuplicateName` - 他の接続がその表示名を使用中
    /// * `RegistryError::AlreadyRegistered` - この接続はすでに表示名を持っている
    pub fn register(
        &mut self,
        name: &str,
        connection_id: ConnectionId,
        joined_at: Timestamp,
    ) -> Result<Participant, RegistryError> {
        let name = DisplayName::new(name)?;

        if let Some(existing) = self.by_connection.get(&connection_id) {
            return Err(RegistryError::AlreadyRegistered(
                existing.name.as_str().to_string(),
            ));
        }
        if self.by_name.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name.into_string()));
        }

        let participant = Participant::new(name.clone(), connection_id, joined_at);
        self.by_name.insert(name, connection_id);
        self.by_connection.insert(connection_id, participant.clone());

        Ok(participant)
    }

    /// `connection_id` が持つ表示名を解放する
    ///
    /// 解放した参加者を返す。未参加の接続なら `None`
    pub fn unregister(&mut self, connection_id: ConnectionId) -> Option<Participant> {
        let participant = self.by_connection.remove(&connection_id)?;
        self.by_name.remove(&participant.name);
        Some(participant)
    }

    pub fn is_registered(&self, connection_id: ConnectionId) -> bool {
        self.by_connection.contains_key(&connection_id)
    }

    pub fn name_of(&self, connection_id: ConnectionId) -> Option<&DisplayName> {
        self.by_connection.get(&connection_id).map(|p| &p.name)
    }

    /// 参加中の参加者（表示名順）
    pub fn participants(&self) -> Vec<Participant> {
        let mut participants: Vec<Participant> = self.by_connection.values().cloned().collect();
        participants.sort_by(|a, b| a.name.cmp(&b.name));
        participants
    }

    pub fn len(&self) -> usize {
        self.by_connection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_connection.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ValueObjectError;

    #[test]
    fn test_register_success() {
        // テスト項目: 新しい表示名で登録できる
        // given (前提条件):
        let mut registry = ParticipantRegistry::new();
        let conn = ConnectionId::generate();

        // when (操作):
        let result = registry.register(" alice ", conn, Timestamp::new(1000));

        // then (期待する結果):
        let participant = result.unwrap();
        assert_eq!(participant.name.as_str(), "alice");
        assert_eq!(participant.connection_id, conn);
        assert!(registry.is_registered(conn));
        assert_eq!(registry.name_of(conn).map(|n| n.as_str()), Some("alice"));
    }

    #[test]
    fn test_register_duplicate_name_from_other_connection_is_rejected() {
        // テスト項目: 別の接続が保持している表示名では登録できない
        // given (前提条件):
        let mut registry = ParticipantRegistry::new();
        let first = ConnectionId::generate();
        let second = ConnectionId::generate();
        registry
            .register("alice", first, Timestamp::new(1000))
            .unwrap();

        // when (操作):
        let result = registry.register("alice", second, Timestamp::new(2000));

        // then (期待する結果):
        assert_eq!(result, Err(RegistryError::DuplicateName("alice".to_string())));
        assert!(!registry.is_registered(second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_duplicate_is_detected_after_trim() {
        // テスト項目: 前後の空白だけが違う表示名も重複として扱われる
        // given (前提条件):
        let mut registry = ParticipantRegistry::new();
        registry
            .register("alice", ConnectionId::generate(), Timestamp::new(1000))
            .unwrap();

        // when (操作):
        let result = registry.register("  alice", ConnectionId::generate(), Timestamp::new(2000));

        // then (期待する結果):
        assert!(matches!(result, Err(RegistryError::DuplicateName(_))));
    }

    #[test]
    fn test_register_names_are_case_sensitive() {
        // テスト項目: 大文字小文字が異なる表示名は別名として登録できる
        // given (前提条件):
        let mut registry = ParticipantRegistry::new();
        registry
            .register("alice", ConnectionId::generate(), Timestamp::new(1000))
            .unwrap();

        // when (操作):
        let result = registry.register("Alice", ConnectionId::generate(), Timestamp::new(2000));

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_register_invalid_name_is_rejected() {
        // テスト項目: 空の表示名や 17 文字以上の表示名は拒否される
        // given (前提条件):
        let mut registry = ParticipantRegistry::new();

        // when (操作):
        let empty = registry.register("   ", ConnectionId::generate(), Timestamp::new(1000));
        let too_long = registry.register(
            &"b".repeat(17),
            ConnectionId::generate(),
            Timestamp::new(1000),
        );

        // then (期待する結果):
        assert_eq!(
            empty,
            Err(RegistryError::InvalidName(ValueObjectError::EmptyDisplayName))
        );
        assert!(matches!(
            too_long,
            Err(RegistryError::InvalidName(
                ValueObjectError::DisplayNameTooLong { .. }
            ))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_second_name_on_same_connection_is_rejected() {
        // テスト項目: 登録済みの接続は別の表示名を追加で取得できない
        // given (前提条件):
        let mut registry = ParticipantRegistry::new();
        let conn = ConnectionId::generate();
        registry.register("alice", conn, Timestamp::new(1000)).unwrap();

        // when (操作):
        let result = registry.register("bob", conn, Timestamp::new(2000));

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RegistryError::AlreadyRegistered("alice".to_string()))
        );
        assert_eq!(registry.name_of(conn).map(|n| n.as_str()), Some("alice"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister_frees_the_name() {
        // テスト項目: 登録解除すると表示名が解放され、別の接続が再利用できる
        // given (前提条件):
        let mut registry = ParticipantRegistry::new();
        let first = ConnectionId::generate();
        registry.register("alice", first, Timestamp::new(1000)).unwrap();

        // when (操作):
        let freed = registry.unregister(first);
        let second = ConnectionId::generate();
        let reused = registry.register("alice", second, Timestamp::new(2000));

        // then (期待する結果):
        assert_eq!(freed.map(|p| p.name.into_string()), Some("alice".to_string()));
        assert!(!registry.is_registered(first));
        assert!(reused.is_ok());
    }

    #[test]
    fn test_unregister_anonymous_connection_returns_none() {
        // テスト項目: 登録していない接続の登録解除は None を返す
        // given (前提条件):
        let mut registry = ParticipantRegistry::new();

        // when (操作):
        let result = registry.unregister(ConnectionId::generate());

        // then (期待する結果):
        assert_eq!(result, None);
    }

    #[test]
    fn test_participants_are_sorted_by_name() {
        // テスト項目: 参加者リストは表示名でソートされる
        // given (前提条件):
        let mut registry = ParticipantRegistry::new();
        for name in ["charlie", "alice", "bob"] {
            registry
                .register(name, ConnectionId::generate(), Timestamp::new(1000))
                .unwrap();
        }

        // when (操作):
        let participants = registry.participants();

        // then (期待する結果):
        let names: Vec<&str> = participants.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob", "charlie"]);
    }
}
