//! Session Context - 会话状态
//!
//! 客户端每次会话的根状态：loading -> {ready, error}。
//! 卡片列表只在 API 成功返回后更新，失败不回滚（因为从未乐观写入）。
//! 解锁标志由会话根持有、按引用下发，不做单例。

use serde::{Deserialize, Serialize};

use super::gate::PasswordGate;

/// 客户端视角的卡片快照（API 返回的 JSON 形态）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: String,
    pub text: String,
    pub audio_url: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// 会话加载阶段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// 初次加载中
    Loading,
    /// 列表已就绪
    Ready,
    /// 加载失败（行内展示的错误消息）
    Error(String),
}

/// 会话状态根
#[derive(Debug)]
pub struct AppSession {
    phase: SessionPhase,
    cards: Vec<CardView>,
    gate: PasswordGate,
}

impl AppSession {
    pub fn new(password: impl AsRef<str>) -> Self {
        Self {
            phase: SessionPhase::Loading,
            cards: Vec::new(),
            gate: PasswordGate::new(password),
        }
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn cards(&self) -> &[CardView] {
        &self.cards
    }

    pub fn is_unlocked(&self) -> bool {
        self.gate.is_unlocked()
    }

    pub fn key_pressed(&mut self, key: char) -> bool {
        self.gate.key_pressed(key)
    }

    pub fn lock(&mut self) {
        self.gate.lock();
    }

    /// 初次加载成功
    pub fn loaded(&mut self, cards: Vec<CardView>) {
        self.cards = cards;
        self.phase = SessionPhase::Ready;
    }

    /// 初次加载失败
    pub fn load_failed(&mut self, message: impl Into<String>) {
        self.phase = SessionPhase::Error(message.into());
    }

    /// 创建成功后追加（保持插入顺序）
    pub fn apply_created(&mut self, card: CardView) {
        self.cards.push(card);
    }

    /// 更新成功后按 id 原位替换；未知 id 不做任何事
    pub fn apply_updated(&mut self, card: CardView) {
        if let Some(existing) = self.cards.iter_mut().find(|c| c.id == card.id) {
            *existing = card;
        }
    }

    /// 删除成功后按 id 移除
    pub fn apply_deleted(&mut self, id: &str) {
        self.cards.retain(|c| c.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, text: &str) -> CardView {
        CardView {
            id: id.to_string(),
            text: text.to_string(),
            audio_url: String::new(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: None,
        }
    }

    #[test]
    fn test_load_success_transitions_to_ready() {
        let mut session = AppSession::new("9a9");
        assert_eq!(*session.phase(), SessionPhase::Loading);

        session.loaded(vec![card("1", "bonjour")]);
        assert_eq!(*session.phase(), SessionPhase::Ready);
        assert_eq!(session.cards().len(), 1);
    }

    #[test]
    fn test_load_failure_keeps_message() {
        let mut session = AppSession::new("9a9");
        session.load_failed("network down");
        assert_eq!(
            *session.phase(),
            SessionPhase::Error("network down".to_string())
        );
    }

    #[test]
    fn test_created_appends_in_order() {
        let mut session = AppSession::new("9a9");
        session.loaded(vec![card("1", "un")]);
        session.apply_created(card("2", "deux"));
        let ids: Vec<&str> = session.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_updated_replaces_in_place() {
        let mut session = AppSession::new("9a9");
        session.loaded(vec![card("1", "un"), card("2", "deux")]);
        session.apply_updated(card("1", "UN"));
        assert_eq!(session.cards()[0].text, "UN");
        assert_eq!(session.cards()[1].text, "deux");
    }

    #[test]
    fn test_updated_unknown_id_is_noop() {
        let mut session = AppSession::new("9a9");
        session.loaded(vec![card("1", "un")]);
        session.apply_updated(card("404", "rien"));
        assert_eq!(session.cards().len(), 1);
        assert_eq!(session.cards()[0].text, "un");
    }

    #[test]
    fn test_deleted_removes_by_id() {
        let mut session = AppSession::new("9a9");
        session.loaded(vec![card("1", "un"), card("2", "deux")]);
        session.apply_deleted("1");
        assert_eq!(session.cards().len(), 1);
        assert_eq!(session.cards()[0].id, "2");
    }

    #[test]
    fn test_gate_is_owned_by_session_root() {
        let mut session = AppSession::new("9a9");
        assert!(!session.is_unlocked());
        for key in "9a9".chars() {
            session.key_pressed(key);
        }
        assert!(session.is_unlocked());
        session.lock();
        assert!(!session.is_unlocked());
    }

    #[test]
    fn test_card_view_json_shape() {
        let json = r#"{"id":"abc","text":"bonjour","audioUrl":"/uploads/x.webm","createdAt":"2024-01-01T00:00:00Z"}"#;
        let view: CardView = serde_json::from_str(json).unwrap();
        assert_eq!(view.audio_url, "/uploads/x.webm");
        assert_eq!(view.updated_at, None);

        let back = serde_json::to_value(&view).unwrap();
        assert!(back.get("updatedAt").is_none());
        assert_eq!(back["audioUrl"], "/uploads/x.webm");
    }
}
