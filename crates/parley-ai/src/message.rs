//! Conversation turns.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Label used when the turn is replayed to the model.
    pub fn role_label(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Bot => "Assistant",
        }
    }
}

/// An image the user attached to a turn.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    /// Display name, usually the file name.
    pub name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl ImageAttachment {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            data,
        }
    }
}

impl fmt::Debug for ImageAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageAttachment")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// Shared, in-memory handle to an attachment.
///
/// Cloning is cheap. Two refs are equal only when they point at the same
/// attachment.
#[derive(Clone)]
pub struct ImageRef(Arc<ImageAttachment>);

impl ImageRef {
    pub fn new(attachment: ImageAttachment) -> Self {
        Self(Arc::new(attachment))
    }

    pub fn attachment(&self) -> &ImageAttachment {
        &self.0
    }
}

impl PartialEq for ImageRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One turn in the conversation. Never mutated once appended to a log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    /// Only set on user turns; not persisted.
    #[serde(skip)]
    pub attached_image: Option<ImageRef>,
}

impl Message {
    pub fn user(id: u64, text: impl Into<String>, image: Option<ImageRef>) -> Self {
        Self {
            id,
            text: text.into(),
            sender: Sender::User,
            attached_image: image,
        }
    }

    pub fn bot(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender: Sender::Bot,
            attached_image: None,
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");
    }

    #[test]
    fn image_is_not_persisted() {
        let image = ImageRef::new(ImageAttachment::new("cat.png", "image/png", vec![1, 2, 3]));
        let msg = Message::user(7, "look", Some(image));

        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"id":7,"text":"look","sender":"user"}"#);

        let restored: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.id, 7);
        assert!(restored.attached_image.is_none());
    }

    #[test]
    fn parses_log_written_by_older_clients() {
        // Extra fields such as a preview URL are ignored.
        let json = r#"[{"id":1,"text":"Hello","sender":"bot"},
                       {"id":1700000000000,"text":"","sender":"user","imagePreview":"blob:x"}]"#;
        let log: Vec<Message> = serde_json::from_str(json).unwrap();
        assert_eq!(log.len(), 2);
        assert!(log[0].is_bot());
        assert!(log[1].is_user());
        assert!(log[1].text.is_empty());
    }

    #[test]
    fn image_ref_equality_is_identity() {
        let a = ImageRef::new(ImageAttachment::new("a.png", "image/png", vec![0]));
        let b = ImageRef::new(ImageAttachment::new("a.png", "image/png", vec![0]));
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn attachment_debug_hides_bytes() {
        let image = ImageAttachment::new("big.jpg", "image/jpeg", vec![0; 4096]);
        let debug = format!("{image:?}");
        assert!(debug.contains("bytes: 4096"));
        assert!(!debug.contains("0, 0"));
    }

    #[test]
    fn role_labels() {
        assert_eq!(Sender::User.role_label(), "User");
        assert_eq!(Sender::Bot.role_label(), "Assistant");
    }
}
