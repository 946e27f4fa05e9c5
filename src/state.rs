use crate::{elapsed, Document, RwLock, TimerBinding};

pub struct State {
    document: RwLock<Document>,
}

impl State {
    pub fn new(document: Document) -> Self {
        Self {
            document: RwLock::new(document),
        }
    }

    pub async fn refresh(&self, binding: &TimerBinding, now: i64) -> Option<String> {
        let text = elapsed::format(elapsed::elapsed_millis(binding.start(), now));
        let mut document = self.document.write().await;
        let element = document.element_mut(binding.element_id())?;
        if element.text() == text {
            return None;
        }
        element.set_text(text.as_str());
        Some(text)
    }

    pub async fn element_text(&self, id: &str) -> Option<String> {
        let document = self.document.read().await;
        document.element(id).map(|element| element.text().to_string())
    }
}
