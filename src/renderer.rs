use crate::{Arc, State};
use tokio::sync::mpsc;

pub async fn run(state: Arc<State>, mut updates: mpsc::Receiver<String>) {
    while let Some(id) = updates.recv().await {
        if let Some(text) = state.element_text(&id).await {
            println!("{} {}", id, text);
        }
    }
}
