use crate::{elapsed, Arc, State, TimerBinding};
use tokio::{
    sync::{mpsc, watch},
    time::{sleep, Duration},
};

pub struct RefreshHandle {
    stop: watch::Sender<bool>,
}

impl RefreshHandle {
    pub fn new() -> (Self, watch::Receiver<bool>) {
        let (sender, receiver) = watch::channel(false);
        (Self { stop: sender }, receiver)
    }

    pub fn stop(&self) {
        let _ = self.stop.send(true);
    }
}

pub async fn run(state: Arc<State>, binding: TimerBinding, interval: u64, updates: mpsc::Sender<String>, stop: watch::Receiver<bool>) {
    tick(&state, &binding, &updates).await;
    loop {
        sleep(Duration::from_millis(interval)).await;
        if *stop.borrow() {
            break;
        }
        tick(&state, &binding, &updates).await;
    }
}

async fn tick(state: &State, binding: &TimerBinding, updates: &mpsc::Sender<String>) {
    if state.refresh(binding, elapsed::now_millis()).await.is_some() {
        updates.send(binding.element_id().to_string()).await.unwrap();
    }
}

#[cfg(test)]
mod tests {
    use crate::{Arc, Document, Logger, State, TimerBinding};
    use tokio::{
        sync::mpsc,
        time::{timeout, Duration},
    };

    #[test]
    fn run_emits_an_update_then_stops() {
        let document = Document::from_markup(r#"<span id="nav-timer" data-start="2024-01-15T10:30:00Z">--:--:--</span>"#);
        let binding = TimerBinding::bind(&document, "nav-timer", "data-start", &Logger::new()).unwrap();
        let state = Arc::new(State::new(document));
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async {
            let (sender, mut receiver) = mpsc::channel(256);
            let (handle, stop) = super::RefreshHandle::new();
            let task = tokio::spawn(super::run(state.clone(), binding, 10, sender, stop));
            let id = timeout(Duration::from_secs(1), receiver.recv()).await.unwrap().unwrap();
            assert_eq!(id, "nav-timer");
            handle.stop();
            timeout(Duration::from_secs(1), task).await.unwrap().unwrap();
            while timeout(Duration::from_secs(1), receiver.recv()).await.unwrap().is_some() {}
        });
    }
}
