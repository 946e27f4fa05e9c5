pub mod binding;
pub mod configuration;
pub mod document;
pub mod elapsed;
pub mod executor;
pub mod logger;
pub mod markup;
pub mod refresh;
pub mod renderer;
pub mod state;
pub mod timestamp;

use self::{
    binding::TimerBinding,
    configuration::Configuration,
    document::{Document, Element},
    executor::Executor,
    logger::Logger,
    refresh::RefreshHandle,
    state::State,
};
use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};
use tokio::sync::{mpsc, RwLock};

fn main() {
    let configuration = Configuration::new();
    let logger = Logger::new();

    logger.log(format!("loading page {}", configuration.page_file_path()));
    let document = match Document::from_file(configuration.page_file_path()) {
        Ok(document) => document,
        Err(error) => {
            logger.log(error);
            return;
        }
    };

    let mut bindings = Vec::new();
    for id in configuration.timer_element_ids() {
        if let Some(binding) = TimerBinding::bind(&document, id, configuration.start_attribute(), &logger) {
            logger.log(format!(r#"bound timer element "{}""#, binding.element_id()));
            bindings.push(binding);
        }
    }
    if bindings.is_empty() {
        logger.log("no timer elements bound");
        return;
    }

    let state = Arc::new(State::new(document));

    let mut executor = Executor::new();
    let (sender, receiver) = mpsc::channel(256);
    let mut handles = Vec::new();

    for binding in bindings {
        let (handle, stop) = RefreshHandle::new();
        handles.push(handle);
        let sender = sender.clone();
        let interval = configuration.update_interval();
        let name = binding.element_id().to_string();
        executor.spawn_runtime(&name, state.clone(), move |state| async move {
            refresh::run(state, binding, interval, sender, stop).await;
        });
    }
    drop(sender);

    executor.spawn_runtime("renderer", state.clone(), |state| async move {
        renderer::run(state, receiver).await;
    });

    // handles are never fired here; the refresh tasks run until the process dies
    executor.join();
}
