use std::{
    future::Future,
    sync::mpsc::{channel, Receiver, Sender},
    thread::{spawn, Result},
};
use tokio::runtime::Runtime;

#[derive(Debug)]
pub struct Executor {
    sender: Sender<(String, Result<()>)>,
    receiver: Receiver<(String, Result<()>)>,
}

impl Executor {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    pub fn spawn_runtime<F, State>(&mut self, name: &str, state: State, f: impl FnOnce(State) -> F + 'static + Send)
    where
        F: Future<Output = ()>,
        State: 'static + Send + Sync,
    {
        let sender = self.sender.clone();
        let name = name.to_string();
        spawn(move || {
            let runtime = Runtime::new().unwrap();
            let result = spawn(move || runtime.block_on(f(state))).join();
            #[allow(unused_must_use)]
            {
                sender.send((name, result));
            };
        });
    }

    pub fn join(self) {
        drop(self.sender);
        while let Ok((name, result)) = self.receiver.recv() {
            if result.is_err() {
                panic!("Task {} failed", name);
            }
        }
    }
}
