#![allow(dead_code)]

use serde_json::Value;

use threadfeed::app::ids::IdStrategy;
use threadfeed::config::AppConfig;
use threadfeed::console::Console;
use threadfeed::FeedStore;

/// Store with readable `P1`/`R1` ids so assertions can name records.
pub fn store() -> FeedStore {
    FeedStore::new(IdStrategy::Sequential)
}

/// Store holding `count` posts, texts `post 0..count`.
pub fn store_with_posts(count: usize) -> FeedStore {
    let mut store = store();
    for i in 0..count {
        store.create_post(format!("post {}", i), "2024-01-01");
    }
    store
}

pub fn config() -> AppConfig {
    AppConfig {
        id_strategy: IdStrategy::Sequential,
        ..AppConfig::default()
    }
}

pub fn console() -> Console {
    Console::new(&config())
}

pub struct TestConsole {
    pub console: Console,
}

impl TestConsole {
    pub fn new() -> Self {
        Self { console: console() }
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            console: Console::new(&config),
        }
    }

    /// Sends one command and returns the reply.
    pub fn send(&mut self, command: Value) -> Value {
        self.console.handle_line(&command.to_string())
    }

    /// Sends one command and returns its `data`, failing on any error reply.
    pub fn ok(&mut self, command: Value) -> Value {
        let reply = self.send(command);
        assert_eq!(reply["status"], "ok", "unexpected reply: {}", reply);
        reply["data"].clone()
    }

    /// Feeds `input` through the async loop and collects every reply line.
    pub async fn run(&mut self, input: &str) -> Vec<Value> {
        self.run_bytes(input.as_bytes()).await
    }

    /// Like [`TestConsole::run`], for input that need not be valid UTF-8.
    pub async fn run_bytes(&mut self, input: &[u8]) -> Vec<Value> {
        let mut output = Vec::new();
        self.console
            .run(input, &mut output)
            .await
            .expect("console loop failed");

        String::from_utf8(output)
            .expect("replies are utf-8")
            .lines()
            .map(|line| serde_json::from_str(line).expect("reply is json"))
            .collect()
    }
}
