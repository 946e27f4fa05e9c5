use std::{env, error};

#[derive(Debug, Clone)]
pub struct Configuration {
    page_file_path: String,
    update_interval: u64,
    timer_element_ids: Vec<String>,
    start_attribute: String,
}

fn var(key: &str, default: Option<String>) -> Result<String, String> {
    match env::var(key) {
        Ok(value) => Ok(value),
        Err(_) => default.ok_or(format!("Missing {}", key)),
    }
}

fn var_map<T, E: error::Error>(key: &str, mut f: impl FnMut(&str) -> Result<T, E>, default: Option<T>) -> Result<T, String> {
    match var(key, None) {
        Ok(value) => f(&value).map_err(|_| format!("Invalid {} {}", key, value)),
        Err(err) => default.ok_or(err),
    }
}

impl Configuration {
    pub fn new() -> Self {
        let page_file_path = var("PAGE_FILE_PATH", None).unwrap();
        let update_interval = var_map("UPDATE_INTERVAL", |interval| interval.parse(), Some(1000)).unwrap();
        let timer_element_ids = var("TIMER_ELEMENT_IDS", Some("nav-timer,dash-timer".to_string()))
            .unwrap()
            .split(',')
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();
        let start_attribute = var("START_ATTRIBUTE", Some("data-start".to_string())).unwrap();
        Self {
            page_file_path,
            update_interval,
            timer_element_ids,
            start_attribute,
        }
    }

    pub fn page_file_path(&self) -> &str {
        &self.page_file_path
    }

    pub fn update_interval(&self) -> u64 {
        self.update_interval
    }

    pub fn timer_element_ids(&self) -> &[String] {
        &self.timer_element_ids
    }

    pub fn start_attribute(&self) -> &str {
        &self.start_attribute
    }
}
