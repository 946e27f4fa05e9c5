use crate::{timestamp, Document, Logger};

#[derive(Debug, Clone)]
pub struct TimerBinding {
    element_id: String,
    start: i64,
}

impl TimerBinding {
    pub fn bind(document: &Document, id: &str, attribute: &str, logger: &Logger) -> Option<Self> {
        let element = document.element(id)?;
        let value = element.attribute(attribute)?;
        match timestamp::parse(value) {
            Ok(start) => Some(Self {
                element_id: id.to_string(),
                start,
            }),
            Err(error) => {
                logger.log(format!(r#"Ignoring element "{}": invalid {} attribute "{}" ({})"#, id, attribute, value, error));
                None
            }
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn start(&self) -> i64 {
        self.start
    }
}
