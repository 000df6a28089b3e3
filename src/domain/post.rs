use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub text: String,
    pub date: String,
    pub responses: Vec<Response>,
    pub liked: bool,
}

/// A reply owned by exactly one [`Post`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub id: String,
    pub text: String,
    pub date: String,
    pub liked: bool,
}

impl Post {
    pub fn new(id: String, text: String, date: String) -> Self {
        Self {
            id,
            text,
            date,
            responses: Vec::new(),
            liked: false,
        }
    }

    pub fn response(&self, response_id: &str) -> Option<&Response> {
        self.responses.iter().find(|r| r.id == response_id)
    }

    pub(crate) fn response_mut(&mut self, response_id: &str) -> Option<&mut Response> {
        self.responses.iter_mut().find(|r| r.id == response_id)
    }

    pub(crate) fn response_index(&self, response_id: &str) -> Option<usize> {
        self.responses.iter().position(|r| r.id == response_id)
    }
}

impl Response {
    pub fn new(id: String, text: String, date: String) -> Self {
        Self {
            id,
            text,
            date,
            liked: false,
        }
    }
}
