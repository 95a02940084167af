//! Scripted, recording doubles for the pipeline's remote collaborators.
//!
//! Each double answers from a fixed script in call order and panics on a
//! call the script did not anticipate, so tests also pin the call count.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::Value;
use vitrina_core::{QueryResult, Record};
use vitrina_model::{ModelClient, ModelError};
use vitrina_store::{ExecutionError, QueryExecutor};

/// One scripted model answer.
#[derive(Debug, Clone)]
pub enum ModelReply {
    Text(String),
    Empty,
    Fail,
}

pub fn text(value: &str) -> ModelReply {
    ModelReply::Text(value.to_string())
}

#[derive(Debug, Default)]
pub struct ScriptedModel {
    script: Mutex<VecDeque<ModelReply>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new(script: impl IntoIterator<Item = ModelReply>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl ModelClient for ScriptedModel {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ModelError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let reply = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected model call with prompt:\n{prompt}"));
        match reply {
            ModelReply::Text(text) => Ok(Some(text)),
            ModelReply::Empty => Ok(None),
            ModelReply::Fail => Err(ModelError::Parse("scripted failure".into())),
        }
    }
}

/// One scripted datastore answer.
#[derive(Debug, Clone)]
pub enum StoreReply {
    Rows(Vec<Record>),
    Fail(String),
}

pub fn rows(value: Value) -> StoreReply {
    StoreReply::Rows(records(value))
}

pub fn no_rows() -> StoreReply {
    StoreReply::Rows(Vec::new())
}

pub fn records(value: Value) -> Vec<Record> {
    QueryResult::from_value(value)
        .expect("fixture rows are objects")
        .rows
}

#[derive(Debug, Default)]
pub struct ScriptedExecutor {
    script: Mutex<VecDeque<StoreReply>>,
    statements: Mutex<Vec<String>>,
}

impl ScriptedExecutor {
    pub fn new(script: impl IntoIterator<Item = StoreReply>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            statements: Mutex::new(Vec::new()),
        }
    }

    pub fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.statements.lock().unwrap().len()
    }
}

impl QueryExecutor for ScriptedExecutor {
    async fn execute(&self, sql: &str) -> Result<QueryResult, ExecutionError> {
        self.statements.lock().unwrap().push(sql.to_string());
        let reply = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected execution of:\n{sql}"));
        match reply {
            StoreReply::Rows(rows) => Ok(QueryResult::new(rows)),
            StoreReply::Fail(message) => Err(ExecutionError::Rejected {
                status: 400,
                message,
            }),
        }
    }
}
