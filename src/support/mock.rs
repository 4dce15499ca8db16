//! Test doubles for the chain seams.

use crate::{
    state::{TransactionInfo, TransactionRecorder},
    support::{ContractCaller, TransactionSigner},
    Error,
};
use alloy_primitives::Address;
use async_trait::async_trait;
use connex::{Clause, TxResponse};
use std::{cell::RefCell, collections::HashMap};

/// Answers calls by function selector and records every request.
#[derive(Default)]
pub struct MockCaller {
    pub calls: RefCell<Vec<(Address, [u8; 4])>>,
    responses: HashMap<[u8; 4], Result<Vec<u8>, Error>>,
}

impl MockCaller {
    pub fn respond(mut self, selector: [u8; 4], output: Vec<u8>) -> Self {
        self.responses.insert(selector, Ok(output));
        self
    }

    pub fn fail(mut self, selector: [u8; 4], error: Error) -> Self {
        self.responses.insert(selector, Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl ContractCaller for MockCaller {
    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, Error> {
        let mut selector = [0u8; 4];
        selector.copy_from_slice(&data[..4]);
        self.calls.borrow_mut().push((to, selector));

        self.responses
            .get(&selector)
            .cloned()
            .unwrap_or_else(|| Err(Error::generic("unexpected call")))
    }
}

/// Signs everything with txid `0xabc`, unless told to reject.
#[derive(Default)]
pub struct MockSigner {
    pub requests: RefCell<Vec<(Vec<Clause>, String)>>,
    pub reject: bool,
}

#[async_trait(?Send)]
impl TransactionSigner for MockSigner {
    async fn sign_transaction(
        &self,
        clauses: Vec<Clause>,
        comment: &str,
    ) -> Result<TxResponse, Error> {
        self.requests
            .borrow_mut()
            .push((clauses, comment.to_string()));

        if self.reject {
            return Err(Error::Connex("user cancelled".to_string()));
        }

        Ok(TxResponse {
            txid: "0xabc".to_string(),
            signer: "0x7567d83b7b8d80addcb281a71d54fc7b3364ffed".to_string(),
        })
    }
}

#[derive(Default)]
pub struct MockRecorder {
    pub recorded: RefCell<Vec<(TxResponse, TransactionInfo)>>,
}

impl TransactionRecorder for MockRecorder {
    fn add_transaction(&self, response: &TxResponse, info: TransactionInfo) {
        self.recorded.borrow_mut().push((response.clone(), info));
    }
}
