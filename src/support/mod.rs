mod chain;
mod generation;
#[cfg(test)]
pub(crate) mod mock;

pub use chain::{
    clause, read, submit_transaction, ConnexClient, ContractCaller, TransactionSigner,
};
pub use generation::Generation;
