use crate::{
    state::{TransactionInfo, TransactionRecorder},
    Error,
};
use alloy_primitives::{hex, Address};
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use connex::{Clause, Connex, TxResponse};
use tracing::{debug, error};

/// Read-only access to contract state.
#[async_trait(?Send)]
pub trait ContractCaller {
    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, Error>;
}

/// Submits transactions for the user's wallet to sign.
#[async_trait(?Send)]
pub trait TransactionSigner {
    async fn sign_transaction(
        &self,
        clauses: Vec<Clause>,
        comment: &str,
    ) -> Result<TxResponse, Error>;
}

/// Builds a clause calling `to` with the ABI encoded `call`.
pub fn clause<C: SolCall>(to: Address, call: &C) -> Clause {
    Clause::call(to.to_checksum(None), hex::encode_prefixed(call.abi_encode()))
}

/// Performs a typed read-only call and decodes its return value.
pub async fn read<R, C>(caller: &R, to: Address, call: C) -> Result<C::Return, Error>
where
    R: ContractCaller + ?Sized,
    C: SolCall,
{
    let output = caller
        .call(to, call.abi_encode())
        .await
        .inspect_err(|e| error!("{} on {to} failed: {e}", C::SIGNATURE))?;

    C::abi_decode_returns(&output).map_err(Into::into)
}

/// The injected Connex provider.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConnexClient;

#[async_trait(?Send)]
impl ContractCaller for ConnexClient {
    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, Error> {
        let output = Connex::call(Clause::call(
            to.to_checksum(None),
            hex::encode_prefixed(data),
        ))
        .await?;

        Ok(hex::decode(&output.data)?)
    }
}

#[async_trait(?Send)]
impl TransactionSigner for ConnexClient {
    async fn sign_transaction(
        &self,
        clauses: Vec<Clause>,
        comment: &str,
    ) -> Result<TxResponse, Error> {
        debug!("requesting signature for {} clause(s): {comment}", clauses.len());
        Connex::sign_tx(clauses, comment).await.map_err(Into::into)
    }
}

/// Signs `clauses` as one transaction and records it for receipt tracking.
pub async fn submit_transaction<S, T>(
    signer: &S,
    recorder: &T,
    clauses: Vec<Clause>,
    comment: &str,
    info: TransactionInfo,
) -> Result<TxResponse, Error>
where
    S: TransactionSigner + ?Sized,
    T: TransactionRecorder + ?Sized,
{
    let response = signer
        .sign_transaction(clauses, comment)
        .await
        .inspect_err(|e| debug!("{comment} failed: {e}"))?;

    recorder.add_transaction(&response, info);

    Ok(response)
}
