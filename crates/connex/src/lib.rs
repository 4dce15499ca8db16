use serde::Serialize;
use tracing::{debug, trace};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    js_sys,
    wasm_bindgen::{JsCast, JsValue},
};

mod error;
mod types;

pub use error::Error;
pub use types::{CertAnnex, CertResponse, Clause, Receipt, ReceiptMeta, TxResponse, VmOutput};

/// Access to the `connex` object injected by VeChain wallets (Sync2, VeWorld).
///
/// Every method looks the object up again, so a wallet injected after page load
/// is picked up without reloading.
pub struct Connex {}

impl Connex {
    pub fn is_available() -> bool {
        connex().is_ok()
    }

    /// Runs the clauses against the best block without sending a transaction.
    pub async fn explain(clauses: &[Clause]) -> Result<Vec<VmOutput>, Error> {
        let thor = property(&connex()?, "thor")?;
        let explainer = invoke(&thor, "explain", &[to_js(clauses)?])?;
        let outputs = resolve(invoke(&explainer, "execute", &[])?).await?;

        Ok(serde_wasm_bindgen::from_value(outputs)?)
    }

    /// Read-only contract call. Reverts are reported as errors.
    pub async fn call(clause: Clause) -> Result<VmOutput, Error> {
        trace!("explaining call to {:?}", clause.to);

        let output = Self::explain(std::slice::from_ref(&clause))
            .await?
            .into_iter()
            .next()
            .ok_or(Error::generic("explain returned no outputs"))?;

        if output.reverted {
            let reason = output
                .revert_reason
                .clone()
                .unwrap_or_else(|| output.vm_error.clone());
            return Err(Error::Reverted(reason));
        }

        Ok(output)
    }

    /// Asks the wallet to sign and broadcast a transaction.
    pub async fn sign_tx(clauses: Vec<Clause>, comment: &str) -> Result<TxResponse, Error> {
        let vendor = property(&connex()?, "vendor")?;
        let service = invoke(
            &vendor,
            "sign",
            &[JsValue::from_str("tx"), to_js(&clauses)?],
        )?;
        let service = invoke(&service, "comment", &[JsValue::from_str(comment)])?;
        let response = resolve(invoke(&service, "request", &[])?).await?;

        let response: TxResponse = serde_wasm_bindgen::from_value(response)?;
        debug!("transaction {} signed by {}", response.txid, response.signer);

        Ok(response)
    }

    /// Requests an identification certificate, which reveals the user's account.
    pub async fn sign_cert(content: &str) -> Result<CertResponse, Error> {
        #[derive(Serialize)]
        struct Payload<'a> {
            r#type: &'static str,
            content: &'a str,
        }
        #[derive(Serialize)]
        struct Message<'a> {
            purpose: &'static str,
            payload: Payload<'a>,
        }

        let message = Message {
            purpose: "identification",
            payload: Payload {
                r#type: "text",
                content,
            },
        };

        let vendor = property(&connex()?, "vendor")?;
        let service = invoke(
            &vendor,
            "sign",
            &[JsValue::from_str("cert"), to_js(&message)?],
        )?;
        let response = resolve(invoke(&service, "request", &[])?).await?;

        Ok(serde_wasm_bindgen::from_value(response)?)
    }

    /// Returns `None` while the transaction is not yet included in a block.
    pub async fn get_receipt(txid: &str) -> Result<Option<Receipt>, Error> {
        let thor = property(&connex()?, "thor")?;
        let visitor = invoke(&thor, "transaction", &[JsValue::from_str(txid)])?;
        let receipt = resolve(invoke(&visitor, "getReceipt", &[])?).await?;

        if receipt.is_null() || receipt.is_undefined() {
            return Ok(None);
        }

        Ok(Some(serde_wasm_bindgen::from_value(receipt)?))
    }
}

fn connex() -> Result<JsValue, Error> {
    web_sys::window()
        .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str("connex")).ok())
        .filter(|connex| !connex.is_undefined() && !connex.is_null())
        .ok_or(Error::ConnexUnavailable)
}

fn property(target: &JsValue, name: &str) -> Result<JsValue, Error> {
    js_sys::Reflect::get(target, &JsValue::from_str(name)).map_err(Error::js)
}

fn invoke(target: &JsValue, method: &str, args: &[JsValue]) -> Result<JsValue, Error> {
    let function = property(target, method)?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| Error::generic(format!("`{method}` is not a function")))?;
    let args = args.iter().collect::<js_sys::Array>();

    function.apply(target, &args).map_err(Error::js)
}

async fn resolve(promise: JsValue) -> Result<JsValue, Error> {
    JsFuture::from(js_sys::Promise::from(promise))
        .await
        .map_err(Error::js)
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, Error> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}
