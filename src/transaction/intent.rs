//! What a caller wants to send, before the ledger fills in the rest.

use serde_json::{json, Value};

use crate::error::{SdkError, SdkResult};
use crate::types::{TxType, ADNR_BASE_ADDRESS, DOMAIN_PURCHASE_COST};

/// Destination, type, amount, and payload of a transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionIntent {
    pub to_address: String,
    pub tx_type: TxType,
    pub amount: f64,
    pub data: Option<Value>,
}

fn check_amount(amount: f64) -> SdkResult<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(SdkError::Validation(format!("Invalid amount: {}", amount)));
    }
    Ok(())
}

fn check_destination(to_address: &str) -> SdkResult<()> {
    if to_address.trim().is_empty() {
        return Err(SdkError::Validation("Destination address is empty".to_string()));
    }
    Ok(())
}

impl TransactionIntent {
    /// Plain value transfer.
    pub fn transfer(to_address: &str, amount: f64) -> SdkResult<Self> {
        check_destination(to_address)?;
        check_amount(amount)?;
        Ok(Self {
            to_address: to_address.to_string(),
            tx_type: TxType::RbxTransfer,
            amount,
            data: None,
        })
    }

    /// Domain-name record purchase. `name` is the domain without suffix.
    pub fn domain_purchase(name: &str) -> SdkResult<Self> {
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()) {
            return Err(SdkError::Validation(format!("Invalid domain name: {}", name)));
        }
        Ok(Self {
            to_address: ADNR_BASE_ADDRESS.to_string(),
            tx_type: TxType::Adnr,
            amount: DOMAIN_PURCHASE_COST,
            data: Some(json!({
                "Function": "AdnrCreate()",
                "Name": name,
            })),
        })
    }

    /// Cross-chain token transfer; value travels in `Data`, `Amount` is zero.
    pub fn tokenized_transfer(to_address: &str, contract_uid: &str, amount: f64) -> SdkResult<Self> {
        check_destination(to_address)?;
        check_amount(amount)?;
        if contract_uid.trim().is_empty() {
            return Err(SdkError::Validation("Contract UID is empty".to_string()));
        }
        Ok(Self {
            to_address: to_address.to_string(),
            tx_type: TxType::TokenizeTx,
            amount: 0.0,
            data: Some(json!([{
                "Function": "TransferCoin()",
                "ContractUID": contract_uid,
                "Amount": amount,
            }])),
        })
    }
}
