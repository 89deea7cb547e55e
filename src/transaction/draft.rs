//! Wire shape of a ledger transaction while it is being assembled.

use serde::Serialize;
use serde_json::Value;

use crate::transaction::intent::TransactionIntent;
use crate::types::TxType;

/// A transaction being threaded through the handshake.
///
/// `hash` and `signature` stay empty until their steps complete; `fee`
/// stays zero until the ledger prices the draft. All three are
/// server-determined.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionDraft {
    pub hash: String,
    pub to_address: String,
    pub from_address: String,
    pub transaction_type: TxType,
    pub amount: f64,
    pub nonce: u64,
    pub fee: f64,
    pub timestamp: i64,
    pub signature: String,
    pub height: u64,
    pub data: Option<Value>,
    pub unlock_time: Option<i64>,
}

impl TransactionDraft {
    /// Fresh draft for `intent` with the ledger's timestamp and nonce.
    pub fn new(from_address: &str, intent: &TransactionIntent, timestamp: i64, nonce: u64) -> Self {
        Self {
            hash: String::new(),
            to_address: intent.to_address.clone(),
            from_address: from_address.to_string(),
            transaction_type: intent.tx_type,
            amount: intent.amount,
            nonce,
            fee: 0.0,
            timestamp,
            signature: String::new(),
            height: 0,
            data: intent.data.clone(),
            unlock_time: None,
        }
    }

    pub fn is_signed(&self) -> bool {
        !self.signature.is_empty()
    }
}

/// Request body wrapper used by every `/raw` JSON endpoint.
#[derive(Debug, Serialize)]
pub struct TransactionEnvelope<'a> {
    pub transaction: &'a TransactionDraft,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let intent = TransactionIntent::transfer("xTo", 1.5).unwrap();
        let draft = TransactionDraft::new("xFrom", &intent, 1_700_000_000, 7);
        let json = serde_json::to_value(&draft).unwrap();

        assert_eq!(json["Hash"], "");
        assert_eq!(json["ToAddress"], "xTo");
        assert_eq!(json["FromAddress"], "xFrom");
        assert_eq!(json["TransactionType"], 0);
        assert_eq!(json["Amount"], 1.5);
        assert_eq!(json["Nonce"], 7);
        assert_eq!(json["Fee"], 0.0);
        assert_eq!(json["Timestamp"], 1_700_000_000i64);
        assert_eq!(json["Signature"], "");
        assert_eq!(json["Height"], 0);
        assert!(json["Data"].is_null());
        assert!(json.get("UnlockTime").unwrap().is_null());
        assert!(!draft.is_signed());
    }

    #[test]
    fn test_envelope() {
        let intent = TransactionIntent::transfer("xTo", 1.0).unwrap();
        let draft = TransactionDraft::new("xFrom", &intent, 1, 1);
        let json = serde_json::to_value(TransactionEnvelope { transaction: &draft }).unwrap();
        assert_eq!(json["transaction"]["FromAddress"], "xFrom");
    }
}
