//! Transaction outputs.

mod decoder;

pub(crate) use decoder::{decode_contract, decode_outputs};

use crate::bytes::{HexBytes, Tagged, UnknownVariant};
use serde::{Serialize, Serializer};

/// Discriminant of an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    Coin = 0,
    Contract = 1,
    Change = 2,
    Variable = 3,
    ContractCreated = 4,
    Message = 5,
}

impl OutputKind {
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(OutputKind::Coin),
            1 => Some(OutputKind::Contract),
            2 => Some(OutputKind::Change),
            3 => Some(OutputKind::Variable),
            4 => Some(OutputKind::ContractCreated),
            5 => Some(OutputKind::Message),
            _ => None,
        }
    }

    pub fn code(self) -> u64 {
        self as u64
    }

    pub fn name(self) -> &'static str {
        match self {
            OutputKind::Coin => "Coin",
            OutputKind::Contract => "Contract",
            OutputKind::Change => "Change",
            OutputKind::Variable => "Variable",
            OutputKind::ContractCreated => "Contract Created",
            OutputKind::Message => "Message",
        }
    }

    pub fn label(code: u64) -> String {
        match Self::from_code(code) {
            Some(kind) => kind.name().to_string(),
            None => format!("Unknown ({code})"),
        }
    }
}

/// Body shared by coin, change and variable outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinOutput {
    pub to: HexBytes,
    pub amount: u64,
    pub asset_id: HexBytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractOutput {
    pub input_index: u64,
    pub balance_root: HexBytes,
    pub state_root: HexBytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractCreatedOutput {
    #[serde(rename = "contractID")]
    pub contract_id: HexBytes,
    pub state_root: HexBytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageOutput {
    pub recipient: HexBytes,
    pub amount: u64,
}

/// A transaction output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Coin(CoinOutput),
    Contract(ContractOutput),
    Change(CoinOutput),
    Variable(CoinOutput),
    ContractCreated(ContractCreatedOutput),
    Message(MessageOutput),
    /// Discriminant the decoder does not know. Its body was not consumed.
    Unknown(u64),
}

impl Output {
    pub fn kind(&self) -> Option<OutputKind> {
        Some(match self {
            Output::Coin(_) => OutputKind::Coin,
            Output::Contract(_) => OutputKind::Contract,
            Output::Change(_) => OutputKind::Change,
            Output::Variable(_) => OutputKind::Variable,
            Output::ContractCreated(_) => OutputKind::ContractCreated,
            Output::Message(_) => OutputKind::Message,
            Output::Unknown(_) => return None,
        })
    }

    pub fn code(&self) -> u64 {
        match self {
            Output::Unknown(code) => *code,
            known => known.kind().map_or(0, OutputKind::code),
        }
    }
}

impl Serialize for Output {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tag = self.code();
        match self {
            Output::Coin(body) | Output::Change(body) | Output::Variable(body) => {
                Tagged { tag, body }.serialize(serializer)
            }
            Output::Contract(body) => Tagged { tag, body }.serialize(serializer),
            Output::ContractCreated(body) => Tagged { tag, body }.serialize(serializer),
            Output::Message(body) => Tagged { tag, body }.serialize(serializer),
            Output::Unknown(code) => UnknownVariant::new(*code).serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn change_and_coin_share_a_body_but_not_a_tag() {
        let body = CoinOutput {
            to: HexBytes(vec![0xab]),
            amount: 42,
            asset_id: HexBytes(vec![0xcd]),
        };
        let change = serde_json::to_value(Output::Change(body.clone())).unwrap();
        let coin = serde_json::to_value(Output::Coin(body)).unwrap();
        assert_eq!(change, json!({ "type": 2, "to": "0xab", "amount": 42, "assetId": "0xcd" }));
        assert_eq!(coin["type"], json!(0));
    }

    #[test]
    fn codes() {
        assert_eq!(Output::Unknown(12).code(), 12);
        assert_eq!(OutputKind::label(4), "Contract Created");
        assert_eq!(OutputKind::label(6), "Unknown (6)");
    }
}
