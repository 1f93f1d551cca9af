//! Transaction inputs.

mod decoder;

pub(crate) use decoder::{decode_contract, decode_inputs, decode_tx_pointer};

use crate::bytes::{HexBytes, Tagged, UnknownVariant};
use serde::{Serialize, Serializer};

/// Discriminant of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Coin = 0,
    Contract = 1,
    Message = 2,
}

impl InputKind {
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(InputKind::Coin),
            1 => Some(InputKind::Contract),
            2 => Some(InputKind::Message),
            _ => None,
        }
    }

    pub fn code(self) -> u64 {
        self as u64
    }

    pub fn name(self) -> &'static str {
        match self {
            InputKind::Coin => "Coin",
            InputKind::Contract => "Contract",
            InputKind::Message => "Message",
        }
    }

    /// Display label for any discriminant, known or not.
    pub fn label(code: u64) -> String {
        match Self::from_code(code) {
            Some(kind) => kind.name().to_string(),
            None => format!("Unknown ({code})"),
        }
    }
}

/// Location of a transaction in the chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TxPointer {
    pub block_height: u64,
    pub tx_index: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinInput {
    #[serde(rename = "txID")]
    pub tx_id: HexBytes,
    pub output_index: u64,
    pub owner: HexBytes,
    pub amount: u64,
    pub asset_id: HexBytes,
    pub tx_pointer: TxPointer,
    pub witness_index: u64,
    pub predicate_gas_used: u64,
    pub predicate_length: u64,
    pub predicate_data_length: u64,
    pub predicate: HexBytes,
    pub predicate_data: HexBytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractInput {
    #[serde(rename = "txID")]
    pub tx_id: HexBytes,
    pub output_index: u64,
    pub balance_root: HexBytes,
    pub state_root: HexBytes,
    pub tx_pointer: TxPointer,
    #[serde(rename = "contractID")]
    pub contract_id: HexBytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageInput {
    pub sender: HexBytes,
    pub recipient: HexBytes,
    pub amount: u64,
    pub nonce: HexBytes,
    pub witness_index: u64,
    pub predicate_gas_used: u64,
    pub data_length: u64,
    pub predicate_length: u64,
    pub predicate_data_length: u64,
    pub data: HexBytes,
    pub predicate: HexBytes,
    pub predicate_data: HexBytes,
}

/// A transaction input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Coin(CoinInput),
    Contract(ContractInput),
    Message(MessageInput),
    /// Discriminant the decoder does not know. Its body was not consumed.
    Unknown(u64),
}

impl Input {
    pub fn kind(&self) -> Option<InputKind> {
        match self {
            Input::Coin(_) => Some(InputKind::Coin),
            Input::Contract(_) => Some(InputKind::Contract),
            Input::Message(_) => Some(InputKind::Message),
            Input::Unknown(_) => None,
        }
    }

    /// Numeric discriminant, including unknown ones.
    pub fn code(&self) -> u64 {
        match self {
            Input::Unknown(code) => *code,
            known => known.kind().map_or(0, InputKind::code),
        }
    }
}

impl Serialize for Input {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tag = self.code();
        match self {
            Input::Coin(body) => Tagged { tag, body }.serialize(serializer),
            Input::Contract(body) => Tagged { tag, body }.serialize(serializer),
            Input::Message(body) => Tagged { tag, body }.serialize(serializer),
            Input::Unknown(code) => UnknownVariant::new(*code).serialize(serializer),
        }
    }
}
