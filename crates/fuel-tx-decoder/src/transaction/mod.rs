//! Typed transaction tree.

mod decoder;

pub(crate) use decoder::decode_transaction;

use crate::bytes::{HexBytes, Tagged, UnknownVariant};
use crate::input::{ContractInput, Input, TxPointer};
use crate::output::{ContractOutput, Output};
use crate::policy::Policy;
use crate::witness::Witness;
use serde::{Serialize, Serializer};

/// Leading discriminant of an encoded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Script = 0,
    Create = 1,
    Mint = 2,
    Upgrade = 3,
    Upload = 4,
    Blob = 5,
}

impl TransactionKind {
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(TransactionKind::Script),
            1 => Some(TransactionKind::Create),
            2 => Some(TransactionKind::Mint),
            3 => Some(TransactionKind::Upgrade),
            4 => Some(TransactionKind::Upload),
            5 => Some(TransactionKind::Blob),
            _ => None,
        }
    }

    pub fn code(self) -> u64 {
        self as u64
    }

    pub fn name(self) -> &'static str {
        match self {
            TransactionKind::Script => "Script",
            TransactionKind::Create => "Create",
            TransactionKind::Mint => "Mint",
            TransactionKind::Upgrade => "Upgrade",
            TransactionKind::Upload => "Upload",
            TransactionKind::Blob => "Blob",
        }
    }

    pub fn label(code: u64) -> String {
        match Self::from_code(code) {
            Some(kind) => kind.name().to_string(),
            None => format!("Unknown ({code})"),
        }
    }
}

/// Policies, inputs, outputs and witnesses of a chargeable transaction,
/// together with the counts the header declared for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sections {
    pub policy_types: u64,
    pub inputs_count: u64,
    pub outputs_count: u64,
    pub witnesses_count: u64,
    pub policies: Vec<Policy>,
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
    pub witnesses: Vec<Witness>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptTransaction {
    pub script_gas_limit: u64,
    pub receipts_root: HexBytes,
    pub script_length: u64,
    pub script_data_length: u64,
    #[serde(flatten)]
    pub sections: Sections,
    pub script: HexBytes,
    pub script_data: HexBytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageSlot {
    pub key: HexBytes,
    pub value: HexBytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransaction {
    pub bytecode_witness_index: u64,
    pub salt: HexBytes,
    pub storage_slots_count: u64,
    #[serde(flatten)]
    pub sections: Sections,
    pub storage_slots: Vec<StorageSlot>,
}

/// Block producer's coinbase. Not chargeable, so it has no sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintTransaction {
    pub tx_pointer: TxPointer,
    pub input_contract: ContractInput,
    pub output_contract: ContractOutput,
    pub mint_amount: u64,
    pub mint_asset_id: HexBytes,
    pub gas_price: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusParametersUpgrade {
    pub witness_index: u64,
    pub checksum: HexBytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateTransitionUpgrade {
    pub root: HexBytes,
}

/// What an upgrade transaction changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpgradePurpose {
    ConsensusParameters(ConsensusParametersUpgrade),
    StateTransition(StateTransitionUpgrade),
    Unknown(u64),
}

impl UpgradePurpose {
    pub fn code(&self) -> u64 {
        match self {
            UpgradePurpose::ConsensusParameters(_) => 0,
            UpgradePurpose::StateTransition(_) => 1,
            UpgradePurpose::Unknown(code) => *code,
        }
    }

    pub fn label(code: u64) -> String {
        match code {
            0 => "Consensus Parameters".to_string(),
            1 => "State Transition".to_string(),
            _ => format!("Unknown ({code})"),
        }
    }
}

impl Serialize for UpgradePurpose {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tag = self.code();
        match self {
            UpgradePurpose::ConsensusParameters(body) => Tagged { tag, body }.serialize(serializer),
            UpgradePurpose::StateTransition(body) => Tagged { tag, body }.serialize(serializer),
            UpgradePurpose::Unknown(code) => UnknownVariant::new(*code).serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeTransaction {
    pub upgrade_purpose: UpgradePurpose,
    #[serde(flatten)]
    pub sections: Sections,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTransaction {
    pub root: HexBytes,
    pub witness_index: u64,
    pub subsection_index: u64,
    pub subsections_number: u64,
    pub proof_set_count: u64,
    #[serde(flatten)]
    pub sections: Sections,
    pub proof_set: Vec<HexBytes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobTransaction {
    pub id: HexBytes,
    pub witness_index: u64,
    #[serde(flatten)]
    pub sections: Sections,
}

/// A decoded Fuel transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Script(ScriptTransaction),
    Create(CreateTransaction),
    Mint(MintTransaction),
    Upgrade(UpgradeTransaction),
    Upload(UploadTransaction),
    Blob(BlobTransaction),
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Script(_) => TransactionKind::Script,
            Transaction::Create(_) => TransactionKind::Create,
            Transaction::Mint(_) => TransactionKind::Mint,
            Transaction::Upgrade(_) => TransactionKind::Upgrade,
            Transaction::Upload(_) => TransactionKind::Upload,
            Transaction::Blob(_) => TransactionKind::Blob,
        }
    }

    /// Policies, inputs, outputs and witnesses. `None` for mint.
    pub fn sections(&self) -> Option<&Sections> {
        match self {
            Transaction::Script(tx) => Some(&tx.sections),
            Transaction::Create(tx) => Some(&tx.sections),
            Transaction::Mint(_) => None,
            Transaction::Upgrade(tx) => Some(&tx.sections),
            Transaction::Upload(tx) => Some(&tx.sections),
            Transaction::Blob(tx) => Some(&tx.sections),
        }
    }

    pub fn inputs(&self) -> &[Input] {
        match self.sections() {
            Some(sections) => &sections.inputs,
            None => &[],
        }
    }

    pub fn outputs(&self) -> &[Output] {
        match self.sections() {
            Some(sections) => &sections.outputs,
            None => &[],
        }
    }

    pub fn policies(&self) -> &[Policy] {
        match self.sections() {
            Some(sections) => &sections.policies,
            None => &[],
        }
    }

    pub fn witnesses(&self) -> &[Witness] {
        match self.sections() {
            Some(sections) => &sections.witnesses,
            None => &[],
        }
    }

    /// Headline values shown above the byte view.
    pub fn summary(&self) -> TransactionSummary {
        let kind = self.kind();
        let sections = self.sections();
        let count = |f: fn(&Sections) -> u64| sections.map_or(0, f);
        TransactionSummary {
            tx_type: kind.code(),
            type_name: kind.name(),
            gas_limit: match self {
                Transaction::Script(tx) => Some(tx.script_gas_limit),
                _ => None,
            },
            inputs_count: count(|s| s.inputs_count),
            outputs_count: count(|s| s.outputs_count),
            witnesses_count: count(|s| s.witnesses_count),
            max_fee: self.policies().iter().find_map(|policy| match policy {
                Policy::MaxFee(fee) => Some(*fee),
                _ => None,
            }),
        }
    }
}

impl Serialize for Transaction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tag = self.kind().code();
        match self {
            Transaction::Script(body) => Tagged { tag, body }.serialize(serializer),
            Transaction::Create(body) => Tagged { tag, body }.serialize(serializer),
            Transaction::Mint(body) => Tagged { tag, body }.serialize(serializer),
            Transaction::Upgrade(body) => Tagged { tag, body }.serialize(serializer),
            Transaction::Upload(body) => Tagged { tag, body }.serialize(serializer),
            Transaction::Blob(body) => Tagged { tag, body }.serialize(serializer),
        }
    }
}

/// Headline values of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    #[serde(rename = "type")]
    pub tx_type: u64,
    pub type_name: &'static str,
    pub gas_limit: Option<u64>,
    pub inputs_count: u64,
    pub outputs_count: u64,
    pub witnesses_count: u64,
    pub max_fee: Option<u64>,
}
