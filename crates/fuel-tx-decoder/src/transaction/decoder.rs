use super::{
    BlobTransaction, ConsensusParametersUpgrade, CreateTransaction, MintTransaction,
    ScriptTransaction, Sections, StateTransitionUpgrade, StorageSlot, Transaction,
    TransactionKind, UpgradePurpose, UpgradeTransaction, UploadTransaction,
};
use crate::bytes::HexBytes;
use crate::config::{width, Layout};
use crate::context::{DecodeContext, Result};
use crate::error::DecodeError;
use crate::input::{self, decode_inputs, decode_tx_pointer};
use crate::output::{self, decode_outputs};
use crate::policy::decode_policies;
use crate::witness::decode_witnesses;
use tracing::{debug, warn};

/// Reads the transaction discriminant and decodes the matching body.
///
/// A canonical type word never has a non-zero leading byte. Input that does
/// is byte-tagged, and an unknown tag is reported as that byte.
pub(crate) fn decode_transaction(ctx: &mut DecodeContext<'_>) -> Result<Transaction> {
    if ctx.layout() == Layout::Canonical {
        if let Some(tag) = ctx.peek_byte().filter(|&tag| tag != 0) {
            if TransactionKind::from_code(u64::from(tag)).is_none() {
                return Err(DecodeError::UnsupportedType(u64::from(tag)));
            }
        }
    }
    let code = ctx.discriminant("Transaction Type", TransactionKind::label)?;
    let kind = TransactionKind::from_code(code).ok_or(DecodeError::UnsupportedType(code))?;
    debug!(kind = kind.name(), layout = ?ctx.layout(), "decoding transaction");
    Ok(match kind {
        TransactionKind::Script => Transaction::Script(decode_script(ctx)?),
        TransactionKind::Create => Transaction::Create(decode_create(ctx)?),
        TransactionKind::Mint => Transaction::Mint(decode_mint(ctx)?),
        TransactionKind::Upgrade => Transaction::Upgrade(decode_upgrade(ctx)?),
        TransactionKind::Upload => Transaction::Upload(decode_upload(ctx)?),
        TransactionKind::Blob => Transaction::Blob(decode_blob(ctx)?),
    })
}

/// Decodes the policy, input, output and witness sections around the
/// type-specific `payload`.
///
/// The canonical layout declares every count in the header, then carries
/// the payload, then the sections. The compact layout puts each count right
/// before its elements and the payload last.
fn decode_sections<'a, P>(
    ctx: &mut DecodeContext<'a>,
    payload: impl FnOnce(&mut DecodeContext<'a>) -> Result<P>,
) -> Result<(Sections, P)> {
    if ctx.layout().counts_up_front() {
        let policy_types = ctx.bitmask("Policy Types", width::POLICY_TYPES)?;
        let inputs_count = ctx.uint("Inputs Count", width::COUNT)?;
        let outputs_count = ctx.uint("Outputs Count", width::COUNT)?;
        let witnesses_count = ctx.uint("Witnesses Count", width::COUNT)?;
        let payload = payload(ctx)?;
        let policies = decode_policies(ctx, policy_types)?;
        let inputs = decode_inputs(ctx, inputs_count).map_err(|err| err.within("inputs"))?;
        let outputs = decode_outputs(ctx, outputs_count).map_err(|err| err.within("outputs"))?;
        let witnesses =
            decode_witnesses(ctx, witnesses_count).map_err(|err| err.within("witnesses"))?;
        let sections = Sections {
            policy_types,
            inputs_count,
            outputs_count,
            witnesses_count,
            policies,
            inputs,
            outputs,
            witnesses,
        };
        Ok((sections, payload))
    } else {
        let policy_types = ctx.bitmask("Policy Types", width::POLICY_TYPES)?;
        let policies = decode_policies(ctx, policy_types)?;
        let inputs_count = ctx.uint("Inputs Count", width::COUNT)?;
        let inputs = decode_inputs(ctx, inputs_count).map_err(|err| err.within("inputs"))?;
        let outputs_count = ctx.uint("Outputs Count", width::COUNT)?;
        let outputs = decode_outputs(ctx, outputs_count).map_err(|err| err.within("outputs"))?;
        let witnesses_count = ctx.uint("Witnesses Count", width::COUNT)?;
        let witnesses =
            decode_witnesses(ctx, witnesses_count).map_err(|err| err.within("witnesses"))?;
        let payload = payload(ctx)?;
        let sections = Sections {
            policy_types,
            inputs_count,
            outputs_count,
            witnesses_count,
            policies,
            inputs,
            outputs,
            witnesses,
        };
        Ok((sections, payload))
    }
}

fn decode_script(ctx: &mut DecodeContext<'_>) -> Result<ScriptTransaction> {
    let script_gas_limit = ctx.uint("Gas Limit", width::GAS_LIMIT)?;
    let receipts_root = ctx.bytes("Receipts Root", width::BYTES32)?;
    let script_length = ctx.uint("Script Length", width::SCRIPT_LENGTH)?;
    let script_data_length = ctx.uint("Script Data Length", width::SCRIPT_DATA_LENGTH)?;
    let (sections, (script, script_data)) = decode_sections(ctx, |ctx| {
        let script = ctx.blob("Script", script_length)?;
        let script_data = ctx.blob("Script Data", script_data_length)?;
        Ok((script, script_data))
    })?;
    Ok(ScriptTransaction {
        script_gas_limit,
        receipts_root,
        script_length,
        script_data_length,
        sections,
        script,
        script_data,
    })
}

fn decode_create(ctx: &mut DecodeContext<'_>) -> Result<CreateTransaction> {
    let bytecode_witness_index = ctx.uint("Bytecode Witness Index", width::BYTECODE_WITNESS_INDEX)?;
    let salt = ctx.bytes("Salt", width::BYTES32)?;
    let storage_slots_count = ctx.uint("Storage Slots Count", width::STORAGE_SLOTS_COUNT)?;
    let (sections, storage_slots) =
        decode_sections(ctx, |ctx| decode_storage_slots(ctx, storage_slots_count))?;
    Ok(CreateTransaction {
        bytecode_witness_index,
        salt,
        storage_slots_count,
        sections,
        storage_slots,
    })
}

fn decode_storage_slots(ctx: &mut DecodeContext<'_>, count: u64) -> Result<Vec<StorageSlot>> {
    let count = ctx.ensure_elements("Storage Slots", count, width::STORAGE_SLOT)?;
    ctx.group("Storage Slots", |ctx| {
        let mut slots = Vec::with_capacity(count);
        for index in 0..count {
            let slot = ctx.group(&format!("Storage Slot {index}"), |ctx| {
                Ok(StorageSlot {
                    key: ctx.bytes("Key", width::BYTES32)?,
                    value: ctx.bytes("Value", width::BYTES32)?,
                })
            })?;
            slots.push(slot);
        }
        Ok(slots)
    })
}

fn decode_mint(ctx: &mut DecodeContext<'_>) -> Result<MintTransaction> {
    let tx_pointer = decode_tx_pointer(ctx)?;
    let input_contract = ctx
        .group("Input Contract", input::decode_contract)
        .map_err(|err| err.within("mint input contract"))?;
    let output_contract = ctx
        .group("Output Contract", output::decode_contract)
        .map_err(|err| err.within("mint output contract"))?;
    Ok(MintTransaction {
        tx_pointer,
        input_contract,
        output_contract,
        mint_amount: ctx.uint("Mint Amount", width::MINT_AMOUNT)?,
        mint_asset_id: ctx.bytes("Mint Asset ID", width::BYTES32)?,
        gas_price: ctx.uint("Gas Price", width::GAS_PRICE)?,
    })
}

fn decode_upgrade(ctx: &mut DecodeContext<'_>) -> Result<UpgradeTransaction> {
    let upgrade_purpose = ctx.group("Upgrade Purpose", |ctx| {
        let code = ctx.discriminant("Purpose Type", UpgradePurpose::label)?;
        Ok(match code {
            0 => UpgradePurpose::ConsensusParameters(ConsensusParametersUpgrade {
                witness_index: ctx.uint("Witness Index", width::WITNESS_INDEX)?,
                checksum: ctx.bytes("Checksum", width::BYTES32)?,
            }),
            1 => UpgradePurpose::StateTransition(StateTransitionUpgrade {
                root: ctx.bytes("Root", width::BYTES32)?,
            }),
            _ => {
                warn!(code, offset = ctx.position(), "unknown upgrade purpose");
                UpgradePurpose::Unknown(code)
            }
        })
    })?;
    let (sections, ()) = decode_sections(ctx, |_| Ok(()))?;
    Ok(UpgradeTransaction {
        upgrade_purpose,
        sections,
    })
}

fn decode_upload(ctx: &mut DecodeContext<'_>) -> Result<UploadTransaction> {
    let root = ctx.bytes("Root", width::BYTES32)?;
    let witness_index = ctx.uint("Witness Index", width::WITNESS_INDEX)?;
    let subsection_index = ctx.uint("Subsection Index", width::SUBSECTION_INDEX)?;
    let subsections_number = ctx.uint("Subsections Number", width::SUBSECTIONS_NUMBER)?;
    let proof_set_count = ctx.uint("Proof Set Count", width::PROOF_SET_COUNT)?;
    let (sections, proof_set) = decode_sections(ctx, |ctx| decode_proof_set(ctx, proof_set_count))?;
    Ok(UploadTransaction {
        root,
        witness_index,
        subsection_index,
        subsections_number,
        proof_set_count,
        sections,
        proof_set,
    })
}

fn decode_proof_set(ctx: &mut DecodeContext<'_>, count: u64) -> Result<Vec<HexBytes>> {
    let count = ctx.ensure_elements("Proof Set", count, width::BYTES32)?;
    ctx.group("Proof Set", |ctx| {
        (0..count)
            .map(|index| ctx.bytes(&format!("Proof {index}"), width::BYTES32))
            .collect()
    })
}

fn decode_blob(ctx: &mut DecodeContext<'_>) -> Result<BlobTransaction> {
    let id = ctx.bytes("Blob ID", width::BYTES32)?;
    let witness_index = ctx.uint("Witness Index", width::WITNESS_INDEX)?;
    let (sections, ()) = decode_sections(ctx, |_| Ok(()))?;
    Ok(BlobTransaction {
        id,
        witness_index,
        sections,
    })
}
