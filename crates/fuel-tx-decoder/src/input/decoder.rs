use super::{CoinInput, ContractInput, Input, InputKind, MessageInput, TxPointer};
use crate::config::width;
use crate::context::{DecodeContext, Result};
use tracing::warn;

pub(crate) fn decode_inputs(ctx: &mut DecodeContext<'_>, count: u64) -> Result<Vec<Input>> {
    let count = ctx.ensure_elements("Inputs", count, ctx.layout().discriminant_width())?;
    ctx.group("Inputs", |ctx| {
        let mut inputs = Vec::with_capacity(count);
        for index in 0..count {
            let input = decode_input(ctx, index).map_err(|err| err.within(format!("input {index}")))?;
            inputs.push(input);
        }
        Ok(inputs)
    })
}

fn decode_input(ctx: &mut DecodeContext<'_>, index: usize) -> Result<Input> {
    let label = InputKind::label(ctx.peek_discriminant());
    ctx.group(&format!("Input {index} ({label})"), |ctx| {
        let code = ctx.discriminant("Input Type", InputKind::label)?;
        match InputKind::from_code(code) {
            Some(InputKind::Coin) => decode_coin(ctx).map(Input::Coin),
            Some(InputKind::Contract) => decode_contract(ctx).map(Input::Contract),
            Some(InputKind::Message) => decode_message(ctx).map(Input::Message),
            None => {
                warn!(index, code, offset = ctx.position(), "unknown input type");
                Ok(Input::Unknown(code))
            }
        }
    })
}

fn decode_coin(ctx: &mut DecodeContext<'_>) -> Result<CoinInput> {
    let tx_id = ctx.bytes("Tx ID", width::BYTES32)?;
    let output_index = ctx.uint("Output Index", width::OUTPUT_INDEX)?;
    let owner = ctx.bytes("Owner", width::BYTES32)?;
    let amount = ctx.uint("Amount", width::AMOUNT)?;
    let asset_id = ctx.bytes("Asset ID", width::BYTES32)?;
    let tx_pointer = decode_tx_pointer(ctx)?;
    let witness_index = ctx.uint("Witness Index", width::INPUT_WITNESS_INDEX)?;
    let predicate_gas_used = ctx.uint("Predicate Gas Used", width::PREDICATE_GAS_USED)?;
    let predicate_length = ctx.uint("Predicate Length", width::PREDICATE_LENGTH)?;
    let predicate_data_length = ctx.uint("Predicate Data Length", width::PREDICATE_DATA_LENGTH)?;
    let predicate = ctx.blob("Predicate", predicate_length)?;
    let predicate_data = ctx.blob("Predicate Data", predicate_data_length)?;
    Ok(CoinInput {
        tx_id,
        output_index,
        owner,
        amount,
        asset_id,
        tx_pointer,
        witness_index,
        predicate_gas_used,
        predicate_length,
        predicate_data_length,
        predicate,
        predicate_data,
    })
}

/// Decodes the body of a contract input, i.e. everything after the
/// discriminant. Mint transactions embed this body without one.
pub(crate) fn decode_contract(ctx: &mut DecodeContext<'_>) -> Result<ContractInput> {
    Ok(ContractInput {
        tx_id: ctx.bytes("Tx ID", width::BYTES32)?,
        output_index: ctx.uint("Output Index", width::OUTPUT_INDEX)?,
        balance_root: ctx.bytes("Balance Root", width::BYTES32)?,
        state_root: ctx.bytes("State Root", width::BYTES32)?,
        tx_pointer: decode_tx_pointer(ctx)?,
        contract_id: ctx.bytes("Contract ID", width::BYTES32)?,
    })
}

fn decode_message(ctx: &mut DecodeContext<'_>) -> Result<MessageInput> {
    let sender = ctx.bytes("Sender", width::BYTES32)?;
    let recipient = ctx.bytes("Recipient", width::BYTES32)?;
    let amount = ctx.uint("Amount", width::AMOUNT)?;
    let nonce = ctx.bytes("Nonce", width::BYTES32)?;
    let witness_index = ctx.uint("Witness Index", width::INPUT_WITNESS_INDEX)?;
    let predicate_gas_used = ctx.uint("Predicate Gas Used", width::PREDICATE_GAS_USED)?;
    let data_length = ctx.uint("Data Length", width::DATA_LENGTH)?;
    let predicate_length = ctx.uint("Predicate Length", width::PREDICATE_LENGTH)?;
    let predicate_data_length = ctx.uint("Predicate Data Length", width::PREDICATE_DATA_LENGTH)?;
    let data = ctx.blob("Data", data_length)?;
    let predicate = ctx.blob("Predicate", predicate_length)?;
    let predicate_data = ctx.blob("Predicate Data", predicate_data_length)?;
    Ok(MessageInput {
        sender,
        recipient,
        amount,
        nonce,
        witness_index,
        predicate_gas_used,
        data_length,
        predicate_length,
        predicate_data_length,
        data,
        predicate,
        predicate_data,
    })
}

pub(crate) fn decode_tx_pointer(ctx: &mut DecodeContext<'_>) -> Result<TxPointer> {
    ctx.group("Tx Pointer", |ctx| {
        Ok(TxPointer {
            block_height: ctx.uint("Block Height", width::BLOCK_HEIGHT)?,
            tx_index: ctx.uint("Tx Index", width::TX_INDEX)?,
        })
    })
}
