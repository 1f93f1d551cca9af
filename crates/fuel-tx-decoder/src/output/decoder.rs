use super::{CoinOutput, ContractCreatedOutput, ContractOutput, MessageOutput, Output, OutputKind};
use crate::config::width;
use crate::context::{DecodeContext, Result};
use tracing::warn;

pub(crate) fn decode_outputs(ctx: &mut DecodeContext<'_>, count: u64) -> Result<Vec<Output>> {
    let count = ctx.ensure_elements("Outputs", count, ctx.layout().discriminant_width())?;
    ctx.group("Outputs", |ctx| {
        let mut outputs = Vec::with_capacity(count);
        for index in 0..count {
            let output =
                decode_output(ctx, index).map_err(|err| err.within(format!("output {index}")))?;
            outputs.push(output);
        }
        Ok(outputs)
    })
}

fn decode_output(ctx: &mut DecodeContext<'_>, index: usize) -> Result<Output> {
    let label = OutputKind::label(ctx.peek_discriminant());
    ctx.group(&format!("Output {index} ({label})"), |ctx| {
        let code = ctx.discriminant("Output Type", OutputKind::label)?;
        let Some(kind) = OutputKind::from_code(code) else {
            warn!(index, code, offset = ctx.position(), "unknown output type");
            return Ok(Output::Unknown(code));
        };
        Ok(match kind {
            OutputKind::Coin => Output::Coin(decode_coin(ctx)?),
            OutputKind::Contract => Output::Contract(decode_contract(ctx)?),
            OutputKind::Change => Output::Change(decode_coin(ctx)?),
            OutputKind::Variable => Output::Variable(decode_coin(ctx)?),
            OutputKind::ContractCreated => Output::ContractCreated(ContractCreatedOutput {
                contract_id: ctx.bytes("Contract ID", width::BYTES32)?,
                state_root: ctx.bytes("State Root", width::BYTES32)?,
            }),
            OutputKind::Message => Output::Message(MessageOutput {
                recipient: ctx.bytes("Recipient", width::BYTES32)?,
                amount: ctx.uint("Amount", width::AMOUNT)?,
            }),
        })
    })
}

fn decode_coin(ctx: &mut DecodeContext<'_>) -> Result<CoinOutput> {
    Ok(CoinOutput {
        to: ctx.bytes("To", width::BYTES32)?,
        amount: ctx.uint("Amount", width::AMOUNT)?,
        asset_id: ctx.bytes("Asset ID", width::BYTES32)?,
    })
}

/// Decodes the body of a contract output. Mint transactions embed this body
/// without a discriminant.
pub(crate) fn decode_contract(ctx: &mut DecodeContext<'_>) -> Result<ContractOutput> {
    Ok(ContractOutput {
        input_index: ctx.uint("Input Index", width::INPUT_INDEX)?,
        balance_root: ctx.bytes("Balance Root", width::BYTES32)?,
        state_root: ctx.bytes("State Root", width::BYTES32)?,
    })
}
