use crate::bytes::HexBytes;
use crate::config::width;
use crate::context::{DecodeContext, Result};
use serde::Serialize;

/// A length-prefixed witness, usually a signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Witness {
    pub data_length: u64,
    pub data: HexBytes,
}

pub(crate) fn decode_witnesses(ctx: &mut DecodeContext<'_>, count: u64) -> Result<Vec<Witness>> {
    let min_size = ctx.layout().uint_width(width::WITNESS_DATA_LENGTH);
    let count = ctx.ensure_elements("Witnesses", count, min_size)?;
    ctx.group("Witnesses", |ctx| {
        let mut witnesses = Vec::with_capacity(count);
        for index in 0..count {
            let witness = ctx
                .group(&format!("Witness {index}"), decode_witness)
                .map_err(|err| err.within(format!("witness {index}")))?;
            witnesses.push(witness);
        }
        Ok(witnesses)
    })
}

fn decode_witness(ctx: &mut DecodeContext<'_>) -> Result<Witness> {
    let data_length = ctx.uint("Data Length", width::WITNESS_DATA_LENGTH)?;
    let data = ctx.blob("Data", data_length)?;
    Ok(Witness { data_length, data })
}
