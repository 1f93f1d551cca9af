//! Transaction policies.
//!
//! Policies carry no discriminant. The `policyTypes` bitmask in the header
//! says which ones are present and they follow in bit order.

use crate::config::width;
use crate::context::{DecodeContext, Result};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Tip,
    WitnessLimit,
    Maturity,
    MaxFee,
}

impl PolicyKind {
    /// All policies in the order they are encoded.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Tip,
        PolicyKind::WitnessLimit,
        PolicyKind::Maturity,
        PolicyKind::MaxFee,
    ];

    /// Bits of `policyTypes` that name a known policy.
    pub const KNOWN_BITS: u64 = 0b1111;

    pub fn bit(self) -> u64 {
        match self {
            PolicyKind::Tip => 1,
            PolicyKind::WitnessLimit => 2,
            PolicyKind::Maturity => 4,
            PolicyKind::MaxFee => 8,
        }
    }

    /// Logical width of the policy value in bytes.
    pub fn width(self) -> usize {
        match self {
            PolicyKind::Tip => width::TIP,
            PolicyKind::WitnessLimit => width::WITNESS_LIMIT,
            PolicyKind::Maturity => width::MATURITY,
            PolicyKind::MaxFee => width::MAX_FEE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Tip => "Tip",
            PolicyKind::WitnessLimit => "Witness Limit",
            PolicyKind::Maturity => "Maturity",
            PolicyKind::MaxFee => "Max Fee",
        }
    }

    fn key(self) -> &'static str {
        match self {
            PolicyKind::Tip => "tip",
            PolicyKind::WitnessLimit => "witnessLimit",
            PolicyKind::Maturity => "maturity",
            PolicyKind::MaxFee => "maxFee",
        }
    }

    /// Policies selected by `bits`, in encoding order.
    pub fn selected(bits: u64) -> impl Iterator<Item = PolicyKind> {
        Self::ALL.into_iter().filter(move |kind| bits & kind.bit() != 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Tip(u64),
    WitnessLimit(u64),
    Maturity(u64),
    MaxFee(u64),
}

impl Policy {
    pub fn new(kind: PolicyKind, value: u64) -> Self {
        match kind {
            PolicyKind::Tip => Policy::Tip(value),
            PolicyKind::WitnessLimit => Policy::WitnessLimit(value),
            PolicyKind::Maturity => Policy::Maturity(value),
            PolicyKind::MaxFee => Policy::MaxFee(value),
        }
    }

    pub fn kind(&self) -> PolicyKind {
        match self {
            Policy::Tip(_) => PolicyKind::Tip,
            Policy::WitnessLimit(_) => PolicyKind::WitnessLimit,
            Policy::Maturity(_) => PolicyKind::Maturity,
            Policy::MaxFee(_) => PolicyKind::MaxFee,
        }
    }

    pub fn value(&self) -> u64 {
        match *self {
            Policy::Tip(v) | Policy::WitnessLimit(v) | Policy::Maturity(v) | Policy::MaxFee(v) => v,
        }
    }
}

impl Serialize for Policy {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let kind = self.kind();
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", &kind.bit())?;
        map.serialize_entry(kind.key(), &self.value())?;
        map.end()
    }
}

pub(crate) fn decode_policies(ctx: &mut DecodeContext<'_>, policy_types: u64) -> Result<Vec<Policy>> {
    let unknown = policy_types & !PolicyKind::KNOWN_BITS;
    if unknown != 0 {
        warn!(policy_types, unknown, "ignoring unknown policy bits");
    }
    ctx.group("Policies", |ctx| {
        PolicyKind::selected(policy_types)
            .map(|kind| -> Result<Policy> {
                Ok(Policy::new(kind, ctx.uint(kind.name(), kind.width())?))
            })
            .collect()
    })
}
