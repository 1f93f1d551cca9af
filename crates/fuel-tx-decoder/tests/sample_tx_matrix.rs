mod common;

use common::{assert_coverage, assert_monotonic, values_of};
use fuel_tx_decoder::input::Input;
use fuel_tx_decoder::output::Output;
use fuel_tx_decoder::{decode, FieldValue, Policy, Transaction, SAMPLE_SCRIPT_TX};

fn script() -> (fuel_tx_decoder::DecodedTransaction, fuel_tx_decoder::transaction::ScriptTransaction) {
    let decoded = decode(SAMPLE_SCRIPT_TX).unwrap();
    let Transaction::Script(tx) = decoded.transaction.clone() else {
        panic!("sample is not a script: {:?}", decoded.transaction.kind());
    };
    (decoded, tx)
}

#[test]
fn sample_header_matrix() {
    let (decoded, tx) = script();
    assert!(!decoded.truncated);
    assert_eq!(decoded.byte_len(), 1552);
    assert_eq!(tx.script_gas_limit, 109_382);
    assert_eq!(
        tx.receipts_root.to_string(),
        "0x23e6eb1aaf47d04e65397c335f3425c3f3fdb31fe00319dcf31096d642ac8e73"
    );
    assert_eq!(tx.script_length, 24);
    assert_eq!(tx.script_data_length, 141);
    assert_eq!(
        tx.script.to_string(),
        "0x724028c0724428985d451000724828a02d41148a24040000"
    );
    assert_eq!(tx.script_data.len(), 141);
    assert_eq!(tx.sections.policy_types, 8);
    assert_eq!(tx.sections.policies, vec![Policy::MaxFee(1091)]);
    assert_eq!(tx.sections.inputs_count, 5);
    assert_eq!(tx.sections.outputs_count, 5);
    assert_eq!(tx.sections.witnesses_count, 1);
}

#[test]
fn sample_counts_agree_with_fields() {
    let (decoded, tx) = script();
    let count = |name: &str| decoded.field(name).and_then(|f| f.value.as_number());
    assert_eq!(count("Inputs Count"), Some(tx.sections.inputs.len() as u64));
    assert_eq!(count("Outputs Count"), Some(tx.sections.outputs.len() as u64));
    assert_eq!(count("Witnesses Count"), Some(tx.sections.witnesses.len() as u64));
    assert_eq!(count("Gas Limit"), Some(tx.script_gas_limit));
    assert_eq!(
        decoded.field("Transaction Type").map(|f| f.value.clone()),
        Some(FieldValue::Text("Script".into()))
    );
}

#[test]
fn sample_inputs_matrix() {
    let (_, tx) = script();
    let inputs = &tx.sections.inputs;
    for (index, input) in inputs[..4].iter().enumerate() {
        let Input::Contract(contract) = input else {
            panic!("input {index} is not a contract: {input:?}");
        };
        assert_eq!(contract.output_index, index as u64);
        assert_eq!(contract.tx_pointer.block_height, 18_709_363);
    }
    let Input::Contract(first) = &inputs[0] else {
        unreachable!();
    };
    assert_eq!(
        first.tx_id.to_string(),
        "0x7f34cb7c777ecc3ea68538bd9ac435860a0eadec7097bcdfe547143d71f05eeb"
    );
    assert_eq!(
        first.contract_id.to_string(),
        "0x564b3d180ddf5cfe32b5478a2f0ec8661491280c4211366182b9cf41eaf26a2c"
    );

    let Input::Coin(coin) = &inputs[4] else {
        panic!("input 4 is not a coin: {:?}", inputs[4]);
    };
    assert_eq!(
        coin.tx_id.to_string(),
        "0x9c2332452132c6b59d9dd62915f769a194004b8bd940977f603c56cd2d66fdfc"
    );
    assert_eq!(coin.output_index, 4);
    assert_eq!(
        coin.owner.to_string(),
        "0xbad62d52565e147cf88d6291d37f4237f52fcd092bcab7a9758ea7c9065761f7"
    );
    assert_eq!(coin.amount, 461_682_566);
    assert_eq!(
        coin.asset_id.to_string(),
        "0xf8f8b6283d7fa5b672b530cbb84fcccb4ff8dc40f8176ef4544ddb1f1952ad07"
    );
    assert_eq!(coin.tx_pointer.block_height, 18_709_355);
    assert_eq!(coin.predicate_length, 0);
    assert!(coin.predicate.is_empty());
    assert!(coin.predicate_data.is_empty());
}

#[test]
fn sample_outputs_and_witness_matrix() {
    let (_, tx) = script();
    let outputs = &tx.sections.outputs;
    for (index, output) in outputs[..4].iter().enumerate() {
        let Output::Contract(contract) = output else {
            panic!("output {index} is not a contract: {output:?}");
        };
        assert_eq!(contract.input_index, index as u64);
    }
    let Output::Change(change) = &outputs[4] else {
        panic!("output 4 is not a change output: {:?}", outputs[4]);
    };
    assert_eq!(change.amount, 461_682_224);
    assert_eq!(
        change.to.to_string(),
        "0xbad62d52565e147cf88d6291d37f4237f52fcd092bcab7a9758ea7c9065761f7"
    );

    let witness = &tx.sections.witnesses[0];
    assert_eq!(witness.data_length, 64);
    assert_eq!(
        witness.data.to_string(),
        "0x5650fbc2090ea6278b5ea09c38e2117c783b43bbd9d9e9797033f4abb0db2146\
         61523bd5b64c40f505ea0596df00e6e9da8946d1716f7d4c091db79909e9eb70"
    );
}

#[test]
fn sample_field_positions() {
    let (decoded, _) = script();
    let span = |name: &str| decoded.field(name).map(|f| (f.start, f.end));
    assert_eq!(span("Transaction Type"), Some((0, 8)));
    assert_eq!(span("Gas Limit"), Some((8, 16)));
    assert_eq!(span("Receipts Root"), Some((16, 48)));
    assert_eq!(span("Script"), Some((96, 120)));
    assert_eq!(span("Script Data"), Some((120, 261)));
    assert_eq!(span("Max Fee"), Some((264, 272)));
    assert_eq!(decoded.skips, vec![261..264]);

    let gas = decoded.field("Gas Limit").unwrap();
    assert_eq!(gas.start_pos(), 16);
    assert_eq!(gas.end_pos(), 32);
    assert_eq!(gas.hex, "000000000001ab46");

    let input_types: Vec<_> = decoded
        .fields
        .iter()
        .filter(|f| f.name == "Input Type")
        .map(|f| (f.start, f.value.to_string()))
        .collect();
    assert_eq!(
        input_types,
        vec![
            (272, "Contract".to_string()),
            (432, "Contract".to_string()),
            (592, "Contract".to_string()),
            (752, "Contract".to_string()),
            (912, "Coin".to_string()),
        ]
    );
    assert_eq!(values_of(&decoded, "Output Type")[4], "Change");
    assert_eq!(span("Data Length"), Some((1480, 1488)));
    assert_eq!(span("Data"), Some((1488, 1552)));
}

#[test]
fn sample_groups() {
    let (decoded, _) = script();
    let headers: Vec<_> = decoded
        .fields
        .iter()
        .filter(|f| f.is_group_header)
        .map(|f| (f.name.as_str(), f.level))
        .collect();
    assert_eq!(headers[0], ("Policies", 0));
    assert_eq!(headers[1], ("Inputs", 0));
    assert_eq!(headers[2], ("Input 0 (Contract)", 1));
    assert_eq!(headers[3], ("Tx Pointer", 2));
    assert!(headers.contains(&("Input 4 (Coin)", 1)));
    assert!(headers.contains(&("Output 4 (Change)", 1)));
    assert!(headers.contains(&("Witness 0", 1)));

    let max_fee = decoded.field("Max Fee").unwrap();
    let policies = decoded.field("Policies").unwrap();
    assert_eq!(max_fee.group_id, policies.group_id);
    assert_eq!(max_fee.level, policies.level + 1);
    assert_eq!(decoded.field("Gas Limit").unwrap().group_id, None);

    let block_height = decoded.field("Block Height").unwrap();
    assert_eq!(block_height.level, 3);
}

#[test]
fn sample_is_well_formed() {
    let (decoded, _) = script();
    assert_coverage(&decoded);
    assert_monotonic(&decoded);
    assert!(decoded.field("Trailing Bytes").is_none());
}

#[test]
fn sample_summary() {
    let (decoded, _) = script();
    let summary = decoded.transaction.summary();
    assert_eq!(summary.type_name, "Script");
    assert_eq!(summary.gas_limit, Some(109_382));
    assert_eq!(summary.inputs_count, 5);
    assert_eq!(summary.max_fee, Some(1091));
}
