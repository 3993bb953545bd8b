use aurion_core::{
    AbiEntry, AbiEntryKind, AbiParam, Ast, DataType, Event, Function, Param, StateMutability,
};
use tiny_keccak::{Hasher, Keccak};

const VIEW_PREFIXES: &[&str] = &["get", "is", "has"];

/// First four bytes of keccak256 over a canonical signature.
pub fn compute_function_selector(signature: &str) -> u32 {
    let mut keccak = Keccak::v256();
    let mut output = [0u8; 32];
    keccak.update(signature.as_bytes());
    keccak.finalize(&mut output);

    u32::from_be_bytes([output[0], output[1], output[2], output[3]])
}

fn abi_type(raw: &str) -> String {
    DataType::from_source(raw).abi_name().to_string()
}

fn inputs(params: &[Param]) -> Vec<AbiParam> {
    params
        .iter()
        .map(|p| AbiParam {
            name: p.name.clone(),
            abi_type: abi_type(&p.data_type),
        })
        .collect()
}

/// Getter-style names and explicit `view`/`pure` modifiers are read-only.
pub fn infer_mutability(function: &Function) -> StateMutability {
    let getter = VIEW_PREFIXES.iter().any(|prefix| {
        function
            .name
            .strip_prefix(prefix)
            .and_then(|rest| rest.chars().next())
            .is_some_and(|c| c.is_ascii_uppercase() || c == '_')
    });

    if getter || function.has_modifier("view") || function.has_modifier("pure") {
        StateMutability::View
    } else {
        StateMutability::Nonpayable
    }
}

pub fn function_entry(function: &Function) -> AbiEntry {
    let signature = function.signature(abi_type);
    AbiEntry {
        kind: AbiEntryKind::Function,
        name: function.name.clone(),
        inputs: inputs(&function.parameters),
        state_mutability: Some(infer_mutability(function)),
        selector: Some(format!("0x{:08x}", compute_function_selector(&signature))),
    }
}

pub fn event_entry(event: &Event) -> AbiEntry {
    AbiEntry {
        kind: AbiEntryKind::Event,
        name: event.name.clone(),
        inputs: inputs(&event.parameters),
        state_mutability: None,
        selector: None,
    }
}

/// Functions come from the whole-source list, so leaked duplicates across contracts do not
/// repeat in the ABI.
pub fn generate_abi(ast: &Ast) -> Vec<AbiEntry> {
    ast.body
        .iter()
        .map(function_entry)
        .chain(ast.events.iter().map(event_entry))
        .collect()
}
