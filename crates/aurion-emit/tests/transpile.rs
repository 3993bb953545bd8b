use aurion_core::config::ParserConfig;
use aurion_core::{AbiEntryKind, StateMutability, Target};
use aurion_emit::transpile;
use aurion_parser::{parse, parse_with_config};
use pretty_assertions::assert_eq;

const VAULT: &str = r#"
@secure
contract Vault {
    mapping<address, uint256> public deposits;
    bool private paused;

    event Deposited(address indexed who, uint256 amount);

    init() {
        paused = false;
    }

    function deposit(uint256 amount) public {
        deposits[msg.sender] = deposits[msg.sender] + amount;
    }

    function getDeposit(address who) external view returns (uint256) {
        return deposits[who];
    }

    function withdraw(uint256 amount) external {
    }
}
"#;

#[test]
fn test_evm_output_shape() {
    let ast = parse(VAULT).ast.expect("vault parses");
    let result = transpile(&ast, Target::Evm);

    assert!(result.success);
    let code = &result.optimized_code;
    assert!(code.starts_with("// SPDX-License-Identifier: MIT\npragma solidity ^0.8.19;\n"));
    assert!(code.contains("// @secure"));
    assert!(code.contains("contract Vault {"));
    assert!(code.contains("    mapping(address => uint256) public deposits;"));
    assert!(code.contains("    bool private paused;"));
    assert!(code.contains("    event Deposited(address who, uint256 amount);"));
    assert!(code.contains("    function deposit(uint256 amount) public {"));
    assert_eq!(code.matches("// TODO: Implement function logic").count(), 3);
    assert!(!code.contains("deposits[msg.sender] ="));
}

#[test]
fn test_avm_output_shape() {
    let ast = parse(VAULT).ast.expect("vault parses");
    let result = transpile(&ast, Target::Avm);

    let code = &result.optimized_code;
    assert!(code.contains(".contract Vault"));
    assert!(code.contains(".storage paused bool"));
    assert!(code.contains(".function withdraw external"));
    assert!(code.contains(".param amount uint256"));
    assert_eq!(code.matches("; TODO: Implement AVM instructions").count(), 3);
}

#[test]
fn test_abi_entries() {
    let ast = parse(VAULT).ast.expect("vault parses");
    let abi = transpile(&ast, Target::Evm).abi;

    let names: Vec<&str> = abi.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["deposit", "getDeposit", "withdraw", "Deposited"]);
    assert_eq!(abi[0].state_mutability, Some(StateMutability::Nonpayable));
    assert_eq!(abi[1].state_mutability, Some(StateMutability::View));
    assert_eq!(abi[3].kind, AbiEntryKind::Event);
    assert!(abi[..3]
        .iter()
        .all(|e| e.selector.as_ref().is_some_and(|s| s.len() == 10)));
}

#[test]
fn test_bytecode_and_warnings() {
    let ast = parse(VAULT).ast.expect("vault parses");
    let result = transpile(&ast, Target::Evm);

    let bytecode = result.bytecode.expect("bytecode present");
    assert!(bytecode.is_placeholder());
    assert_eq!(bytecode.hex, "0x5661756c74");
    assert_eq!(
        result.warnings,
        vec!["Function 'withdraw' (line 21) should be restricted with onlyOwner"]
    );
}

#[test]
fn test_scoped_ast_keeps_functions_apart() {
    let code = "contract A {\n  function a() public {}\n}\ncontract B {\n  function b() public {}\n}";
    let config = ParserConfig {
        scope_functions_to_contract: true,
    };
    let ast = parse_with_config(code, &config).ast.expect("parses");
    let output = transpile(&ast, Target::Evm).optimized_code;

    assert_eq!(output.matches("function a()").count(), 1);
    assert_eq!(output.matches("function b()").count(), 1);
}
