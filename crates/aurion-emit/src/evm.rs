use crate::emitter::{EmitContext, EmitHelper, EmitResult, Emitter};
use aurion_core::config::EmitterConfig;
use aurion_core::{Ast, Contract, DataType, Event, Function, Param};
use std::fmt::Write;

/// Solidity-shaped skeleton: declarations survive, function bodies become placeholders.
pub struct EvmEmitter {
    config: EmitterConfig,
}

impl EvmEmitter {
    pub fn new(config: EmitterConfig) -> Self {
        Self { config }
    }

    fn param_list(params: &[Param]) -> String {
        params
            .iter()
            .map(|p| {
                let ty = DataType::from_source(&p.data_type);
                if ty.needs_memory_location() {
                    format!("{} memory {}", ty.solidity_name(), p.name)
                } else {
                    format!("{} {}", ty.solidity_name(), p.name)
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn emit_event<W: Write>(writer: &mut W, context: &EmitContext, event: &Event) -> EmitResult {
        let params = event
            .parameters
            .iter()
            .map(|p| format!("{} {}", DataType::from_source(&p.data_type).solidity_name(), p.name))
            .collect::<Vec<_>>()
            .join(", ");
        EmitHelper::write_line(writer, context, &format!("event {}({});", event.name, params))
    }

    fn emit_function<W: Write>(
        writer: &mut W,
        context: &mut EmitContext,
        function: &Function,
    ) -> EmitResult {
        let mut header = format!(
            "function {}({}) {}",
            function.name,
            Self::param_list(&function.parameters),
            function.visibility
        );
        for modifier in &function.modifiers {
            if modifier.starts_with('@') {
                EmitHelper::write_comment(writer, context, modifier)?;
            } else {
                header.push(' ');
                header.push_str(modifier);
            }
        }

        EmitHelper::write_block(writer, context, &header, |w, c| {
            EmitHelper::write_comment(w, c, "TODO: Implement function logic")
        })
    }

    fn emit_contract<W: Write>(
        writer: &mut W,
        context: &mut EmitContext,
        contract: &Contract,
        events: &[Event],
    ) -> EmitResult {
        EmitHelper::write_block(writer, context, &format!("contract {}", contract.name), |w, c| {
            for variable in &contract.variables {
                let ty = DataType::from_source(&variable.data_type);
                EmitHelper::write_line(
                    w,
                    c,
                    &format!("{} {} {};", ty.solidity_name(), variable.visibility, variable.name),
                )?;
            }

            for event in events {
                Self::emit_event(w, c, event)?;
            }

            for function in &contract.functions {
                EmitHelper::blank_line(w)?;
                Self::emit_function(w, c, function)?;
            }
            Ok(())
        })
    }
}

impl Emitter for EvmEmitter {
    type Item = Ast;

    fn emit<W: Write>(&self, ast: &Ast, writer: &mut W, context: &mut EmitContext) -> EmitResult {
        EmitHelper::write_comment(
            writer,
            context,
            &format!("SPDX-License-Identifier: {}", self.config.license),
        )?;
        EmitHelper::write_line(
            writer,
            context,
            &format!("pragma solidity {};", self.config.solidity_pragma),
        )?;

        if !ast.decorators.is_empty() {
            EmitHelper::blank_line(writer)?;
            for decorator in &ast.decorators {
                EmitHelper::write_comment(writer, context, decorator)?;
            }
        }

        for (index, contract) in ast.contracts.iter().enumerate() {
            EmitHelper::blank_line(writer)?;
            // Events are file-level in the AST; they land in the first contract.
            let events: &[Event] = if index == 0 { &ast.events } else { &[] };
            Self::emit_contract(writer, context, contract, events)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurion_core::{Variable, Visibility};
    use pretty_assertions::assert_eq;

    fn sample_ast() -> Ast {
        let mut contract = Contract::new("Token");
        contract.variables.push(Variable {
            name: "balances".to_string(),
            visibility: Visibility::Public,
            data_type: "mapping<address, uint256>".to_string(),
            line: 2,
        });
        contract.functions.push(Function {
            name: "rename".to_string(),
            parameters: vec![Param::new("label", "string"), Param::new("to", "address")],
            visibility: Visibility::External,
            modifiers: vec!["@nonReentrant".to_string(), "onlyOwner".to_string()],
            line: 4,
        });
        Ast {
            contracts: vec![contract],
            decorators: vec!["@secure".to_string()],
            ..Ast::default()
        }
    }

    #[test]
    fn test_emit_skeleton() {
        let emitter = EvmEmitter::new(EmitterConfig::default());
        let output = emitter.emit_to_string(&sample_ast()).unwrap();

        let expected = "\
// SPDX-License-Identifier: MIT
pragma solidity ^0.8.19;

// @secure

contract Token {
    mapping(address => uint256) public balances;

    // @nonReentrant
    function rename(string memory label, address to) external onlyOwner {
        // TODO: Implement function logic
    }
}
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_events_only_in_first_contract() {
        let mut ast = sample_ast();
        ast.contracts.push(Contract::new("Other"));
        ast.events.push(Event {
            name: "Transfer".to_string(),
            parameters: vec![Param::new("to", "address"), Param::new("value", "uint256")],
            line: 3,
        });

        let output = EvmEmitter::new(EmitterConfig::default())
            .emit_to_string(&ast)
            .unwrap();
        assert_eq!(output.matches("event Transfer(address to, uint256 value);").count(), 1);
        assert!(output.contains("contract Other {\n}"));
    }
}
