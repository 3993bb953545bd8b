use crate::emitter::{EmitContext, EmitHelper, EmitResult, Emitter};
use aurion_core::{Ast, Contract, DataType, Function};
use std::fmt::Write;

/// Directive-based text for the AVM target. There is no instruction set behind it, so every
/// function body is a placeholder comment.
#[derive(Default)]
pub struct AvmEmitter;

impl AvmEmitter {
    pub fn new() -> Self {
        Self
    }

    fn emit_function<W: Write>(
        writer: &mut W,
        context: &mut EmitContext,
        function: &Function,
    ) -> EmitResult {
        EmitHelper::write_line(
            writer,
            context,
            &format!(".function {} {}", function.name, function.visibility),
        )?;
        context.indent();
        for modifier in &function.modifiers {
            EmitHelper::write_line(writer, context, &format!(".modifier {}", modifier))?;
        }
        for param in &function.parameters {
            EmitHelper::write_line(
                writer,
                context,
                &format!(
                    ".param {} {}",
                    param.name,
                    DataType::from_source(&param.data_type).abi_name()
                ),
            )?;
        }
        EmitHelper::write_line(writer, context, ".body")?;
        context.indent();
        EmitHelper::write_asm_comment(writer, context, "TODO: Implement AVM instructions")?;
        context.dedent();
        context.dedent();
        EmitHelper::write_line(writer, context, ".end")
    }

    fn emit_contract<W: Write>(
        writer: &mut W,
        context: &mut EmitContext,
        contract: &Contract,
    ) -> EmitResult {
        EmitHelper::write_line(writer, context, &format!(".contract {}", contract.name))?;
        context.indent();
        for variable in &contract.variables {
            EmitHelper::write_line(
                writer,
                context,
                &format!(
                    ".storage {} {}",
                    variable.name,
                    DataType::from_source(&variable.data_type).solidity_name()
                ),
            )?;
        }
        for function in &contract.functions {
            Self::emit_function(writer, context, function)?;
        }
        context.dedent();
        EmitHelper::write_line(writer, context, ".end")
    }
}

impl Emitter for AvmEmitter {
    type Item = Ast;

    fn emit<W: Write>(&self, ast: &Ast, writer: &mut W, context: &mut EmitContext) -> EmitResult {
        EmitHelper::write_asm_comment(writer, context, "Aurlink Virtual Machine assembly")?;
        for decorator in &ast.decorators {
            EmitHelper::write_asm_comment(writer, context, decorator)?;
        }
        for contract in &ast.contracts {
            EmitHelper::blank_line(writer)?;
            Self::emit_contract(writer, context, contract)?;
        }
        Ok(())
    }
}
