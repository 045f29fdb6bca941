use std::io::Write;

use tracing::{debug, trace};

use crate::{
    ast::Expr,
    error::EvaluatorError,
    interpreter::{
        evaluator::core::{Binding, Context, EvalResult, Evaluated, LOOP_VARIABLE},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a `print` statement and writes the value on its own line.
    ///
    /// # Errors
    /// Any error of the printed expression, or `Output` if writing fails.
    pub fn eval_print(&self,
                      expr: &Expr,
                      line: usize,
                      locals: &[Binding],
                      out: &mut dyn Write)
                      -> EvalResult<Evaluated> {
        let value = self.eval(expr, locals)?;
        writeln!(out, "{value}").map_err(|source| EvaluatorError::Output { source, line })?;
        Ok(Evaluated::Print { value, line })
    }

    /// Evaluates an `if` statement.
    ///
    /// The condition must be a boolean. The chosen branch runs as a block;
    /// with no `else` and a false condition nothing runs.
    ///
    /// # Errors
    /// `ExpectedBoolean` for a non-boolean condition, or the first error of
    /// the chosen branch.
    pub fn eval_if(&self,
                   condition: &Expr,
                   then_branch: &[Expr],
                   else_branch: Option<&[Expr]>,
                   line: usize,
                   locals: &mut Vec<Binding>,
                   out: &mut dyn Write)
                   -> EvalResult<Evaluated> {
        let taken = self.eval(condition, locals)?.as_bool(line)?;
        debug!(line, taken, "if condition");

        let branch = if taken { Some(then_branch) } else { else_branch };
        if let Some(body) = branch {
            self.eval_block(body, locals, out)?;
        }

        Ok(Evaluated::If { condition: taken,
                           line })
    }

    /// Evaluates a `for` loop over an array.
    ///
    /// Each iteration binds the current element to `_it`, and to the loop
    /// variable when the header names one, then runs the body as a block.
    ///
    /// # Errors
    /// `ExpectedArray` if the header does not produce an array, or the first
    /// error of any iteration.
    pub fn eval_for(&self,
                    variable: Option<&str>,
                    range: &Expr,
                    body: &[Expr],
                    line: usize,
                    locals: &mut Vec<Binding>,
                    out: &mut dyn Write)
                    -> EvalResult<Evaluated> {
        let range = self.eval(range, locals)?;
        let items = range.as_array(line)?;
        debug!(line, iterations = items.len(), "for loop");

        for &item in items {
            trace!(line, item, "loop iteration");
            let mark = locals.len();
            locals.push(Binding { name:  LOOP_VARIABLE.to_owned(),
                                  value: Value::Int(item), });
            if let Some(name) = variable {
                locals.push(Binding { name:  name.to_owned(),
                                      value: Value::Int(item), });
            }
            self.eval_block(body, locals, out)?;
            locals.truncate(mark);
        }

        Ok(Evaluated::For { iterations: items.len(),
                            line })
    }

    /// Runs the statements of a block body in order.
    ///
    /// Assignments made in the body are visible to the rest of the body and
    /// to nested blocks, and are dropped when the body ends. Records of other
    /// statements are discarded.
    pub fn eval_block(&self, body: &[Expr], locals: &mut Vec<Binding>, out: &mut dyn Write) -> EvalResult<()> {
        let mark = locals.len();
        for expr in body {
            if let Evaluated::Assignment { name, value, .. } = self.eval_statement(expr, locals, out)? {
                locals.push(Binding { name, value });
            }
        }
        locals.truncate(mark);
        Ok(())
    }
}
