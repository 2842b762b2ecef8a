//! AST walker collecting translation calls.

use std::collections::HashSet;

use swc_common::{SourceMap, Span};
use swc_ecma_ast::{
    BinaryOp, CallExpr, Callee, Expr, ExprOrSpread, Lit, NewExpr, ObjectLit, Prop, PropName,
    PropOrSpread,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::{CallOrigin, ExtractedCall};
use crate::core::{SourceContext, SourceLocation};

/// Visits every call or `new` expression whose callee is a bare identifier
/// from the recognized set, in source order.
pub struct KeyCollector<'a> {
    file_path: &'a str,
    source_map: &'a SourceMap,
    functions: &'a HashSet<String>,
    pub calls: Vec<ExtractedCall>,
}

impl<'a> KeyCollector<'a> {
    pub fn new(file_path: &'a str, source_map: &'a SourceMap, functions: &'a HashSet<String>) -> Self {
        Self {
            file_path,
            source_map,
            functions,
            calls: Vec::new(),
        }
    }

    fn record(&mut self, callee: &str, span: Span, args: &[ExprOrSpread]) {
        let Some(key) = args.first().and_then(positional).and_then(fold_key) else {
            return;
        };

        let loc = self.source_map.lookup_char_pos(span.lo);
        let source_line = loc
            .file
            .get_line(loc.line - 1)
            .map(|cow| cow.to_string())
            .unwrap_or_default();

        let substitutions = args
            .get(1)
            .and_then(positional)
            .and_then(object_lit)
            .map(property_names);
        let tags = args
            .get(2)
            .and_then(positional)
            .and_then(object_lit)
            .map(property_names)
            .unwrap_or_default();

        self.calls.push(ExtractedCall {
            context: SourceContext::new(
                SourceLocation::new(self.file_path, loc.line, loc.col_display + 1),
                source_line,
            ),
            callee: callee.to_string(),
            key,
            substitutions,
            tags,
            origin: CallOrigin::Script,
        });
    }
}

impl Visit for KeyCollector<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Callee::Expr(expr) = &node.callee
            && let Expr::Ident(ident) = &**expr
            && self.functions.contains(ident.sym.as_str())
        {
            self.record(ident.sym.as_str(), node.span, &node.args);
        }
        node.visit_children_with(self);
    }

    fn visit_new_expr(&mut self, node: &NewExpr) {
        if let Expr::Ident(ident) = &*node.callee
            && self.functions.contains(ident.sym.as_str())
        {
            self.record(
                ident.sym.as_str(),
                node.span,
                node.args.as_deref().unwrap_or_default(),
            );
        }
        node.visit_children_with(self);
    }
}

/// Argument expression, unless it is a spread.
fn positional(arg: &ExprOrSpread) -> Option<&Expr> {
    arg.spread.is_none().then_some(&*arg.expr)
}

fn object_lit(expr: &Expr) -> Option<&ObjectLit> {
    match expr {
        Expr::Object(obj) => Some(obj),
        Expr::Paren(paren) => object_lit(&paren.expr),
        _ => None,
    }
}

/// Statically fold a key expression into a string.
///
/// String literals, `+` concatenations and templates whose interpolations
/// all fold are resolved; parentheses and TypeScript type wrappers are
/// looked through. Anything else is dynamic and yields `None`.
pub fn fold_key(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(str::to_owned),
        Expr::Bin(bin) if bin.op == BinaryOp::Add => {
            let mut left = fold_key(&bin.left)?;
            left.push_str(&fold_key(&bin.right)?);
            Some(left)
        }
        Expr::Tpl(tpl) => {
            let mut folded = String::new();
            for (i, quasi) in tpl.quasis.iter().enumerate() {
                let cooked = quasi.cooked.as_ref()?.as_str()?;
                folded.push_str(cooked);
                if let Some(expr) = tpl.exprs.get(i) {
                    folded.push_str(&fold_key(expr)?);
                }
            }
            Some(folded)
        }
        Expr::Paren(paren) => fold_key(&paren.expr),
        Expr::TsAs(e) => fold_key(&e.expr),
        Expr::TsConstAssertion(e) => fold_key(&e.expr),
        Expr::TsSatisfies(e) => fold_key(&e.expr),
        Expr::TsNonNull(e) => fold_key(&e.expr),
        _ => None,
    }
}

/// Names of the properties of an object literal, in order. Identifier keys,
/// string keys and shorthand properties count; spreads and computed keys
/// do not.
fn property_names(obj: &ObjectLit) -> Vec<String> {
    obj.props
        .iter()
        .filter_map(|prop| match prop {
            PropOrSpread::Prop(prop) => match &**prop {
                Prop::KeyValue(kv) => prop_name(&kv.key),
                Prop::Shorthand(ident) => Some(ident.sym.to_string()),
                Prop::Method(method) => prop_name(&method.key),
                Prop::Getter(getter) => prop_name(&getter.key),
                _ => None,
            },
            PropOrSpread::Spread(_) => None,
        })
        .collect()
}

fn prop_name(name: &PropName) -> Option<String> {
    match name {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => s.value.as_str().map(str::to_owned),
        _ => None,
    }
}
