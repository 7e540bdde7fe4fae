// src/emit.rs
//
// Typed emission IR. Compilers assemble expressions and statements instead of
// concatenating strings; a single `render` pass owns every formatting
// decision, so data correctness can be tested separately from whitespace.

use crate::contracts::ContractSymbol;
use crate::ident;
use crate::numeric;
use crate::tokens::TokenSymbol;
use ethers::types::{Address, U256};
use itertools::Itertools;

#[derive(Debug, Clone)]
pub enum Expr {
    /// Pre-encoded literal emitted verbatim.
    Lit(String),
    /// Big integer, rendered with thousand grouping.
    Uint(U256),
    /// Percentage in 1/100 of a percent, rendered with percent compaction.
    Percent(u16),
    /// Token reference through the identifier sanitizer: `Tokens.<ident>`.
    Token(TokenSymbol),
    /// Contract reference by registry enum name: `Contracts.<NAME>`.
    Contract(ContractSymbol),
    Str(String),
    Bool(bool),
    Addr(Address),
    /// Constructor-style call, used for nested price-feed descriptors.
    Call { function: String, args: Vec<Expr> },
    /// Named record construction: `Type({field: value, ...})`.
    Record {
        type_name: String,
        fields: Vec<(String, Expr)>,
    },
}

impl Expr {
    pub fn record(type_name: impl Into<String>, fields: Vec<(&str, Expr)>) -> Expr {
        Expr::Record {
            type_name: type_name.into(),
            fields: fields
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }

    pub fn call(function: impl Into<String>, args: Vec<Expr>) -> Expr {
        Expr::Call {
            function: function.into(),
            args,
        }
    }

    pub fn render(&self) -> String {
        match self {
            Expr::Lit(s) => s.clone(),
            Expr::Uint(v) => numeric::encode_uint(*v),
            Expr::Percent(v) => numeric::encode_percent(*v),
            Expr::Token(sym) => format!("Tokens.{}", ident::sanitize(sym.as_str())),
            Expr::Contract(sym) => format!("Contracts.{}", sym),
            Expr::Str(s) => format!("\"{}\"", s),
            Expr::Bool(b) => b.to_string(),
            Expr::Addr(addr) => format!("{:?}", addr),
            Expr::Call { function, args } => {
                format!("{}({})", function, args.iter().map(Expr::render).join(", "))
            }
            Expr::Record { type_name, fields } => format!(
                "{}({{{}}})",
                type_name,
                fields
                    .iter()
                    .map(|(name, value)| format!("{}: {}", name, value.render()))
                    .join(", ")
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Stmt {
    /// `<type> <name> = <value>;`
    Declare {
        type_name: String,
        name: String,
        value: Expr,
    },
    /// `<target> = <value>;`
    Assign { target: String, value: Expr },
    /// `<target>.push(<value>);`
    Push { target: String, value: Expr },
    Comment(String),
    Raw(String),
    Blank,
}

impl Stmt {
    fn render(&self) -> String {
        match self {
            Stmt::Declare {
                type_name,
                name,
                value,
            } => format!("{} {} = {};", type_name, name, value.render()),
            Stmt::Assign { target, value } => format!("{} = {};", target, value.render()),
            Stmt::Push { target, value } => format!("{}.push({});", target, value.render()),
            Stmt::Comment(text) => format!("// {}", text),
            Stmt::Raw(line) => line.clone(),
            Stmt::Blank => String::new(),
        }
    }
}

/// An ordered list of statements; the unit every compile step returns.
#[derive(Debug, Clone, Default)]
pub struct SourceBlock {
    stmts: Vec<Stmt>,
}

impl SourceBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, type_name: impl Into<String>, name: impl Into<String>, value: Expr) {
        self.stmts.push(Stmt::Declare {
            type_name: type_name.into(),
            name: name.into(),
            value,
        });
    }

    pub fn assign(&mut self, target: impl Into<String>, value: Expr) {
        self.stmts.push(Stmt::Assign {
            target: target.into(),
            value,
        });
    }

    pub fn push(&mut self, target: impl Into<String>, value: Expr) {
        self.stmts.push(Stmt::Push {
            target: target.into(),
            value,
        });
    }

    pub fn comment(&mut self, text: impl Into<String>) {
        self.stmts.push(Stmt::Comment(text.into()));
    }

    pub fn raw(&mut self, line: impl Into<String>) {
        self.stmts.push(Stmt::Raw(line.into()));
    }

    pub fn blank(&mut self) {
        self.stmts.push(Stmt::Blank);
    }

    pub fn extend(&mut self, other: SourceBlock) {
        self.stmts.extend(other.stmts);
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    /// Serializes the block, one statement per line, with a trailing newline.
    pub fn render(&self) -> String {
        let mut out = self.stmts.iter().map(Stmt::render).join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_rendering() {
        let expr = Expr::record(
            "CollateralToken",
            vec![
                ("token", Expr::Token(TokenSymbol::from("3Crv"))),
                ("lt", Expr::Percent(9_000)),
            ],
        );
        assert_eq!(
            expr.render(),
            "CollateralToken({token: Tokens._3Crv, lt: 90_00})"
        );
    }

    #[test]
    fn statement_shapes() {
        let mut block = SourceBlock::new();
        block.comment("collateral");
        block.assign("cp.minDebt", Expr::Uint(U256::from(20_000u64)));
        block.push(
            "cp.contracts",
            Expr::Contract(ContractSymbol::from("UNISWAP_V3_ROUTER")),
        );
        assert_eq!(
            block.render(),
            "// collateral\ncp.minDebt = 20_000;\ncp.contracts.push(Contracts.UNISWAP_V3_ROUTER);\n"
        );
    }

    #[test]
    fn nested_call_rendering() {
        let expr = Expr::call(
            "bounded",
            vec![
                Expr::call("chainlink", vec![Expr::Addr(Address::zero()), Expr::Lit("86400".into())]),
                Expr::Uint(U256::from(110_000_000u64)),
            ],
        );
        assert_eq!(
            expr.render(),
            format!(
                "bounded(chainlink({:?}, 86400), 110_000_000)",
                Address::zero()
            )
        );
    }
}
