use super::Expr;
use crate::Result;

/// A call to a database function, `<module>::<function>(<args>)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprInvoke {
    /// Empty module renders as `::function(...)`
    pub module: Option<String>,
    pub function: String,
    pub args: Vec<Expr>,
}

impl Expr {
    pub fn invoke<I>(module: Option<&str>, function: impl Into<String>, args: I) -> Result<Expr>
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        let args = args
            .into_iter()
            .map(|arg| arg.into().check_operand("function argument"))
            .collect::<Result<Vec<_>>>()?;

        Ok(ExprInvoke {
            module: module.map(str::to_string),
            function: function.into(),
            args,
        }
        .into())
    }

    /// `std::len(arg)`
    pub fn len(arg: impl Into<Expr>) -> Result<Expr> {
        Expr::invoke(Some("std"), "len", [arg.into()])
    }

    /// `std::contains(haystack, needle)`
    pub fn contains(haystack: impl Into<Expr>, needle: impl Into<Expr>) -> Result<Expr> {
        Expr::invoke(Some("std"), "contains", [haystack.into(), needle.into()])
    }

    /// `std::find(haystack, needle)`
    pub fn find(haystack: impl Into<Expr>, needle: impl Into<Expr>) -> Result<Expr> {
        Expr::invoke(Some("std"), "find", [haystack.into(), needle.into()])
    }

    pub fn mean(arg: impl Into<Expr>) -> Result<Expr> {
        Expr::invoke(Some("math"), "mean", [arg.into()])
    }

    pub fn stddev(arg: impl Into<Expr>) -> Result<Expr> {
        Expr::invoke(Some("math"), "stddev", [arg.into()])
    }

    pub fn stddev_pop(arg: impl Into<Expr>) -> Result<Expr> {
        Expr::invoke(Some("math"), "stddev_pop", [arg.into()])
    }

    pub fn var(arg: impl Into<Expr>) -> Result<Expr> {
        Expr::invoke(Some("math"), "var", [arg.into()])
    }

    pub fn var_pop(arg: impl Into<Expr>) -> Result<Expr> {
        Expr::invoke(Some("math"), "var_pop", [arg.into()])
    }
}

impl From<ExprInvoke> for Expr {
    fn from(value: ExprInvoke) -> Expr {
        Expr::Invoke(value)
    }
}
