use super::Expr;
use crate::schema::{FieldRef, Property};
use crate::{Error, Result};

/// A chain of property accesses starting at the current model, rendered as
/// `.created_by.name`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprPath {
    /// Never empty. Only built by `Expr::path` and `From<Property>`.
    segments: Vec<Property>,
}

impl ExprPath {
    pub fn segments(&self) -> &[Property] {
        &self.segments
    }

    /// The first segment, which belongs to the model the path is evaluated
    /// against.
    pub fn root(&self) -> &Property {
        &self.segments[0]
    }

    pub fn last(&self) -> &Property {
        &self.segments[self.segments.len() - 1]
    }
}

impl Expr {
    /// Builds a path from property tokens.
    ///
    /// Each segment after the first must belong to the model the previous
    /// segment links to.
    pub fn path<I>(segments: I) -> Result<Expr>
    where
        I: IntoIterator,
        I::Item: Into<FieldRef>,
    {
        let mut path: Vec<Property> = vec![];

        for segment in segments {
            let segment = segment.into();
            let property = segment.expect_token("path segment")?.clone();

            if let Some(prev) = path.last() {
                let Some(linked) = &prev.linked else {
                    return Err(Error::type_mismatch(&prev.name, "link", &prev.ty)
                        .context(format!("path continues after `{}`", prev.name)));
                };

                property.verify_owner(linked)?;
            }

            path.push(property);
        }

        if path.is_empty() {
            return Err(Error::missing_specification(
                "path",
                "at least one segment is required",
            ));
        }

        Ok(Expr::Path(ExprPath { segments: path }))
    }
}

impl From<Property> for ExprPath {
    fn from(value: Property) -> ExprPath {
        ExprPath {
            segments: vec![value],
        }
    }
}

impl From<ExprPath> for Expr {
    fn from(value: ExprPath) -> Expr {
        Expr::Path(value)
    }
}
