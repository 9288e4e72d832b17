//! Attribute parsing for the Record derive macro.
//!
//! Parses the field-level `#[field(...)]` and struct-level `#[record(...)]`
//! attributes.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Expr, ExprLit, Ident, Lit, Meta, Result, Token,
};

/// How a struct field is exposed as a `sifter::Value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Integer field: `#[field(Int)]`, via `FieldInt`.
    Int,
    /// Case-insensitive text: `#[field(Text)]`, via `FieldText`.
    Text,
    /// RFC 3339 timestamp string: `#[field(Rfc3339)]`, via `FieldText`.
    Rfc3339,
    /// Instant: `#[field(Instant)]`, via `FieldInstant`.
    Instant,
    /// Status-like enum exposed as its label: `#[field(Label)]`.
    Label,
}

impl FieldKind {
    /// Parse a field kind from an identifier.
    pub fn from_ident(ident: &Ident) -> Result<Self> {
        match ident.to_string().as_str() {
            "Int" | "int" => Ok(FieldKind::Int),
            "Text" | "text" => Ok(FieldKind::Text),
            "Rfc3339" | "rfc3339" => Ok(FieldKind::Rfc3339),
            "Instant" | "instant" => Ok(FieldKind::Instant),
            "Label" | "label" => Ok(FieldKind::Label),
            other => Err(Error::new(
                ident.span(),
                format!(
                    "unknown field kind: '{}'. Expected one of: Int, Text, Rfc3339, Instant, Label",
                    other
                ),
            )),
        }
    }
}

/// Field-level attributes from `#[field(...)]`.
#[derive(Debug, Clone)]
pub struct FieldAttr {
    /// The kind of this field.
    pub kind: Option<FieldKind>,
    /// Leave this field out of queries.
    pub skip: bool,
    /// Query name overriding the derived one.
    pub rename: Option<String>,
    /// The span for error reporting.
    pub span: Span,
}

impl Default for FieldAttr {
    fn default() -> Self {
        FieldAttr {
            kind: None,
            skip: false,
            rename: None,
            span: Span::call_site(),
        }
    }
}

impl Parse for FieldAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = FieldAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                // Kind identifier: field(Text), field(Int), etc.
                Meta::Path(p) => {
                    if p.is_ident("skip") {
                        attr.skip = true;
                    } else if let Some(ident) = p.get_ident() {
                        if attr.kind.is_some() {
                            return Err(Error::new(ident.span(), "field kind given twice"));
                        }
                        attr.kind = Some(FieldKind::from_ident(ident)?);
                        attr.span = ident.span();
                    } else {
                        return Err(Error::new(
                            p.span(),
                            "expected field kind: Int, Text, Rfc3339, Instant, Label, or skip",
                        ));
                    }
                }

                // rename = "queryName"
                Meta::NameValue(nv) => {
                    if nv.path.is_ident("rename") {
                        attr.rename = Some(string_value(&nv.value, "rename")?);
                    } else {
                        return Err(Error::new(
                            nv.path.span(),
                            "unknown attribute. Expected: rename",
                        ));
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown field attribute. Expected: Int, Text, Rfc3339, Instant, Label, skip, or rename = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Naming rule applied to field identifiers without an explicit rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenameRule {
    /// Keep the identifier as written.
    #[default]
    None,
    /// `create_time` becomes `createTime`.
    CamelCase,
    /// `create_time` becomes `CreateTime`.
    PascalCase,
}

impl RenameRule {
    fn from_str(s: &str, span: Span) -> Result<Self> {
        match s {
            "camelCase" => Ok(RenameRule::CamelCase),
            "PascalCase" => Ok(RenameRule::PascalCase),
            "snake_case" => Ok(RenameRule::None),
            other => Err(Error::new(
                span,
                format!(
                    "unknown rename rule: '{}'. Expected one of: camelCase, PascalCase, snake_case",
                    other
                ),
            )),
        }
    }

    /// Applies the rule to a snake_case identifier.
    pub fn apply(self, ident: &str) -> String {
        match self {
            RenameRule::None => ident.to_string(),
            RenameRule::CamelCase => to_camel_case(ident, false),
            RenameRule::PascalCase => to_camel_case(ident, true),
        }
    }
}

/// Struct-level attributes from `#[record(...)]`.
#[derive(Debug, Clone, Default)]
pub struct RecordAttr {
    pub rename_all: RenameRule,
}

impl Parse for RecordAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = RecordAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::NameValue(nv) if nv.path.is_ident("rename_all") => {
                    let rule = string_value(&nv.value, "rename_all")?;
                    attr.rename_all = RenameRule::from_str(&rule, nv.value.span())?;
                }
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown record attribute. Expected: rename_all = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

fn string_value(expr: &Expr, name: &str) -> Result<String> {
    if let Expr::Lit(ExprLit {
        lit: Lit::Str(s), ..
    }) = expr
    {
        Ok(s.value())
    } else {
        Err(Error::new(
            expr.span(),
            format!("{} must be a string literal", name),
        ))
    }
}

fn to_camel_case(ident: &str, capitalize_first: bool) -> String {
    let mut result = String::with_capacity(ident.len());
    let mut upper_next = capitalize_first;

    for c in ident.trim_start_matches("r#").chars() {
        if c == '_' {
            upper_next = !result.is_empty() || capitalize_first;
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Extract `#[field(...)]` attributes from a field's attributes.
pub fn parse_field_attrs(attrs: &[Attribute]) -> Result<FieldAttr> {
    for attr in attrs {
        if attr.path().is_ident("field") {
            return attr.parse_args::<FieldAttr>();
        }
    }
    Ok(FieldAttr::default())
}

/// Extract `#[record(...)]` attributes from the struct's attributes.
pub fn parse_record_attrs(attrs: &[Attribute]) -> Result<RecordAttr> {
    for attr in attrs {
        if attr.path().is_ident("record") {
            return attr.parse_args::<RecordAttr>();
        }
    }
    Ok(RecordAttr::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_field(tokens: &str) -> Result<FieldAttr> {
        syn::parse_str::<FieldAttr>(tokens)
    }

    fn parse_record(tokens: &str) -> Result<RecordAttr> {
        syn::parse_str::<RecordAttr>(tokens)
    }

    #[test]
    fn test_field_kinds() {
        for (tokens, kind) in [
            ("Int", FieldKind::Int),
            ("Text", FieldKind::Text),
            ("Rfc3339", FieldKind::Rfc3339),
            ("Instant", FieldKind::Instant),
            ("Label", FieldKind::Label),
        ] {
            let attr = parse_field(tokens).unwrap();
            assert_eq!(attr.kind, Some(kind), "{tokens}");
            assert!(!attr.skip);
        }
    }

    #[test]
    fn test_field_kind_lowercase() {
        let attr = parse_field("text").unwrap();
        assert_eq!(attr.kind, Some(FieldKind::Text));
    }

    #[test]
    fn test_field_skip() {
        let attr = parse_field("skip").unwrap();
        assert!(attr.skip);
        assert_eq!(attr.kind, None);
    }

    #[test]
    fn test_field_rename() {
        let attr = parse_field(r#"Label, rename = "status""#).unwrap();
        assert_eq!(attr.kind, Some(FieldKind::Label));
        assert_eq!(attr.rename, Some("status".to_string()));
    }

    #[test]
    fn test_field_rename_must_be_string() {
        let result = parse_field("Text, rename = 3");
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("rename must be a string literal"));
    }

    #[test]
    fn test_field_invalid_kind() {
        let result = parse_field("Bool");
        assert!(result.unwrap_err().to_string().contains("unknown field kind"));
    }

    #[test]
    fn test_field_kind_twice() {
        assert!(parse_field("Text, Int").is_err());
    }

    #[test]
    fn test_record_rename_all() {
        let attr = parse_record(r#"rename_all = "camelCase""#).unwrap();
        assert_eq!(attr.rename_all, RenameRule::CamelCase);

        let attr = parse_record(r#"rename_all = "snake_case""#).unwrap();
        assert_eq!(attr.rename_all, RenameRule::None);
    }

    #[test]
    fn test_record_unknown_rule() {
        let result = parse_record(r#"rename_all = "SCREAMING""#);
        assert!(result.unwrap_err().to_string().contains("unknown rename rule"));
    }

    #[test]
    fn test_rename_rules() {
        assert_eq!(RenameRule::None.apply("create_time"), "create_time");
        assert_eq!(RenameRule::CamelCase.apply("create_time"), "createTime");
        assert_eq!(RenameRule::CamelCase.apply("name"), "name");
        assert_eq!(RenameRule::CamelCase.apply("deploy_id"), "deployId");
        assert_eq!(RenameRule::CamelCase.apply("_private"), "private");
        assert_eq!(RenameRule::PascalCase.apply("app_name"), "AppName");
        assert_eq!(RenameRule::CamelCase.apply("r#type"), "type");
    }
}
