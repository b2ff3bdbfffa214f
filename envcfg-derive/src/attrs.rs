//! Attribute parsing for `#[env(...)]` annotations.

use syn::{Field, Lit};

/// Parsed `#[env(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Binding key (`#[env(name = "KEY")]`).
    ///
    /// `None` or an empty string leaves a leaf field unbound. Ignored on
    /// nested structs.
    pub name: Option<String>,

    /// Leave the field out of collection (`#[env(skip)]`).
    pub skip: bool,
}

impl FieldAttrs {
    /// Extract and parse `#[env(...)]` attributes from a struct field.
    ///
    /// Attributes with other paths are left for other macros.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // name = "..."
                if meta.path.is_ident("name") {
                    let value = meta.value()?;
                    match value.parse::<Lit>()? {
                        Lit::Str(s) => attrs.name = Some(s.value()),
                        other => {
                            return Err(syn::Error::new_spanned(
                                other,
                                "env name must be a string literal",
                            ))
                        }
                    }
                    return Ok(());
                }

                if meta.path.is_ident("skip") {
                    attrs.skip = true;
                    return Ok(());
                }

                Err(meta.error("unsupported env attribute, expected `name = \"...\"` or `skip`"))
            })?;
        }

        Ok(attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_name_attribute() {
        let field: Field = parse_quote! {
            #[env(name = "BOOL_FIELD")]
            pub bool_field: bool
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.name, Some("BOOL_FIELD".to_string()));
        assert!(!attrs.skip);
    }

    #[test]
    fn test_parse_empty_name() {
        let field: Field = parse_quote! {
            #[env(name = "")]
            pub int_field: i32
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.name, Some(String::new()));
    }

    #[test]
    fn test_parse_skip() {
        let field: Field = parse_quote! {
            #[env(skip)]
            pub client: Client
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.skip);
        assert_eq!(attrs.name, None);
    }

    #[test]
    fn test_no_attribute() {
        let field: Field = parse_quote! {
            #[serde(rename = "x")]
            pub database: Database
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.name, None);
        assert!(!attrs.skip);
    }

    #[test]
    fn test_reject_unknown_attribute() {
        let field: Field = parse_quote! {
            #[env(default = 8080)]
            pub port: u16
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_reject_non_string_name() {
        let field: Field = parse_quote! {
            #[env(name = 42)]
            pub port: u16
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }
}
