use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, GenericArgument, Lit, PathArguments, Type};

/// Derive macro that describes the fields of an input or form record.
///
/// For each field, extracts:
/// - Field name (respects #[serde(rename = "...")])
/// - Type name (last path segment, `Option<T>` reported as `T`)
/// - Optional (true for Option<T>)
/// - Description (from doc comments)
///
/// Generates a `field_schema() -> &'static [FieldInfo]` method. `FieldInfo`
/// must be in scope where the derive is used.
#[proc_macro_derive(FieldSchema, attributes(serde))]
pub fn derive_field_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(name, "FieldSchema requires named fields")
                    .to_compile_error()
                    .into()
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "FieldSchema only supports structs")
                .to_compile_error()
                .into()
        }
    };

    let field_entries = fields.iter().filter_map(|field| {
        let ident = field.ident.as_ref()?;
        let field_name = get_serde_rename(&field.attrs).unwrap_or_else(|| ident.to_string());
        let optional = option_inner(&field.ty).is_some();
        let type_name = type_name(option_inner(&field.ty).unwrap_or(&field.ty));
        let description = doc_description(&field.attrs);

        Some(quote! {
            FieldInfo {
                name: #field_name,
                type_name: #type_name,
                optional: #optional,
                description: #description,
            }
        })
    });

    let expanded = quote! {
        impl #name {
            pub fn field_schema() -> &'static [FieldInfo] {
                static SCHEMA: &[FieldInfo] = &[
                    #(#field_entries),*
                ];
                SCHEMA
            }
        }
    };

    TokenStream::from(expanded)
}

fn get_serde_rename(attrs: &[syn::Attribute]) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }

        let mut rename = None;
        // Unknown serde keys (default, with, ...) are skipped, including their values.
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: syn::LitStr = meta.value()?.parse()?;
                rename = Some(value.value());
            } else if meta.input.peek(syn::Token![=]) {
                let _: syn::Expr = meta.value()?.parse()?;
            }
            Ok(())
        });
        if rename.is_some() {
            return rename;
        }
    }
    None
}

/// Joins the `///` lines of a field into one sentence, skipping blank lines.
fn doc_description(attrs: &[syn::Attribute]) -> String {
    let mut lines = Vec::new();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("doc")) {
        let Ok(meta) = attr.meta.require_name_value() else {
            continue;
        };
        if let syn::Expr::Lit(syn::ExprLit { lit: Lit::Str(text), .. }) = &meta.value {
            let line = text.value();
            let line = line.trim();
            if !line.is_empty() {
                lines.push(line.to_string());
            }
        }
    }
    lines.join(" ")
}

fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => args.args.iter().find_map(|arg| match arg {
            GenericArgument::Type(inner) => Some(inner),
            _ => None,
        }),
        _ => None,
    }
}

fn type_name(ty: &Type) -> String {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            return segment.ident.to_string();
        }
    }
    quote!(#ty).to_string().replace(' ', "")
}
