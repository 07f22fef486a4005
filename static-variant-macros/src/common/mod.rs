use std::collections::HashSet;

use proc_macro2::{Delimiter, Group, TokenStream};
use quote::{ToTokens, TokenStreamExt};
use syn::{
    Attribute, Error, Fields, FieldsUnnamed, Ident, ItemEnum, Meta, Path, Result, Type, TypePath,
    Variant,
};

pub fn ident(arg: &Meta) -> Result<&Ident> {
    let path = arg.path();
    path.get_ident()
        .ok_or_else(|| Error::new_spanned(path, "must be a bare identifier"))
}

/// One declared member of the union: the variant identifier and the single
/// type it wraps. Unit variants are shorthand for a type named like the
/// variant itself.
pub struct Member {
    pub attrs: Vec<Attribute>,
    pub id: Ident,
    pub ty: Type,
}

impl ToTokens for Member {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        for attr in &self.attrs {
            attr.to_tokens(tokens);
        }
        self.id.to_tokens(tokens);
        tokens.append(Group::new(
            Delimiter::Parenthesis,
            self.ty.to_token_stream(),
        ));
    }
}

impl TryFrom<&Variant> for Member {
    type Error = Error;
    fn try_from(variant: &Variant) -> std::result::Result<Self, Self::Error> {
        let attrs = variant.attrs.clone();
        let id = variant.ident.clone();
        let ty = match &variant.fields {
            Fields::Named(named_fields) => Err(Error::new(
                named_fields.brace_token.span.join(),
                "named fields unsupported",
            ))?,
            Fields::Unnamed(FieldsUnnamed {
                unnamed,
                paren_token,
            }) => {
                if unnamed.len() != 1 {
                    Err(Error::new(
                        paren_token.span.join(),
                        "tuple-like variant must have exactly 1 field",
                    ))?
                }
                unnamed.first().unwrap().ty.clone()
            }
            Fields::Unit => Type::Path(TypePath {
                qself: None,
                path: Path::from(id.clone()),
            }),
        };
        Ok(Member { attrs, id, ty })
    }
}

/// Collects and validates the declared member list: at least one member, no
/// reference types, no duplicate types.
pub fn members(item_enum: &ItemEnum) -> Result<Vec<Member>> {
    if item_enum.variants.is_empty() {
        Err(Error::new_spanned(
            &item_enum.ident,
            "static_variant needs at least one member type",
        ))?
    }
    let mut members = Vec::with_capacity(item_enum.variants.len());
    for variant in &item_enum.variants {
        let member = Member::try_from(variant)?;
        if let Type::Reference(reference) = &member.ty {
            Err(Error::new_spanned(
                reference,
                "reference types are not permitted in a static_variant",
            ))?
        }
        members.push(member);
    }

    let mut seen: HashSet<String> = HashSet::with_capacity(members.len());
    for member in &members {
        let name = type_name(&member.ty);
        if !seen.insert(name.clone()) {
            Err(Error::new_spanned(
                &member.ty,
                format!("static_variant member types must be distinct; `{name}` appears more than once"),
            ))?
        }
    }
    Ok(members)
}

/// Canonical display name of a member type: its token text with whitespace
/// stripped, so `Vec < u8 >` reads back as `Vec<u8>`.
pub fn type_name(ty: &Type) -> String {
    ty.to_token_stream().to_string().replace(' ', "")
}

/// Visitor method name for a variant: `TransferOps` becomes `transfer_ops`,
/// a capital run stays together (`HTTPRequest` becomes `http_request`), and a
/// keyword-shaped result (`Loop` becomes `loop`) is emitted as a raw
/// identifier so the generated trait still compiles.
pub fn snake_ident(ident: &Ident) -> Ident {
    let chars: Vec<char> = ident.to_string().chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_ascii_uppercase() {
            let after_word = i > 0 && !chars[i - 1].is_ascii_uppercase() && chars[i - 1] != '_';
            let run_before_word = i > 0
                && chars[i - 1].is_ascii_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_ascii_lowercase());
            if after_word || run_before_word {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    match out.as_str() {
        // Not expressible as raw identifiers either; variant names never
        // produce these in practice.
        "self" | "super" | "crate" | "_" => Ident::new(&format!("{out}_"), ident.span()),
        _ if syn::parse_str::<Ident>(&out).is_ok() => Ident::new(&out, ident.span()),
        _ => Ident::new_raw(&out, ident.span()),
    }
}
